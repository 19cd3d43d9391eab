//! Staged construction of contacts.
//!
//! A builder holds one slot per schema field. Each step prompts for a raw
//! value, applies the field's [`Rule`](crate::domain::Rule) and stores either
//! the accepted value or the rule's sentinel, so a slot is never left unset
//! after its step has run. [`ContactBuilder::get_contact`] turns the staged
//! values into a new immutable [`Contact`].
//!
//! Builders are long-lived: the director keeps one per variant and reuses it
//! for every create and edit.

mod organization;
mod person;

pub use organization::OrganizationContactBuilder;
pub use person::PersonContactBuilder;

use crate::console::Console;
use crate::error::{BuildResult, ConsoleResult, ContactBookResult};
use crate::models::{Contact, ContactVariant};
use crate::schema::{Field, FieldDescriptor, FieldSchema};
use tracing::{debug, warn};

/// Variant-agnostic view of a builder, used by the director's generic flows.
pub trait ContactBuilder {
    /// The variant this builder produces.
    fn variant(&self) -> ContactVariant;

    /// Return to the initial state for starting a new contact.
    ///
    /// Every slot is cleared and any staged identity is forgotten.
    fn reset(&mut self);

    /// Stage every value of an existing contact, including its identity and
    /// timestamps, so that re-running one step edits only that field.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::VariantMismatch` for a contact of another variant.
    fn load(&mut self, contact: &Contact) -> BuildResult<()>;

    /// Run the step for `field`.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::UnsupportedField` (wrapped) if this builder has no
    /// step for `field`, or a console error if input ends.
    fn run_step(&mut self, field: Field, console: &mut dyn Console) -> ContactBookResult<()>;

    /// Snapshot the staged values as a new contact.
    fn get_contact(&self) -> Contact;

    /// Reset, then run every creation step of `schema` in order.
    fn create(
        &mut self,
        schema: &FieldSchema,
        console: &mut dyn Console,
    ) -> ContactBookResult<Contact> {
        self.reset();
        for field in schema.creation_steps() {
            self.run_step(*field, console)?;
        }
        Ok(self.get_contact())
    }
}

/// Prompt for one field and validate it, reporting a rejection to the user.
fn stage(descriptor: &FieldDescriptor, console: &mut dyn Console) -> ConsoleResult<String> {
    let raw = console.ask(descriptor.prompt)?;
    let (value, failure) = descriptor.rule.apply(&raw);

    match failure {
        Some(err) => {
            warn!(field = descriptor.name(), error = %err, "Rejected input, storing sentinel");
            if let Some(message) = descriptor.failure_message {
                console.say(message);
            }
        }
        None => debug!(field = descriptor.name(), "Staged value"),
    }

    Ok(value)
}
