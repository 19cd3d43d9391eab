//! Contacts director.
//!
//! Owns the in-memory collection and coordinates builders, schemas, search and
//! persistence for every user-facing operation. Each mutation is followed by a
//! save of the whole collection.

use crate::builders::{ContactBuilder, OrganizationContactBuilder, PersonContactBuilder};
use crate::console::Console;
use crate::domain::ContactId;
use crate::error::{BuildError, ConsoleResult, ContactBookResult, SearchResult};
use crate::models::{Contact, ContactVariant};
use crate::repositories::ContactStore;
use crate::schema::SchemaRegistry;
use crate::search::ContactSearcher;
use chrono::Local;
use std::collections::HashMap;
use tracing::{debug, error, info, warn};

const SAVE_FAILED: &str = "Problem in saving contacts to a file!";
const NOTHING_TO_SHOW: &str = "No contacts to show info!";

/// Session-scoped coordinator of the contact book.
pub struct ContactsDirector {
    contacts: Vec<Contact>,
    builders: HashMap<ContactVariant, Box<dyn ContactBuilder>>,
    schemas: SchemaRegistry,
    store: Box<dyn ContactStore>,
    /// Identities of the last search results, in result order
    searched: Vec<ContactId>,
}

impl ContactsDirector {
    /// Director with the built-in schemas and one builder per variant.
    pub fn new(store: Box<dyn ContactStore>) -> Self {
        let mut director = Self::with_schemas(store, SchemaRegistry::standard());
        director.register_builder(Box::new(PersonContactBuilder::new()));
        director.register_builder(Box::new(OrganizationContactBuilder::new()));
        director
    }

    /// Director with the given schemas and no builders registered.
    pub fn with_schemas(store: Box<dyn ContactStore>, schemas: SchemaRegistry) -> Self {
        Self {
            contacts: Vec::new(),
            builders: HashMap::new(),
            schemas,
            store,
            searched: Vec::new(),
        }
    }

    /// Add or replace the builder for its variant.
    pub fn register_builder(&mut self, builder: Box<dyn ContactBuilder>) {
        self.builders.insert(builder.variant(), builder);
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn schemas(&self) -> &SchemaRegistry {
        &self.schemas
    }

    /// Replace the collection with whatever the store holds.
    ///
    /// A missing or unreadable store is reported and leaves the book empty.
    pub fn load(&mut self, console: &mut dyn Console) {
        self.searched.clear();
        match self.store.load() {
            Ok(Some(contacts)) => {
                info!(count = contacts.len(), "Contacts loaded");
                self.contacts = contacts;
            }
            Ok(None) => {
                self.contacts.clear();
                console.say(&format!("{} file doesn't exist", self.store.location()));
            }
            Err(e) => {
                error!(error = %e, "Failed to load contacts");
                self.contacts.clear();
                console.say(&format!("Problem in loading contacts: {e}"));
            }
        }
    }

    /// Ask which kind of contact to add.
    pub fn choose_variant(
        &self,
        console: &mut dyn Console,
    ) -> ConsoleResult<Option<ContactVariant>> {
        let names: Vec<&str> = ContactVariant::ALL.iter().map(|v| v.as_str()).collect();
        let raw = console.ask(&format!("Enter the type ({}): ", names.join(", ")))?;

        match raw.trim().to_lowercase().parse::<ContactVariant>() {
            Ok(variant) => Ok(Some(variant)),
            Err(reason) => {
                debug!(%reason, "Rejected contact type");
                console.say("Wrong type, choose the correct type!");
                Ok(None)
            }
        }
    }

    /// Build a new contact of `variant` interactively and add it to the book.
    ///
    /// # Errors
    ///
    /// Returns `BuildError` (wrapped) if the variant has no schema or builder,
    /// or a console error if input ends mid-way.
    pub fn create_contact(
        &mut self,
        variant: ContactVariant,
        console: &mut dyn Console,
    ) -> ContactBookResult<ContactId> {
        let schema = self.schemas.require(variant)?;
        let builder = self
            .builders
            .get_mut(&variant)
            .ok_or(BuildError::MissingBuilder(variant))?;

        let contact = builder.create(schema, console)?;
        let id = contact.id().clone();
        self.contacts.push(contact);
        info!(%variant, %id, "Contact added");

        self.persist(console);
        console.say("The record added.");
        Ok(id)
    }

    /// Print a numbered list of every contact.
    ///
    /// Returns `false` when there is nothing to list.
    pub fn list_all(&self, console: &mut dyn Console) -> bool {
        if self.contacts.is_empty() {
            console.say(NOTHING_TO_SHOW);
            return false;
        }
        print_names(self.contacts.iter(), console);
        true
    }

    /// Prompt for a record number until a valid one is entered, then print
    /// that record's card.
    ///
    /// Returns `None` without prompting when the book is empty.
    pub fn select_record(&self, console: &mut dyn Console) -> ConsoleResult<Option<usize>> {
        if self.contacts.is_empty() {
            console.say(NOTHING_TO_SHOW);
            return Ok(None);
        }

        loop {
            let raw = console.ask("Select a record: ")?;
            match raw.trim().parse::<usize>() {
                Ok(record) if (1..=self.contacts.len()).contains(&record) => {
                    console.say(&self.contacts[record - 1].to_string());
                    return Ok(Some(record));
                }
                _ => debug!(input = %raw, "Invalid record number"),
            }
        }
    }

    /// Resolve a 1-based record number to a contact of the book.
    ///
    /// With `from_search` the number indexes the last search results, which
    /// are mapped back to the same contact in the full collection.
    pub fn contact(&self, record: usize, from_search: bool) -> Option<&Contact> {
        let index = record.checked_sub(1)?;
        if from_search {
            self.searched.get(index).and_then(|id| self.find(id))
        } else {
            self.contacts.get(index)
        }
    }

    /// Interactively change one field of the contact with `id`.
    ///
    /// Only the chosen field and the last-edit time change; identity and
    /// creation time are kept. Returns `false` if `id` is not in the book.
    ///
    /// # Errors
    ///
    /// Returns `BuildError` (wrapped) if the variant has no schema or builder,
    /// or a console error if input ends mid-way.
    pub fn edit_contact(
        &mut self,
        id: &ContactId,
        console: &mut dyn Console,
    ) -> ContactBookResult<bool> {
        let Some(index) = self.position(id) else {
            warn!(%id, "Edit requested for unknown contact");
            return Ok(false);
        };

        let variant = self.contacts[index].variant();
        let schema = self.schemas.require(variant)?;
        let prompt = format!("Select a field ({}): ", schema.field_names().join(", "));
        let descriptor = loop {
            let raw = console.ask(&prompt)?;
            if let Some(descriptor) = schema.lookup(raw.trim()) {
                break descriptor;
            }
            debug!(input = %raw, %variant, "Unknown field name");
        };

        let builder = self
            .builders
            .get_mut(&variant)
            .ok_or(BuildError::MissingBuilder(variant))?;
        builder.load(&self.contacts[index])?;
        builder.run_step(descriptor.field, console)?;

        let mut edited = builder.get_contact();
        edited.set_time_updated(Local::now().naive_local());
        self.contacts[index] = edited;
        info!(%id, field = descriptor.name(), "Contact updated");

        self.persist(console);
        console.say("The record updated!");
        Ok(true)
    }

    /// Delete the contact with `id`.
    ///
    /// Returns `false` and does nothing else if `id` is not in the book.
    pub fn remove_contact(&mut self, id: &ContactId, console: &mut dyn Console) -> bool {
        let Some(index) = self.position(id) else {
            debug!(%id, "Remove requested for unknown contact");
            return false;
        };

        self.contacts.remove(index);
        self.searched.retain(|searched| searched != id);
        info!(%id, "Contact removed");

        self.persist(console);
        console.say("The record removed!");
        true
    }

    /// Prompt for a query, run it and print the results.
    ///
    /// Returns the number of results. A query that cannot be run is reported
    /// and counts as no results.
    pub fn search(&mut self, console: &mut dyn Console) -> ContactBookResult<usize> {
        let query = console.ask("Enter search query: ")?;
        let results = match self.search_query(&query) {
            Ok(results) => results,
            Err(e) => {
                warn!(error = %e, query_len = query.len(), "Search query rejected");
                console.say(&e.to_string());
                console.say("No contacts found!");
                return Ok(0);
            }
        };

        if results.is_empty() {
            console.say("No contacts found!");
            return Ok(0);
        }

        let found = results.len();
        console.say(&format!("Found {found} results:"));
        print_names(results.into_iter(), console);
        Ok(found)
    }

    /// Run `query` against the book and remember the results for
    /// [`ContactsDirector::contact`] and
    /// [`ContactsDirector::print_searched_contact`].
    pub fn search_query(&mut self, query: &str) -> SearchResult<Vec<&Contact>> {
        self.searched.clear();
        let positions = ContactSearcher::new(&self.schemas).search_positions(&self.contacts, query)?;
        self.searched = positions
            .iter()
            .map(|&i| self.contacts[i].id().clone())
            .collect();
        Ok(positions.into_iter().map(|i| &self.contacts[i]).collect())
    }

    /// Print the card of search result `record` (1-based).
    ///
    /// Returns `false` and reports it if there is no such result.
    pub fn print_searched_contact(&self, record: usize, console: &mut dyn Console) -> bool {
        match self.contact(record, true) {
            Some(contact) => {
                console.say(&contact.to_string());
                true
            }
            None => {
                console.say("No such record!");
                false
            }
        }
    }

    pub fn size(&self) -> usize {
        self.contacts.len()
    }

    pub fn report_size(&self, console: &mut dyn Console) {
        console.say(&format!("The Phone Book has {} records.", self.size()));
    }

    fn position(&self, id: &ContactId) -> Option<usize> {
        self.contacts.iter().position(|c| c.id() == id)
    }

    fn find(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id() == id)
    }

    /// Save the whole collection. A failure is reported but the in-memory
    /// change stands.
    fn persist(&self, console: &mut dyn Console) -> bool {
        match self.store.save(&self.contacts) {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, location = %self.store.location(), "Failed to save contacts");
                console.say(SAVE_FAILED);
                false
            }
        }
    }
}

fn print_names<'c>(contacts: impl Iterator<Item = &'c Contact>, console: &mut dyn Console) {
    for (i, contact) in contacts.enumerate() {
        console.say(&format!("{}. {}", i + 1, contact.full_name()));
    }
}
