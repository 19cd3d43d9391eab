//! Field keys, descriptors and the per-variant schema they form.

use crate::domain::Rule;
use crate::models::{Contact, ContactVariant};
use std::fmt;

/// Reads a field's current value from a contact snapshot.
pub type Accessor = fn(&Contact) -> Option<&str>;

/// Key of an editable, searchable contact attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Number,
    Surname,
    BirthDate,
    Gender,
    Address,
}

impl Field {
    /// The name shown to the user and typed to select the field.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Number => "number",
            Self::Surname => "surname",
            Self::BirthDate => "birthDate",
            Self::Gender => "gender",
            Self::Address => "address",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How one field is prompted, validated and read.
#[derive(Clone, Copy)]
pub struct FieldDescriptor {
    pub field: Field,
    /// Prompt printed before reading the raw value
    pub prompt: &'static str,
    pub rule: Rule,
    /// Reported when the rule rejects the input; `None` for unchecked fields
    pub failure_message: Option<&'static str>,
    pub accessor: Accessor,
}

impl fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("field", &self.field)
            .field("prompt", &self.prompt)
            .field("rule", &self.rule)
            .field("failure_message", &self.failure_message)
            .finish_non_exhaustive()
    }
}

impl FieldDescriptor {
    pub fn name(&self) -> &'static str {
        self.field.name()
    }

    /// Current value of this field on `contact`.
    pub fn value<'c>(&self, contact: &'c Contact) -> Option<&'c str> {
        (self.accessor)(contact)
    }
}

/// Ordered field table for one contact variant.
///
/// `fields` lists the variant's own attributes first, then the shared base
/// attributes, each in declaration order. Bookkeeping (identity, timestamps)
/// never appears here. `creation_steps` is the order in which a new contact
/// is prompted for.
#[derive(Debug, Clone, Copy)]
pub struct FieldSchema {
    variant: ContactVariant,
    fields: &'static [FieldDescriptor],
    creation_steps: &'static [Field],
}

impl FieldSchema {
    pub const fn new(
        variant: ContactVariant,
        fields: &'static [FieldDescriptor],
        creation_steps: &'static [Field],
    ) -> Self {
        Self {
            variant,
            fields,
            creation_steps,
        }
    }

    pub fn variant(&self) -> ContactVariant {
        self.variant
    }

    pub fn fields(&self) -> &'static [FieldDescriptor] {
        self.fields
    }

    pub fn creation_steps(&self) -> &'static [Field] {
        self.creation_steps
    }

    /// Field names in schema order.
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(FieldDescriptor::name).collect()
    }

    /// Resolve a user-typed name. Matching is exact and case-sensitive.
    pub fn lookup(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|d| d.name() == name)
    }

    pub fn descriptor(&self, field: Field) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|d| d.field == field)
    }

    /// Concatenated text of every field value, in schema order.
    pub fn projection(&self, contact: &Contact) -> String {
        self.fields
            .iter()
            .filter_map(|d| d.value(contact))
            .collect()
    }
}
