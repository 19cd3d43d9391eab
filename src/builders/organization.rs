use super::{stage, ContactBuilder};
use crate::console::Console;
use crate::domain::{NO_DATA, NO_NUMBER};
use crate::error::{BuildError, BuildResult, ConsoleResult, ContactBookResult};
use crate::models::{Contact, ContactDetails, ContactVariant, OrganizationDetails, Stamp};
use crate::schema::tables::organization;
use crate::schema::Field;

/// Builder for organization contacts.
#[derive(Debug, Clone)]
pub struct OrganizationContactBuilder {
    name: String,
    address: String,
    number: String,
    stamp: Option<Stamp>,
}

impl OrganizationContactBuilder {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            address: NO_DATA.to_string(),
            number: NO_NUMBER.to_string(),
            stamp: None,
        }
    }

    pub fn add_name(&mut self, console: &mut dyn Console) -> ConsoleResult<&mut Self> {
        self.name = stage(&organization::NAME, console)?;
        Ok(self)
    }

    pub fn add_address(&mut self, console: &mut dyn Console) -> ConsoleResult<&mut Self> {
        self.address = stage(&organization::ADDRESS, console)?;
        Ok(self)
    }

    pub fn add_number(&mut self, console: &mut dyn Console) -> ConsoleResult<&mut Self> {
        self.number = stage(&organization::NUMBER, console)?;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn number(&self) -> &str {
        &self.number
    }
}

impl Default for OrganizationContactBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactBuilder for OrganizationContactBuilder {
    fn variant(&self) -> ContactVariant {
        ContactVariant::Organization
    }

    fn reset(&mut self) {
        *self = Self::new();
    }

    fn load(&mut self, contact: &Contact) -> BuildResult<()> {
        let ContactDetails::Organization(details) = contact.details() else {
            return Err(BuildError::VariantMismatch {
                builder: ContactVariant::Organization,
                contact: contact.variant(),
            });
        };

        self.name = contact.name().to_string();
        self.address = details.address.clone();
        self.number = contact.number().to_string();
        self.stamp = Some(contact.stamp());
        Ok(())
    }

    fn run_step(&mut self, field: Field, console: &mut dyn Console) -> ContactBookResult<()> {
        match field {
            Field::Name => self.add_name(console)?,
            Field::Address => self.add_address(console)?,
            Field::Number => self.add_number(console)?,
            Field::Surname | Field::BirthDate | Field::Gender => {
                return Err(BuildError::UnsupportedField {
                    variant: ContactVariant::Organization,
                    field,
                }
                .into())
            }
        };
        Ok(())
    }

    fn get_contact(&self) -> Contact {
        Contact::new(
            self.stamp.clone().unwrap_or_else(Stamp::fresh),
            self.name.clone(),
            self.number.clone(),
            ContactDetails::Organization(OrganizationDetails {
                address: self.address.clone(),
            }),
        )
    }
}
