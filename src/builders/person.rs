use super::{stage, ContactBuilder};
use crate::console::Console;
use crate::domain::{NO_DATA, NO_NUMBER};
use crate::error::{BuildError, BuildResult, ConsoleResult, ContactBookResult};
use crate::models::{Contact, ContactDetails, ContactVariant, PersonDetails, Stamp};
use crate::schema::tables::person;
use crate::schema::Field;

/// Builder for person contacts.
#[derive(Debug, Clone)]
pub struct PersonContactBuilder {
    name: String,
    surname: String,
    birth_date: String,
    gender: String,
    number: String,
    stamp: Option<Stamp>,
}

impl PersonContactBuilder {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            surname: String::new(),
            birth_date: NO_DATA.to_string(),
            gender: NO_DATA.to_string(),
            number: NO_NUMBER.to_string(),
            stamp: None,
        }
    }

    pub fn add_name(&mut self, console: &mut dyn Console) -> ConsoleResult<&mut Self> {
        self.name = stage(&person::NAME, console)?;
        Ok(self)
    }

    pub fn add_surname(&mut self, console: &mut dyn Console) -> ConsoleResult<&mut Self> {
        self.surname = stage(&person::SURNAME, console)?;
        Ok(self)
    }

    pub fn add_birth_date(&mut self, console: &mut dyn Console) -> ConsoleResult<&mut Self> {
        self.birth_date = stage(&person::BIRTH_DATE, console)?;
        Ok(self)
    }

    pub fn add_gender(&mut self, console: &mut dyn Console) -> ConsoleResult<&mut Self> {
        self.gender = stage(&person::GENDER, console)?;
        Ok(self)
    }

    pub fn add_number(&mut self, console: &mut dyn Console) -> ConsoleResult<&mut Self> {
        self.number = stage(&person::NUMBER, console)?;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> &str {
        &self.number
    }
}

impl Default for PersonContactBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactBuilder for PersonContactBuilder {
    fn variant(&self) -> ContactVariant {
        ContactVariant::Person
    }

    fn reset(&mut self) {
        *self = Self::new();
    }

    fn load(&mut self, contact: &Contact) -> BuildResult<()> {
        let ContactDetails::Person(details) = contact.details() else {
            return Err(BuildError::VariantMismatch {
                builder: ContactVariant::Person,
                contact: contact.variant(),
            });
        };

        self.name = contact.name().to_string();
        self.surname = details.surname.clone();
        self.birth_date = details.birth_date.clone();
        self.gender = details.gender.clone();
        self.number = contact.number().to_string();
        self.stamp = Some(contact.stamp());
        Ok(())
    }

    fn run_step(&mut self, field: Field, console: &mut dyn Console) -> ContactBookResult<()> {
        match field {
            Field::Name => self.add_name(console)?,
            Field::Surname => self.add_surname(console)?,
            Field::BirthDate => self.add_birth_date(console)?,
            Field::Gender => self.add_gender(console)?,
            Field::Number => self.add_number(console)?,
            Field::Address => {
                return Err(BuildError::UnsupportedField {
                    variant: ContactVariant::Person,
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
            ContactDetails::Person(PersonDetails {
                surname: self.surname.clone(),
                birth_date: self.birth_date.clone(),
                gender: self.gender.clone(),
            }),
        )
    }
}
