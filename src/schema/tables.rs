//! Static schema tables for the built-in variants.

use super::field::{Field, FieldDescriptor, FieldSchema};
use crate::domain::Rule;
use crate::models::{Contact, ContactVariant};

fn name(contact: &Contact) -> Option<&str> {
    Some(contact.name())
}

fn number(contact: &Contact) -> Option<&str> {
    Some(contact.number())
}

/// Shared phone number field.
pub const NUMBER: FieldDescriptor = FieldDescriptor {
    field: Field::Number,
    prompt: "Enter the number: ",
    rule: Rule::PhoneNumber,
    failure_message: Some("Wrong number format!"),
    accessor: number,
};

pub mod person {
    use super::*;

    pub const NAME: FieldDescriptor = FieldDescriptor {
        field: Field::Name,
        prompt: "Enter the name: ",
        rule: Rule::Unchecked,
        failure_message: None,
        accessor: name,
    };

    pub const SURNAME: FieldDescriptor = FieldDescriptor {
        field: Field::Surname,
        prompt: "Enter the surname: ",
        rule: Rule::Unchecked,
        failure_message: None,
        accessor: Contact::surname,
    };

    pub const BIRTH_DATE: FieldDescriptor = FieldDescriptor {
        field: Field::BirthDate,
        prompt: "Enter the birth date: ",
        rule: Rule::NonBlank,
        failure_message: Some("Bad birth date!"),
        accessor: Contact::birth_date,
    };

    pub const GENDER: FieldDescriptor = FieldDescriptor {
        field: Field::Gender,
        prompt: "Enter the gender (M, F): ",
        rule: Rule::Gender,
        failure_message: Some("Bad gender!"),
        accessor: Contact::gender,
    };

    pub const NUMBER: FieldDescriptor = super::NUMBER;

    const FIELDS: &[FieldDescriptor] = &[SURNAME, BIRTH_DATE, GENDER, NAME, NUMBER];

    const CREATION_STEPS: &[Field] = &[
        Field::Name,
        Field::Surname,
        Field::BirthDate,
        Field::Gender,
        Field::Number,
    ];

    pub const SCHEMA: FieldSchema =
        FieldSchema::new(ContactVariant::Person, FIELDS, CREATION_STEPS);
}

pub mod organization {
    use super::*;

    pub const NAME: FieldDescriptor = FieldDescriptor {
        field: Field::Name,
        prompt: "Enter the organization name: ",
        rule: Rule::Unchecked,
        failure_message: None,
        accessor: name,
    };

    pub const ADDRESS: FieldDescriptor = FieldDescriptor {
        field: Field::Address,
        prompt: "Enter the address: ",
        rule: Rule::NonBlank,
        failure_message: Some("Wrong organization address!"),
        accessor: Contact::address,
    };

    pub const NUMBER: FieldDescriptor = super::NUMBER;

    const FIELDS: &[FieldDescriptor] = &[ADDRESS, NAME, NUMBER];

    const CREATION_STEPS: &[Field] = &[Field::Name, Field::Address, Field::Number];

    pub const SCHEMA: FieldSchema =
        FieldSchema::new(ContactVariant::Organization, FIELDS, CREATION_STEPS);
}
