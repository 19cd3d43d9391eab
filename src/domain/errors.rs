//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is empty.
    EmptyId,

    /// The provided phone number does not match the accepted grammar.
    InvalidPhone(String),

    /// A required text value is empty or whitespace only.
    BlankText,

    /// The provided gender is neither "M" nor "F".
    InvalidGender(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "ID cannot be empty"),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {:?}", phone),
            Self::BlankText => write!(f, "Value cannot be blank"),
            Self::InvalidGender(gender) => write!(f, "Invalid gender: {:?}", gender),
        }
    }
}

impl std::error::Error for ValidationError {}
