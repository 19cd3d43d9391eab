//! Validation rules applied by builder steps.

use super::errors::ValidationError;
use super::phone::PhoneNumber;

/// Stored in place of a phone number that failed validation.
pub const NO_NUMBER: &str = "[no number]";

/// Stored in place of any other text value that failed validation.
pub const NO_DATA: &str = "[no data]";

/// The check a field's raw input must pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Any string, including empty, is accepted as-is.
    Unchecked,
    /// Must match the phone grammar (see [`PhoneNumber`]).
    PhoneNumber,
    /// Must contain at least one non-whitespace character.
    NonBlank,
    /// Exactly "M" or "F".
    Gender,
}

impl Rule {
    /// Check raw input, returning the value to store when it passes.
    ///
    /// Accepted values are returned verbatim (no trimming or case folding).
    pub fn check(self, raw: &str) -> Result<String, ValidationError> {
        match self {
            Self::Unchecked => Ok(raw.to_string()),
            Self::PhoneNumber => PhoneNumber::new(raw).map(PhoneNumber::into_inner),
            Self::NonBlank => {
                if raw.trim().is_empty() {
                    Err(ValidationError::BlankText)
                } else {
                    Ok(raw.to_string())
                }
            }
            Self::Gender => match raw {
                "M" | "F" => Ok(raw.to_string()),
                other => Err(ValidationError::InvalidGender(other.to_string())),
            },
        }
    }

    /// Placeholder stored in place of a rejected value.
    pub fn sentinel(self) -> &'static str {
        match self {
            Self::PhoneNumber => NO_NUMBER,
            Self::Unchecked | Self::NonBlank | Self::Gender => NO_DATA,
        }
    }

    /// Check raw input, substituting this rule's sentinel.
    ///
    /// Returns the value to store and the rejection, if any, for reporting.
    pub fn apply(self, raw: &str) -> (String, Option<ValidationError>) {
        match self.check(raw) {
            Ok(value) => (value, None),
            Err(e) => (self.sentinel().to_string(), Some(e)),
        }
    }
}
