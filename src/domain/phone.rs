//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Accepted phone grammar.
///
/// An optional `+`, then one of:
/// - a single alphanumeric character,
/// - groups of two or more alphanumerics separated by a single hyphen or space,
///   optionally led by a one-character group, where the first group may be
///   parenthesized,
/// - the same shape with only the second group parenthesized.
///
/// Letters, digits and whitespace are ASCII only.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i-u)^\+?(",
        r"[0-9a-z]",
        r"|([0-9a-z][-\s])?\([0-9a-z]{2,}\)([-\s][0-9a-z]{2,})*",
        r"|([0-9a-z][-\s])?[0-9a-z]{2,}([-\s][0-9a-z]{2,})*",
        r"|([0-9a-z][-\s])?[0-9a-z]{2,}[-\s]\([0-9a-z]{2,}\)([-\s][0-9a-z]{2,})*",
        r")$"
    ))
    .expect("Failed to compile phone number regex")
});

/// A type-safe wrapper for phone numbers.
///
/// This ensures that phone numbers are validated at construction time.
/// The original spelling is kept verbatim.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+1-202-555-0176").unwrap();
/// assert_eq!(phone.as_str(), "+1-202-555-0176");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the input is blank or does
    /// not match the accepted grammar.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Check a candidate against the accepted grammar.
    pub fn is_valid(phone: &str) -> bool {
        !phone.trim().is_empty() && PHONE_PATTERN.is_match(phone)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}
