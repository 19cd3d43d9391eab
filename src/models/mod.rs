//! Data models for contact book records.
//!
//! A [`Contact`] holds the attributes every record shares and a tagged
//! [`ContactDetails`] payload for the person- or organization-specific ones.

pub mod contact;

pub(crate) use contact::Stamp;
pub use contact::{Contact, ContactDetails, ContactVariant, OrganizationDetails, PersonDetails};
