//! Domain value objects and validation rules.
//!
//! This module contains type-safe wrappers for domain concepts like contact
//! IDs and phone numbers, plus the per-field [`Rule`]s the builders apply to
//! raw user input. A failed rule never aborts construction: the caller stores
//! the rule's sentinel value instead.

pub mod contact_id;
pub mod errors;
pub mod phone;
pub mod rules;

pub use contact_id::ContactId;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
pub use rules::{Rule, NO_DATA, NO_NUMBER};
