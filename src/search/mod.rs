//! Free-text search over contacts.
//!
//! Each contact is projected to one string by concatenating its schema
//! fields, and a query matches when it occurs in that string, literally and
//! ignoring case.

pub mod contact_searcher;

pub use contact_searcher::ContactSearcher;
