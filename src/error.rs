//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Validation of user input is not an error here: it is recovered with sentinel
//! values (see [`crate::domain`]). These types cover the failures that leave the
//! building blocks of a session.

use crate::models::ContactVariant;
use crate::schema::Field;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading or writing the persisted collection.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying file system operation failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid JSON
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Document parsed but is not a collection
    #[error("Stored data in {} is not a list of contacts", .0.display())]
    NotACollection(PathBuf),

    /// One element of the stored collection is not contact-shaped
    #[error("Record {index} in {} is not a contact: {reason}", path.display())]
    MalformedRecord {
        path: PathBuf,
        index: usize,
        reason: String,
    },

    /// Failed to encode the collection
    #[error("Failed to serialize contacts: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors that can occur during search operations.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The query could not be turned into a literal matcher
    #[error("Invalid search query: {0}")]
    InvalidQuery(String),
}

/// Programming-contract failures between the schema and the builders.
///
/// These indicate that a [`crate::schema::FieldSchema`] and a builder have
/// drifted out of sync and are not recoverable by re-prompting.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// The schema lists a field the builder has no step for
    #[error("{variant} builder has no step for field '{field}'")]
    UnsupportedField { variant: ContactVariant, field: Field },

    /// A builder was asked to stage a contact of a different variant
    #[error("{builder} builder cannot stage a {contact} contact")]
    VariantMismatch {
        builder: ContactVariant,
        contact: ContactVariant,
    },

    /// No schema is registered for the variant
    #[error("No field schema registered for {0}")]
    MissingSchema(ContactVariant),

    /// No builder is registered for the variant
    #[error("No builder registered for {0}")]
    MissingBuilder(ContactVariant),
}

/// Errors raised by the interactive console.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// The input stream ended
    #[error("Input stream closed")]
    Closed,

    /// Reading or writing the terminal failed
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Umbrella error for director and menu operations.
#[derive(Error, Debug)]
pub enum ContactBookError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Console(#[from] ConsoleError),
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with SearchError
pub type SearchResult<T> = Result<T, SearchError>;

/// Convenience type alias for Results with BuildError
pub type BuildResult<T> = Result<T, BuildError>;

/// Convenience type alias for Results with ConsoleError
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ContactBookError
pub type ContactBookResult<T> = Result<T, ContactBookError>;
