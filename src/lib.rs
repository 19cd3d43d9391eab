//! Contact Book - an interactive personal contact manager for people and
//! organizations.
//!
//! Contacts are built field by field from console input, validated with
//! sentinel fallbacks, searched by literal substring and kept in a JSON file.
//!
//! # Architecture
//!
//! - **models**: The contact record and its per-variant details
//! - **domain**: Value objects and validation rules
//! - **schema**: Per-variant field tables driving edit and search
//! - **builders**: Staged construction of contacts from console input
//! - **search**: Case-insensitive substring search over field values
//! - **repositories**: Persistence of the whole collection
//! - **services**: The contacts director owning the session state
//! - **menu**: The interactive command loop
//! - **console**: Line-oriented input/output abstraction
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod builders;
pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod menu;
pub mod models;
pub mod repositories;
pub mod schema;
pub mod search;
pub mod services;

// Re-export commonly used types
pub use builders::{ContactBuilder, OrganizationContactBuilder, PersonContactBuilder};
pub use config::Config;
pub use console::{Console, LineConsole, ScriptedConsole};
pub use domain::{ContactId, PhoneNumber};
pub use error::{
    BuildError, ConfigError, ConsoleError, ContactBookError, SearchError, StoreError,
};
pub use menu::Menu;
pub use models::{Contact, ContactDetails, ContactVariant, OrganizationDetails, PersonDetails};
pub use repositories::{ContactStore, JsonFileStore};
pub use schema::{Field, FieldDescriptor, FieldSchema, SchemaRegistry};
pub use search::ContactSearcher;
pub use services::ContactsDirector;
