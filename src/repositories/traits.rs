use crate::error::StoreResult;
use crate::models::Contact;

/// Persistence for the whole contact collection.
///
/// Provides abstraction over where and how the collection is kept,
/// enabling different implementations (JSON file, in-memory mock).
/// Every save writes the entire collection; there are no partial updates.
pub trait ContactStore {
    /// Load the saved collection.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> StoreResult<Option<Vec<Contact>>>;

    /// Replace the saved collection with `contacts`.
    fn save(&self, contacts: &[Contact]) -> StoreResult<()>;

    /// Human-readable location, used in messages.
    fn location(&self) -> String;
}
