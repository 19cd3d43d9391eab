//! Application service layer.
//!
//! Services contain the session's business logic and orchestrate builders,
//! search and the store behind one boundary used by the menu.

mod contacts_director;

pub use contacts_director::ContactsDirector;
