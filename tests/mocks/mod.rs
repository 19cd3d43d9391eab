mod mock_contact_store;

pub use mock_contact_store::MockContactStore;
