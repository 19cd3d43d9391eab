use contact_book::error::{StoreError, StoreResult};
use contact_book::models::Contact;
use contact_book::repositories::ContactStore;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock contact store for testing.
///
/// Keeps the saved collection in memory, can be told to fail, and tracks
/// method calls for verification. Clones share state, so a test can keep a
/// handle after boxing one into a director.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactStore {
    saved: Arc<Mutex<Option<Vec<Contact>>>>,
    fail_loads: Arc<Mutex<bool>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactStore {
    /// Create a store with nothing saved yet.
    pub fn new() -> Self {
        Self {
            saved: Arc::new(Mutex::new(None)),
            fail_loads: Arc::new(Mutex::new(false)),
            fail_saves: Arc::new(Mutex::new(false)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Create a store that already holds `contacts`.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let store = Self::new();
        *store.saved.lock().unwrap() = Some(contacts);
        store
    }

    /// The last saved collection, if any.
    pub fn saved(&self) -> Option<Vec<Contact>> {
        self.saved.lock().unwrap().clone()
    }

    pub fn set_fail_loads(&self, fail: bool) {
        *self.fail_loads.lock().unwrap() = fail;
    }

    pub fn set_fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockContactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for MockContactStore {
    fn load(&self) -> StoreResult<Option<Vec<Contact>>> {
        self.track_call("load");

        if *self.fail_loads.lock().unwrap() {
            return Err(StoreError::NotACollection(PathBuf::from(self.location())));
        }
        Ok(self.saved())
    }

    fn save(&self, contacts: &[Contact]) -> StoreResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(StoreError::Io {
                path: PathBuf::from(self.location()),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        *self.saved.lock().unwrap() = Some(contacts.to_vec());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
