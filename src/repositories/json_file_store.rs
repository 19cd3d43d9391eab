use super::traits::ContactStore;
use crate::error::{StoreError, StoreResult};
use crate::models::Contact;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// Stores the collection as a JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Check the document shape before accepting it as a collection.
    fn decode(&self, document: Value) -> StoreResult<Vec<Contact>> {
        let Value::Array(records) = document else {
            return Err(StoreError::NotACollection(self.path.clone()));
        };

        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                serde_json::from_value(record).map_err(|e| StoreError::MalformedRecord {
                    path: self.path.clone(),
                    index,
                    reason: e.to_string(),
                })
            })
            .collect()
    }
}

impl ContactStore for JsonFileStore {
    fn load(&self) -> StoreResult<Option<Vec<Contact>>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No saved contacts");
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let document: Value = serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;

        let contacts = self.decode(document)?;
        info!(path = %self.path.display(), count = contacts.len(), "Loaded contacts");
        Ok(Some(contacts))
    }

    fn save(&self, contacts: &[Contact]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_string_pretty(contacts)?;

        // Write beside the target and rename so a failed write never leaves
        // a truncated collection behind.
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, json).map_err(|e| self.io_error(e))?;
        fs::rename(&staging, &self.path).map_err(|e| self.io_error(e))?;

        debug!(path = %self.path.display(), count = contacts.len(), "Saved contacts");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::{ContactBuilder, OrganizationContactBuilder, PersonContactBuilder};
    use crate::console::ScriptedConsole;
    use crate::schema::tables;
    use tempfile::TempDir;

    fn contacts() -> Vec<Contact> {
        let mut console = ScriptedConsole::new([
            "Ann", "Lee", "1990-05-01", "F", "+1 234", "Acme", "221B Baker St", "bad--number",
        ]);
        vec![
            PersonContactBuilder::new()
                .create(&tables::person::SCHEMA, &mut console)
                .unwrap(),
            OrganizationContactBuilder::new()
                .create(&tables::organization::SCHEMA, &mut console)
                .unwrap(),
        ]
    }

    #[test]
    fn test_missing_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("Contacts.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_is_lossless() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("Contacts.json"));
        let original = contacts();

        store.save(&original).unwrap();
        let loaded = store.load().unwrap().unwrap();

        assert_eq!(loaded, original);
        assert!(!dir.path().join("nested").join("Contacts.json.tmp").exists());
    }

    #[test]
    fn test_save_overwrites_previous_collection() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("Contacts.json"));
        let original = contacts();

        store.save(&original).unwrap();
        store.save(&original[..1]).unwrap();

        assert_eq!(store.load().unwrap().unwrap().len(), 1);
    }

    #[test]
    fn test_rejects_non_collection() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Contacts.json");
        fs::write(&path, r#"{"name": "Ann"}"#).unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::NotACollection(_)));
    }

    #[test]
    fn test_rejects_malformed_record() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Contacts.json");
        let store = JsonFileStore::new(&path);
        store.save(&contacts()).unwrap();

        let mut document: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        document.as_array_mut().unwrap().push(serde_json::json!({"title": "not a contact"}));
        fs::write(&path, document.to_string()).unwrap();

        match store.load().unwrap_err() {
            StoreError::MalformedRecord { index, .. } => assert_eq!(index, 2),
            other => panic!("Expected MalformedRecord, got: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_record_without_identity() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Contacts.json");
        let store = JsonFileStore::new(&path);
        store.save(&contacts()).unwrap();

        let mut document: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        document[1]["id"] = Value::String(String::new());
        fs::write(&path, document.to_string()).unwrap();

        match store.load().unwrap_err() {
            StoreError::MalformedRecord { index, reason, .. } => {
                assert_eq!(index, 1);
                assert!(reason.contains("ID cannot be empty"));
            }
            other => panic!("Expected MalformedRecord, got: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Contacts.json");
        fs::write(&path, "\u{0}\u{1}garbage").unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }

    #[test]
    fn test_empty_collection_is_accepted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Contacts.json");
        fs::write(&path, "[]").unwrap();

        assert_eq!(JsonFileStore::new(&path).load().unwrap(), Some(Vec::new()));
    }
}
