//! JSON-document employee store.
//!
//! The whole collection lives in one JSON file keyed by record id. Every
//! operation is a read-modify-write cycle serialised by an in-process lock;
//! cross-process coordination is out of scope for this adapter.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use roster_core::application::ports::{EmployeeStore, StorageError};
use roster_core::domain::{Employee, Versioned};
use tracing::debug;
use uuid::Uuid;

use super::doc::EmployeeDoc;

pub struct JsonFileEmployeeStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileEmployeeStore {
    /// Open a store backed by `path`. The file is created lazily on the
    /// first write; a missing file reads as an empty collection.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<HashMap<Uuid, EmployeeDoc>, StorageError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| StorageError::Backend(format!("corrupt store file: {e}"))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(map_io_error(&self.path, &e, "read")),
        }
    }

    fn save(&self, docs: &HashMap<Uuid, EmployeeDoc>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| map_io_error(parent, &e, "create parent directory"))?;
            }
        }

        let bytes = serde_json::to_vec_pretty(docs)
            .map_err(|e| StorageError::Backend(format!("encode store file: {e}")))?;
        std::fs::write(&self.path, bytes).map_err(|e| map_io_error(&self.path, &e, "write"))
    }
}

impl EmployeeStore for JsonFileEmployeeStore {
    fn create(&self, record: &Versioned<Employee>) -> Result<(), StorageError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| StorageError::Backend("store lock poisoned".to_string()))?;

        let mut docs = self.load()?;

        let email_taken = docs.values().any(|d| d.data.email == record.data.email);
        if docs.contains_key(&record.id) || email_taken {
            return Err(StorageError::DuplicateKey);
        }

        docs.insert(record.id, EmployeeDoc::from(record));
        self.save(&docs)?;

        debug!(id = %record.id, path = %self.path.display(), "record written");
        Ok(())
    }

    fn exists_by_email(&self, email: &str) -> Result<bool, StorageError> {
        Ok(self.load()?.values().any(|d| d.data.email == email))
    }

    fn get_by_id(&self, id: Uuid) -> Result<Option<Versioned<Employee>>, StorageError> {
        Ok(self.load()?.remove(&id).map(Into::into))
    }
}

fn map_io_error(path: &Path, e: &io::Error, operation: &str) -> StorageError {
    StorageError::Backend(format!("failed to {operation} {}: {e}", path.display()))
}
