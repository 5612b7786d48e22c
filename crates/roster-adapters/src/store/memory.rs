//! Thread-safe in-memory employee store.
//!
//! Used by tests and ephemeral runs; enforces the same unique keys (id and
//! email) as the durable stores so rule behaviour does not diverge between
//! environments.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use roster_core::application::ports::{EmployeeStore, StorageError};
use roster_core::domain::{Employee, Versioned};
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct MemoryEmployeeStore {
    inner: Arc<RwLock<HashMap<Uuid, Versioned<Employee>>>>,
}

impl MemoryEmployeeStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of persisted records.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EmployeeStore for MemoryEmployeeStore {
    fn create(&self, record: &Versioned<Employee>) -> Result<(), StorageError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StorageError::Backend("store lock poisoned".to_string()))?;

        let email_taken = inner.values().any(|r| r.data.email == record.data.email);
        if inner.contains_key(&record.id) || email_taken {
            return Err(StorageError::DuplicateKey);
        }

        inner.insert(record.id, record.clone());
        Ok(())
    }

    fn exists_by_email(&self, email: &str) -> Result<bool, StorageError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StorageError::Backend("store lock poisoned".to_string()))?;

        Ok(inner.values().any(|r| r.data.email == email))
    }

    fn get_by_id(&self, id: Uuid) -> Result<Option<Versioned<Employee>>, StorageError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StorageError::Backend("store lock poisoned".to_string()))?;

        Ok(inner.get(&id).cloned())
    }
}
