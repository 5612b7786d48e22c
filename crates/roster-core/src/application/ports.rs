//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `roster-adapters` crate provides implementations.

use std::collections::BTreeSet;

#[cfg(test)]
use mockall::automock;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{Employee, Versioned};

/// Failures a storage adapter can report.
///
/// Adapters map whatever their engine raises onto these three conditions;
/// the use cases translate them into the error taxonomy.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StorageError {
    /// A unique key (id or email) is already taken.
    #[error("unique key already exists")]
    DuplicateKey,

    /// The stored version is newer than the one being written.
    #[error("stored version is newer than the submitted one")]
    StaleVersion,

    /// The backend itself failed (I/O, poisoned lock, corrupt data).
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Port for employee record persistence.
///
/// Implemented by:
/// - `roster_adapters::store::MemoryEmployeeStore` (testing, ephemeral runs)
/// - `roster_adapters::store::JsonFileEmployeeStore` (production)
///
/// ## Design Notes
///
/// - Each call is atomic at the adapter's discretion; no transaction or
///   batching semantics are assumed
/// - Racing creates on the same unique key are resolved here, by constraint
///   enforcement, never by core-level locking
#[cfg_attr(test, automock)]
pub trait EmployeeStore: Send + Sync {
    /// Persist a freshly created record.
    ///
    /// Fails with [`StorageError::DuplicateKey`] when the id or email is
    /// already taken; nothing is written in that case.
    fn create(&self, record: &Versioned<Employee>) -> Result<(), StorageError>;

    /// Whether any record holds this email.
    fn exists_by_email(&self, email: &str) -> Result<bool, StorageError>;

    /// Fetch a record by id; `None` when absent.
    fn get_by_id(&self, id: Uuid) -> Result<Option<Versioned<Employee>>, StorageError>;
}

/// Port for read-only business parameters.
///
/// Looked up fresh on every validation; caching, if any, belongs to the
/// adapter. Calls are synchronous and assumed cheap.
#[cfg_attr(test, automock)]
pub trait HiringConfig: Send + Sync {
    fn allowed_countries(&self) -> BTreeSet<String>;

    fn salary_range(&self) -> crate::domain::Range<f64>;
}
