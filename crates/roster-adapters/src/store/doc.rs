//! Document shape persisted by the file-backed store.
//!
//! Decoupled from the domain type on purpose: field names here are part of
//! the on-disk format and do not move when the domain model does.

use chrono::{DateTime, Utc};
use roster_core::domain::{Employee, Versioned};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EmployeeDoc {
    pub id: Uuid,
    pub version: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub data: Employee,
}

impl From<&Versioned<Employee>> for EmployeeDoc {
    fn from(record: &Versioned<Employee>) -> Self {
        Self {
            id: record.id,
            version: record.version,
            created_at: record.created_at,
            updated_at: record.updated_at,
            data: record.data.clone(),
        }
    }
}

impl From<EmployeeDoc> for Versioned<Employee> {
    fn from(doc: EmployeeDoc) -> Self {
        Self {
            id: doc.id,
            version: doc.version,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
            data: doc.data,
        }
    }
}
