//! Get-employee-by-id orchestration.

use std::sync::Arc;

use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::EmployeeStore;
use crate::domain::codes::field;
use crate::domain::validation::Attributes;
use crate::domain::{Employee, Versioned};
use crate::error::{CoreError, CoreResult};

/// Fetches one employee record, failing attributably when it is absent.
///
/// Performs zero writes.
pub struct GetEmployee {
    store: Arc<dyn EmployeeStore>,
}

impl GetEmployee {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub fn execute(&self, id: Uuid) -> CoreResult<Versioned<Employee>> {
        self.store.get_by_id(id)?.ok_or_else(|| CoreError::NotFound {
            kind: Employee::KIND,
            attributes: Attributes::from([(field::ID.to_string(), json!(id))]),
        })
    }
}
