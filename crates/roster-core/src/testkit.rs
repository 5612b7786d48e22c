//! Object mothers shared by this crate's tests and downstream suites
//! (enable the `test-utils` feature).

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::domain::{CreateEmployeeCommand, Employee, Versioned};

/// A command that passes every rule under the default business parameters.
pub fn create_command() -> CreateEmployeeCommand {
    create_command_with("jane.doe@example.com", "CA", 250.0)
}

pub fn create_command_with(email: &str, country: &str, salary: f64) -> CreateEmployeeCommand {
    CreateEmployeeCommand {
        email: email.to_string(),
        country: country.to_string(),
        salary,
    }
}

pub fn employee() -> Employee {
    Employee {
        email: "jane.doe@example.com".to_string(),
        country: "CA".to_string(),
        salary: 250.0,
    }
}

/// A persisted-looking record: random id, version 1, fixed timestamps.
pub fn record(data: Employee) -> Versioned<Employee> {
    Versioned {
        id: Uuid::new_v4(),
        version: 1,
        created_at: fixed_instant(),
        updated_at: fixed_instant(),
        data,
    }
}

pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 14, 9, 30, 0).unwrap()
}
