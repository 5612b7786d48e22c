//! The employee payload and the commands that act on it.

use serde::{Deserialize, Serialize};

/// Domain payload of one employee record.
///
/// The email is the business-unique key; country and salary are checked
/// against configured business parameters on creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub email: String,
    pub country: String,
    pub salary: f64,
}

impl Employee {
    /// Declared entity-kind label used for error attribution.
    pub const KIND: &'static str = "Employee";
}

/// Immutable caller intent to create an employee.
///
/// Consumed exactly once by
/// [`CreateEmployee`](crate::application::use_cases::CreateEmployee); the
/// command is not retained afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateEmployeeCommand {
    pub email: String,
    pub country: String,
    pub salary: f64,
}
