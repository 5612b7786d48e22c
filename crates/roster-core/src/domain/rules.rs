//! Business rules for employee creation.
//!
//! Each rule answers one question and reads its dependencies through ports
//! only. The validator aggregates whatever they report; ordering is declared
//! per rule via [`ValidationRule::order`], not by registration position.

use std::sync::Arc;

use serde_json::json;

use crate::application::ports::{EmployeeStore, HiringConfig};
use crate::domain::codes::{self, field};
use crate::domain::employee::CreateEmployeeCommand;
use crate::domain::validation::{Attributes, ValidationError, ValidationRule};
use crate::error::CoreResult;

/// Rejects commands whose email already belongs to a persisted record.
pub struct EmailNotTaken {
    store: Arc<dyn EmployeeStore>,
}

impl EmailNotTaken {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }
}

impl ValidationRule<CreateEmployeeCommand> for EmailNotTaken {
    fn validate(&self, command: &CreateEmployeeCommand) -> CoreResult<Vec<ValidationError>> {
        // Input-shape checks (empty field, malformed address) belong to the
        // transport layer; this rule only answers uniqueness.
        if !self.store.exists_by_email(&command.email)? {
            return Ok(Vec::new());
        }

        Ok(vec![ValidationError::new(
            codes::EMAIL_ALREADY_EXISTS,
            Attributes::from([(field::EMAIL.to_string(), json!(command.email))]),
        )])
    }

    fn order(&self) -> i32 {
        10
    }
}

/// Rejects countries outside the configured allowed set.
pub struct CountryAllowed {
    hiring: Arc<dyn HiringConfig>,
}

impl CountryAllowed {
    pub fn new(hiring: Arc<dyn HiringConfig>) -> Self {
        Self { hiring }
    }
}

impl ValidationRule<CreateEmployeeCommand> for CountryAllowed {
    fn validate(&self, command: &CreateEmployeeCommand) -> CoreResult<Vec<ValidationError>> {
        let allowed = self.hiring.allowed_countries();
        if allowed.contains(&command.country) {
            return Ok(Vec::new());
        }

        Ok(vec![ValidationError::new(
            codes::COUNTRY_NOT_ALLOWED,
            Attributes::from([
                (field::COUNTRY.to_string(), json!(command.country)),
                (field::ALLOWED_COUNTRIES.to_string(), json!(allowed)),
            ]),
        )])
    }

    fn order(&self) -> i32 {
        20
    }
}

/// Rejects salaries outside the configured range.
pub struct SalaryInRange {
    hiring: Arc<dyn HiringConfig>,
}

impl SalaryInRange {
    pub fn new(hiring: Arc<dyn HiringConfig>) -> Self {
        Self { hiring }
    }
}

impl ValidationRule<CreateEmployeeCommand> for SalaryInRange {
    fn validate(&self, command: &CreateEmployeeCommand) -> CoreResult<Vec<ValidationError>> {
        let range = self.hiring.salary_range();
        if range.contains(&command.salary) {
            return Ok(Vec::new());
        }

        Ok(vec![ValidationError::new(
            codes::SALARY_OUT_OF_RANGE,
            Attributes::from([
                (field::SALARY.to_string(), json!(command.salary)),
                (field::MIN.to_string(), json!(range.from)),
                (field::MAX.to_string(), json!(range.to)),
            ]),
        )])
    }

    fn order(&self) -> i32 {
        30
    }
}
