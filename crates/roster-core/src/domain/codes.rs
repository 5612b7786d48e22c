//! Declared validation codes for the employee domain.
//!
//! Codes are part of the wire contract: renaming one is a breaking change
//! for every consumer matching on it.

use crate::domain::validation::RuleCode;

pub const EMAIL_ALREADY_EXISTS: RuleCode = RuleCode {
    code: "EMAIL_ALREADY_EXISTS",
    message: "The email already exists",
};

pub const COUNTRY_NOT_ALLOWED: RuleCode = RuleCode {
    code: "COUNTRY_NOT_ALLOWED",
    message: "The country is not allowed",
};

pub const SALARY_OUT_OF_RANGE: RuleCode = RuleCode {
    code: "SALARY_OUT_OF_RANGE",
    message: "The salary must be between {min} and {max} values",
};

/// Attribute keys, camelCase on the wire.
pub mod field {
    pub const ID: &str = "id";
    pub const EMAIL: &str = "email";
    pub const COUNTRY: &str = "country";
    pub const ALLOWED_COUNTRIES: &str = "allowedCountries";
    pub const SALARY: &str = "salary";
    pub const MIN: &str = "min";
    pub const MAX: &str = "max";
}
