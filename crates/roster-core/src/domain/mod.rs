//! Core domain layer for roster.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All storage and configuration lookups are reached via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: Domain objects are Clone + PartialEq; nothing is
//!   mutated in place after construction
//! - **Rules over services**: Each business check is one small, independently
//!   testable [`ValidationRule`]

// Public API - what the world sees
pub mod codes;
pub mod employee;
pub mod model;
pub mod rules;
pub mod validation;

// Re-exports for convenience
pub use employee::{CreateEmployeeCommand, Employee};
pub use model::{Range, Versioned};
pub use validation::{
    Attributes, CommandValidator, CommandValidatorBuilder, RuleCode, ValidationError,
    ValidationRule,
};
