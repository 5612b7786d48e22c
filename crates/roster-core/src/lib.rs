//! Roster Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the roster
//! employee-record service, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        roster-cli (composition)         │
//! │      (Drives the Use Cases)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Use-Case Orchestrators          │
//! │     (CreateEmployee, GetEmployee)       │
//! │  validate → build record → persist      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (EmployeeStore, HiringConfig, Clock...) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    roster-adapters (Infrastructure)     │
//! │  (MemoryEmployeeStore, JSON file, ...)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (Versioned, Range, Employee, Rules)     │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use roster_core::prelude::*;
//! use roster_core::domain::rules::{CountryAllowed, EmailNotTaken, SalaryInRange};
//!
//! # fn wire(store: Arc<dyn EmployeeStore>, hiring: Arc<dyn HiringConfig>) {
//! // 1. Compose the validator from declared rules
//! let validator = CommandValidator::builder()
//!     .rule(EmailNotTaken::new(Arc::clone(&store)))
//!     .rule(CountryAllowed::new(Arc::clone(&hiring)))
//!     .rule(SalaryInRange::new(hiring))
//!     .build();
//!
//! // 2. Build the use case (with injected adapters)
//! let create = CreateEmployee::new(
//!     validator,
//!     store,
//!     Arc::new(SystemClock),
//!     Arc::new(UuidProvider),
//! );
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Wire-level error representation (consumed by boundaries only)
pub mod wire;

// Object mothers for downstream test suites
#[cfg(any(test, feature = "test-utils"))]
pub mod testkit;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CreateEmployee, GetEmployee,
        ports::{EmployeeStore, HiringConfig, StorageError},
        providers::{Clock, IdProvider, SystemClock, UuidProvider},
    };
    pub use crate::domain::{
        CommandValidator, CreateEmployeeCommand, Employee, Range, ValidationError, ValidationRule,
        Versioned,
    };
    pub use crate::error::{CoreError, CoreResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
