//! Application layer for roster.
//!
//! This layer contains:
//! - **Use cases**: one orchestrator per business operation
//!   (CreateEmployee, GetEmployee)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Providers**: injected time and identifier generation
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod ports;
pub mod providers;
pub mod use_cases;

// Re-export the orchestrators
pub use use_cases::{CreateEmployee, GetEmployee};

// Re-export port traits (for adapter implementation)
pub use ports::{EmployeeStore, HiringConfig, StorageError};

pub use providers::{Clock, IdProvider, SystemClock, UuidProvider};
