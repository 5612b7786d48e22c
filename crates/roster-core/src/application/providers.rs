//! Injected time and identifier generation.
//!
//! Use cases never call `Utc::now()` or `Uuid::new_v4()` directly; they go
//! through these traits so tests can pin both.

use chrono::{DateTime, Utc};
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

#[cfg_attr(test, automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock UTC time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg_attr(test, automock)]
pub trait IdProvider: Send + Sync {
    fn generate(&self) -> Uuid;
}

/// Random v4 identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidProvider;

impl IdProvider for UuidProvider {
    fn generate(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Name-based identifier derived from `parts`.
///
/// The same parts always yield the same id; useful for seeding and for
/// adapters that need reproducible keys.
pub fn uuid_of(parts: &[&str]) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, parts.join(", ").as_bytes())
}
