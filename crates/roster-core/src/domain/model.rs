//! Generic persistence envelope and inclusive ranges.
//!
//! # Design
//!
//! [`Versioned`] gives any domain payload an identity, an
//! optimistic-concurrency version, and creation/update timestamps. The use
//! case constructs the initial value (version 0); storage adapters own every
//! subsequent version increment. Concurrent writers racing on the same
//! record are detected by comparing versions at write time — there is no
//! locking in the core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An identity-bearing record wrapping a domain payload.
///
/// Invariants: `version` starts at 0 on creation and is incremented exactly
/// once per successful mutation by the storage layer; `created_at` never
/// exceeds `updated_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Versioned<T> {
    pub id: Uuid,
    pub version: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub data: T,
}

impl<T> Versioned<T> {
    /// Wrap a freshly created payload.
    ///
    /// Version is 0 and both timestamps are the creation instant.
    pub fn new(id: Uuid, created_at: DateTime<Utc>, data: T) -> Self {
        Self {
            id,
            version: 0,
            created_at,
            updated_at: created_at,
            data,
        }
    }
}

/// An inclusive range over an ordered type. Absent bounds are unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Range<T> {
    pub from: Option<T>,
    pub to: Option<T>,
}

impl<T> Range<T> {
    pub fn new(from: Option<T>, to: Option<T>) -> Self {
        Self { from, to }
    }
}

impl<T: PartialOrd> Range<T> {
    /// Whether `value` falls inside the range, bounds included.
    pub fn contains(&self, value: &T) -> bool {
        let from_ok = self.from.as_ref().is_none_or(|from| value >= from);
        let to_ok = self.to.as_ref().is_none_or(|to| value <= to);
        from_ok && to_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fresh_record_starts_at_version_zero() {
        let now = Utc.with_ymd_and_hms(2024, 5, 14, 9, 30, 0).unwrap();
        let record = Versioned::new(Uuid::new_v4(), now, "payload");

        assert_eq!(record.version, 0);
        assert_eq!(record.created_at, now);
        assert_eq!(record.updated_at, now);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let range = Range::new(Some(200.0), Some(300.0));

        assert!(range.contains(&200.0));
        assert!(range.contains(&300.0));
        assert!(!range.contains(&199.99));
        assert!(!range.contains(&300.01));
    }

    #[test]
    fn absent_bounds_are_unbounded() {
        assert!(Range::new(None, Some(300)).contains(&i32::MIN));
        assert!(Range::new(Some(200), None).contains(&i32::MAX));
        assert!(Range::<i32>::default().contains(&0));
    }

    #[test]
    fn record_serializes_with_camel_case_timestamps() {
        let now = Utc.with_ymd_and_hms(2024, 5, 14, 9, 30, 0).unwrap();
        let record = Versioned::new(Uuid::nil(), now, 42);

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"updatedAt\""));
        assert!(json.contains("\"version\":0"));
    }
}
