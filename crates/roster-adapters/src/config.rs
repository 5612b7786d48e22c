//! Static business-configuration adapter.
//!
//! Parameters are fixed for the process lifetime; the core still looks them
//! up through the port on every validation, so swapping this adapter for a
//! live one changes nothing in the domain.

use std::collections::BTreeSet;

use roster_core::application::ports::HiringConfig;
use roster_core::domain::Range;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticHiringConfig {
    pub allowed_countries: BTreeSet<String>,
    pub salary_range: Range<f64>,
}

impl Default for StaticHiringConfig {
    fn default() -> Self {
        Self {
            allowed_countries: BTreeSet::from(["USA".to_string(), "CA".to_string()]),
            salary_range: Range::new(Some(200.0), Some(300.0)),
        }
    }
}

impl HiringConfig for StaticHiringConfig {
    fn allowed_countries(&self) -> BTreeSet<String> {
        self.allowed_countries.clone()
    }

    fn salary_range(&self) -> Range<f64> {
        self.salary_range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_parameters() {
        let config = StaticHiringConfig::default();

        assert!(config.allowed_countries().contains("USA"));
        assert!(config.allowed_countries().contains("CA"));
        assert_eq!(config.salary_range(), Range::new(Some(200.0), Some(300.0)));
    }

    #[test]
    fn partial_deserialization_falls_back_to_defaults() {
        let config: StaticHiringConfig =
            serde_json::from_str(r#"{"allowed_countries": ["DE"]}"#).unwrap();

        assert_eq!(
            config.allowed_countries(),
            BTreeSet::from(["DE".to_string()])
        );
        assert_eq!(config.salary_range(), Range::new(Some(200.0), Some(300.0)));
    }
}
