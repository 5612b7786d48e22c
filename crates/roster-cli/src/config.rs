//! Layered application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `ROSTER_*` environment variables (`__` separates nested keys)
//! 3. Config file (`--config`, or the default location if present)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use roster_adapters::StaticHiringConfig;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the JSON document store lives.
    pub storage_path: PathBuf,

    /// Business parameters handed to the hiring-config port.
    pub hiring: StaticHiringConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from("roster.json"),
            hiring: StaticHiringConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicit `--config` path must exist; the default location is
    /// optional.
    pub fn load(file: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder();

        builder = match file {
            Some(path) => builder.add_source(config::File::from(path)),
            None => builder.add_source(config::File::from(Self::config_path()).required(false)),
        };

        builder = builder.add_source(config::Environment::with_prefix("ROSTER").separator("__"));

        builder
            .build()
            .context("failed to read configuration sources")?
            .try_deserialize()
            .context("configuration did not match the expected shape")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.roster.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "roster", "roster")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".roster.toml"))
    }
}
