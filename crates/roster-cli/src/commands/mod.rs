//! Command handlers.
//!
//! Thin by design: wire adapters into the core use cases, run, print. No
//! business logic lives here.

use std::sync::Arc;

use roster_adapters::JsonFileEmployeeStore;
use roster_core::prelude::EmployeeStore;

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

pub mod create;
pub mod get;

/// Open the document store, letting `--storage` override configuration.
pub(crate) fn open_store(global: &GlobalArgs, config: &AppConfig) -> Arc<dyn EmployeeStore> {
    let path = global
        .storage
        .clone()
        .unwrap_or_else(|| config.storage_path.clone());
    Arc::new(JsonFileEmployeeStore::new(path))
}
