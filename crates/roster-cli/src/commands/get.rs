//! Implementation of the `roster get` command.

use roster_core::prelude::GetEmployee;

use crate::cli::{GetArgs, GlobalArgs};
use crate::config::AppConfig;
use crate::error::CliResult;

pub fn execute(args: GetArgs, global: &GlobalArgs, config: &AppConfig) -> CliResult<()> {
    let store = super::open_store(global, config);

    let record = GetEmployee::new(store).execute(args.id)?;

    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
