//! Implementation of the `roster create` command.

use std::sync::Arc;

use roster_core::domain::rules::{CountryAllowed, EmailNotTaken, SalaryInRange};
use roster_core::prelude::*;

use crate::cli::{CreateArgs, GlobalArgs};
use crate::config::AppConfig;
use crate::error::CliResult;

pub fn execute(args: CreateArgs, global: &GlobalArgs, config: &AppConfig) -> CliResult<()> {
    let store = super::open_store(global, config);
    let hiring: Arc<dyn HiringConfig> = Arc::new(config.hiring.clone());

    let validator = CommandValidator::builder()
        .rule(EmailNotTaken::new(Arc::clone(&store)))
        .rule(CountryAllowed::new(Arc::clone(&hiring)))
        .rule(SalaryInRange::new(hiring))
        .build();

    let use_case = CreateEmployee::new(
        validator,
        store,
        Arc::new(SystemClock),
        Arc::new(UuidProvider),
    );

    let record = use_case.execute(CreateEmployeeCommand {
        email: args.email,
        country: args.country,
        salary: args.salary,
    })?;

    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
