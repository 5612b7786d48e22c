//! Command-line definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(
    name = "roster",
    version,
    about = "Versioned employee records with validated writes"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log errors only.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to the configuration file.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to the JSON storage file (overrides configuration).
    #[arg(long, global = true, value_name = "FILE")]
    pub storage: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create an employee record.
    Create(CreateArgs),
    /// Fetch an employee record by id.
    Get(GetArgs),
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Email address; must be unique across all records.
    #[arg(long)]
    pub email: String,

    /// ISO-style country label checked against the allowed set.
    #[arg(long)]
    pub country: String,

    /// Salary; must fall inside the configured range.
    #[arg(long)]
    pub salary: f64,
}

#[derive(Debug, Args)]
pub struct GetArgs {
    /// Record identifier.
    pub id: Uuid,
}
