//! Boundary error handling: wire rendering and exit-code mapping.
//!
//! This is the only place where core failures become response bodies. The
//! use-case and rule layers hand over `CoreError` values; [`CliError::report`]
//! translates the whole failure once, prints the wire JSON to stderr, and
//! picks the process exit code.

use std::process::ExitCode;

use roster_core::error::CoreError;
use roster_core::wire::{self, StatusClass};
use thiserror::Error;
use tracing::{error, warn};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Domain/application failure, rendered through the wire translator.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[source] anyhow::Error),

    /// Output could not be encoded.
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

impl CliError {
    /// Render to stderr and map to the process exit code.
    pub fn report(self) -> ExitCode {
        match self {
            Self::Core(err) => {
                if let CoreError::Internal { message } = &err {
                    // Full detail goes to the log, never to the response.
                    error!(%message, "unexpected failure");
                } else {
                    warn!(%err, "request failed");
                }

                let (class, body) = wire::to_wire(&err);
                match serde_json::to_string_pretty(&body) {
                    Ok(json) => eprintln!("{json}"),
                    Err(e) => eprintln!("failed to encode error response: {e}"),
                }
                ExitCode::from(exit_code(class, &err))
            }
            Self::Config(err) => {
                error!("failed to load configuration: {err:#}");
                eprintln!("configuration error: {err:#}");
                ExitCode::from(7)
            }
            Self::Encode(err) => {
                error!(%err, "failed to encode output");
                eprintln!("failed to encode output: {err}");
                ExitCode::from(1)
            }
        }
    }
}

/// Exit codes, one per failure category.
///
/// | Code | Meaning                 |
/// |------|-------------------------|
/// |  0   | Success                 |
/// |  1   | Internal / system error |
/// |  2   | Bad request             |
/// |  3   | Not found               |
/// |  4   | Conflict                |
/// |  5   | Validation failed       |
/// |  6   | Forbidden               |
/// |  7   | Configuration error     |
fn exit_code(class: StatusClass, err: &CoreError) -> u8 {
    match class {
        StatusClass::ServerError => 1,
        StatusClass::ClientError => match err {
            CoreError::NotFound { .. } => 3,
            _ => 2,
        },
        StatusClass::Conflict => 4,
        StatusClass::Unprocessable => 5,
        StatusClass::Forbidden => 6,
    }
}

#[cfg(test)]
mod tests {
    use roster_core::domain::validation::Attributes;

    use super::*;

    fn code_of(err: CoreError) -> u8 {
        let (class, _) = wire::to_wire(&err);
        exit_code(class, &err)
    }

    #[test]
    fn each_category_has_its_own_exit_code() {
        assert_eq!(
            code_of(CoreError::NotFound {
                kind: "Employee",
                attributes: Attributes::new(),
            }),
            3
        );
        assert_eq!(
            code_of(CoreError::BadRequest {
                message: "bad".into(),
                attributes: Attributes::new(),
            }),
            2
        );
        assert_eq!(
            code_of(CoreError::Duplicated {
                kind: "Employee",
                attributes: Attributes::new(),
            }),
            4
        );
        assert_eq!(code_of(CoreError::Validation(Vec::new())), 5);
        assert_eq!(
            code_of(CoreError::Internal {
                message: "boom".into(),
            }),
            1
        );
    }
}
