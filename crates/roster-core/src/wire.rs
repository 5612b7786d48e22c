//! Wire-level error representation.
//!
//! The single place where the taxonomy becomes response-shaped data. Use
//! cases and rules never build these; a boundary calls [`to_wire`] once per
//! failure and maps the returned [`StatusClass`] onto its own transport's
//! statuses (an HTTP binding would use 404/400/409/403/422/500).

use serde::Serialize;
use serde_json::json;

use crate::domain::validation::Attributes;
use crate::error::CoreError;

/// Stable wire codes for singleton failures. Validation failures carry
/// their rule's own code instead.
pub mod code {
    pub const NOT_FOUND: &str = "NotFound";
    pub const BAD_REQUEST: &str = "BadRequest";
    pub const INTERNAL_ERROR: &str = "InternalError";
    pub const FORBIDDEN_ACCESS: &str = "ForbiddenAccess";
    pub const OUTDATED_VERSION: &str = "OutdatedVersion";
    pub const DUPLICATED_KEY: &str = "DuplicatedKey";
}

/// Attribute key carrying the entity-kind label on singleton failures.
const MODEL: &str = "model";

/// Fixed response text for unanticipated failures; the real detail stays in
/// the logs.
const INTERNAL_MESSAGE: &str = "An internal error occurred, please contact support";

/// Transport-neutral failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// The request referenced something that does not exist or was
    /// structurally wrong (404 / 400 territory).
    ClientError,
    /// Business rules rejected an otherwise well-formed request (422).
    Unprocessable,
    /// Duplicate key or stale version (409).
    Conflict,
    /// Denied by policy (403).
    Forbidden,
    /// Unanticipated failure (500).
    ServerError,
}

/// One wire-shaped error entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorV1 {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

/// The failure body handed to the transport, order-preserving.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponseV1 {
    pub errors: Vec<ErrorV1>,
}

/// Translate an accumulated failure into its wire shape.
pub fn to_wire(err: &CoreError) -> (StatusClass, ErrorResponseV1) {
    match err {
        CoreError::Validation(violations) => (
            StatusClass::Unprocessable,
            ErrorResponseV1 {
                errors: violations
                    .iter()
                    .map(|v| ErrorV1 {
                        code: v.code.code.to_string(),
                        message: v.code.message.to_string(),
                        attributes: v.attributes.clone(),
                    })
                    .collect(),
            },
        ),

        CoreError::NotFound { kind, attributes } => single(
            StatusClass::ClientError,
            code::NOT_FOUND,
            &err.to_string(),
            with_model(kind, attributes),
        ),

        CoreError::Duplicated { kind, attributes } => single(
            StatusClass::Conflict,
            code::DUPLICATED_KEY,
            &err.to_string(),
            with_model(kind, attributes),
        ),

        CoreError::OutdatedVersion { attributes } => single(
            StatusClass::Conflict,
            code::OUTDATED_VERSION,
            &err.to_string(),
            attributes.clone(),
        ),

        CoreError::Forbidden {
            message,
            attributes,
        } => single(
            StatusClass::Forbidden,
            code::FORBIDDEN_ACCESS,
            message,
            attributes.clone(),
        ),

        CoreError::BadRequest {
            message,
            attributes,
        } => single(
            StatusClass::ClientError,
            code::BAD_REQUEST,
            message,
            attributes.clone(),
        ),

        CoreError::Internal { .. } => single(
            StatusClass::ServerError,
            code::INTERNAL_ERROR,
            INTERNAL_MESSAGE,
            Attributes::new(),
        ),
    }
}

fn single(
    class: StatusClass,
    code: &str,
    message: &str,
    attributes: Attributes,
) -> (StatusClass, ErrorResponseV1) {
    (
        class,
        ErrorResponseV1 {
            errors: vec![ErrorV1 {
                code: code.to_string(),
                message: message.to_string(),
                attributes,
            }],
        },
    )
}

fn with_model(kind: &str, attributes: &Attributes) -> Attributes {
    let mut out = attributes.clone();
    out.insert(MODEL.to_string(), json!(kind));
    out
}
