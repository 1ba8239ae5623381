//! Shared error type across trimetric crates.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request.
    BadRequest,
    /// Field-level validation failed.
    Validation,
    /// Payload too large.
    PayloadTooLarge,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::Validation => "VALIDATION_FAILED",
            ClientCode::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ChartError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("payload too large")]
    PayloadTooLarge,
    #[error("render failed: {0}")]
    Render(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl ChartError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            ChartError::BadRequest(_) => ClientCode::BadRequest,
            ChartError::Validation(_) => ClientCode::Validation,
            ChartError::PayloadTooLarge => ClientCode::PayloadTooLarge,
            ChartError::Render(_) | ChartError::Internal(_) => ClientCode::Internal,
        }
    }
}

impl From<ValidationErrors> for ChartError {
    fn from(errors: ValidationErrors) -> Self {
        ChartError::Validation(errors)
    }
}

/// Machine-readable reason a single input location was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// Required field absent.
    Missing,
    /// Value present but not an integer.
    IntType,
    /// Integer below the lower bound.
    GreaterThanEqual,
    /// Integer above the upper bound.
    LessThanEqual,
    /// Body is not valid JSON.
    JsonInvalid,
    /// Body is valid JSON but not an object.
    ModelAttributesType,
}

impl FieldErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldErrorKind::Missing => "missing",
            FieldErrorKind::IntType => "int_type",
            FieldErrorKind::GreaterThanEqual => "greater_than_equal",
            FieldErrorKind::LessThanEqual => "less_than_equal",
            FieldErrorKind::JsonInvalid => "json_invalid",
            FieldErrorKind::ModelAttributesType => "model_attributes_type",
        }
    }
}

/// One rejected input location, e.g. `["body", "performance"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn body(field: Option<&str>, kind: FieldErrorKind, msg: impl Into<String>) -> Self {
        let mut loc = vec!["body".to_string()];
        if let Some(f) = field {
            loc.push(f.to_string());
        }
        Self {
            loc,
            msg: msg.into(),
            kind,
        }
    }

    /// Field name when the error points inside the body object.
    pub fn field(&self) -> Option<&str> {
        self.loc.get(1).map(String::as_str)
    }
}

/// Every field-level failure collected for one request, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub detail: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn push(&mut self, err: FieldError) {
        self.detail.push(err);
    }

    pub fn is_empty(&self) -> bool {
        self.detail.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.detail.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .detail
            .iter()
            .map(|e| format!("{}: {}", e.loc.join("."), e.msg))
            .collect();
        f.write_str(&parts.join("; "))
    }
}
