//! Request model for the chart endpoint.
//!
//! Validation is explicit rather than derive-driven so that every failing
//! field is reported at once, each with its own location and reason.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{FieldError, FieldErrorKind, ValidationErrors};

/// Field names in the order they are validated and reported.
pub const FIELDS: [&str; 3] = ["performance", "people", "personal"];

/// Validated metrics triple. Only constructible through [`MetricsInput::new`]
/// or the JSON validators, so every instance satisfies the value bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MetricsInput {
    pub performance: u32,
    pub people: u32,
    pub personal: u32,
}

impl MetricsInput {
    pub fn new(performance: u32, people: u32, personal: u32) -> Self {
        Self {
            performance,
            people,
            personal,
        }
    }

    /// Validate a raw request body.
    pub fn from_slice(body: &[u8]) -> Result<Self, ValidationErrors> {
        let value: Value = serde_json::from_slice(body).map_err(|e| {
            let mut errs = ValidationErrors::default();
            errs.push(FieldError::body(
                None,
                FieldErrorKind::JsonInvalid,
                format!("JSON decode error: {e}"),
            ));
            errs
        })?;
        Self::from_json(&value)
    }

    /// Validate an already-parsed JSON document. Unknown keys are ignored.
    pub fn from_json(value: &Value) -> Result<Self, ValidationErrors> {
        let Some(obj) = value.as_object() else {
            let mut errs = ValidationErrors::default();
            errs.push(FieldError::body(
                None,
                FieldErrorKind::ModelAttributesType,
                "Input should be a valid dictionary or object to extract fields from",
            ));
            return Err(errs);
        };

        let mut errs = ValidationErrors::default();
        let mut vals = [0u32; 3];
        for (slot, name) in vals.iter_mut().zip(FIELDS) {
            match field_u32(obj, name) {
                Ok(v) => *slot = v,
                Err(e) => errs.push(e),
            }
        }

        if !errs.is_empty() {
            return Err(errs);
        }
        let [performance, people, personal] = vals;
        Ok(Self::new(performance, people, personal))
    }
}

fn field_u32(obj: &Map<String, Value>, name: &str) -> Result<u32, FieldError> {
    let Some(raw) = obj.get(name) else {
        return Err(FieldError::body(Some(name), FieldErrorKind::Missing, "Field required"));
    };

    if let Some(v) = raw.as_u64() {
        return u32::try_from(v).map_err(|_| {
            FieldError::body(
                Some(name),
                FieldErrorKind::LessThanEqual,
                format!("Input should be less than or equal to {}", u32::MAX),
            )
        });
    }
    if raw.is_i64() {
        // as_u64 already handled every non-negative integer
        return Err(FieldError::body(
            Some(name),
            FieldErrorKind::GreaterThanEqual,
            "Input should be greater than or equal to 0",
        ));
    }
    Err(FieldError::body(
        Some(name),
        FieldErrorKind::IntType,
        "Input should be a valid integer",
    ))
}
