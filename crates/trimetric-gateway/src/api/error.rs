//! HTTP mapping for `ChartError`.

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use trimetric_core::error::ChartError;

/// Handler error wrapper so core errors can be returned from axum handlers.
#[derive(Debug)]
pub struct ApiError(pub ChartError);

impl From<ChartError> for ApiError {
    fn from(e: ChartError) -> Self {
        Self(e)
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rej: BytesRejection) -> Self {
        if rej.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self(ChartError::PayloadTooLarge)
        } else {
            Self(ChartError::BadRequest(rej.body_text()))
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ChartError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ChartError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ChartError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ChartError::Render(_) | ChartError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self.0 {
            ChartError::Validation(errors) => Json(json!({ "detail": errors.detail })),
            other => Json(json!({
                "error": other.client_code().as_str(),
                "message": other.to_string(),
            })),
        };
        (status, body).into_response()
    }
}
