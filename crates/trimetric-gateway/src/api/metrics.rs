//! `POST /metrics/` handler.
//!
//! Pipeline: validate body -> build scene -> render PNG -> base64. The body
//! is validated before anything else runs; rendering happens on the
//! blocking pool since it is CPU-bound.

use std::time::Instant;

use axum::{body::Bytes, extract::rejection::BytesRejection, extract::State, http::StatusCode, Json};
use serde::Serialize;

use trimetric_core::error::{ChartError, ValidationErrors};
use trimetric_core::{render_chart, MetricsInput};

use crate::api::error::ApiError;
use crate::app_state::AppState;
use crate::obs::metrics::Gauge;

const ROUTE: &str = "/metrics/";

#[derive(Debug, Serialize)]
pub struct ChartResponse {
    pub scores: MetricsInput,
    pub status: &'static str,
    pub image: String,
}

/// Decrements the in-flight gauge even when the request future is dropped.
struct InFlight<'a>(&'a Gauge);

impl<'a> InFlight<'a> {
    fn enter(g: &'a Gauge) -> Self {
        g.inc();
        Self(g)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.dec();
    }
}

pub async fn process_metrics(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ChartResponse>, ApiError> {
    let result = handle(&state, body).await;

    let status = match &result {
        Ok(_) => StatusCode::OK,
        Err(e) => e.status(),
    };
    state
        .metrics()
        .requests
        .inc(&[("route", ROUTE), ("status", status.as_str())]);

    result.map(Json)
}

async fn handle(
    state: &AppState,
    body: Result<Bytes, BytesRejection>,
) -> Result<ChartResponse, ApiError> {
    let body = body?;
    let input = MetricsInput::from_slice(&body).map_err(|errs| rejected(state, errs))?;

    tracing::debug!(
        performance = input.performance,
        people = input.people,
        personal = input.personal,
        "metrics accepted"
    );

    let metrics = state.metrics();
    let _in_flight = InFlight::enter(&metrics.renders_in_flight);
    let started = Instant::now();

    let renderer = state.renderer();
    let rendered = tokio::task::spawn_blocking(move || render_chart(renderer.as_ref(), &input))
        .await
        .map_err(|e| ChartError::Internal(format!("render task failed: {e}")))
        .and_then(|r| r);

    let elapsed = started.elapsed();
    metrics.render_duration.observe(&[], elapsed);

    let image = match rendered {
        Ok(image) => image,
        Err(e) => {
            metrics.render_failures.inc(&[]);
            tracing::error!(error = %e, "chart render failed");
            return Err(e.into());
        }
    };

    tracing::info!(
        elapsed_ms = elapsed.as_millis() as u64,
        image_len = image.len(),
        "chart rendered"
    );

    Ok(ChartResponse {
        scores: input,
        status: "success",
        image,
    })
}

fn rejected(state: &AppState, errs: ValidationErrors) -> ApiError {
    for e in errs.iter() {
        state.metrics().validation_failures.inc(&[
            ("field", e.field().unwrap_or("body")),
            ("kind", e.kind.as_str()),
        ]);
    }
    tracing::debug!(errors = %errs, "metrics rejected");
    ChartError::Validation(errs).into()
}
