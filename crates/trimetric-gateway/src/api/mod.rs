//! Public HTTP API.
//!
//! - `POST /metrics/` : validate a metrics triple and return the chart

pub mod error;
pub mod metrics;
