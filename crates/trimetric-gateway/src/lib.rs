//! trimetric gateway library entry.
//!
//! This crate wires configuration, the chart API, operational endpoints and
//! the metrics registry into an axum router. It is consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
