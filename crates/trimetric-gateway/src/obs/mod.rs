//! Lightweight in-process metrics.
//!
//! Request, validation and render counters are stored as atomics and
//! rendered in Prometheus text format by the `/ops/metrics` handler.

pub mod metrics;
