//! trimetric core: metrics validation, scene layout, rendering, and encoding.
//!
//! This crate turns a validated `(performance, people, personal)` triple
//! into a base64 PNG chart. It carries no HTTP or async runtime
//! dependencies so the pipeline can be driven from tests and tools
//! directly.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `ChartError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod encoding;
pub mod error;
pub mod metrics;
pub mod render;
pub mod scene;

/// Shared result type.
pub use error::{ChartError, Result};
pub use metrics::MetricsInput;

use render::SceneRenderer;

/// Build, render and encode the chart for `input`.
pub fn render_chart<R: SceneRenderer + ?Sized>(renderer: &R, input: &MetricsInput) -> Result<String> {
    let scene = scene::build_scene(input);
    let image = renderer.render(&scene)?;
    tracing::debug!(width = image.width, height = image.height, bytes = image.bytes.len(), "chart rendered");
    Ok(encoding::encode_image(&image.bytes))
}
