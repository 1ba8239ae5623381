//! Scene layout: what to draw, independent of how it is rasterized.
//!
//! [`build_scene`] turns a validated metrics triple into an immutable
//! [`SceneDescription`]; the render module consumes it.

pub mod builder;
pub mod model;

pub use builder::{build_scene, CAMERA, OPTIMAL, TICK_INTERVAL};
pub use model::*;
