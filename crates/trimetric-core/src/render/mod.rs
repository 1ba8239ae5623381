//! Scene rasterization.
//!
//! A [`SceneRenderer`] consumes an immutable [`SceneDescription`] and
//! produces encoded image bytes. [`PngRenderer`] is the production backend:
//! project through the camera, lay out as SVG, rasterize with resvg.

pub mod clip;
pub mod projection;
pub mod raster;
pub mod svg;

use crate::error::Result;
use crate::scene::SceneDescription;

pub use raster::PngRenderer;
pub use svg::{scene_to_svg, Figure};

/// Encoded image produced for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageArtifact {
    /// PNG bytes.
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Rendering backend. Implementations must be deterministic for a given scene.
pub trait SceneRenderer: Send + Sync {
    fn render(&self, scene: &SceneDescription) -> Result<ImageArtifact>;
}
