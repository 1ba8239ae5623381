//! SVG -> PNG via resvg.

use std::sync::Arc;

use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{self, fontdb};

use crate::error::{ChartError, Result};
use crate::scene::SceneDescription;

use super::svg::{scene_to_svg, Figure};
use super::{ImageArtifact, SceneRenderer};

/// Renders scenes to PNG at a fixed figure size and resolution.
///
/// The font database is loaded once and shared by every render.
#[derive(Clone)]
pub struct PngRenderer {
    figure: Figure,
    fontdb: Arc<fontdb::Database>,
}

impl PngRenderer {
    /// Renderer without any fonts: labels are laid out but not painted.
    pub fn new(figure: Figure) -> Self {
        Self {
            figure,
            fontdb: Arc::new(fontdb::Database::new()),
        }
    }

    /// Renderer using the fonts installed on the host.
    pub fn with_system_fonts(figure: Figure) -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        tracing::info!(faces = db.len(), "loaded system fonts");
        if db.is_empty() {
            tracing::warn!("no system fonts found; chart labels will not be drawn");
        }
        Self {
            figure,
            fontdb: Arc::new(db),
        }
    }

    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    /// Rasterize an SVG document produced by [`scene_to_svg`].
    pub fn rasterize(&self, svg: &str) -> Result<ImageArtifact> {
        let mut opt = usvg::Options::default();
        opt.font_family = self.figure.font_family.clone();
        opt.fontdb = Arc::clone(&self.fontdb);

        let tree = usvg::Tree::from_str(svg, &opt)
            .map_err(|e| ChartError::Render(format!("svg parse failed: {e}")))?;
        let size = tree.size().to_int_size();
        let mut pixmap = Pixmap::new(size.width(), size.height()).ok_or_else(|| {
            ChartError::Render(format!(
                "failed to allocate {}x{} pixmap",
                size.width(),
                size.height()
            ))
        })?;

        resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

        let bytes = pixmap
            .encode_png()
            .map_err(|e| ChartError::Render(format!("png encode failed: {e}")))?;
        Ok(ImageArtifact {
            bytes,
            width: size.width(),
            height: size.height(),
        })
    }
}

impl SceneRenderer for PngRenderer {
    fn render(&self, scene: &SceneDescription) -> Result<ImageArtifact> {
        let svg = scene_to_svg(scene, &self.figure);
        self.rasterize(&svg)
    }
}
