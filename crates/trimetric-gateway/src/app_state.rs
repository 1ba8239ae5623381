//! Shared application state for the trimetric gateway.
//!
//! Everything here is read-only after startup apart from the atomic
//! metrics registry, so handlers clone the state freely.

use std::sync::Arc;

use trimetric_core::render::{PngRenderer, SceneRenderer};

use crate::config::GatewayConfig;
use crate::obs::metrics::GatewayMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    renderer: Arc<dyn SceneRenderer>,
    metrics: Arc<GatewayMetrics>,
}

struct AppStateInner {
    cfg: GatewayConfig,
}

impl AppState {
    /// Build state with the PNG renderer described by `cfg.render`.
    pub fn new(cfg: GatewayConfig) -> Self {
        let figure = cfg.render.figure();
        let renderer = if cfg.render.system_fonts {
            PngRenderer::with_system_fonts(figure)
        } else {
            PngRenderer::new(figure)
        };
        Self::with_renderer(cfg, Arc::new(renderer))
    }

    /// Build state around an arbitrary rendering backend.
    pub fn with_renderer(cfg: GatewayConfig, renderer: Arc<dyn SceneRenderer>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg }),
            renderer,
            metrics: Arc::new(GatewayMetrics::default()),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn renderer(&self) -> Arc<dyn SceneRenderer> {
        Arc::clone(&self.renderer)
    }

    pub fn metrics(&self) -> &GatewayMetrics {
        &self.metrics
    }
}
