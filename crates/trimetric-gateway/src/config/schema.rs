use std::net::SocketAddr;

use serde::Deserialize;
use trimetric_core::error::{ChartError, Result};
use trimetric_core::render::Figure;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub render: RenderSection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            render: RenderSection::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ChartError::BadRequest(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.server.validate()?;
        self.render.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !(64..=1_048_576).contains(&self.max_body_bytes) {
            return Err(ChartError::BadRequest(
                "server.max_body_bytes must be between 64 and 1048576".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            ChartError::BadRequest(format!("server.listen must be a valid socket address: {e}"))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8000".into()
}
fn default_max_body_bytes() -> usize {
    4096
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderSection {
    #[serde(default = "default_width_in")]
    pub width_in: f64,

    #[serde(default = "default_height_in")]
    pub height_in: f64,

    #[serde(default = "default_dpi")]
    pub dpi: u32,

    /// Load host fonts for labels. Without fonts, text is omitted.
    #[serde(default = "default_system_fonts")]
    pub system_fonts: bool,
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            width_in: default_width_in(),
            height_in: default_height_in(),
            dpi: default_dpi(),
            system_fonts: default_system_fonts(),
        }
    }
}

impl RenderSection {
    pub fn validate(&self) -> Result<()> {
        if !(1.0..=40.0).contains(&self.width_in) || !(1.0..=40.0).contains(&self.height_in) {
            return Err(ChartError::BadRequest(
                "render.width_in and render.height_in must be between 1 and 40".into(),
            ));
        }
        if !(36..=600).contains(&self.dpi) {
            return Err(ChartError::BadRequest(
                "render.dpi must be between 36 and 600".into(),
            ));
        }
        Ok(())
    }

    pub fn figure(&self) -> Figure {
        Figure {
            width_in: self.width_in,
            height_in: self.height_in,
            dpi: self.dpi,
            ..Figure::default()
        }
    }
}

fn default_width_in() -> f64 {
    12.0
}
fn default_height_in() -> f64 {
    8.0
}
fn default_dpi() -> u32 {
    300
}
fn default_system_fonts() -> bool {
    true
}
