//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use trimetric_core::error::{ChartError, Result};

pub use schema::{GatewayConfig, RenderSection, ServerSection};

/// Config file read when no path is given on the command line.
pub const DEFAULT_PATH: &str = "trimetric.yaml";

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| ChartError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| ChartError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `path` if given; otherwise the default file, falling back to
/// built-in defaults when it does not exist.
pub fn load(path: Option<&str>) -> Result<GatewayConfig> {
    if let Some(p) = path {
        return load_from_file(p);
    }
    match fs::read_to_string(DEFAULT_PATH) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path = DEFAULT_PATH, "config file not found, using defaults");
            Ok(GatewayConfig::default())
        }
        Err(e) => Err(ChartError::Internal(format!("read config failed: {e}"))),
    }
}
