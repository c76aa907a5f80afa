//! Service config loader (strict parsing + environment overrides).

pub mod schema;

use std::fs;
use std::path::Path;

use svcprobe_core::error::{Result, SvcProbeError};

pub use schema::{LabelSection, ServerSection, ServiceConfig};

/// Used when `SVCPROBE_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "svcprobe.yaml";

pub fn load_from_file(path: &str) -> Result<ServiceConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| SvcProbeError::BadConfig(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServiceConfig> {
    let cfg: ServiceConfig = serde_yaml::from_str(s)
        .map_err(|e| SvcProbeError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolve the startup config: explicit file, else the default file if present,
/// else built-in defaults. Environment overrides are applied last, then the
/// result is validated again.
pub fn load_from_env() -> Result<ServiceConfig> {
    let mut cfg = match std::env::var("SVCPROBE_CONFIG") {
        Ok(path) => load_from_file(&path)?,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => load_from_file(DEFAULT_CONFIG_PATH)?,
        Err(_) => ServiceConfig::default(),
    };
    cfg.apply_env(|k| std::env::var(k).ok());
    cfg.validate()?;
    Ok(cfg)
}
