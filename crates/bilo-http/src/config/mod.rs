//! Service config loader (strict parsing).
//!
//! Configuration is optional: when `BILO_CONFIG` is unset each service runs
//! on its built-in defaults. The listen port is always subject to the
//! `PORT` environment override.

pub mod schema;

use std::fs;

use serde::de::DeserializeOwned;

use bilo_core::error::{BiloError, Result};

pub use schema::{check_version, ServerSection, Validate};

/// Env var naming the YAML config file.
pub const CONFIG_ENV: &str = "BILO_CONFIG";
/// Env var overriding the listen port.
pub const PORT_ENV: &str = "PORT";

pub fn load_from_file<T>(path: &str) -> Result<T>
where
    T: DeserializeOwned + Validate,
{
    let s = fs::read_to_string(path)
        .map_err(|e| BiloError::BadConfig(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned + Validate,
{
    let cfg: T = serde_yaml::from_str(s)
        .map_err(|e| BiloError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load from `BILO_CONFIG` if set, else validated defaults.
pub fn load<T>() -> Result<T>
where
    T: DeserializeOwned + Validate + Default,
{
    match std::env::var(CONFIG_ENV) {
        Ok(path) if !path.trim().is_empty() => {
            tracing::info!(%path, "loading config");
            load_from_file(&path)
        }
        _ => {
            let cfg = T::default();
            cfg.validate()?;
            Ok(cfg)
        }
    }
}
