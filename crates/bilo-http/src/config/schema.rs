use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;
use bilo_core::error::{BiloError, Result};

/// Implemented by every top-level config document.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn check_version(version: u32) -> Result<()> {
    if version != 1 {
        return Err(BiloError::BadConfig(format!(
            "unsupported config version {version} (expected 1)"
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,

    /// Falls back to the service's own default port.
    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default = "default_cors")]
    pub cors: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: None,
            cors: default_cors(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.host
            .parse::<IpAddr>()
            .map_err(|e| BiloError::BadConfig(format!("server.host must be an IP address: {e}")))?;
        if self.port == Some(0) {
            return Err(BiloError::BadConfig("server.port must not be 0".into()));
        }
        Ok(())
    }

    /// Port precedence: `env_port` > `server.port` > `default_port`.
    pub fn resolve_port(&self, env_port: Option<&str>, default_port: u16) -> Result<u16> {
        match env_port.map(str::trim).filter(|p| !p.is_empty()) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| BiloError::BadConfig(format!("PORT must be a valid port number ({raw}): {e}"))),
            None => Ok(self.port.unwrap_or(default_port)),
        }
    }

    /// Listen address, honoring the `PORT` environment override.
    pub fn listen_addr(&self, default_port: u16) -> Result<SocketAddr> {
        let env_port = std::env::var(super::PORT_ENV).ok();
        let port = self.resolve_port(env_port.as_deref(), default_port)?;
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| BiloError::BadConfig(format!("server.host must be an IP address: {e}")))?;
        Ok(SocketAddr::new(ip, port))
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_cors() -> bool {
    true
}
