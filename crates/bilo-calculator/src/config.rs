//! Calculator config document. Only the server section is tunable.

use serde::Deserialize;

use bilo_core::error::Result;
use bilo_http::config::{check_version, ServerSection, Validate};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculatorConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
        }
    }
}

impl Validate for CalculatorConfig {
    fn validate(&self) -> Result<()> {
        check_version(self.version)?;
        self.server.validate()
    }
}
