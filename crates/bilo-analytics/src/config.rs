//! Analytics config document.

use serde::Deserialize;

use bilo_core::error::{BiloError, Result};
use bilo_http::config::{check_version, ServerSection, Validate};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyticsConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub analytics: AnalyticsSection,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            analytics: AnalyticsSection::default(),
        }
    }
}

impl Validate for AnalyticsConfig {
    fn validate(&self) -> Result<()> {
        check_version(self.version)?;
        self.server.validate()?;
        self.analytics.validate()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyticsSection {
    /// `hours` used by aggregation when the query omits it.
    #[serde(default = "default_window_hours")]
    pub default_window_hours: u32,

    /// `limit` used by event listing when the query omits it.
    #[serde(default = "default_event_limit")]
    pub default_event_limit: usize,
}

impl Default for AnalyticsSection {
    fn default() -> Self {
        Self {
            default_window_hours: default_window_hours(),
            default_event_limit: default_event_limit(),
        }
    }
}

impl AnalyticsSection {
    pub fn validate(&self) -> Result<()> {
        if self.default_window_hours == 0 {
            return Err(BiloError::BadConfig(
                "analytics.default_window_hours must be greater than 0".into(),
            ));
        }
        if self.default_event_limit == 0 {
            return Err(BiloError::BadConfig(
                "analytics.default_event_limit must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

fn default_window_hours() -> u32 {
    24
}
fn default_event_limit() -> usize {
    100
}
