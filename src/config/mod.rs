//! Configuration loading and management

use crate::core::error::FacturierResult;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the dashboard data layer
///
/// Everything defaults: an empty YAML document is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Artificial delay before every fetch, in milliseconds.
    ///
    /// Demo scaffolding only. 0 disables the delay entirely, which is the
    /// default.
    pub fetch_delay_ms: u64,

    /// Path whose cached renders are invalidated after invoice mutations,
    /// and the redirect target after create/update
    pub invoices_path: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            fetch_delay_ms: 0,
            invoices_path: "/dashboard/invoices".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> FacturierResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> FacturierResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// The configured fetch delay, `None` when disabled
    pub fn fetch_delay(&self) -> Option<Duration> {
        (self.fetch_delay_ms > 0).then(|| Duration::from_millis(self.fetch_delay_ms))
    }
}
