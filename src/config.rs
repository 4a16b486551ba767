use std::env;
use std::time::Duration;

use crate::error::{Result, TrackerError};
use crate::state::DailyTargets;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for talking to the food store.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the REST store.
    pub api_url: String,

    /// Per-request timeout.
    pub timeout: Duration,

    /// Targets the meal planner measures progress against.
    pub daily_targets: DailyTargets,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            daily_targets: DailyTargets::default(),
        }
    }
}

impl ClientConfig {
    /// Load from `NUTRITION_API_URL` and `NUTRITION_API_TIMEOUT_SECS`, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("NUTRITION_API_URL") {
            config.api_url = url;
        }

        if let Some(secs) = lookup("NUTRITION_API_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                TrackerError::Config("NUTRITION_API_TIMEOUT_SECS must be a whole number".to_string())
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(mut self, api_url: Option<String>, timeout_secs: Option<u64>) -> Self {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        if let Some(secs) = timeout_secs {
            self.timeout = Duration::from_secs(secs);
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        let url = self.api_url.trim();
        if url.is_empty() {
            return Err(TrackerError::Config("API URL cannot be empty".to_string()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(TrackerError::Config(format!(
                "API URL must start with http:// or https://: {}",
                url
            )));
        }
        if self.timeout.is_zero() {
            return Err(TrackerError::Config("Timeout must be greater than 0".to_string()));
        }
        self.daily_targets.validate()
    }
}
