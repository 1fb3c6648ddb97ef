use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ReportError, Result};

pub const DEFAULT_API_URL: &str = "https://seeclickfix.com/api/v2/issues";

/// The API documents a limit of 20 requests per minute, so the delay
/// between pages never goes below this.
const MIN_PAGE_DELAY_SECS: u64 = 3;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Deserialize, Serialize, Default, Debug)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_delay_secs: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| ReportError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        Self::parse(&contents).map_err(|e| ReportError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    pub(crate) fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "seeclickfix-report")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(ReportError::NoConfigDir)
    }

    /// Get the issues endpoint with env var taking precedence over config file
    pub fn api_url(&self) -> Result<Url> {
        let raw = std::env::var("SCF_API_URL")
            .ok()
            .or_else(|| self.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Url::parse(&raw).map_err(|_| ReportError::InvalidUrl(raw))
    }

    /// Get place, preferring explicit argument over default
    pub fn resolve_place(&self, explicit: Option<&str>) -> String {
        explicit
            .map(String::from)
            .or_else(|| self.default_place.clone())
            .unwrap_or_default()
    }

    pub fn page_delay(&self) -> Duration {
        let secs = self
            .page_delay_secs
            .map_or(MIN_PAGE_DELAY_SECS, |s| s.max(MIN_PAGE_DELAY_SECS));
        Duration::from_secs(secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}
