//! Portal client configuration models.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortalConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub moderation: ModerationConfig,
}

impl PortalConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.api.validate()?;
        self.session.validate()?;
        Ok(())
    }
}

/// Portal API connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout. Requests wait indefinitely when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), timeout_secs: None }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        let url = self.url()?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::config_error(format!(
                "api.base_url must use http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.timeout_secs == Some(0) {
            return Err(AppError::config_error("api.timeout_secs must be greater than 0"));
        }
        Ok(())
    }

    pub fn url(&self) -> Result<Url, AppError> {
        Url::parse(self.base_url.trim()).map_err(|e| {
            AppError::config_error(format!(
                "api.base_url '{}' is not a valid URL: {e}",
                self.base_url
            ))
        })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

/// Where role sessions are persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Session directory; defaults to `<data dir>/mlgms`.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(dir) = &self.dir
            && dir.as_os_str().is_empty()
        {
            return Err(AppError::config_error("session.dir must not be empty"));
        }
        Ok(())
    }

    pub fn resolved_dir(&self) -> Result<PathBuf, AppError> {
        if let Some(dir) = &self.dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|d| d.join("mlgms"))
            .ok_or_else(|| {
                AppError::config_error("Could not determine a data directory; set session.dir")
            })
    }
}

/// Behaviour of admin and employer moderation lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModerationConfig {
    /// Refetch the affected list after every settled moderation call instead
    /// of patching the row in place.
    #[serde(default)]
    pub refetch_on_settle: bool,
}
