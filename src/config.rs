//! ClickUp plugin configuration
//!
//! Configuration can be loaded from environment variables or constructed programmatically.

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::{ClickUpError, Result};

/// Default ClickUp REST API root.
pub const DEFAULT_BASE_URL: &str = "https://api.clickup.com/api/v2";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// ClickUp plugin configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickUpConfig {
    /// Personal API token (required)
    pub api_token: String,

    /// API root, overridable for proxies and tests
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Workspace used when an option lookup has no workspace selected
    pub workspace_id: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ClickUpConfig {
    /// Create a new configuration with the required API token.
    ///
    /// # Example
    ///
    /// ```
    /// use elizaos_plugin_clickup::ClickUpConfig;
    ///
    /// let config = ClickUpConfig::new("pk_your_token_here");
    /// assert_eq!(config.timeout_secs, 30);
    /// ```
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            workspace_id: None,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// # Required Variables
    ///
    /// - `CLICKUP_API_TOKEN`: Personal API token
    ///
    /// # Optional Variables
    ///
    /// - `CLICKUP_BASE_URL`: API root (defaults to `https://api.clickup.com/api/v2`)
    /// - `CLICKUP_TIMEOUT_SECS`: Request timeout (defaults to 30)
    /// - `CLICKUP_WORKSPACE_ID`: Default workspace for option lookups
    ///
    /// # Errors
    ///
    /// Returns `ClickUpError::MissingSetting` if the token is missing and
    /// `ClickUpError::Config` if a value cannot be parsed.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_token = std::env::var("CLICKUP_API_TOKEN")
            .map_err(|_| ClickUpError::MissingSetting("CLICKUP_API_TOKEN".to_string()))?;

        let timeout_secs = match std::env::var("CLICKUP_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|_| {
                ClickUpError::Config(format!("CLICKUP_TIMEOUT_SECS is not a number: {}", raw))
            })?,
            Err(_) => default_timeout_secs(),
        };

        let config = Self {
            api_token,
            base_url: std::env::var("CLICKUP_BASE_URL").unwrap_or_else(|_| default_base_url()),
            timeout_secs,
            workspace_id: std::env::var("CLICKUP_WORKSPACE_ID").ok(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Set the API root (builder pattern)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout (builder pattern)
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Set the default workspace (builder pattern)
    pub fn with_workspace_id(mut self, workspace_id: impl Into<String>) -> Self {
        self.workspace_id = Some(workspace_id.into());
        self
    }

    /// Build an endpoint URL from path segments appended to `base_url`.
    ///
    /// Each segment is percent-encoded on its own, so an id containing `/`,
    /// `?` or `#` stays a single segment.
    ///
    /// # Errors
    ///
    /// Returns `ClickUpError::Config` if `base_url` does not parse, and
    /// `ClickUpError::InvalidInput` for a `.` or `..` segment.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        if let Some(bad) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(ClickUpError::invalid_input(format!(
                "Invalid path segment: {}",
                bad
            )));
        }

        let mut url = self.parse_base_url()?;
        url.path_segments_mut()
            .map_err(|_| {
                ClickUpError::Config(format!("Base URL cannot take a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn parse_base_url(&self) -> Result<Url> {
        Url::parse(&self.base_url)
            .map_err(|e| ClickUpError::Config(format!("Invalid base URL {}: {}", self.base_url, e)))
    }

    /// Validate configuration.
    ///
    /// # Errors
    ///
    /// Returns `ClickUpError::Config` if configuration is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.api_token.trim().is_empty() {
            return Err(ClickUpError::Config(
                "API token cannot be empty".to_string(),
            ));
        }

        let base_url = self.parse_base_url()?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClickUpError::Config(format!(
                "Base URL must be http(s): {}",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(ClickUpError::Config(
                "Timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
