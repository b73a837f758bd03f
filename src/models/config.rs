//! Application configuration structures.

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Environment variable holding the Bing URL Submission API key.
pub const BING_API_KEY_VAR: &str = "BING_API_KEY";

/// Environment variable holding the IndexNow API key.
pub const INDEXNOW_API_KEY_VAR: &str = "INDEXNOW_API_KEY";

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP and submission behavior settings
    #[serde(default)]
    pub submitter: SubmitterConfig,

    /// Target API endpoints
    #[serde(default)]
    pub endpoints: EndpointConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        if !path.as_ref().exists() {
            return Self::default();
        }
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.submitter.user_agent.trim().is_empty() {
            return Err(AppError::validation("submitter.user_agent is empty"));
        }
        if self.submitter.timeout_secs == 0 {
            return Err(AppError::validation("submitter.timeout_secs must be > 0"));
        }
        if self.submitter.bing_batch_limit == 0 {
            return Err(AppError::validation(
                "submitter.bing_batch_limit must be > 0",
            ));
        }
        url::Url::parse(&self.endpoints.bing)
            .map_err(|e| AppError::validation(format!("endpoints.bing is not a URL: {e}")))?;
        url::Url::parse(&self.endpoints.indexnow)
            .map_err(|e| AppError::validation(format!("endpoints.indexnow is not a URL: {e}")))?;
        Ok(())
    }
}

/// HTTP client and submission behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitterConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Maximum URLs per batched Bing submission
    #[serde(default = "defaults::bing_batch_limit")]
    pub bing_batch_limit: usize,
}

impl Default for SubmitterConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            bing_batch_limit: defaults::bing_batch_limit(),
        }
    }
}

/// Submission API endpoint URLs.
///
/// Overridable so tests can point the clients at a local mock server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Bing URL Submission endpoint
    #[serde(default = "defaults::bing_endpoint")]
    pub bing: String,

    /// IndexNow endpoint
    #[serde(default = "defaults::indexnow_endpoint")]
    pub indexnow: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            bing: defaults::bing_endpoint(),
            indexnow: defaults::indexnow_endpoint(),
        }
    }
}

/// API keys for the submission targets, read from the environment once at
/// startup.
///
/// A missing key disables that target; both missing is a fatal setup error.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub bing_api_key: Option<String>,
    pub indexnow_api_key: Option<String>,
}

impl Credentials {
    /// Assemble credentials from `BING_API_KEY` and `INDEXNOW_API_KEY`.
    pub fn from_env() -> Self {
        Self {
            bing_api_key: read_key(BING_API_KEY_VAR),
            indexnow_api_key: read_key(INDEXNOW_API_KEY_VAR),
        }
    }

    /// Ensure at least one API key is available.
    pub fn validate(&self) -> Result<()> {
        if self.bing_api_key.is_none() && self.indexnow_api_key.is_none() {
            return Err(AppError::config(format!(
                "No API keys found. Set {BING_API_KEY_VAR} and/or {INDEXNOW_API_KEY_VAR}."
            )));
        }
        Ok(())
    }
}

/// Read an environment variable, treating empty values as unset.
fn read_key(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

mod defaults {
    // Submitter defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; submitter/1.0)".into()
    }
    pub fn timeout() -> u64 {
        20
    }
    pub fn bing_batch_limit() -> usize {
        10
    }

    // Endpoint defaults
    pub fn bing_endpoint() -> String {
        "https://ssl.bing.com/webmaster/api.svc/json/SubmitUrlbatch".into()
    }
    pub fn indexnow_endpoint() -> String {
        "https://api.indexnow.org/IndexNow".into()
    }
}
