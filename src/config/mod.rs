#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::{KnotError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path_prefix, validate_positive_number, validate_url,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_API_PREFIX: &str = "/api/v1";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Environment variables consulted by [`TransportConfig::apply_env_overrides`].
pub const ENV_BASE_URL: &str = "KNOT_BASE_URL";
pub const ENV_API_PREFIX: &str = "KNOT_API_PREFIX";
pub const ENV_TIMEOUT_SECONDS: &str = "KNOT_TIMEOUT_SECONDS";

/// Fixed settings shared by every outbound call.
///
/// Built once (defaults, then TOML, then environment, then CLI flags) and
/// handed to the transport by value. Nothing mutates it after that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_headers")]
    pub headers: BTreeMap<String, String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_prefix() -> String {
    DEFAULT_API_PREFIX.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_headers() -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();
    headers.insert("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string());
    headers
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_prefix: default_api_prefix(),
            timeout_seconds: default_timeout_seconds(),
            headers: default_headers(),
        }
    }
}

impl TransportConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = prefix.into();
        self
    }

    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Configured headers, with `Content-Type: application/json` added when
    /// the file or caller left it out.
    pub fn effective_headers(&self) -> BTreeMap<String, String> {
        let mut headers = self.headers.clone();
        let has_content_type = headers
            .keys()
            .any(|name| name.eq_ignore_ascii_case("content-type"));
        if !has_content_type {
            headers.insert("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string());
        }
        headers
    }

    /// Joins base URL, API prefix and a request path.
    pub fn resolve_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let prefix = self.api_prefix.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}{}", base, prefix, path)
        } else {
            format!("{}{}/{}", base, prefix, path)
        }
    }

    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Same as [`apply_env_overrides`](Self::apply_env_overrides) but reads
    /// from an arbitrary lookup, so tests don't touch the process environment.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            tracing::debug!("🔧 {} overrides base_url", ENV_BASE_URL);
            self.base_url = base_url;
        }

        if let Some(prefix) = lookup(ENV_API_PREFIX) {
            tracing::debug!("🔧 {} overrides api_prefix", ENV_API_PREFIX);
            self.api_prefix = prefix;
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECONDS) {
            self.timeout_seconds =
                raw.trim()
                    .parse()
                    .map_err(|e| KnotError::InvalidConfigValueError {
                        field: ENV_TIMEOUT_SECONDS.to_string(),
                        value: raw.clone(),
                        reason: format!("Expected whole seconds: {}", e),
                    })?;
        }

        Ok(())
    }
}

impl Validate for TransportConfig {
    fn validate(&self) -> Result<()> {
        validate_url("transport.base_url", &self.base_url)?;
        validate_path_prefix("transport.api_prefix", &self.api_prefix)?;
        validate_positive_number("transport.timeout_seconds", self.timeout_seconds, 1)?;

        for (name, value) in &self.headers {
            validate_non_empty_string("transport.headers", name)?;
            validate_non_empty_string(&format!("transport.headers.{}", name), value)?;
        }

        Ok(())
    }
}
