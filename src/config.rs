// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Provider configuration.
//!
//! GoDaddy needs an API key and secret, and optionally an alternate endpoint
//! (for example the OTE test environment). Settings come from a credentials
//! map, a JSON credentials file keyed by provider name, or the environment.
//!
//! ```json
//! {
//!   "godaddy": {
//!     "api_key": "...",
//!     "api_secret": "...",
//!     "api_url": "https://api.ote-godaddy.com"
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use url::Url;

use crate::constants::{
    DEFAULT_API_URL, ENV_API_KEY, ENV_API_SECRET, ENV_API_URL, SETTING_API_KEY,
    SETTING_API_SECRET, SETTING_API_URL,
};
use crate::errors::ConfigError;

/// Credentials and endpoint for the GoDaddy API.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ProviderConfig {
    pub api_key: String,
    pub api_secret: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

// Hand-written so the secret never reaches a log line.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl ProviderConfig {
    /// Build a configuration from a provider settings map.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] or [`ConfigError::MissingApiSecret`]
    /// when either credential is absent or empty, and
    /// [`ConfigError::InvalidApiUrl`] when `api_url` is not an http(s) URL.
    pub fn from_settings(settings: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |key: &str| settings.get(key).map(|v| v.trim().to_string());
        Self::build(
            get(SETTING_API_KEY),
            get(SETTING_API_SECRET),
            get(SETTING_API_URL),
        )
    }

    /// Build a configuration from `GODADDY_API_KEY`, `GODADDY_API_SECRET` and
    /// the optional `GODADDY_API_URL`.
    ///
    /// # Errors
    ///
    /// Same as [`ProviderConfig::from_settings`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let get = |key: &str| std::env::var(key).ok().map(|v| v.trim().to_string());
        Self::build(get(ENV_API_KEY), get(ENV_API_SECRET), get(ENV_API_URL))
    }

    /// Read the settings for `provider` out of a JSON credentials file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, has no entry for
    /// `provider`, or the entry fails [`ProviderConfig::from_settings`].
    pub fn from_creds_file(path: &Path, provider: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read credentials file {}", path.display()))?;
        let mut all: HashMap<String, HashMap<String, String>> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse credentials file {}", path.display()))?;
        let settings = all
            .remove(provider)
            .ok_or_else(|| ConfigError::MissingProvider {
                provider: provider.to_string(),
                path: path.display().to_string(),
            })?;
        Ok(Self::from_settings(&settings)?)
    }

    fn build(
        api_key: Option<String>,
        api_secret: Option<String>,
        api_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        let api_secret = api_secret
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingApiSecret)?;
        let api_url = api_url
            .filter(|u| !u.is_empty())
            .unwrap_or_else(default_api_url);

        let config = Self {
            api_key,
            api_secret,
            api_url,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the endpoint is an absolute http(s) URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] otherwise.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let parsed = Url::parse(&self.api_url).map_err(|e| ConfigError::InvalidApiUrl {
            url: self.api_url.clone(),
            reason: e.to_string(),
        })?;
        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ConfigError::InvalidApiUrl {
                url: self.api_url.clone(),
                reason: format!("unsupported scheme '{other}'"),
            }),
        }
    }

    /// Endpoint without trailing slash, ready for path concatenation.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    /// Value of the `Authorization` header GoDaddy expects.
    #[must_use]
    pub fn authorization(&self) -> String {
        format!("sso-key {}:{}", self.api_key, self.api_secret)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
