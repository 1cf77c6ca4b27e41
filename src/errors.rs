// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for the GoDaddy DNS provider.
//!
//! This module provides specialized error types for:
//! - Provider configuration (credentials, endpoint)
//! - GoDaddy HTTP API operations (list, add, delete)
//! - Records the provider cannot represent or instructions that are malformed
//!
//! None of these errors are retried inside this crate. [`DnsError::is_transient`]
//! tells a caller whether retrying the failed correction could help.

use thiserror::Error;

/// Errors raised while building a provider from its configuration.
///
/// These are fatal: a provider is never constructed with missing credentials.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The `api_key` setting is absent or empty
    #[error("missing GODADDY api_key")]
    MissingApiKey,

    /// The `api_secret` setting is absent or empty
    #[error("missing GODADDY api_secret")]
    MissingApiSecret,

    /// The `api_url` setting is not a usable http(s) URL
    #[error("invalid GODADDY api_url '{url}': {reason}")]
    InvalidApiUrl {
        /// The URL as configured
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// No settings for the requested provider in a credentials file
    #[error("no credentials for provider '{provider}' in {path}")]
    MissingProvider {
        /// Provider name that was looked up
        provider: String,
        /// Credentials file that was read
        path: String,
    },

    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {reason}")]
    HttpClient {
        /// Underlying builder error
        reason: String,
    },
}

/// Errors returned by the GoDaddy HTTP API.
///
/// Every variant carries the zone and the operation that failed so a
/// correction failure can be reported without further context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The API answered with a non-success status
    #[error("{operation} for zone '{zone}' failed with HTTP {status}: {body}")]
    HttpStatus {
        /// Operation being performed (e.g. "list records")
        operation: String,
        /// Zone the operation targeted
        zone: String,
        /// HTTP status code
        status: u16,
        /// Response body, or a placeholder when it could not be read
        body: String,
    },

    /// The request never produced a response (DNS, connect, TLS, timeout)
    #[error("{operation} for zone '{zone}' could not reach the API: {reason}")]
    Transport {
        /// Operation being performed
        operation: String,
        /// Zone the operation targeted
        zone: String,
        /// Underlying client error
        reason: String,
    },

    /// The response body was not the JSON we expected
    #[error("{operation} for zone '{zone}' returned an unreadable body: {reason}")]
    Decode {
        /// Operation being performed
        operation: String,
        /// Zone the operation targeted
        zone: String,
        /// Parse error
        reason: String,
    },
}

impl ProviderError {
    /// Zone the failed operation targeted.
    #[must_use]
    pub fn zone(&self) -> &str {
        match self {
            Self::HttpStatus { zone, .. }
            | Self::Transport { zone, .. }
            | Self::Decode { zone, .. } => zone,
        }
    }
}

/// Errors about individual records or diff instructions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The record type has no GoDaddy equivalent
    #[error("record '{name}' has type '{record_type}' which GoDaddy does not support")]
    UnsupportedType {
        /// Record name
        name: String,
        /// Type as written
        record_type: String,
    },

    /// An instruction is missing the record its kind requires
    #[error("{kind} instruction carries no {side} record")]
    MissingRecord {
        /// Instruction kind (CREATE, CHANGE, DELETE)
        kind: String,
        /// Which side is absent ("old" or "new")
        side: &'static str,
    },

    /// The record's target does not fit its type
    #[error("invalid target for record '{name}': {reason}")]
    InvalidTarget {
        /// Record name
        name: String,
        /// What is wrong
        reason: String,
    },
}

/// Composite error type for all provider operations.
///
/// This is the error returned by [`crate::godaddy::GoDaddyProvider`] and by
/// executing a [`crate::godaddy::corrections::Correction`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DnsError {
    /// Provider configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// GoDaddy API error
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Record or instruction error
    #[error(transparent)]
    Record(#[from] RecordError),

    /// A failure wrapped with the operation that surfaced it
    #[error("{context}: {source}")]
    Context {
        /// What was being attempted
        context: String,
        /// The underlying error
        source: Box<DnsError>,
    },
}

impl DnsError {
    /// Wrap this error with a description of what was being attempted.
    #[must_use]
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Returns true if retrying the failed operation could succeed.
    ///
    /// Transport failures, rate limiting (429) and server errors (5xx) are transient.
    /// Configuration, client errors and record errors are permanent.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Provider(ProviderError::Transport { .. }) => true,
            Self::Provider(ProviderError::HttpStatus { status, .. }) => {
                *status == 429 || (500..=599).contains(status)
            }
            Self::Context { source, .. } => source.is_transient(),
            Self::Config(_) | Self::Record(_) | Self::Provider(ProviderError::Decode { .. }) => {
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod errors_tests;
