// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! GoDaddy domains API client.
//!
//! [`RecordsApi`] is the seam between the reconciliation logic and the
//! network. [`GoDaddyClient`] implements it against the v1 REST API:
//!
//! | Operation | Request |
//! |-----------|---------|
//! | list records | `GET /v1/domains/{zone}/records` |
//! | list by type | `GET /v1/domains/{zone}/records/{type}` |
//! | add records | `PATCH /v1/domains/{zone}/records` |
//! | delete record | `GET`, then `PUT` or `DELETE` on `/v1/domains/{zone}/records/{type}/{name}` |
//!
//! Requests are never retried here.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client as HttpClient, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use super::types::{ProviderRecord, ProviderRecordType};
use crate::config::ProviderConfig;
use crate::constants::API_VERSION_PATH;
use crate::errors::{ConfigError, ProviderError};

/// Record operations the provider needs from GoDaddy.
#[async_trait]
pub trait RecordsApi: Send + Sync {
    /// Every record in the zone.
    async fn list_records(&self, zone: &str) -> Result<Vec<ProviderRecord>, ProviderError>;

    /// Records of one type.
    async fn list_by_type(
        &self,
        zone: &str,
        record_type: ProviderRecordType,
    ) -> Result<Vec<ProviderRecord>, ProviderError>;

    /// Append records to the zone.
    async fn add_records(&self, zone: &str, records: &[ProviderRecord])
        -> Result<(), ProviderError>;

    /// Remove exactly `record`, leaving its siblings of the same name and type.
    async fn delete_record(&self, zone: &str, record: &ProviderRecord)
        -> Result<(), ProviderError>;
}

/// Entry of a (type, name) record set as accepted by `PUT`.
#[derive(Debug, Serialize)]
struct RecordSetEntry<'a> {
    data: &'a str,
    ttl: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    weight: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    service: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    protocol: Option<&'a str>,
}

impl<'a> From<&'a ProviderRecord> for RecordSetEntry<'a> {
    fn from(r: &'a ProviderRecord) -> Self {
        Self {
            data: &r.data,
            ttl: r.ttl,
            priority: r.priority,
            weight: r.weight,
            port: r.port,
            service: r.service.as_deref(),
            protocol: r.protocol.as_deref(),
        }
    }
}

/// HTTP client for the GoDaddy API.
#[derive(Clone)]
pub struct GoDaddyClient {
    http: HttpClient,
    base_url: String,
    authorization: String,
}

impl std::fmt::Debug for GoDaddyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoDaddyClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GoDaddyClient {
    /// Create a client for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is invalid or the HTTP
    /// client cannot be built.
    pub fn new(config: &ProviderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let http = HttpClient::builder()
            .build()
            .map_err(|e| ConfigError::HttpClient {
                reason: e.to_string(),
            })?;
        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            authorization: config.authorization(),
        })
    }

    /// Base URL for a domain's record collection.
    #[must_use]
    pub fn records_url(&self, zone: &str) -> String {
        format!(
            "{}/{API_VERSION_PATH}/domains/{zone}/records",
            self.base_url
        )
    }

    fn record_set_url(&self, zone: &str, record_type: ProviderRecordType, name: &str) -> String {
        format!("{}/{record_type}/{name}", self.records_url(zone))
    }

    /// Send one request and return the response body.
    async fn request<T: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: Option<&T>,
        operation: &str,
        zone: &str,
    ) -> Result<String, ProviderError> {
        info!(method = %method, url = %url, "HTTP API request to GoDaddy");

        let mut request = self
            .http
            .request(method.clone(), url)
            .header(AUTHORIZATION, &self.authorization)
            .header(ACCEPT, "application/json");
        if let Some(body_data) = body {
            request = request.json(body_data);
        }

        let response = request.send().await.map_err(|e| {
            error!(method = %method, url = %url, error = %e, "HTTP API request could not be sent");
            ProviderError::Transport {
                operation: operation.to_string(),
                zone: zone.to_string(),
                reason: e.to_string(),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(
                method = %method,
                url = %url,
                status = %status,
                error = %error_text,
                "HTTP API request failed"
            );
            return Err(ProviderError::HttpStatus {
                operation: operation.to_string(),
                zone: zone.to_string(),
                status: status.as_u16(),
                body: error_text,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::Transport {
                operation: operation.to_string(),
                zone: zone.to_string(),
                reason: format!("failed to read response body: {e}"),
            })?;

        debug!(
            method = %method,
            url = %url,
            status = %status,
            response_len = text.len(),
            "HTTP API request successful"
        );
        Ok(text)
    }

    async fn get_json<R: DeserializeOwned>(
        &self,
        url: &str,
        operation: &str,
        zone: &str,
    ) -> Result<R, ProviderError> {
        let text = self
            .request(Method::GET, url, None::<&()>, operation, zone)
            .await?;
        serde_json::from_str(&text).map_err(|e| ProviderError::Decode {
            operation: operation.to_string(),
            zone: zone.to_string(),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl RecordsApi for GoDaddyClient {
    async fn list_records(&self, zone: &str) -> Result<Vec<ProviderRecord>, ProviderError> {
        let url = self.records_url(zone);
        self.get_json(&url, "list records", zone).await
    }

    async fn list_by_type(
        &self,
        zone: &str,
        record_type: ProviderRecordType,
    ) -> Result<Vec<ProviderRecord>, ProviderError> {
        let url = format!("{}/{record_type}", self.records_url(zone));
        self.get_json(&url, "list records by type", zone).await
    }

    async fn add_records(
        &self,
        zone: &str,
        records: &[ProviderRecord],
    ) -> Result<(), ProviderError> {
        let url = self.records_url(zone);
        self.request(Method::PATCH, &url, Some(records), "add records", zone)
            .await?;
        Ok(())
    }

    async fn delete_record(
        &self,
        zone: &str,
        record: &ProviderRecord,
    ) -> Result<(), ProviderError> {
        let url = self.record_set_url(zone, record.record_type, &record.name);
        let current: Vec<ProviderRecord> = self.get_json(&url, "delete record", zone).await?;

        let remaining: Vec<&ProviderRecord> = current.iter().filter(|r| *r != record).collect();
        if remaining.len() == current.len() {
            warn!(
                zone = %zone,
                name = %record.name,
                record_type = %record.record_type,
                data = %record.data,
                "Record to delete is already gone"
            );
            return Ok(());
        }

        if remaining.is_empty() {
            self.request(Method::DELETE, &url, None::<&()>, "delete record", zone)
                .await?;
        } else {
            let body: Vec<RecordSetEntry<'_>> =
                remaining.into_iter().map(RecordSetEntry::from).collect();
            self.request(Method::PUT, &url, Some(&body), "delete record", zone)
                .await?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
