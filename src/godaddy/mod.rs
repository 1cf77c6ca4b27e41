// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! GoDaddy DNS provider.
//!
//! This module reconciles declared zone records against GoDaddy. It handles:
//!
//! - Reading a zone's records and nameservers from the GoDaddy API
//! - Normalizing records (600 second TTL floor, joined TXT data, relative names)
//! - Filtering records GoDaddy will not let us manage (apex NS)
//! - Turning a diff into ordered, independently executable corrections
//!
//! # Architecture
//!
//! ```text
//! desired records -> split long TXT -> filter apex NS -> Differ -> corrections
//!                                                            ^
//!                          existing records (get_zone_records)
//! ```
//!
//! Nothing is applied until the caller executes a [`Correction`]. Each one is
//! self-contained and re-reads the zone when it needs to find a record.
//!
//! # Example
//!
//! ```rust,no_run
//! use godaddy_dns::config::ProviderConfig;
//! use godaddy_dns::godaddy::GoDaddyProvider;
//! use godaddy_dns::models::DomainConfig;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let provider = GoDaddyProvider::new(&ProviderConfig::from_env()?)?;
//! let existing = provider.get_zone_records("example.com").await?;
//! let desired = DomainConfig { name: "example.com".to_string(), records: vec![] };
//!
//! for correction in provider.get_zone_records_corrections(&desired, &existing)? {
//!     println!("{}", correction.msg);
//!     correction.execute().await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod convert;
pub mod corrections;
pub mod filter;
pub mod matcher;
pub mod types;

#[cfg(test)]
pub(crate) mod fake;

pub use client::{GoDaddyClient, RecordsApi};
pub use corrections::{Correction, Step};
pub use types::{ProviderRecord, ProviderRecordType};

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::ProviderConfig;
use crate::diff::{ByRecordDiffer, Differ};
use crate::errors::DnsError;
use crate::models::{DomainConfig, Nameserver, Record};
use crate::txtutil::split_single_long_txt;

/// Optional provider features.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    AutoDnssec,
    GetZones,
    Alias,
    Caa,
    Ds,
    DsForChildren,
    Loc,
    Naptr,
    Ptr,
    Soa,
    Srv,
    Sshfp,
    Tlsa,
    CreateDomains,
    DualHost,
    OfficiallySupported,
}

/// Capability notes for GoDaddy. Everything listed is unsupported.
const UNSUPPORTED: &[Capability] = &[
    Capability::AutoDnssec,
    Capability::GetZones,
    Capability::Alias,
    Capability::Caa,
    Capability::Ds,
    Capability::DsForChildren,
    Capability::Loc,
    Capability::Naptr,
    Capability::Ptr,
    Capability::Soa,
    Capability::Srv,
    Capability::Sshfp,
    Capability::Tlsa,
    Capability::CreateDomains,
    Capability::DualHost,
    Capability::OfficiallySupported,
];

/// DNS provider backed by the GoDaddy API.
#[derive(Clone)]
pub struct GoDaddyProvider {
    api: Arc<dyn RecordsApi>,
    differ: Arc<dyn Differ>,
}

impl std::fmt::Debug for GoDaddyProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoDaddyProvider").finish_non_exhaustive()
    }
}

impl GoDaddyProvider {
    /// Create a provider talking to the configured GoDaddy endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::Config`] if the configuration is unusable.
    pub fn new(config: &ProviderConfig) -> Result<Self, DnsError> {
        let client = GoDaddyClient::new(config)?;
        debug!(api_url = %config.base_url(), "GoDaddy provider created");
        Ok(Self::with_api(Arc::new(client)))
    }

    /// Create a provider over any [`RecordsApi`], using the by-record differ.
    #[must_use]
    pub fn with_api(api: Arc<dyn RecordsApi>) -> Self {
        Self {
            api,
            differ: Arc::new(ByRecordDiffer),
        }
    }

    /// Replace the diff engine.
    #[must_use]
    pub fn with_differ(mut self, differ: Arc<dyn Differ>) -> Self {
        self.differ = differ;
        self
    }

    /// Capabilities GoDaddy lacks.
    #[must_use]
    pub fn unsupported_capabilities() -> &'static [Capability] {
        UNSUPPORTED
    }

    /// Whether GoDaddy supports `capability`.
    #[must_use]
    pub fn supports(capability: Capability) -> bool {
        !UNSUPPORTED.contains(&capability)
    }

    /// Corrections that turn `existing` into `desired`, in execution order.
    ///
    /// Long TXT values are split and apex NS records removed from the desired
    /// set before diffing.
    ///
    /// # Errors
    ///
    /// Returns an error if the diff engine rejects the input.
    pub fn get_zone_records_corrections(
        &self,
        desired: &DomainConfig,
        existing: &[Record],
    ) -> Result<Vec<Correction>, DnsError> {
        let mut records = desired.records.clone();
        split_single_long_txt(&mut records);

        let filtered = DomainConfig {
            name: desired.name.clone(),
            records: filter::filter_records(&records, &desired.name),
        };

        let instructions = self.differ.diff(existing, &filtered)?;
        let corrections = corrections::build_corrections(&self.api, &desired.name, &instructions);
        info!(
            zone = %desired.name,
            corrections = corrections.len(),
            "Computed zone corrections"
        );
        Ok(corrections)
    }

    /// Records currently in `zone`, in canonical form.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be fetched.
    pub async fn get_zone_records(&self, zone: &str) -> Result<Vec<Record>, DnsError> {
        let listed = self
            .api
            .list_records(zone)
            .await
            .map_err(|e| {
                DnsError::from(e).context(format!("unable to fetch all records for domain '{zone}'"))
            })?;
        Ok(convert::to_canonical_records(&listed, zone))
    }

    /// Authoritative nameservers GoDaddy reports for `zone`.
    ///
    /// # Errors
    ///
    /// Returns an error if the NS records cannot be fetched.
    pub async fn get_nameservers(&self, zone: &str) -> Result<Vec<Nameserver>, DnsError> {
        let listed = self
            .api
            .list_by_type(zone, ProviderRecordType::Ns)
            .await
            .map_err(|e| {
                DnsError::from(e).context(format!("couldn't get nameservers for domain '{zone}'"))
            })?;
        Ok(listed.iter().map(|r| Nameserver::new(&r.data)).collect())
    }
}
