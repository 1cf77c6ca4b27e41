// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Desired-state file format for the command-line tool.
//!
//! ```yaml
//! - name: www
//!   type: A
//!   value: 192.0.2.1
//!   ttl: 3600
//! - name: "@"
//!   type: MX
//!   priority: 10
//!   value: mail.example.com.
//! - name: "@"
//!   type: TXT
//!   txt: ["v=spf1 ", "include:_spf.example.com -all"]
//! ```

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::constants::MIN_TTL_SECS;
use crate::models::{DomainConfig, Record, RecordTarget, RecordType};

/// One record as written in a desired-state file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub ttl: Option<u32>,
    pub value: Option<String>,
    pub txt: Option<Vec<String>>,
    pub priority: Option<u16>,
    pub weight: Option<u16>,
    pub port: Option<u16>,
}

impl RecordSpec {
    /// Convert to a canonical record in `zone`.
    ///
    /// # Errors
    ///
    /// Returns an error for unsupported types or missing type-specific fields.
    pub fn to_record(&self, zone: &str) -> Result<Record> {
        let record_type: RecordType = self
            .record_type
            .parse()
            .with_context(|| format!("record '{}'", self.name))?;
        let ttl = self.ttl.unwrap_or(MIN_TTL_SECS);

        let value = || {
            self.value
                .clone()
                .with_context(|| format!("{record_type} record '{}' needs a value", self.name))
        };

        let target = match record_type {
            RecordType::Txt => match (&self.txt, &self.value) {
                (Some(parts), _) if !parts.is_empty() => RecordTarget::Txt {
                    parts: parts.clone(),
                },
                (_, Some(single)) => RecordTarget::Txt {
                    parts: vec![single.clone()],
                },
                _ => bail!("TXT record '{}' needs txt or value", self.name),
            },
            RecordType::Mx => RecordTarget::Mx {
                priority: self
                    .priority
                    .with_context(|| format!("MX record '{}' needs a priority", self.name))?,
                target: value()?,
            },
            RecordType::Srv => RecordTarget::Srv {
                priority: self.priority.unwrap_or_default(),
                weight: self.weight.unwrap_or_default(),
                port: self
                    .port
                    .with_context(|| format!("SRV record '{}' needs a port", self.name))?,
                target: value()?,
            },
            RecordType::A
            | RecordType::Aaaa
            | RecordType::Cname
            | RecordType::Ns
            | RecordType::Soa => RecordTarget::Value { value: value()? },
        };

        Ok(Record::new(&self.name, zone, record_type, ttl, target))
    }
}

/// Parse desired records for `zone` from YAML text.
///
/// # Errors
///
/// Returns an error if the YAML is malformed or any record is invalid.
pub fn parse_desired(zone: &str, yaml: &str) -> Result<DomainConfig> {
    let specs: Vec<RecordSpec> =
        serde_yaml::from_str(yaml).context("Failed to parse desired records")?;
    let records = specs
        .iter()
        .map(|entry| entry.to_record(zone))
        .collect::<Result<Vec<_>>>()?;
    Ok(DomainConfig {
        name: zone.trim_end_matches('.').to_string(),
        records,
    })
}

/// Load desired records for `zone` from a YAML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_desired(zone: &str, path: &Path) -> Result<DomainConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read desired records file {}", path.display()))?;
    parse_desired(zone, &raw)
}

#[cfg(test)]
#[path = "zonefile_tests.rs"]
mod zonefile_tests;
