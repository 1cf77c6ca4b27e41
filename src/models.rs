// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Canonical record model.
//!
//! A [`Record`] is the provider-agnostic form of one DNS entry. Desired
//! declarations and records read back from GoDaddy are both expressed this
//! way before they are compared. Provider quirks (TTL floor, flattened TXT
//! data, relative names) live in [`crate::godaddy::types::ProviderRecord`]
//! and never leak into this type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{APEX_LABEL, TXT_JOIN_SEPARATOR};
use crate::errors::RecordError;

/// DNS record types the canonical model can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    A,
    Aaaa,
    Cname,
    Mx,
    Ns,
    Soa,
    Srv,
    Txt,
}

impl RecordType {
    /// Upper-case mnemonic as used in zone files and by GoDaddy.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Ns => "NS",
            Self::Soa => "SOA",
            Self::Srv => "SRV",
            Self::Txt => "TXT",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" => Ok(Self::A),
            "AAAA" => Ok(Self::Aaaa),
            "CNAME" => Ok(Self::Cname),
            "MX" => Ok(Self::Mx),
            "NS" => Ok(Self::Ns),
            "SOA" => Ok(Self::Soa),
            "SRV" => Ok(Self::Srv),
            "TXT" => Ok(Self::Txt),
            other => Err(RecordError::UnsupportedType {
                name: String::new(),
                record_type: other.to_string(),
            }),
        }
    }
}

/// Type-dependent payload of a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum RecordTarget {
    /// Single value: an address, host name, or SOA data
    Value { value: String },
    /// TXT character-strings, kept separate until compared or sent
    Txt { parts: Vec<String> },
    /// Mail exchanger
    Mx { priority: u16, target: String },
    /// Service locator
    Srv {
        priority: u16,
        weight: u16,
        port: u16,
        target: String,
    },
}

impl RecordTarget {
    /// The single target field: the value, or the host of MX/SRV.
    ///
    /// For TXT this is the first part only; use [`RecordTarget::comparable`]
    /// when the whole text matters.
    #[must_use]
    pub fn target_field(&self) -> &str {
        match self {
            Self::Value { value } => value,
            Self::Txt { parts } => parts.first().map_or("", String::as_str),
            Self::Mx { target, .. } | Self::Srv { target, .. } => target,
        }
    }

    /// TXT parts joined into one string.
    #[must_use]
    pub fn txt_joined(&self) -> Option<String> {
        match self {
            Self::Txt { parts } => Some(parts.join(TXT_JOIN_SEPARATOR)),
            _ => None,
        }
    }

    /// Value used whenever a target is compared or transmitted: the joined
    /// text for TXT, the single target field for everything else.
    #[must_use]
    pub fn comparable(&self) -> String {
        self.txt_joined()
            .unwrap_or_else(|| self.target_field().to_string())
    }

    /// Whether two payloads describe the same record content.
    ///
    /// TXT payloads are equal when their joined text is, however it was split.
    /// Other payloads compare every field, so MX and SRV numbers count.
    #[must_use]
    pub fn same_content(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Txt { .. }, Self::Txt { .. }) => self.txt_joined() == other.txt_joined(),
            _ => self == other,
        }
    }
}

/// Canonical form of one DNS record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Label relative to the zone, `@` for the apex
    pub name: String,
    /// Fully-qualified label without trailing dot
    pub name_fqdn: String,
    /// Record type
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Declared TTL in seconds (no provider floor applied)
    pub ttl: u32,
    /// Type-dependent payload
    pub target: RecordTarget,
}

impl Record {
    /// Build a record from a relative label within `zone`.
    #[must_use]
    pub fn new(
        short_name: &str,
        zone: &str,
        record_type: RecordType,
        ttl: u32,
        target: RecordTarget,
    ) -> Self {
        let (name, name_fqdn) = make_label(short_name, zone);
        Self {
            name,
            name_fqdn,
            record_type,
            ttl,
            target,
        }
    }

    /// The single target field (see [`RecordTarget::target_field`]).
    #[must_use]
    pub fn target_field(&self) -> &str {
        self.target.target_field()
    }

    /// The comparable target value (see [`RecordTarget::comparable`]).
    #[must_use]
    pub fn comparable_target(&self) -> String {
        self.target.comparable()
    }

    /// Check that the payload variant fits the record type.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::InvalidTarget`] when, for example, an MX record
    /// carries a plain value or a TXT record has no parts.
    pub fn validate(&self) -> Result<(), RecordError> {
        let ok = match (&self.record_type, &self.target) {
            (RecordType::Mx, RecordTarget::Mx { .. })
            | (RecordType::Srv, RecordTarget::Srv { .. })
            | (
                RecordType::A
                | RecordType::Aaaa
                | RecordType::Cname
                | RecordType::Ns
                | RecordType::Soa,
                RecordTarget::Value { .. },
            ) => true,
            (RecordType::Txt, RecordTarget::Txt { parts }) => !parts.is_empty(),
            _ => false,
        };
        if ok {
            Ok(())
        } else {
            Err(RecordError::InvalidTarget {
                name: self.name_fqdn.clone(),
                reason: format!("{} record cannot carry {:?}", self.record_type, self.target),
            })
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            RecordTarget::Mx { priority, target } => write!(
                f,
                "{} {} {} {} ttl={}",
                self.name_fqdn, self.record_type, priority, target, self.ttl
            ),
            RecordTarget::Srv {
                priority,
                weight,
                port,
                target,
            } => write!(
                f,
                "{} {} {} {} {} {} ttl={}",
                self.name_fqdn, self.record_type, priority, weight, port, target, self.ttl
            ),
            RecordTarget::Txt { parts } => write!(
                f,
                "{} {} {:?} ttl={}",
                self.name_fqdn, self.record_type, parts, self.ttl
            ),
            RecordTarget::Value { value } => write!(
                f,
                "{} {} {} ttl={}",
                self.name_fqdn, self.record_type, value, self.ttl
            ),
        }
    }
}

/// Combine a relative label with its zone.
///
/// Returns `(short, fqdn)`. An empty label or `@` is the apex; a label that
/// already ends in the zone is treated as fully qualified.
#[must_use]
pub fn make_label(short_name: &str, zone: &str) -> (String, String) {
    let zone = zone.trim_end_matches('.');
    let short = short_name.trim_end_matches('.');
    if short.is_empty() || short == APEX_LABEL || short == zone {
        return (APEX_LABEL.to_string(), zone.to_string());
    }
    if let Some(relative) = short.strip_suffix(&format!(".{zone}")) {
        return (relative.to_string(), short.to_string());
    }
    (short.to_string(), format!("{short}.{zone}"))
}

/// A zone and the records it should contain.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DomainConfig {
    /// Zone name, without trailing dot
    pub name: String,
    /// Desired records
    pub records: Vec<Record>,
}

/// An authoritative nameserver for a zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Nameserver {
    /// Host name without trailing dot
    pub name: String,
}

impl Nameserver {
    /// Build a nameserver entry, dropping any trailing dot.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim_end_matches('.').to_string(),
        }
    }
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod models_tests;
