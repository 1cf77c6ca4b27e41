// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Provider-native record types, as sent to and returned by the GoDaddy API.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::RecordType;

/// Record type token used on the GoDaddy wire.
///
/// Anything GoDaddy returns that we do not model decodes to
/// [`ProviderRecordType::Invalid`]. `Invalid` is never sent: callers must
/// treat it as a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderRecordType {
    A,
    #[serde(rename = "AAAA")]
    Aaaa,
    #[serde(rename = "CNAME")]
    Cname,
    #[serde(rename = "MX")]
    Mx,
    #[serde(rename = "NS")]
    Ns,
    #[serde(rename = "SOA")]
    Soa,
    #[serde(rename = "SRV")]
    Srv,
    #[serde(rename = "TXT")]
    Txt,
    #[serde(other, rename = "")]
    Invalid,
}

impl ProviderRecordType {
    /// Look up the token for a type string. Unknown strings give `Invalid`.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            "A" => Self::A,
            "AAAA" => Self::Aaaa,
            "CNAME" => Self::Cname,
            "MX" => Self::Mx,
            "NS" => Self::Ns,
            "SOA" => Self::Soa,
            "SRV" => Self::Srv,
            "TXT" => Self::Txt,
            _ => Self::Invalid,
        }
    }

    /// Wire token; empty for `Invalid`.
    #[must_use]
    pub fn as_token(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Ns => "NS",
            Self::Soa => "SOA",
            Self::Srv => "SRV",
            Self::Txt => "TXT",
            Self::Invalid => "",
        }
    }

    /// Canonical type for this token, `None` for `Invalid`.
    #[must_use]
    pub fn to_record_type(self) -> Option<RecordType> {
        match self {
            Self::A => Some(RecordType::A),
            Self::Aaaa => Some(RecordType::Aaaa),
            Self::Cname => Some(RecordType::Cname),
            Self::Mx => Some(RecordType::Mx),
            Self::Ns => Some(RecordType::Ns),
            Self::Soa => Some(RecordType::Soa),
            Self::Srv => Some(RecordType::Srv),
            Self::Txt => Some(RecordType::Txt),
            Self::Invalid => None,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self != Self::Invalid
    }
}

impl From<RecordType> for ProviderRecordType {
    fn from(rt: RecordType) -> Self {
        Self::from_token(rt.as_str())
    }
}

impl fmt::Display for ProviderRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// One DNS record in GoDaddy's representation.
///
/// `name` is relative to the domain (`@` for the apex) and `ttl` is whatever
/// the API reports; the 600 second floor is only applied before sending.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProviderRecord {
    pub data: String,
    pub name: String,
    pub ttl: u32,
    #[serde(rename = "type")]
    pub record_type: ProviderRecordType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

impl ProviderRecord {
    /// Record with only the common fields set.
    #[must_use]
    pub fn new(name: &str, record_type: ProviderRecordType, data: &str, ttl: u32) -> Self {
        Self {
            data: data.to_string(),
            name: name.to_string(),
            ttl,
            record_type,
            priority: None,
            weight: None,
            port: None,
            service: None,
            protocol: None,
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
