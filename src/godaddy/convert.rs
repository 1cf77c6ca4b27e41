// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Conversion between canonical records and GoDaddy records.
//!
//! Outbound, the TTL is raised to GoDaddy's 600 second minimum and TXT parts
//! are joined into the single `data` string GoDaddy stores. Inbound, the
//! `data`/`priority`/`weight`/`port` fields are folded back into a
//! [`RecordTarget`] and the relative name is qualified with the zone.

use tracing::{debug, warn};

use super::types::{ProviderRecord, ProviderRecordType};
use crate::constants::{APEX_LABEL, MIN_TTL_SECS};
use crate::errors::RecordError;
use crate::models::{Record, RecordTarget, RecordType};

/// Raise `ttl` to the provider minimum.
#[must_use]
pub fn clamp_ttl(ttl: u32) -> u32 {
    ttl.max(MIN_TTL_SECS)
}

/// Convert a canonical record into the payload GoDaddy accepts.
///
/// # Errors
///
/// Returns [`RecordError::UnsupportedType`] if the type has no GoDaddy token,
/// or [`RecordError::InvalidTarget`] if the payload does not fit the type.
pub fn to_provider_record(record: &Record) -> Result<ProviderRecord, RecordError> {
    let record_type = ProviderRecordType::from(record.record_type);
    if !record_type.is_valid() {
        return Err(RecordError::UnsupportedType {
            name: record.name.clone(),
            record_type: record.record_type.to_string(),
        });
    }
    record.validate()?;

    let ttl = clamp_ttl(record.ttl);
    if ttl != record.ttl {
        warn!(
            record = %record.name_fqdn,
            requested_ttl = record.ttl,
            ttl = ttl,
            "GoDaddy does not support TTL lower than {MIN_TTL_SECS}, raising it"
        );
    }

    let mut out = ProviderRecord::new(&record.name, record_type, &record.comparable_target(), ttl);
    match &record.target {
        RecordTarget::Mx { priority, .. } => {
            out.priority = Some(*priority);
        }
        RecordTarget::Srv {
            priority,
            weight,
            port,
            ..
        } => {
            out.priority = Some(*priority);
            out.weight = Some(*weight);
            out.port = Some(*port);
        }
        RecordTarget::Value { .. } | RecordTarget::Txt { .. } => {}
    }
    Ok(out)
}

/// Convert one GoDaddy record into canonical form.
///
/// # Errors
///
/// Returns [`RecordError::UnsupportedType`] for types outside the canonical model.
pub fn to_canonical_record(record: &ProviderRecord, zone: &str) -> Result<Record, RecordError> {
    let record_type =
        record
            .record_type
            .to_record_type()
            .ok_or_else(|| RecordError::UnsupportedType {
                name: record.name.clone(),
                record_type: record.record_type.to_string(),
            })?;

    let target = match record_type {
        RecordType::Txt => RecordTarget::Txt {
            parts: vec![record.data.clone()],
        },
        RecordType::Mx => RecordTarget::Mx {
            priority: record.priority.unwrap_or_default(),
            target: record.data.clone(),
        },
        RecordType::Srv => RecordTarget::Srv {
            priority: record.priority.unwrap_or_default(),
            weight: record.weight.unwrap_or_default(),
            port: record.port.unwrap_or_default(),
            target: record.data.clone(),
        },
        RecordType::A | RecordType::Aaaa | RecordType::Cname | RecordType::Ns | RecordType::Soa => {
            RecordTarget::Value {
                value: record.data.clone(),
            }
        }
    };

    Ok(Record::new(
        &record.name,
        zone,
        record_type,
        record.ttl,
        target,
    ))
}

/// True for an NS record at the zone apex.
#[must_use]
pub fn is_apex_ns(record: &ProviderRecord, zone: &str) -> bool {
    record.record_type == ProviderRecordType::Ns
        && (record.name.is_empty()
            || record.name == APEX_LABEL
            || record.name.trim_end_matches('.') == zone.trim_end_matches('.'))
}

/// Convert a full record listing.
///
/// Apex NS records are dropped since GoDaddy does not allow modifying them.
/// Records of unsupported types are reported and skipped.
#[must_use]
pub fn to_canonical_records(records: &[ProviderRecord], zone: &str) -> Vec<Record> {
    let mut out = Vec::with_capacity(records.len());
    for record in records {
        if is_apex_ns(record, zone) {
            debug!(zone = %zone, data = %record.data, "Skipping apex NS record");
            continue;
        }
        match to_canonical_record(record, zone) {
            Ok(canonical) => out.push(canonical),
            Err(e) => {
                warn!(zone = %zone, name = %record.name, error = %e, "Skipping record");
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod convert_tests;
