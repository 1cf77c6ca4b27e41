// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Pre-diff filtering of desired records.

use tracing::debug;
use url::Host;

use crate::models::{Record, RecordType};

/// ASCII-compatible (punycode) form of a zone name, without trailing dot.
///
/// Falls back to the name as given when it cannot be converted.
#[must_use]
pub fn ascii_zone_name(zone: &str) -> String {
    let zone = zone.trim_end_matches('.');
    match Host::parse(zone) {
        Ok(Host::Domain(ascii)) => ascii,
        Ok(_) | Err(_) => {
            debug!(zone = %zone, "Zone name has no ASCII form, using it verbatim");
            zone.to_string()
        }
    }
}

/// Drop desired records this provider cannot manage.
///
/// GoDaddy does not allow modifying NS records at the zone apex, so they are
/// removed before diffing. Labels are compared in their ASCII form, so a
/// zone given in Unicode or mixed case still has its apex recognized.
/// Everything else is passed through unchanged.
#[must_use]
pub fn filter_records(records: &[Record], zone: &str) -> Vec<Record> {
    let apex = ascii_zone_name(zone);
    records
        .iter()
        .filter(|record| {
            let keep = !(record.record_type == RecordType::Ns
                && ascii_zone_name(&record.name_fqdn) == apex);
            if !keep {
                debug!(
                    zone = %apex,
                    target = %record.target_field(),
                    "GoDaddy does not support modifying apex NS records, skipping"
                );
            }
            keep
        })
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod filter_tests;
