// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Locating the GoDaddy record that corresponds to a canonical record.
//!
//! GoDaddy records carry no identifier, so deletes have to find their target
//! by content. The comparison is deliberately narrow: exact, case-sensitive
//! string equality on every field. The only normalization is that a target
//! ending in `.<zone>.` is compared without that suffix, since GoDaddy stores
//! in-zone host names relative to the domain.

use super::types::ProviderRecord;
use crate::models::Record;

/// Value of `record`'s target as GoDaddy would store it for `zone`.
#[must_use]
pub fn comparable_value(record: &Record, zone: &str) -> String {
    let value = record.comparable_target();
    let suffix = format!(".{zone}.");
    match value.strip_suffix(&suffix) {
        Some(stripped) => stripped.to_string(),
        None => value,
    }
}

/// True when `provider` is the GoDaddy copy of `record`.
///
/// Name, type, TTL and target must all be equal. The caller is responsible
/// for raising `record.ttl` to the provider floor first.
#[must_use]
pub fn is_match(provider: &ProviderRecord, record: &Record, zone: &str) -> bool {
    if provider.name != record.name
        || provider.record_type.as_token() != record.record_type.as_str()
        || provider.ttl != record.ttl
    {
        return false;
    }

    provider.data == comparable_value(record, zone)
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
