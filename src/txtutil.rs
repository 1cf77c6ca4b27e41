// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! TXT record splitting.
//!
//! A TXT character-string holds at most 255 bytes. Desired TXT records with a
//! single longer value are split into consecutive chunks before diffing so
//! that they compare equal to what the provider hands back.

use tracing::debug;

use crate::constants::TXT_MAX_STRING_LEN;
use crate::models::{Record, RecordTarget};

/// Split `text` into chunks of at most `max_len` bytes without cutting a
/// UTF-8 sequence in half.
#[must_use]
pub fn split_txt(text: &str, max_len: usize) -> Vec<String> {
    if text.len() <= max_len || max_len == 0 {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut rest = text;
    while rest.len() > max_len {
        let mut cut = max_len;
        while !rest.is_char_boundary(cut) {
            cut -= 1;
        }
        // A single char wider than max_len; take it whole.
        if cut == 0 {
            cut = rest.chars().next().map_or(rest.len(), char::len_utf8);
        }
        let (head, tail) = rest.split_at(cut);
        chunks.push(head.to_string());
        rest = tail;
    }
    if !rest.is_empty() {
        chunks.push(rest.to_string());
    }
    chunks
}

/// Split every TXT record that holds exactly one over-long part.
///
/// Records already carrying several parts are left alone.
pub fn split_single_long_txt(records: &mut [Record]) {
    for record in records.iter_mut() {
        if let RecordTarget::Txt { parts } = &mut record.target {
            if parts.len() == 1 && parts[0].len() > TXT_MAX_STRING_LEN {
                let split = split_txt(&parts[0], TXT_MAX_STRING_LEN);
                debug!(
                    record = %record.name_fqdn,
                    chunks = split.len(),
                    "Split long TXT record"
                );
                *parts = split;
            }
        }
    }
}

#[cfg(test)]
#[path = "txtutil_tests.rs"]
mod txtutil_tests;
