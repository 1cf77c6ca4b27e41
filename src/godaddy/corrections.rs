// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Turning diff instructions into executable corrections.
//!
//! GoDaddy has no in-place update, so every instruction becomes a short plan
//! of [`Step`]s:
//!
//! | Instruction | Steps |
//! |-------------|-------|
//! | CREATE | `Create(new)` |
//! | DELETE | `Delete(old)` |
//! | CHANGE | `Delete(old)`, `Create(new)` |
//!
//! A [`Correction`] runs its steps in order and stops at the first failure.
//! A failed change therefore never creates the new record, and a change whose
//! create fails leaves the old record deleted; nothing is rolled back.
//! Corrections share no state: each delete re-reads the zone to find its target.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::client::RecordsApi;
use super::convert::{clamp_ttl, to_provider_record};
use super::matcher::is_match;
use crate::constants::MIN_TTL_SECS;
use crate::diff::{Instruction, InstructionKind};
use crate::errors::{DnsError, RecordError};
use crate::models::Record;

/// One provider call within a correction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Remove every GoDaddy record matching this one
    Delete(Record),
    /// Add this record
    Create(Record),
}

/// A deferred change to a zone with a human-readable description.
pub struct Correction {
    /// What the correction does, as reported by the diff
    pub msg: String,
    zone: String,
    steps: Vec<Step>,
    api: Arc<dyn RecordsApi>,
}

impl fmt::Debug for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Correction")
            .field("msg", &self.msg)
            .field("zone", &self.zone)
            .field("steps", &self.steps)
            .finish_non_exhaustive()
    }
}

impl Correction {
    /// Zone this correction applies to.
    #[must_use]
    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// Planned steps, in execution order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Run the steps against GoDaddy.
    ///
    /// # Errors
    ///
    /// Returns the first step's error; later steps are not attempted.
    pub async fn execute(self) -> Result<(), DnsError> {
        for step in &self.steps {
            match step {
                Step::Delete(record) => {
                    delete_record(self.api.as_ref(), &self.zone, record).await?;
                }
                Step::Create(record) => {
                    create_record(self.api.as_ref(), &self.zone, record).await?;
                }
            }
        }
        Ok(())
    }
}

/// Add `record` to `zone`.
///
/// # Errors
///
/// Returns an error if the record cannot be expressed for GoDaddy or the API call fails.
pub async fn create_record(
    api: &dyn RecordsApi,
    zone: &str,
    record: &Record,
) -> Result<(), DnsError> {
    info!(
        zone = %zone,
        name = %record.name,
        record_type = %record.record_type,
        data = %record.comparable_target(),
        "Create record"
    );
    let provider_record = to_provider_record(record)?;
    api.add_records(zone, std::slice::from_ref(&provider_record))
        .await?;
    Ok(())
}

/// Remove the GoDaddy records matching `record` from `zone`.
///
/// The record's TTL is raised to the provider floor before matching, since
/// that is what was sent when it was created. Every matching record is
/// deleted; the number removed is returned.
///
/// # Errors
///
/// Returns an error if listing the zone or any delete call fails.
pub async fn delete_record(
    api: &dyn RecordsApi,
    zone: &str,
    record: &Record,
) -> Result<usize, DnsError> {
    info!(
        zone = %zone,
        name = %record.name,
        record_type = %record.record_type,
        data = %record.comparable_target(),
        "Delete record"
    );

    let existing = api.list_records(zone).await?;

    let mut wanted = record.clone();
    if wanted.ttl < MIN_TTL_SECS {
        warn!(
            record = %record.name_fqdn,
            ttl = record.ttl,
            "Trying to delete a record with TTL below {MIN_TTL_SECS}, GoDaddy does not support it"
        );
        wanted.ttl = clamp_ttl(wanted.ttl);
    }

    let mut deleted = 0;
    for candidate in existing.iter().filter(|c| is_match(c, &wanted, zone)) {
        debug!(
            name = %candidate.name,
            record_type = %candidate.record_type,
            data = %candidate.data,
            "Found matching record to delete"
        );
        api.delete_record(zone, candidate).await?;
        deleted += 1;
    }

    if deleted == 0 {
        warn!(zone = %zone, record = %record, "No GoDaddy record matched, nothing deleted");
    }
    Ok(deleted)
}

/// Build the step plan for one instruction.
///
/// # Errors
///
/// Returns [`RecordError::MissingRecord`] when the instruction lacks the
/// record its kind needs.
pub fn plan_steps(instruction: &Instruction) -> Result<Vec<Step>, RecordError> {
    let old = || {
        instruction
            .old
            .first()
            .cloned()
            .ok_or_else(|| RecordError::MissingRecord {
                kind: instruction.kind.to_string(),
                side: "old",
            })
    };
    let new = || {
        instruction
            .new
            .first()
            .cloned()
            .ok_or_else(|| RecordError::MissingRecord {
                kind: instruction.kind.to_string(),
                side: "new",
            })
    };

    match instruction.kind {
        InstructionKind::Create => Ok(vec![Step::Create(new()?)]),
        InstructionKind::Delete => Ok(vec![Step::Delete(old()?)]),
        InstructionKind::Change => Ok(vec![Step::Delete(old()?), Step::Create(new()?)]),
        InstructionKind::Report => Ok(Vec::new()),
    }
}

/// Build one correction per actionable instruction, preserving order.
///
/// REPORT instructions and instructions missing their records are logged and
/// produce no correction.
#[must_use]
pub fn build_corrections(
    api: &Arc<dyn RecordsApi>,
    zone: &str,
    instructions: &[Instruction],
) -> Vec<Correction> {
    let mut corrections = Vec::with_capacity(instructions.len());

    for instruction in instructions {
        let msg = instruction.message();
        warn!("{msg}");

        let steps = match plan_steps(instruction) {
            Ok(steps) => steps,
            Err(e) => {
                warn!(zone = %zone, error = %e, "Skipping malformed instruction");
                continue;
            }
        };
        if steps.is_empty() {
            info!(zone = %zone, kind = %instruction.kind, "Instruction needs no change");
            continue;
        }

        corrections.push(Correction {
            msg,
            zone: zone.to_string(),
            steps,
            api: Arc::clone(api),
        });
    }

    corrections
}

#[cfg(test)]
#[path = "corrections_tests.rs"]
mod corrections_tests;
