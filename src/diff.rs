// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Diff instructions between existing and desired records.
//!
//! The correction builder consumes an ordered list of [`Instruction`]s and
//! trusts their classification. Any engine implementing [`Differ`] can feed
//! it; [`ByRecordDiffer`] is the default, matching records one at a time
//! within each (name, type) group.

use std::collections::BTreeMap;
use std::fmt;

use crate::errors::DnsError;
use crate::models::{DomainConfig, Record, RecordType};

/// Classification of one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionKind {
    /// Informational only; produces no correction
    Report,
    /// Record must be added
    Create,
    /// Record must be replaced
    Change,
    /// Record must be removed
    Delete,
}

impl fmt::Display for InstructionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Report => "REPORT",
            Self::Create => "CREATE",
            Self::Change => "CHANGE",
            Self::Delete => "DELETE",
        })
    }
}

/// One step of a diff.
///
/// `new` is populated for CREATE and CHANGE, `old` for CHANGE and DELETE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub kind: InstructionKind,
    pub old: Vec<Record>,
    pub new: Vec<Record>,
    pub msgs: Vec<String>,
}

impl Instruction {
    #[must_use]
    pub fn create(record: Record) -> Self {
        let msg = format!("+ CREATE {record}");
        Self {
            kind: InstructionKind::Create,
            old: Vec::new(),
            new: vec![record],
            msgs: vec![msg],
        }
    }

    #[must_use]
    pub fn change(old: Record, new: Record) -> Self {
        let msg = format!("± MODIFY {old} -> {new}");
        Self {
            kind: InstructionKind::Change,
            old: vec![old],
            new: vec![new],
            msgs: vec![msg],
        }
    }

    #[must_use]
    pub fn delete(record: Record) -> Self {
        let msg = format!("- DELETE {record}");
        Self {
            kind: InstructionKind::Delete,
            old: vec![record],
            new: Vec::new(),
            msgs: vec![msg],
        }
    }

    /// All messages as a single human-readable line block.
    #[must_use]
    pub fn message(&self) -> String {
        self.msgs.join("\n")
    }
}

/// Produces the instructions that turn `existing` into `desired`.
pub trait Differ: Send + Sync {
    /// Compute the ordered instruction list.
    ///
    /// # Errors
    ///
    /// Implementations may reject inputs they cannot reconcile.
    fn diff(&self, existing: &[Record], desired: &DomainConfig)
        -> Result<Vec<Instruction>, DnsError>;
}

/// Record-by-record differ.
///
/// Records are grouped by fully-qualified name and type. Inside a group,
/// identical records (same TTL and content) are left alone; what remains is
/// paired in order into changes, with leftovers becoming creates or deletes.
///
/// Output order is all deletes, then changes, then creates, each sorted by
/// name and type, so the same inputs always give the same plan.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByRecordDiffer;

type GroupKey = (String, RecordType);

#[derive(Default)]
struct Group {
    existing: Vec<Record>,
    desired: Vec<Record>,
}

impl Differ for ByRecordDiffer {
    fn diff(
        &self,
        existing: &[Record],
        desired: &DomainConfig,
    ) -> Result<Vec<Instruction>, DnsError> {
        let mut groups: BTreeMap<GroupKey, Group> = BTreeMap::new();
        for record in existing {
            groups
                .entry((record.name_fqdn.clone(), record.record_type))
                .or_default()
                .existing
                .push(record.clone());
        }
        for record in &desired.records {
            groups
                .entry((record.name_fqdn.clone(), record.record_type))
                .or_default()
                .desired
                .push(record.clone());
        }

        let mut deletes = Vec::new();
        let mut changes = Vec::new();
        let mut creates = Vec::new();

        for (_, group) in groups {
            let mut existing = group.existing;
            let mut desired = Vec::with_capacity(group.desired.len());

            for want in group.desired {
                let same = existing.iter().position(|have| {
                    have.ttl == want.ttl && have.target.same_content(&want.target)
                });
                match same {
                    Some(idx) => {
                        existing.remove(idx);
                    }
                    None => desired.push(want),
                }
            }

            let paired = existing.len().min(desired.len());
            let leftover_existing = existing.split_off(paired);
            let leftover_desired = desired.split_off(paired);

            changes.extend(
                existing
                    .into_iter()
                    .zip(desired)
                    .map(|(old, new)| Instruction::change(old, new)),
            );
            deletes.extend(leftover_existing.into_iter().map(Instruction::delete));
            creates.extend(leftover_desired.into_iter().map(Instruction::create));
        }

        let mut instructions = deletes;
        instructions.append(&mut changes);
        instructions.append(&mut creates);
        Ok(instructions)
    }
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod diff_tests;
