//! The reconciliation plan and outcome types.
//!
//! A plan is a four-way partition of the input records: what to push, what
//! to pull, what to insert, what to delete. The buckets are disjoint — no
//! id ever appears in more than one — and ordered deterministically by
//! input position. Applying the plan (and its transactionality) is the
//! caller's job.

use serde::{Deserialize, Serialize};

use crate::conflict::ResolvedConflict;
use crate::record::Syncable;

/// Four disjoint ordered buckets describing how to bring the local and
/// remote copies of a dataset into agreement.
///
/// Bucket order is deterministic: local-input order drives
/// `push_to_server`, `pull_from_server`, and `delete_locally`;
/// remote-input order drives `new_from_server`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncPlan<T> {
    /// Local records whose content must overwrite the server's.
    pub push_to_server: Vec<T>,

    /// Remote records whose content must overwrite the local copy.
    pub pull_from_server: Vec<T>,

    /// Remote records with no local counterpart; insert locally.
    pub new_from_server: Vec<T>,

    /// Local records with no remote counterpart; remove locally.
    pub delete_locally: Vec<T>,
}

impl<T> SyncPlan<T> {
    pub(crate) fn empty() -> Self {
        Self {
            push_to_server: Vec::new(),
            pull_from_server: Vec::new(),
            new_from_server: Vec::new(),
            delete_locally: Vec::new(),
        }
    }

    /// Returns true if no bucket holds any record (the datasets agree).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.push_to_server.is_empty()
            && self.pull_from_server.is_empty()
            && self.new_from_server.is_empty()
            && self.delete_locally.is_empty()
    }

    /// Total number of records across all buckets.
    ///
    /// Never exceeds the sum of the two input lengths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.push_to_server.len()
            + self.pull_from_server.len()
            + self.new_from_server.len()
            + self.delete_locally.len()
    }

    /// Per-bucket counts, for caller-side logging or metrics.
    #[must_use]
    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            push_to_server: self.push_to_server.len(),
            pull_from_server: self.pull_from_server.len(),
            new_from_server: self.new_from_server.len(),
            delete_locally: self.delete_locally.len(),
        }
    }
}

impl<T: Syncable> SyncPlan<T> {
    /// Returns true if any bucket contains a record with the given id.
    #[must_use]
    pub fn contains(&self, id: &crate::record::RecordId) -> bool {
        self.push_to_server
            .iter()
            .chain(&self.pull_from_server)
            .chain(&self.new_from_server)
            .chain(&self.delete_locally)
            .any(|r| r.record_id() == id)
    }
}

/// Per-bucket record counts of a [`SyncPlan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Records to upload.
    pub push_to_server: usize,
    /// Records to overwrite locally.
    pub pull_from_server: usize,
    /// Records to insert locally.
    pub new_from_server: usize,
    /// Records to remove locally.
    pub delete_locally: usize,
}

/// The complete result of a reconciliation: the action plan plus the
/// conflict resolutions that shaped it.
///
/// Conflicts are part of the result, not a side channel — the core does no
/// logging, so a caller that ignores `conflicts` silently loses the losing
/// side's edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncOutcome<T> {
    /// What to push, pull, insert, and delete.
    pub plan: SyncPlan<T>,

    /// One event per matched pair where both sides had changed and one
    /// whole record was picked over the other.
    pub conflicts: Vec<ResolvedConflict>,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use crate::record::{Record, RecordId, SyncStatus};

    use super::*;

    #[test]
    fn test_empty_plan() {
        let plan: SyncPlan<Record> = SyncPlan::empty();
        assert!(plan.is_empty());
        assert_eq!(plan.len(), 0);
        assert_eq!(
            plan.summary(),
            PlanSummary {
                push_to_server: 0,
                pull_from_server: 0,
                new_from_server: 0,
                delete_locally: 0,
            }
        );
    }

    #[test]
    fn test_len_and_summary_count_all_buckets() {
        let now = Utc::now();
        let mut plan: SyncPlan<Record> = SyncPlan::empty();
        plan.push_to_server
            .push(Record::local("a", now, SyncStatus::Edited, "x".into()));
        plan.new_from_server
            .push(Record::remote("b", now, "y".into()));
        assert!(!plan.is_empty());
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.summary().push_to_server, 1);
        assert_eq!(plan.summary().new_from_server, 1);
    }

    #[test]
    fn test_contains_searches_every_bucket() {
        let now = Utc::now();
        let mut plan: SyncPlan<Record> = SyncPlan::empty();
        plan.delete_locally
            .push(Record::local("gone", now, SyncStatus::Synced, "x".into()));
        assert!(plan.contains(&RecordId::new("gone")));
        assert!(!plan.contains(&RecordId::new("other")));
    }

    #[test]
    fn test_plan_serialization() {
        let now = Utc::now();
        let mut plan: SyncPlan<Record> = SyncPlan::empty();
        plan.pull_from_server
            .push(Record::remote("r1", now, "z".into()));
        let json = serde_json::to_string(&plan).unwrap();
        let back: SyncPlan<Record> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.pull_from_server.len(), 1);
        assert_eq!(back.pull_from_server[0].id, RecordId::new("r1"));
    }
}
