//! The reconciler: classifies every record into exactly one fate.
//!
//! Pure engine: receives pre-loaded records, returns a classified outcome.
//! No IO, no logging, no shared state — safe to call concurrently and
//! deterministic for a given pair of inputs.
//!
//! The computation is three passes: build one lookup map per side
//! (rejecting malformed input), walk the local records deciding push /
//! pull / delete / no-op and marking each matched remote as consumed, then
//! walk the remote records classifying the leftovers as new. A remote
//! record must be consumed before the third pass inspects it, otherwise it
//! would be double-classified into `new_from_server`.

use std::collections::{HashMap, HashSet};

use crate::conflict::{ConflictWinner, ResolvedConflict};
use crate::error::{Side, SyncError, SyncResult, ValidationError};
use crate::plan::{SyncOutcome, SyncPlan};
use crate::policy::ConflictPolicy;
use crate::record::{RecordId, SyncStatus, Syncable};

/// Reconciles a local and a remote copy of the same logical dataset.
///
/// Stateless apart from the configured [`ConflictPolicy`]; every call
/// computes a fresh [`SyncOutcome`] from its inputs alone.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use syncplan::{ConflictPolicy, Reconciler, Record, SyncStatus};
///
/// let t = Utc::now();
/// let local = vec![Record::local("n1", t + Duration::seconds(10), SyncStatus::Edited, "draft".into())];
/// let remote = vec![Record::remote("n1", t, "old".into())];
///
/// let outcome = Reconciler::new().reconcile(&local, &remote)?;
/// assert_eq!(outcome.plan.push_to_server.len(), 1);
/// assert!(outcome.conflicts.is_empty());
/// # Ok::<(), syncplan::SyncError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reconciler {
    policy: ConflictPolicy,
}

impl Reconciler {
    /// Creates a reconciler with the default policy
    /// ([`ConflictPolicy::RemoteWins`]).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reconciler with an explicit conflict policy.
    #[must_use]
    pub const fn with_policy(policy: ConflictPolicy) -> Self {
        Self { policy }
    }

    /// Returns the active conflict policy.
    #[must_use]
    pub const fn policy(&self) -> ConflictPolicy {
        self.policy
    }

    /// Computes the action plan bringing `local` and `remote` into agreement.
    ///
    /// Every local record lands in exactly one of push / pull-target /
    /// delete / unchanged; every remote record in exactly one of pull /
    /// new / consumed-unchanged. Classified records are cloned into the
    /// plan; the inputs are never mutated.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::DuplicateKey`] if either side contains two
    ///   records with the same id.
    /// - [`ValidationError::UnsyncedLocalRecord`] if a local record still
    ///   has status [`SyncStatus::New`]; such records must be uploaded by
    ///   the caller before reconciliation.
    /// - [`SyncError::InternalConsistency`] if a matched pair escapes
    ///   classification. This cannot happen for well-formed input and
    ///   indicates a defect in the reconciler itself.
    pub fn reconcile<T: Syncable + Clone>(
        &self,
        local: &[T],
        remote: &[T],
    ) -> SyncResult<SyncOutcome<T>> {
        let local_by_id = index_side(local, Side::Local)?;
        let remote_by_id = index_side(remote, Side::Remote)?;

        for l in local {
            if l.sync_status() == SyncStatus::New {
                return Err(ValidationError::UnsyncedLocalRecord {
                    id: l.record_id().clone(),
                }
                .into());
            }
        }

        let mut plan = SyncPlan::empty();
        let mut conflicts = Vec::new();

        // Matched remote ids decided in the local pass. Every matched pair
        // lands here, including no-ops, so the leftover pass below only
        // ever sees remote-only records.
        let mut consumed: HashSet<&RecordId> = HashSet::with_capacity(local.len());

        // Iteration stays on the input slices, never on the maps, so bucket
        // order is the input order.
        for l in local {
            let key = l.record_id();
            let Some(&r) = remote_by_id.get(key) else {
                // Gone from the server: remote-initiated deletion.
                plan.delete_locally.push(l.clone());
                continue;
            };

            match l.sync_status() {
                SyncStatus::Edited => {
                    if l.updated_at() > r.updated_at() {
                        // Local edit is strictly newer; client overwrites server.
                        plan.push_to_server.push(l.clone());
                    } else {
                        // Both sides changed since the last sync, ties
                        // included: an edited flag without a timestamp bump
                        // still counts as a local change.
                        let winner = match self.policy {
                            ConflictPolicy::RemoteWins => {
                                plan.pull_from_server.push(r.clone());
                                ConflictWinner::Remote
                            }
                            ConflictPolicy::LocalWins => {
                                plan.push_to_server.push(l.clone());
                                ConflictWinner::Local
                            }
                        };
                        conflicts.push(ResolvedConflict {
                            id: key.clone(),
                            local_updated_at: l.updated_at(),
                            remote_updated_at: r.updated_at(),
                            winner,
                        });
                    }
                }
                SyncStatus::Synced | SyncStatus::New => {
                    // New was rejected above; only Synced reaches here.
                    if l.updated_at() < r.updated_at() {
                        plan.pull_from_server.push(r.clone());
                    }
                    // Equal or older remote: the copies agree, no action.
                }
            }
            consumed.insert(key);
        }

        for r in remote {
            let key = r.record_id();
            if consumed.contains(key) {
                continue;
            }
            if local_by_id.contains_key(key) {
                // A matched pair must have been consumed by the local pass.
                return Err(SyncError::InternalConsistency { id: key.clone() });
            }
            plan.new_from_server.push(r.clone());
        }

        Ok(SyncOutcome { plan, conflicts })
    }
}

/// Reconciles with the default policy ([`ConflictPolicy::RemoteWins`]).
///
/// Convenience wrapper over [`Reconciler::reconcile`]; see there for the
/// contract and error conditions.
///
/// # Errors
///
/// Same as [`Reconciler::reconcile`].
pub fn reconcile<T: Syncable + Clone>(local: &[T], remote: &[T]) -> SyncResult<SyncOutcome<T>> {
    Reconciler::new().reconcile(local, remote)
}

/// Builds the id lookup for one side, rejecting duplicate ids.
fn index_side<T: Syncable>(records: &[T], side: Side) -> SyncResult<HashMap<&RecordId, &T>> {
    let mut by_id = HashMap::with_capacity(records.len());
    for r in records {
        if by_id.insert(r.record_id(), r).is_some() {
            return Err(ValidationError::DuplicateKey {
                id: r.record_id().clone(),
                side,
            }
            .into());
        }
    }
    Ok(by_id)
}
