//! Conflict events.
//!
//! Conflicts are explicit objects returned to the caller, not log lines.
//! A resolution silently discards one side's changes, so the caller must be
//! able to surface it (conflict banner, audit log) after the fact.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::RecordId;

/// The side whose copy survived a conflict resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictWinner {
    /// The remote copy was kept; the local edit was discarded.
    Remote,
    /// The local copy was kept; it overwrites the server's.
    Local,
}

impl fmt::Display for ConflictWinner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote => write!(f, "remote"),
            Self::Local => write!(f, "local"),
        }
    }
}

/// A matched pair where both sides changed since the last sync, resolved by
/// picking one whole record per the active [`ConflictPolicy`](crate::ConflictPolicy).
///
/// Emitted once per resolved pair. The losing copy's changes are gone once
/// the plan is applied; callers that care must act on this event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedConflict {
    /// Id of the conflicting record.
    pub id: RecordId,

    /// Timestamp of the local copy at reconciliation time.
    pub local_updated_at: DateTime<Utc>,

    /// Timestamp of the remote copy at reconciliation time.
    pub remote_updated_at: DateTime<Utc>,

    /// Which side's copy survived.
    pub winner: ConflictWinner,
}

impl fmt::Display for ResolvedConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "conflict on '{}': local {} vs remote {}, {} wins",
            self.id, self.local_updated_at, self.remote_updated_at, self.winner
        )
    }
}
