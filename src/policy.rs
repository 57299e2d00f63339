//! Conflict-resolution policy.
//!
//! A conflict is a matched pair where the local copy is edited and its
//! timestamp does not post-date the remote copy's: both sides changed since
//! the last successful sync. The policy decides which whole record survives;
//! there is no field-level merge.

use serde::{Deserialize, Serialize};

/// Rule deciding which side of a true conflict survives.
///
/// Policies are intentionally *pure* (no I/O) so a reconciliation result is
/// reproducible given the same inputs. Whichever side loses, the resolution
/// is reported to the caller as a [`ResolvedConflict`](crate::ResolvedConflict)
/// event — the losing copy is overwritten, never silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    /// Keep the remote copy; the local edit is discarded.
    RemoteWins,

    /// Keep the local copy; it overwrites the server's.
    LocalWins,
}

impl Default for ConflictPolicy {
    fn default() -> Self {
        Self::RemoteWins
    }
}

impl ConflictPolicy {
    /// Returns a short stable identifier suitable for logging/debugging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RemoteWins => "remote_wins",
            Self::LocalWins => "local_wins",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_remote_wins() {
        assert_eq!(ConflictPolicy::default(), ConflictPolicy::RemoteWins);
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(ConflictPolicy::RemoteWins.name(), "remote_wins");
        assert_eq!(ConflictPolicy::LocalWins.name(), "local_wins");
    }

    #[test]
    fn test_policy_serde_snake_case() {
        let json = serde_json::to_string(&ConflictPolicy::RemoteWins).unwrap();
        assert_eq!(json, "\"remote_wins\"");
        let back: ConflictPolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ConflictPolicy::RemoteWins);
    }
}
