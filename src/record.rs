//! Record types and identity.
//!
//! Stable record IDs are the prerequisite for reconciliation: without them
//! a local copy cannot be matched against its remote counterpart, and
//! deletions cannot be told apart from renames.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable, remote-assigned record identifier.
///
/// The remote store assigns an id at first successful upload; after that it
/// never changes and is shared by the local and remote copies of a record.
///
/// # Examples
///
/// ```
/// use syncplan::RecordId;
///
/// let id = RecordId::new("note-42");
/// assert_eq!(id.as_str(), "note-42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Creates a record id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Local edit state of a record relative to the last successful sync.
///
/// Remote copies carry no such flag; their presence and timestamp are the
/// only signals the remote side provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    /// In agreement with the last known server state.
    Synced,
    /// Modified locally since the last sync.
    Edited,
    /// Never uploaded; has no server-assigned id yet.
    ///
    /// Records in this state must be uploaded by the caller before
    /// reconciliation and are rejected as reconciler input.
    New,
}

impl fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Synced => write!(f, "synced"),
            Self::Edited => write!(f, "edited"),
            Self::New => write!(f, "new"),
        }
    }
}

/// Anything the reconciler can classify.
///
/// The surrounding system reconciles several record families of identical
/// shape (notes, notebooks, tags); each implements this trait. [`Record`]
/// is the canonical implementation.
///
/// `sync_status` is only inspected on local inputs; remote inputs may
/// return anything (conventionally [`SyncStatus::Synced`]).
pub trait Syncable {
    /// The stable, remote-assigned id shared by both copies of a record.
    fn record_id(&self) -> &RecordId;

    /// Timestamp of last modification, monotonic per record.
    fn updated_at(&self) -> DateTime<Utc>;

    /// Local edit state; meaningful on local copies only.
    fn sync_status(&self) -> SyncStatus;
}

/// A versioned item of content identified by a stable id.
///
/// The payload is opaque to reconciliation: it is carried through
/// classification untouched and never inspected. Only the id, timestamp,
/// and (on local copies) the sync status drive the outcome.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use syncplan::{Record, SyncStatus};
///
/// let local = Record::local("note-1", Utc::now(), SyncStatus::Edited, "draft".into());
/// let remote = Record::remote("note-1", Utc::now(), "published".into());
/// assert_eq!(local.id, remote.id);
/// assert_eq!(remote.sync_status, SyncStatus::Synced);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Stable identifier shared by the local and remote copies.
    pub id: RecordId,

    /// Timestamp of last modification.
    pub updated_at: DateTime<Utc>,

    /// Edit state relative to the last sync. Meaningful on local copies
    /// only; remote copies are constructed with [`SyncStatus::Synced`].
    pub sync_status: SyncStatus,

    /// Opaque content, carried through classification untouched.
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl Record {
    /// Creates a local copy of a record.
    #[must_use]
    pub fn local(
        id: impl Into<RecordId>,
        updated_at: DateTime<Utc>,
        sync_status: SyncStatus,
        payload: serde_json::Value,
    ) -> Self {
        Self {
            id: id.into(),
            updated_at,
            sync_status,
            payload,
        }
    }

    /// Creates a remote copy of a record.
    ///
    /// Remote copies carry no edit flag; the status is pinned to
    /// [`SyncStatus::Synced`] and ignored by the reconciler.
    #[must_use]
    pub fn remote(
        id: impl Into<RecordId>,
        updated_at: DateTime<Utc>,
        payload: serde_json::Value,
    ) -> Self {
        Self {
            id: id.into(),
            updated_at,
            sync_status: SyncStatus::Synced,
            payload,
        }
    }
}

impl Syncable for Record {
    fn record_id(&self) -> &RecordId {
        &self.id
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn sync_status(&self) -> SyncStatus {
        self.sync_status
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Record {}

impl std::hash::Hash for Record {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_display() {
        let id = RecordId::new("n1");
        assert_eq!(format!("{id}"), "n1");
        assert_eq!(id.as_str(), "n1");
    }

    #[test]
    fn test_record_id_from_str() {
        let a: RecordId = "n1".into();
        let b = RecordId::new(String::from("n1"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_sync_status_display() {
        assert_eq!(format!("{}", SyncStatus::Synced), "synced");
        assert_eq!(format!("{}", SyncStatus::Edited), "edited");
        assert_eq!(format!("{}", SyncStatus::New), "new");
    }

    #[test]
    fn test_remote_record_is_synced() {
        let r = Record::remote("n1", Utc::now(), serde_json::Value::Null);
        assert_eq!(r.sync_status, SyncStatus::Synced);
    }

    #[test]
    fn test_record_equality_by_id() {
        let now = Utc::now();
        let a = Record::local("n1", now, SyncStatus::Edited, "a".into());
        let b = Record::remote("n1", now + chrono::Duration::hours(1), "b".into());
        // Records are equal if they share an id, regardless of content.
        assert_eq!(a, b);
    }

    #[test]
    fn test_record_serialization() {
        let r = Record::local("n1", Utc::now(), SyncStatus::Edited, serde_json::json!({"title": "t"}));
        let json = serde_json::to_string(&r).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(r.id, back.id);
        assert_eq!(r.sync_status, back.sync_status);
        assert_eq!(r.payload, back.payload);
    }

    #[test]
    fn test_status_serde_snake_case() {
        assert_eq!(serde_json::to_string(&SyncStatus::Edited).unwrap(), "\"edited\"");
    }
}
