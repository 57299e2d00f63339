//! Error types for reconciliation.
//!
//! All errors are strongly typed using thiserror. A call either produces a
//! complete outcome or fails with one of these; no partial plan is ever
//! observable.

use thiserror::Error;

use crate::record::RecordId;

/// Which input sequence an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The local record sequence.
    Local,
    /// The remote record sequence.
    Remote,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Remote => write!(f, "remote"),
        }
    }
}

/// Input-contract violations detected before any classification happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Two records on the same side share an id.
    #[error("duplicate id '{id}' in {side} records")]
    DuplicateKey {
        /// The offending id.
        id: RecordId,
        /// Which input sequence contains the duplicate.
        side: Side,
    },

    /// A local input record has never been uploaded.
    ///
    /// Records with status `new` must be uploaded (and assigned a server id)
    /// by the caller before reconciliation.
    #[error("local record '{id}' has status 'new' and must be uploaded before reconciliation")]
    UnsyncedLocalRecord {
        /// The offending id.
        id: RecordId,
    },
}

/// Top-level error type for reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// Malformed input; the caller's contract was violated.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A matched local/remote pair escaped classification.
    ///
    /// Indicates a logic defect in the reconciler itself, never bad input.
    #[error("internal consistency fault: matched record '{id}' was never classified")]
    InternalConsistency {
        /// The record that fell through.
        id: RecordId,
    },
}

impl SyncError {
    /// Returns true if this is an input-validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is an internal-consistency fault.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::InternalConsistency { .. })
    }
}

/// Result type alias for reconciliation operations.
pub type SyncResult<T> = Result<T, SyncError>;
