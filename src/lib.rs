//! # syncplan - Deterministic two-way record reconciliation
//!
//! syncplan compares a local and a remote copy of the same logical record
//! collection and produces a partitioned action plan: what to push to the
//! server, pull from it, insert locally, or delete locally. Conflict
//! resolutions are returned as explicit events, never logged or swallowed.
//!
//! ## Core Concepts
//!
//! - **Record**: a versioned item of content with a stable, remote-assigned id
//! - **SyncPlan**: the four-bucket classification of records
//! - **ConflictPolicy**: which whole record survives when both sides changed
//! - **SyncOutcome**: plan plus the conflict events that shaped it
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use syncplan::{reconcile, Record, SyncStatus};
//!
//! let t = Utc::now();
//!
//! // One record edited locally, one new on the server.
//! let local = vec![
//!     Record::local("n1", t + Duration::seconds(30), SyncStatus::Edited, "draft".into()),
//! ];
//! let remote = vec![
//!     Record::remote("n1", t, "published".into()),
//!     Record::remote("n2", t, "server-only".into()),
//! ];
//!
//! let outcome = reconcile(&local, &remote)?;
//! assert_eq!(outcome.plan.push_to_server.len(), 1);
//! assert_eq!(outcome.plan.new_from_server.len(), 1);
//! # Ok::<(), syncplan::SyncError>(())
//! ```
//!
//! Uploading, persisting, and applying the plan transactionally are the
//! caller's responsibility; this crate performs no IO.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod conflict;
pub mod error;
pub mod plan;
pub mod policy;
pub mod reconciler;
pub mod record;

// Re-export primary types at crate root for convenience
pub use conflict::{ConflictWinner, ResolvedConflict};
pub use error::{Side, SyncError, SyncResult, ValidationError};
pub use plan::{PlanSummary, SyncOutcome, SyncPlan};
pub use policy::ConflictPolicy;
pub use reconciler::{reconcile, Reconciler};
pub use record::{Record, RecordId, SyncStatus, Syncable};
