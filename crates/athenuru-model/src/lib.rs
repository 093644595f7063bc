//! Athenuru Record Model
//!
//! Typed lead-management records and the immutable snapshot every dashboard
//! reads from.
//!
//! # Overview
//!
//! - **Lead**: a prospect with a closed-set [`LeadStatus`]
//! - **AgentSummary**: per-agent tallies, keyed by agent name
//! - **User** / **Activity**: user management and timeline records
//! - **LeadSnapshot**: validated, read-only collections of all of the above
//!
//! Values outside a closed set are rejected while records are built; dates
//! that fail to parse are kept and flagged instead (see [`DateField`]).
//!
//! # Example
//!
//! ```rust
//! use athenuru_model::{Fixture, LeadStatus, SummaryPolicy};
//!
//! let fixture = Fixture::from_json_str(
//!     r#"{"leads":[{"id":"1","name":"Robert Chen","status":"new","date":"2024-01-15"}]}"#,
//! )
//! .unwrap();
//! let snapshot = fixture.into_snapshot(SummaryPolicy::Enforce).unwrap();
//! assert_eq!(snapshot.leads()[0].status, LeadStatus::New);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod activity;
pub mod date;
pub mod error;
pub mod fixture;
pub mod lead;
pub mod people;
pub mod snapshot;
pub mod validation;

// Re-exports
pub use activity::{Activity, ActivityKind, RawActivity};
pub use date::{Calendar, DateField, Moment};
pub use error::{FixtureError, ModelError, ModelResult, RecordKind};
pub use fixture::Fixture;
pub use lead::{Lead, LeadStatus, RawLead, RecordId};
pub use people::{AgentSummary, RawAgentSummary, RawUser, Role, User, UserStatus};
pub use snapshot::{LeadSnapshot, SnapshotBuilder};
pub use validation::{SnapshotValidator, SummaryPolicy};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with records
    pub use crate::{
        Activity, AgentSummary, Calendar, DateField, Lead, LeadSnapshot, LeadStatus, ModelError,
        RecordId, Role, SummaryPolicy, User, UserStatus,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
