//! Athenuru Query
//!
//! Pure derivations over lead records. Every function takes borrowed slices
//! and returns fresh values; nothing here mutates a snapshot.
//!
//! # Overview
//!
//! - **Counts**: [`count_by_status`], [`count_by_agent`], [`status_breakdown`]
//! - **Follow-ups**: [`due_today`], [`due_pending`], [`malformed_follow_ups`]
//! - **Filtering**: [`filter_leads`] with a [`LeadFilter`]
//! - **Rates**: [`conversion_rate`], undefined when nothing is assigned
//! - **Slicing**: [`top_n`], a positional preview prefix
//!
//! Results that are sequences of leads keep the input order.
//!
//! # Example
//!
//! ```rust
//! use athenuru_model::{LeadSnapshot, LeadStatus};
//! use athenuru_query::{conversion_rate, count_by_status, filter_leads, LeadFilter};
//!
//! let snapshot = LeadSnapshot::demo().unwrap();
//! let converted = count_by_status(snapshot.leads(), LeadStatus::Converted);
//! let filter = LeadFilter::new().with_status(LeadStatus::Converted);
//! assert_eq!(filter_leads(snapshot.leads(), &filter).len(), converted);
//!
//! let john = snapshot.agent("John Smith").unwrap();
//! assert_eq!(conversion_rate(john).to_string(), "69%");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod counts;
pub mod filter;
pub mod followups;
pub mod rates;
pub mod rollup;
pub mod slice;

// Re-exports
pub use counts::{count_active_agents, count_by_agent, count_by_status, status_breakdown, StatusCount};
pub use filter::{filter_leads, leads_for_agent, Criterion, LeadFilter, ALL_SENTINEL};
pub use followups::{due_pending, due_today, malformed_follow_ups};
pub use rates::{conversion_rate, ConversionRate};
pub use rollup::{agent_rollups, monthly_intake, AgentRollup, MonthlyCount};
pub use slice::{top_n, top_n_by_key};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for derivations
    pub use crate::{
        conversion_rate, count_by_agent, count_by_status, due_pending, due_today, filter_leads,
        top_n, ConversionRate, LeadFilter,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
