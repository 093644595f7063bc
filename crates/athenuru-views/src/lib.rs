//! Athenuru Views
//!
//! Serializable view models for the admin, manager and agent dashboards,
//! composed from a [`LeadSnapshot`](athenuru_model::LeadSnapshot) through the
//! query functions. No rendering happens here.
//!
//! # Overview
//!
//! - **DashboardConfig**: calendar offset, validation policy, preview sizes
//! - **DashboardContext**: snapshot + config + explicit reference instant
//! - **Dashboard**: role-specific cards, tables and chart series
//! - **ProfileEditor**: view/edit/save/cancel over a local profile
//!
//! # Example
//!
//! ```rust
//! use athenuru_model::{LeadSnapshot, Role};
//! use athenuru_query::LeadFilter;
//! use athenuru_views::{Dashboard, DashboardConfig, DashboardContext};
//! use chrono::{TimeZone, Utc};
//!
//! let snapshot = LeadSnapshot::demo().unwrap();
//! let config = DashboardConfig::default();
//! let now = Utc.with_ymd_and_hms(2024, 1, 20, 12, 0, 0).unwrap();
//! let ctx = DashboardContext::new(&snapshot, &config, now).unwrap();
//!
//! let dashboard = Dashboard::compose(Role::Admin, &ctx, &LeadFilter::new());
//! assert_eq!(dashboard.title(), "Admin Dashboard");
//! assert_eq!(dashboard.cards()[0].value, snapshot.leads().len());
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod admin;
pub mod agent;
pub mod card;
pub mod charts;
pub mod config;
pub mod context;
pub mod dashboard;
pub mod error;
pub mod manager;
pub mod profile;
pub mod rows;

// Re-exports
pub use admin::AdminDashboard;
pub use agent::AgentDashboard;
pub use card::{find_card, CardVariant, SummaryCard};
pub use charts::ChartSet;
pub use config::{AgentConfig, CalendarConfig, DashboardConfig, PreviewConfig, ValidationConfig};
pub use context::DashboardContext;
pub use dashboard::Dashboard;
pub use error::{ConfigError, ProfileError};
pub use manager::ManagerDashboard;
pub use profile::{Notice, Profile, ProfileEditor, ProfileField};
pub use rows::{AgentPerformanceRow, LeadRow, UserRow};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for composing dashboards
    pub use crate::{Dashboard, DashboardConfig, DashboardContext, ProfileEditor};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
