//! Role dispatch

use athenuru_model::Role;
use athenuru_query::LeadFilter;
use serde::Serialize;

use crate::admin::AdminDashboard;
use crate::agent::AgentDashboard;
use crate::context::DashboardContext;
use crate::manager::ManagerDashboard;

/// Dashboard for one role
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Dashboard {
    Admin(AdminDashboard),
    Manager(ManagerDashboard),
    Agent(AgentDashboard),
}

impl Dashboard {
    /// Compose the dashboard `role` sees
    ///
    /// `filter` applies to the manager's assignment table only.
    #[must_use]
    pub fn compose(role: Role, ctx: &DashboardContext<'_>, filter: &LeadFilter) -> Self {
        match role {
            Role::Admin => Dashboard::Admin(AdminDashboard::compose(ctx)),
            Role::Manager => Dashboard::Manager(ManagerDashboard::compose(ctx, filter)),
            Role::Agent => Dashboard::Agent(AgentDashboard::compose(ctx)),
        }
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Dashboard::Admin(d) => d.title,
            Dashboard::Manager(d) => d.title,
            Dashboard::Agent(d) => d.title,
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[crate::card::SummaryCard] {
        match self {
            Dashboard::Admin(d) => &d.cards,
            Dashboard::Manager(d) => &d.cards,
            Dashboard::Agent(d) => &d.cards,
        }
    }
}
