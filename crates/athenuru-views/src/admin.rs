//! Admin dashboard
//!
//! Organization-wide totals, the chart row, a positional lead preview and
//! the user management table.

use athenuru_model::LeadStatus;
use athenuru_query::{count_active_agents, count_by_status, top_n};
use serde::Serialize;

use crate::card::{CardVariant, SummaryCard};
use crate::charts::ChartSet;
use crate::context::DashboardContext;
use crate::rows::{lead_rows, LeadRow, UserRow};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub title: &'static str,
    pub cards: Vec<SummaryCard>,
    pub charts: ChartSet,
    /// First leads in snapshot order
    pub lead_overview: Vec<LeadRow>,
    pub users: Vec<UserRow>,
}

impl AdminDashboard {
    pub const TITLE: &'static str = "Admin Dashboard";

    #[must_use]
    pub fn compose(ctx: &DashboardContext<'_>) -> Self {
        let snapshot = ctx.snapshot();
        let leads = snapshot.leads();

        let cards = vec![
            SummaryCard::new("Total Leads", leads.len()),
            SummaryCard::new("Converted Leads", count_by_status(leads, LeadStatus::Converted))
                .with_variant(CardVariant::Success),
            SummaryCard::new("Lost Leads", count_by_status(leads, LeadStatus::Lost))
                .with_variant(CardVariant::Destructive),
            SummaryCard::new("Active Agents", count_active_agents(snapshot.users())),
        ];

        let preview = top_n(leads, ctx.config().previews.admin_leads);
        tracing::debug!(leads = leads.len(), preview = preview.len(), "composed admin dashboard");

        Self {
            title: Self::TITLE,
            cards,
            charts: ChartSet::from_leads(leads, ctx.calendar()),
            lead_overview: lead_rows(preview),
            users: snapshot.users().iter().map(UserRow::from).collect(),
        }
    }
}
