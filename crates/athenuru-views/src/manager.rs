//! Manager dashboard
//!
//! Team totals, the filterable lead assignment table and per-agent
//! performance with conversion rates.

use athenuru_model::LeadStatus;
use athenuru_query::{agent_rollups, count_by_status, due_pending, filter_leads, top_n, AgentRollup, LeadFilter};
use serde::Serialize;

use crate::card::{CardVariant, SummaryCard};
use crate::context::DashboardContext;
use crate::rows::{lead_rows, AgentPerformanceRow, LeadRow};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerDashboard {
    pub title: &'static str,
    pub cards: Vec<SummaryCard>,
    /// Filter applied to the assignment table
    pub filter: LeadFilter,
    /// Number of leads passing the filter before the preview cut
    pub matching_leads: usize,
    pub lead_assignment: Vec<LeadRow>,
    /// Agent names offered by the agent filter and reassignment picker
    pub agent_options: Vec<String>,
    pub agent_performance_chart: Vec<AgentRollup>,
    pub agent_performance: Vec<AgentPerformanceRow>,
}

impl ManagerDashboard {
    pub const TITLE: &'static str = "Manager Dashboard";

    #[must_use]
    pub fn compose(ctx: &DashboardContext<'_>, filter: &LeadFilter) -> Self {
        let snapshot = ctx.snapshot();
        let leads = snapshot.leads();
        let agents = snapshot.agents();

        let pending = due_pending(leads, ctx.now(), ctx.calendar());
        let cards = vec![
            SummaryCard::new("Total Assigned Leads", leads.len()),
            SummaryCard::new("Pending Follow-ups", pending.len()).with_variant(CardVariant::Warning),
            SummaryCard::new("Converted Leads", count_by_status(leads, LeadStatus::Converted))
                .with_variant(CardVariant::Success),
            SummaryCard::new("Agents Under You", agents.len()).with_variant(CardVariant::Primary),
        ];

        let matching = filter_leads(leads, filter);
        let preview = top_n(&matching, ctx.config().previews.manager_leads);
        tracing::debug!(
            matching = matching.len(),
            preview = preview.len(),
            "composed manager dashboard"
        );

        Self {
            title: Self::TITLE,
            cards,
            filter: filter.clone(),
            matching_leads: matching.len(),
            lead_assignment: lead_rows(preview.iter().copied()),
            agent_options: agents.iter().map(|agent| agent.name.clone()).collect(),
            agent_performance_chart: agent_rollups(leads),
            agent_performance: agents.iter().map(AgentPerformanceRow::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::find_card;
    use crate::config::DashboardConfig;
    use athenuru_query::ConversionRate;
    use athenuru_test_utils::sample_snapshot;
    use chrono::{TimeZone, Utc};

    fn compose(filter: &LeadFilter) -> ManagerDashboard {
        let snapshot = sample_snapshot();
        let config = DashboardConfig::default();
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 9, 0, 0).unwrap();
        let ctx = DashboardContext::new(&snapshot, &config, now).unwrap();
        ManagerDashboard::compose(&ctx, filter)
    }

    #[test]
    fn pending_counts_follow_ups_at_or_before_now() {
        let dashboard = compose(&LeadFilter::new());
        // 2025-06-15 is due, 2025-06-16 is not
        assert_eq!(find_card(&dashboard.cards, "Pending Follow-ups").unwrap().value, 1);
        assert_eq!(find_card(&dashboard.cards, "Agents Under You").unwrap().value, 3);
    }

    #[test]
    fn filter_applies_before_preview() {
        let dashboard = compose(&LeadFilter::new().with_agent("John Smith"));
        assert_eq!(dashboard.matching_leads, 3);
        let ids: Vec<_> = dashboard.lead_assignment.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "4"]);
    }

    #[test]
    fn performance_rows_mark_undefined_rates() {
        let dashboard = compose(&LeadFilter::new());
        let rates: Vec<_> = dashboard
            .agent_performance
            .iter()
            .map(|row| row.conversion_rate)
            .collect();
        assert_eq!(
            rates,
            vec![
                ConversionRate::Percent(86),
                ConversionRate::Percent(30),
                ConversionRate::Undefined,
            ]
        );
    }
}
