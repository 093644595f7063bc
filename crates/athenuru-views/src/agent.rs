//! Agent dashboard
//!
//! Totals and the lead preview are restricted to the agent of record.

use athenuru_model::{Activity, LeadStatus};
use athenuru_query::{due_today, filter_leads, leads_for_agent, top_n, LeadFilter};
use serde::Serialize;

use crate::card::{CardVariant, SummaryCard};
use crate::context::DashboardContext;
use crate::rows::{lead_rows, LeadRow};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDashboard {
    pub title: &'static str,
    pub agent: String,
    pub cards: Vec<SummaryCard>,
    pub my_leads: Vec<LeadRow>,
    pub activity_timeline: Vec<Activity>,
}

impl AgentDashboard {
    pub const TITLE: &'static str = "My Dashboard";

    #[must_use]
    pub fn compose(ctx: &DashboardContext<'_>) -> Self {
        let snapshot = ctx.snapshot();
        let agent = ctx.config().agent.name.as_str();
        if snapshot.agent(agent).is_none() {
            tracing::warn!(agent, "agent of record has no summary in the snapshot");
        }

        let leads = snapshot.leads();
        let mine = leads_for_agent(leads, agent);
        let own = |status: LeadStatus| {
            filter_leads(leads, &LeadFilter::new().with_agent(agent).with_status(status)).len()
        };
        let today = due_today(leads, ctx.today(), ctx.calendar())
            .into_iter()
            .filter(|lead| lead.is_assigned_to(agent))
            .count();

        let cards = vec![
            SummaryCard::new("My Leads", mine.len()),
            SummaryCard::new("Follow-ups Today", today).with_variant(CardVariant::Warning),
            SummaryCard::new("Converted Leads", own(LeadStatus::Converted))
                .with_variant(CardVariant::Success),
            SummaryCard::new("Lost Leads", own(LeadStatus::Lost))
                .with_variant(CardVariant::Destructive),
        ];

        Self {
            title: Self::TITLE,
            agent: agent.to_string(),
            cards,
            my_leads: lead_rows(top_n(&mine, ctx.config().previews.agent_leads).iter().copied()),
            activity_timeline: snapshot.activities().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::find_card;
    use crate::config::{DashboardConfig, PreviewConfig};
    use athenuru_test_utils::sample_snapshot;
    use chrono::{TimeZone, Utc};

    fn compose(config: &DashboardConfig) -> AgentDashboard {
        let snapshot = sample_snapshot();
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 9, 0, 0).unwrap();
        let ctx = DashboardContext::new(&snapshot, config, now).unwrap();
        AgentDashboard::compose(&ctx)
    }

    #[test]
    fn cards_cover_only_own_leads() {
        let dashboard = compose(&DashboardConfig::default());
        assert_eq!(dashboard.agent, "John Smith");
        assert_eq!(find_card(&dashboard.cards, "My Leads").unwrap().value, 3);
        assert_eq!(find_card(&dashboard.cards, "Follow-ups Today").unwrap().value, 1);
        assert_eq!(find_card(&dashboard.cards, "Converted Leads").unwrap().value, 1);
        assert_eq!(find_card(&dashboard.cards, "Lost Leads").unwrap().value, 1);
        assert!(dashboard
            .my_leads
            .iter()
            .all(|row| row.assigned_agent == "John Smith"));
    }

    #[test]
    fn other_agent_sees_tomorrow_as_not_due() {
        let dashboard = compose(&DashboardConfig::default().with_agent("Sarah Johnson"));
        assert_eq!(find_card(&dashboard.cards, "My Leads").unwrap().value, 1);
        assert_eq!(find_card(&dashboard.cards, "Follow-ups Today").unwrap().value, 0);
    }

    #[test]
    fn preview_cut_leaves_totals_intact() {
        let config = DashboardConfig::default().with_previews(PreviewConfig {
            agent_leads: 2,
            ..PreviewConfig::default()
        });
        let dashboard = compose(&config);
        let ids: Vec<_> = dashboard.my_leads.iter().map(|row| row.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(find_card(&dashboard.cards, "My Leads").unwrap().value, 3);
        assert_eq!(find_card(&dashboard.cards, "Lost Leads").unwrap().value, 1);
    }

    #[test]
    fn unknown_agent_gives_empty_dashboard() {
        let dashboard = compose(&DashboardConfig::default().with_agent("Nobody"));
        assert!(dashboard.my_leads.is_empty());
        assert!(dashboard.cards.iter().all(|card| card.value == 0));
        assert_eq!(dashboard.activity_timeline.len(), 1);
    }
}
