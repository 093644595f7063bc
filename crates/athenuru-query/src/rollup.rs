//! Aggregates computed from the leads themselves
//!
//! Unlike [`AgentSummary`](athenuru_model::AgentSummary), which carries the
//! tallies the source reports, these are recomputed from lead records.

use std::collections::BTreeMap;

use athenuru_model::{Calendar, Lead, LeadStatus};
use chrono::{Datelike, Month};
use indexmap::IndexMap;
use serde::Serialize;

/// Per-agent tallies derived from leads
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRollup {
    pub agent: String,
    pub assigned: usize,
    pub converted: usize,
    pub lost: usize,
    /// Neither converted nor lost
    pub open: usize,
}

impl AgentRollup {
    fn new(agent: &str) -> Self {
        Self {
            agent: agent.to_string(),
            assigned: 0,
            converted: 0,
            lost: 0,
            open: 0,
        }
    }

    fn record(&mut self, status: LeadStatus) {
        self.assigned += 1;
        match status {
            LeadStatus::Converted => self.converted += 1,
            LeadStatus::Lost => self.lost += 1,
            _ => self.open += 1,
        }
    }
}

/// One rollup per assigned agent name, in first-seen order
#[must_use]
pub fn agent_rollups(leads: &[Lead]) -> Vec<AgentRollup> {
    let mut rollups: IndexMap<&str, AgentRollup> = IndexMap::new();
    for lead in leads {
        rollups
            .entry(lead.assigned_agent.as_str())
            .or_insert_with_key(|agent| AgentRollup::new(agent))
            .record(lead.status);
    }
    rollups.into_values().collect()
}

/// Leads created in one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    pub year: i32,
    pub month: u32,
    /// Short month name (`"Jan"`)
    pub label: String,
    pub count: usize,
}

/// Lead creation counts per month, chronological
///
/// Months with no leads are omitted; unparseable creation dates are skipped.
#[must_use]
pub fn monthly_intake(leads: &[Lead], calendar: &Calendar) -> Vec<MonthlyCount> {
    let mut months: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    let mut skipped = 0usize;
    for lead in leads {
        match lead.created.moment() {
            Some(moment) => {
                let day = calendar.day_of(moment);
                *months.entry((day.year(), day.month())).or_default() += 1;
            }
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        tracing::warn!(skipped, "leads with unparseable creation dates left out of intake");
    }
    months
        .into_iter()
        .map(|((year, month), count)| MonthlyCount {
            year,
            month,
            label: month_label(month),
            count,
        })
        .collect()
}

fn month_label(month: u32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name()[..3].to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use athenuru_test_utils::LeadBuilder;
    use pretty_assertions::assert_eq;

    #[test]
    fn rollups_follow_first_seen_order() {
        let leads = vec![
            LeadBuilder::new("1").agent("Sarah Johnson").build(),
            LeadBuilder::new("2").agent("John Smith").status(LeadStatus::Converted).build(),
            LeadBuilder::new("3").agent("Sarah Johnson").status(LeadStatus::Lost).build(),
            LeadBuilder::new("4").agent("John Smith").status(LeadStatus::Proposal).build(),
        ];
        let rollups = agent_rollups(&leads);
        assert_eq!(
            rollups,
            vec![
                AgentRollup {
                    agent: "Sarah Johnson".into(),
                    assigned: 2,
                    converted: 0,
                    lost: 1,
                    open: 1,
                },
                AgentRollup {
                    agent: "John Smith".into(),
                    assigned: 2,
                    converted: 1,
                    lost: 0,
                    open: 1,
                },
            ]
        );
    }

    #[test]
    fn rollup_parts_sum_to_assigned() {
        let leads: Vec<_> = LeadStatus::ALL
            .into_iter()
            .enumerate()
            .map(|(i, status)| LeadBuilder::new(i.to_string()).status(status).build())
            .collect();
        let rollup = &agent_rollups(&leads)[0];
        assert_eq!(rollup.converted + rollup.lost + rollup.open, rollup.assigned);
        assert_eq!(rollup.open, 5);
    }

    #[test]
    fn intake_is_chronological_and_skips_malformed() {
        let leads = vec![
            LeadBuilder::new("1").created("2024-03-02").build(),
            LeadBuilder::new("2").created("2023-12-30").build(),
            LeadBuilder::new("3").created("2024-03-28").build(),
            LeadBuilder::new("4").created("last spring").build(),
        ];
        let intake = monthly_intake(&leads, &Calendar::utc());
        let summary: Vec<_> = intake
            .iter()
            .map(|m| (m.year, m.label.as_str(), m.count))
            .collect();
        assert_eq!(summary, vec![(2023, "Dec", 1), (2024, "Mar", 2)]);
    }

    #[test]
    fn empty_leads_give_empty_aggregates() {
        assert!(agent_rollups(&[]).is_empty());
        assert!(monthly_intake(&[], &Calendar::utc()).is_empty());
    }
}
