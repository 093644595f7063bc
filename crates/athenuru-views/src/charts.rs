//! Chart series
//!
//! Series data only; rendering is left to the caller.

use athenuru_model::{Calendar, Lead};
use athenuru_query::{agent_rollups, monthly_intake, status_breakdown, AgentRollup, MonthlyCount, StatusCount};
use serde::Serialize;

/// Series for the admin chart row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSet {
    pub leads_by_status: Vec<StatusCount>,
    pub monthly_growth: Vec<MonthlyCount>,
    pub agent_performance: Vec<AgentRollup>,
}

impl ChartSet {
    #[must_use]
    pub fn from_leads(leads: &[Lead], calendar: &Calendar) -> Self {
        Self {
            leads_by_status: status_breakdown(leads),
            monthly_growth: monthly_intake(leads, calendar),
            agent_performance: agent_rollups(leads),
        }
    }
}
