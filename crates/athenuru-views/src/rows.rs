//! Table rows
//!
//! Owned, serializable projections of records for the dashboard tables.

use athenuru_model::{AgentSummary, Lead, LeadStatus, Role, User, UserStatus};
use athenuru_query::{conversion_rate, ConversionRate};
use serde::Serialize;

/// One lead in a lead table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub source: String,
    pub status: LeadStatus,
    pub assigned_agent: String,
    /// Creation date as supplied
    pub date: String,
    /// Follow-up as supplied, if any
    pub next_follow_up: Option<String>,
}

impl From<&Lead> for LeadRow {
    fn from(lead: &Lead) -> Self {
        Self {
            id: lead.id.to_string(),
            name: lead.name.clone(),
            email: lead.email.clone(),
            phone: lead.phone.clone(),
            company: lead.company.clone(),
            source: lead.source.clone(),
            status: lead.status,
            assigned_agent: lead.assigned_agent.clone(),
            date: lead.created.raw().to_string(),
            next_follow_up: lead.next_follow_up.as_ref().map(|d| d.raw().to_string()),
        }
    }
}

/// Rows for a preview slice
pub fn lead_rows<'a>(leads: impl IntoIterator<Item = &'a Lead>) -> Vec<LeadRow> {
    leads.into_iter().map(LeadRow::from).collect()
}

/// One user in the user management table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            status: user.status,
        }
    }
}

/// One agent in the performance table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentPerformanceRow {
    pub name: String,
    pub leads_assigned: u32,
    pub converted: u32,
    pub pending: u32,
    pub conversion_rate: ConversionRate,
}

impl From<&AgentSummary> for AgentPerformanceRow {
    fn from(agent: &AgentSummary) -> Self {
        Self {
            name: agent.name.clone(),
            leads_assigned: agent.leads_assigned,
            converted: agent.converted,
            pending: agent.pending,
            conversion_rate: conversion_rate(agent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use athenuru_test_utils::{agent_summary, LeadBuilder};

    #[test]
    fn lead_row_keeps_raw_dates() {
        let lead = LeadBuilder::new("7")
            .created("2024-01-09")
            .follow_up("someday")
            .build();
        let row = LeadRow::from(&lead);
        assert_eq!(row.date, "2024-01-09");
        assert_eq!(row.next_follow_up.as_deref(), Some("someday"));
    }

    #[test]
    fn performance_row_carries_rate() {
        let row = AgentPerformanceRow::from(&agent_summary("Mike Brown", 36, 28, 6));
        assert_eq!(row.conversion_rate, ConversionRate::Percent(78));

        let idle = AgentPerformanceRow::from(&agent_summary("Idle", 0, 0, 0));
        assert_eq!(idle.conversion_rate, ConversionRate::Undefined);
    }
}
