//! Testing utilities for the Athenuru workspace
//!
//! Shared builders, fixtures, and proptest strategies.

#![allow(missing_docs)]

use athenuru_model::{
    Activity, ActivityKind, AgentSummary, DateField, Lead, LeadSnapshot, LeadStatus, RecordId,
    Role, User, UserStatus,
};
use chrono::NaiveDate;
use proptest::prelude::*;

/// Agent names used across fixtures
pub const AGENTS: [&str; 5] = [
    "John Smith",
    "Sarah Johnson",
    "Mike Brown",
    "Emily Davis",
    "David Wilson",
];

/// Fluent builder for [`Lead`] with sensible defaults
#[derive(Debug, Clone)]
pub struct LeadBuilder {
    lead: Lead,
}

impl LeadBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            lead: Lead {
                name: format!("Lead {id}"),
                email: format!("lead{id}@example.com"),
                phone: "+1 (555) 000-0000".to_string(),
                company: "Example Co".to_string(),
                source: "Website".to_string(),
                status: LeadStatus::New,
                assigned_agent: AGENTS[0].to_string(),
                created: DateField::parse("2024-01-15"),
                next_follow_up: None,
                id: RecordId::new(id),
            },
        }
    }

    #[must_use]
    pub fn status(mut self, status: LeadStatus) -> Self {
        self.lead.status = status;
        self
    }

    #[must_use]
    pub fn agent(mut self, agent: impl Into<String>) -> Self {
        self.lead.assigned_agent = agent.into();
        self
    }

    #[must_use]
    pub fn created(mut self, date: &str) -> Self {
        self.lead.created = DateField::parse(date);
        self
    }

    #[must_use]
    pub fn follow_up(mut self, date: &str) -> Self {
        self.lead.next_follow_up = Some(DateField::parse(date));
        self
    }

    #[must_use]
    pub fn build(self) -> Lead {
        self.lead
    }
}

pub fn lead_with_status(id: &str, status: LeadStatus) -> Lead {
    LeadBuilder::new(id).status(status).build()
}

pub fn lead_for_agent(id: &str, agent: &str) -> Lead {
    LeadBuilder::new(id).agent(agent).build()
}

/// Five leads with statuses [new, new, converted, lost, qualified]
pub fn five_lead_scenario() -> Vec<Lead> {
    [
        LeadStatus::New,
        LeadStatus::New,
        LeadStatus::Converted,
        LeadStatus::Lost,
        LeadStatus::Qualified,
    ]
    .into_iter()
    .enumerate()
    .map(|(i, status)| lead_with_status(&(i + 1).to_string(), status))
    .collect()
}

pub fn agent_summary(name: &str, assigned: u32, converted: u32, pending: u32) -> AgentSummary {
    AgentSummary::new(name, name, assigned, converted, pending)
}

pub fn user(id: &str, role: Role, status: UserStatus) -> User {
    User {
        id: RecordId::new(id),
        name: format!("User {id}"),
        email: format!("user{id}@athenuru.com"),
        role,
        status,
    }
}

pub fn activity(id: &str, kind: ActivityKind, message: &str) -> Activity {
    Activity {
        id: RecordId::new(id),
        kind,
        message: message.to_string(),
        time: "Just now".to_string(),
    }
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Small snapshot covering every record kind
pub fn sample_snapshot() -> LeadSnapshot {
    LeadSnapshot::builder()
        .leads(vec![
            LeadBuilder::new("1")
                .agent("John Smith")
                .follow_up("2025-06-15")
                .build(),
            LeadBuilder::new("2")
                .agent("Sarah Johnson")
                .status(LeadStatus::Contacted)
                .follow_up("2025-06-16")
                .build(),
            LeadBuilder::new("3")
                .agent("John Smith")
                .status(LeadStatus::Converted)
                .created("2024-02-03")
                .build(),
            LeadBuilder::new("4")
                .agent("John Smith")
                .status(LeadStatus::Lost)
                .created("2024-03-09")
                .build(),
        ])
        .agents(vec![
            agent_summary("John Smith", 28, 24, 2),
            agent_summary("Sarah Johnson", 10, 3, 5),
            agent_summary("Idle Agent", 0, 0, 0),
        ])
        .users(vec![
            user("1", Role::Admin, UserStatus::Active),
            user("2", Role::Agent, UserStatus::Active),
            user("3", Role::Agent, UserStatus::Inactive),
        ])
        .activities(vec![activity("1", ActivityKind::Call, "Called lead 1")])
        .build()
        .unwrap()
}

pub fn arb_status() -> impl Strategy<Value = LeadStatus> {
    prop::sample::select(LeadStatus::ALL.to_vec())
}

pub fn arb_agent() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(AGENTS.to_vec()).prop_map(str::to_string),
        "[A-Za-z ]{0,12}",
    ]
}

/// Follow-up text: absent, a valid day in June 2025, or garbage
pub fn arb_follow_up() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        (1u32..=30).prop_map(|d| Some(format!("2025-06-{d:02}"))),
        "[a-z]{1,8}".prop_map(Some),
    ]
}

pub fn arb_lead(id: usize) -> impl Strategy<Value = Lead> {
    (arb_status(), arb_agent(), arb_follow_up()).prop_map(move |(status, agent, follow_up)| {
        let mut builder = LeadBuilder::new(id.to_string()).status(status).agent(agent);
        if let Some(date) = follow_up {
            builder = builder.follow_up(&date);
        }
        builder.build()
    })
}

/// Up to `max` leads with distinct ids
pub fn arb_leads(max: usize) -> impl Strategy<Value = Vec<Lead>> {
    (0..=max).prop_flat_map(|len| (0..len).map(arb_lead).collect::<Vec<_>>())
}
