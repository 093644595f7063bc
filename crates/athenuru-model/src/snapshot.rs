//! Immutable record store
//!
//! [`LeadSnapshot`] holds every collection the dashboards read. It is built
//! once through [`SnapshotBuilder`] and exposes only shared slices, so a
//! snapshot handed to the query layer can never change underneath it.

use crate::activity::Activity;
use crate::error::{ModelError, RecordKind};
use crate::lead::Lead;
use crate::people::{AgentSummary, User};
use crate::validation::{SnapshotValidator, SummaryPolicy};

/// Read-only collections of leads, agents, users and activities
///
/// Every sequence keeps the order it was supplied in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadSnapshot {
    leads: Vec<Lead>,
    agents: Vec<AgentSummary>,
    users: Vec<User>,
    activities: Vec<Activity>,
}

impl LeadSnapshot {
    /// Start building a snapshot
    #[inline]
    #[must_use]
    pub fn builder() -> SnapshotBuilder {
        SnapshotBuilder::default()
    }

    /// Snapshot with no records
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Leads in source order
    #[inline]
    #[must_use]
    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    /// Agent summaries in source order
    #[inline]
    #[must_use]
    pub fn agents(&self) -> &[AgentSummary] {
        &self.agents
    }

    /// User accounts in source order
    #[inline]
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Activities in source order
    #[inline]
    #[must_use]
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Look up an agent summary by exact name
    ///
    /// Lead assignments are plain names, so a miss is expected and not an error.
    #[must_use]
    pub fn agent(&self, name: &str) -> Option<&AgentSummary> {
        self.agents.iter().find(|agent| agent.name == name)
    }

    /// Names assigned on leads that match no agent summary, first-seen order
    #[must_use]
    pub fn unmatched_assignments(&self) -> Vec<&str> {
        let mut unmatched: Vec<&str> = Vec::new();
        for lead in &self.leads {
            let name = lead.assigned_agent.as_str();
            if self.agent(name).is_none() && !unmatched.contains(&name) {
                unmatched.push(name);
            }
        }
        unmatched
    }
}

/// Collects records and validates them into a [`LeadSnapshot`]
#[derive(Debug, Clone, Default)]
pub struct SnapshotBuilder {
    leads: Vec<Lead>,
    agents: Vec<AgentSummary>,
    users: Vec<User>,
    activities: Vec<Activity>,
    policy: SummaryPolicy,
}

impl SnapshotBuilder {
    /// Add one lead
    #[must_use]
    pub fn lead(mut self, lead: Lead) -> Self {
        self.leads.push(lead);
        self
    }

    /// Add leads
    #[must_use]
    pub fn leads(mut self, leads: impl IntoIterator<Item = Lead>) -> Self {
        self.leads.extend(leads);
        self
    }

    /// Add one agent summary
    #[must_use]
    pub fn agent(mut self, agent: AgentSummary) -> Self {
        self.agents.push(agent);
        self
    }

    /// Add agent summaries
    #[must_use]
    pub fn agents(mut self, agents: impl IntoIterator<Item = AgentSummary>) -> Self {
        self.agents.extend(agents);
        self
    }

    /// Add user accounts
    #[must_use]
    pub fn users(mut self, users: impl IntoIterator<Item = User>) -> Self {
        self.users.extend(users);
        self
    }

    /// Add activities
    #[must_use]
    pub fn activities(mut self, activities: impl IntoIterator<Item = Activity>) -> Self {
        self.activities.extend(activities);
        self
    }

    /// Policy for inconsistent agent summaries
    #[must_use]
    pub fn summary_policy(mut self, policy: SummaryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validate and freeze
    ///
    /// # Errors
    /// Returns [`ModelError::DuplicateId`] for repeated identifiers within a
    /// record kind, or [`ModelError::InconsistentAgentSummary`] under
    /// [`SummaryPolicy::Enforce`]
    pub fn build(self) -> Result<LeadSnapshot, ModelError> {
        SnapshotValidator::check_unique(RecordKind::Lead, self.leads.iter().map(|l| &l.id))?;
        SnapshotValidator::check_unique(RecordKind::Agent, self.agents.iter().map(|a| &a.id))?;
        SnapshotValidator::check_unique(RecordKind::User, self.users.iter().map(|u| &u.id))?;
        SnapshotValidator::check_unique(
            RecordKind::Activity,
            self.activities.iter().map(|a| &a.id),
        )?;
        let tolerated = SnapshotValidator::new(self.policy).check_agents(&self.agents)?;

        tracing::info!(
            leads = self.leads.len(),
            agents = self.agents.len(),
            users = self.users.len(),
            activities = self.activities.len(),
            tolerated,
            "lead snapshot built"
        );

        Ok(LeadSnapshot {
            leads: self.leads,
            agents: self.agents,
            users: self.users,
            activities: self.activities,
        })
    }
}
