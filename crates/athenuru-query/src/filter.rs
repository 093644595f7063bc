//! Stable lead filtering
//!
//! Each criterion is either the `"all"` sentinel (no constraint, any case)
//! or one exact value. Filtering keeps input order.

use std::str::FromStr;

use athenuru_model::{Lead, LeadStatus, ModelError};
use serde::Serialize;

/// Sentinel accepted wherever a criterion is parsed from text
pub const ALL_SENTINEL: &str = "all";

fn is_all_sentinel(text: &str) -> bool {
    text.eq_ignore_ascii_case(ALL_SENTINEL)
}

/// Constraint on one lead field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "match", content = "value")]
pub enum Criterion<T> {
    /// No constraint
    All,
    /// Field must equal this value
    Only(T),
}

impl<T: PartialEq> Criterion<T> {
    /// True when `value` satisfies the criterion
    #[inline]
    #[must_use]
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Criterion::All => true,
            Criterion::Only(expected) => expected == value,
        }
    }
}

impl<T> Default for Criterion<T> {
    fn default() -> Self {
        Criterion::All
    }
}

impl<T> Criterion<T> {
    /// True when the criterion imposes no constraint
    #[inline]
    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Criterion::All)
    }
}

impl<T: FromStr> FromStr for Criterion<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_all_sentinel(s) {
            Ok(Criterion::All)
        } else {
            s.parse().map(Criterion::Only)
        }
    }
}

/// Criteria for [`filter_leads`]; the default admits every lead
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LeadFilter {
    /// Assigned agent, exact match
    pub agent: Criterion<String>,
    /// Lead status
    pub status: Criterion<LeadStatus>,
}

impl LeadFilter {
    /// Filter with no constraints
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain to one agent
    #[inline]
    #[must_use]
    pub fn with_agent(mut self, agent: impl Into<String>) -> Self {
        self.agent = Criterion::Only(agent.into());
        self
    }

    /// Constrain to one status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: LeadStatus) -> Self {
        self.status = Criterion::Only(status);
        self
    }

    /// Build from optional text parameters; `None` and `"all"` (any case)
    /// leave a field open
    ///
    /// # Errors
    /// Returns [`ModelError::UnknownStatus`] for a status outside the closed set
    pub fn from_params(agent: Option<&str>, status: Option<&str>) -> Result<Self, ModelError> {
        let agent = match agent {
            None => Criterion::All,
            Some(name) if is_all_sentinel(name) => Criterion::All,
            Some(name) => Criterion::Only(name.to_string()),
        };
        let status = match status {
            None => Criterion::All,
            Some(text) => text.parse()?,
        };
        Ok(Self { agent, status })
    }

    /// True when the lead satisfies every criterion
    #[inline]
    #[must_use]
    pub fn matches(&self, lead: &Lead) -> bool {
        self.agent.admits(&lead.assigned_agent) && self.status.admits(&lead.status)
    }
}

/// Leads satisfying every criterion, in input order
#[must_use]
pub fn filter_leads<'a>(leads: &'a [Lead], filter: &LeadFilter) -> Vec<&'a Lead> {
    leads.iter().filter(|lead| filter.matches(lead)).collect()
}

/// Leads assigned to `agent`, in input order
#[inline]
#[must_use]
pub fn leads_for_agent<'a>(leads: &'a [Lead], agent: &str) -> Vec<&'a Lead> {
    leads.iter().filter(|lead| lead.is_assigned_to(agent)).collect()
}
