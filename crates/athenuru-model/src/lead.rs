//! Lead records and their lifecycle status
//!
//! A [`Lead`] is only ever built from a [`RawLead`] (or the typed builder in
//! tests), so its [`LeadStatus`] is always one of the seven stages.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::date::DateField;
use crate::error::{ModelError, RecordKind};

/// Identifier of a record within its kind
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wrap an identifier
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn require(self, kind: RecordKind) -> Result<Self, ModelError> {
        if self.0.trim().is_empty() {
            return Err(ModelError::EmptyField {
                kind,
                id: self.0,
                field: "id",
            });
        }
        Ok(self)
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Pipeline stage of a lead
///
/// Declaration order is lifecycle order; `ALL` lists every stage once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    /// Freshly captured
    New,
    /// First contact made
    Contacted,
    /// Fit confirmed
    Qualified,
    /// Proposal sent
    Proposal,
    /// Terms under discussion
    Negotiation,
    /// Won
    Converted,
    /// Dropped
    Lost,
}

impl LeadStatus {
    /// Every status, in lifecycle order
    pub const ALL: [LeadStatus; 7] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Qualified,
        LeadStatus::Proposal,
        LeadStatus::Negotiation,
        LeadStatus::Converted,
        LeadStatus::Lost,
    ];

    /// Wire form (`"negotiation"`)
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Qualified => "qualified",
            LeadStatus::Proposal => "proposal",
            LeadStatus::Negotiation => "negotiation",
            LeadStatus::Converted => "converted",
            LeadStatus::Lost => "lost",
        }
    }

    /// Display label (`"Negotiation"`)
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Qualified => "Qualified",
            LeadStatus::Proposal => "Proposal",
            LeadStatus::Negotiation => "Negotiation",
            LeadStatus::Converted => "Converted",
            LeadStatus::Lost => "Lost",
        }
    }

    /// Converted or lost
    #[inline]
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self, LeadStatus::Converted | LeadStatus::Lost)
    }
}

impl Display for LeadStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeadStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ModelError::UnknownStatus(s.to_string()))
    }
}

/// A prospective customer moving through the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    /// Unique identifier
    pub id: RecordId,
    /// Contact name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
    /// Company name
    pub company: String,
    /// Acquisition channel, free text
    pub source: String,
    /// Current stage
    pub status: LeadStatus,
    /// Agent name; not checked against agent records
    pub assigned_agent: String,
    /// Creation date
    #[serde(rename = "date")]
    pub created: DateField,
    /// Next scheduled follow-up
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_follow_up: Option<DateField>,
}

impl Lead {
    /// True when the lead is assigned to exactly this agent name
    #[inline]
    #[must_use]
    pub fn is_assigned_to(&self, agent: &str) -> bool {
        self.assigned_agent == agent
    }
}

/// Lead as it appears in a fixture, before validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLead {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub source: String,
    pub status: String,
    #[serde(default)]
    pub assigned_agent: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_follow_up: Option<String>,
}

impl TryFrom<RawLead> for Lead {
    type Error = ModelError;

    fn try_from(raw: RawLead) -> Result<Self, Self::Error> {
        let id = RecordId::new(raw.id).require(RecordKind::Lead)?;
        let status = raw.status.parse()?;
        Ok(Self {
            id,
            name: raw.name,
            email: raw.email,
            phone: raw.phone,
            company: raw.company,
            source: raw.source,
            status,
            assigned_agent: raw.assigned_agent,
            created: DateField::parse(raw.date),
            next_follow_up: raw
                .next_follow_up
                .filter(|text| !text.trim().is_empty())
                .map(DateField::parse),
        })
    }
}
