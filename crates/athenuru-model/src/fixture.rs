//! Fixture documents
//!
//! A fixture is the serialized form of a snapshot: four arrays of raw
//! records in JSON or YAML. Field names follow the dashboard's original
//! camelCase shape (`assignedAgent`, `nextFollowUp`, `leadsAssigned`).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::activity::{Activity, RawActivity};
use crate::error::FixtureError;
use crate::lead::{Lead, RawLead};
use crate::people::{AgentSummary, RawAgentSummary, RawUser, User};
use crate::snapshot::LeadSnapshot;
use crate::validation::SummaryPolicy;

const DEMO_FIXTURE: &str = include_str!("../fixtures/demo.json");

/// Unvalidated records as read from a document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub leads: Vec<RawLead>,
    #[serde(default)]
    pub agents: Vec<RawAgentSummary>,
    #[serde(default)]
    pub users: Vec<RawUser>,
    #[serde(default)]
    pub activities: Vec<RawActivity>,
}

impl Fixture {
    /// Parse a JSON document
    ///
    /// # Errors
    /// Returns [`FixtureError::Json`] on malformed input
    pub fn from_json_str(text: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse a YAML document
    ///
    /// # Errors
    /// Returns [`FixtureError::Yaml`] on malformed input
    pub fn from_yaml_str(text: &str) -> Result<Self, FixtureError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Read a fixture file, choosing the format by extension
    ///
    /// # Errors
    /// Returns [`FixtureError::Io`] if the file cannot be read,
    /// [`FixtureError::UnsupportedFormat`] for other extensions, or a parse error
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let read = || {
            std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
                path: path.to_path_buf(),
                source,
            })
        };
        match extension.as_deref() {
            Some("json") => Self::from_json_str(&read()?),
            Some("yaml" | "yml") => Self::from_yaml_str(&read()?),
            _ => Err(FixtureError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// The bundled demo records
    ///
    /// # Errors
    /// Only fails if the bundled document is corrupt
    pub fn demo() -> Result<Self, FixtureError> {
        Self::from_json_str(DEMO_FIXTURE)
    }

    /// Validate every record and build a snapshot
    ///
    /// # Errors
    /// Returns [`FixtureError::Invalid`] with the first boundary violation
    pub fn into_snapshot(self, policy: SummaryPolicy) -> Result<LeadSnapshot, FixtureError> {
        let leads = self
            .leads
            .into_iter()
            .map(Lead::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let agents = self
            .agents
            .into_iter()
            .map(AgentSummary::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let users = self
            .users
            .into_iter()
            .map(User::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let activities = self
            .activities
            .into_iter()
            .map(Activity::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let malformed = leads
            .iter()
            .filter(|lead| {
                lead.created.is_malformed()
                    || lead.next_follow_up.as_ref().is_some_and(|d| d.is_malformed())
            })
            .count();
        if malformed > 0 {
            tracing::warn!(malformed, "fixture contains leads with unparseable dates");
        }

        Ok(LeadSnapshot::builder()
            .leads(leads)
            .agents(agents)
            .users(users)
            .activities(activities)
            .summary_policy(policy)
            .build()?)
    }
}

impl LeadSnapshot {
    /// Snapshot of the bundled demo records
    ///
    /// # Errors
    /// Only fails if the bundled document is corrupt
    pub fn demo() -> Result<Self, FixtureError> {
        Fixture::demo()?.into_snapshot(SummaryPolicy::Enforce)
    }
}
