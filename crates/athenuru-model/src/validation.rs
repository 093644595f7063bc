//! Snapshot-level validation
//!
//! Record-level checks (closed sets, blank ids) happen in each `TryFrom`.
//! The checks here need the whole collection: identifier uniqueness and the
//! agent summary tally invariant.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, RecordKind};
use crate::lead::RecordId;
use crate::people::AgentSummary;

/// What to do with an agent summary whose converted + pending exceeds
/// leads assigned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryPolicy {
    /// Reject the snapshot
    #[default]
    Enforce,
    /// Keep the summary and log a warning
    Tolerate,
}

/// Validates whole collections before they become a snapshot
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotValidator {
    policy: SummaryPolicy,
}

impl SnapshotValidator {
    /// Validator applying the given summary policy
    #[inline]
    #[must_use]
    pub fn new(policy: SummaryPolicy) -> Self {
        Self { policy }
    }

    /// Active summary policy
    #[inline]
    #[must_use]
    pub fn policy(&self) -> SummaryPolicy {
        self.policy
    }

    /// Check that no identifier repeats within one record kind
    ///
    /// # Errors
    /// Returns [`ModelError::DuplicateId`] on the first repeat
    pub fn check_unique<'a>(
        kind: RecordKind,
        ids: impl IntoIterator<Item = &'a RecordId>,
    ) -> Result<(), ModelError> {
        let mut seen = HashSet::new();
        for id in ids {
            if !seen.insert(id) {
                return Err(ModelError::DuplicateId {
                    kind,
                    id: id.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Check agent tallies under the configured policy
    ///
    /// Returns how many inconsistent summaries were tolerated.
    ///
    /// # Errors
    /// Under [`SummaryPolicy::Enforce`], returns the first
    /// [`ModelError::InconsistentAgentSummary`]
    pub fn check_agents(&self, agents: &[AgentSummary]) -> Result<usize, ModelError> {
        let mut tolerated = 0;
        for agent in agents {
            if let Err(err) = agent.check() {
                match self.policy {
                    SummaryPolicy::Enforce => return Err(err),
                    SummaryPolicy::Tolerate => {
                        tracing::warn!(agent = %agent.name, "tolerating inconsistent agent summary: {err}");
                        tolerated += 1;
                    }
                }
            }
        }
        Ok(tolerated)
    }
}
