//! Agents and user accounts

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, RecordKind};
use crate::lead::RecordId;

/// Per-agent tallies as reported by the source data
///
/// `converted` and `pending` are disjoint subsets of `leads_assigned`;
/// see [`AgentSummary::is_consistent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSummary {
    /// Unique identifier
    pub id: RecordId,
    /// Agent name, the key leads refer to
    pub name: String,
    /// Leads assigned
    pub leads_assigned: u32,
    /// Leads converted
    pub converted: u32,
    /// Leads still awaiting follow-up
    pub pending: u32,
}

impl AgentSummary {
    /// Build a summary without checking tallies
    #[must_use]
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        leads_assigned: u32,
        converted: u32,
        pending: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            leads_assigned,
            converted,
            pending,
        }
    }

    /// True when converted + pending does not exceed leads assigned
    #[inline]
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        u64::from(self.converted) + u64::from(self.pending) <= u64::from(self.leads_assigned)
    }

    /// Check tallies
    ///
    /// # Errors
    /// Returns [`ModelError::InconsistentAgentSummary`] when converted +
    /// pending exceeds leads assigned
    pub fn check(&self) -> Result<(), ModelError> {
        if self.is_consistent() {
            Ok(())
        } else {
            Err(ModelError::InconsistentAgentSummary {
                agent: self.name.clone(),
                assigned: self.leads_assigned,
                converted: self.converted,
                pending: self.pending,
            })
        }
    }
}

/// Agent summary as it appears in a fixture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAgentSummary {
    pub id: String,
    pub name: String,
    pub leads_assigned: u32,
    pub converted: u32,
    pub pending: u32,
}

impl TryFrom<RawAgentSummary> for AgentSummary {
    type Error = ModelError;

    fn try_from(raw: RawAgentSummary) -> Result<Self, Self::Error> {
        let id = RecordId::new(raw.id).require(RecordKind::Agent)?;
        Ok(Self {
            id,
            name: raw.name,
            leads_assigned: raw.leads_assigned,
            converted: raw.converted,
            pending: raw.pending,
        })
    }
}

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    /// Full access
    Admin,
    /// Oversees agents
    Manager,
    /// Works leads
    Agent,
}

impl Role {
    /// Every role
    pub const ALL: [Role; 3] = [Role::Admin, Role::Manager, Role::Agent];

    /// Display form (`"Manager"`)
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Agent => "Agent",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ModelError::UnknownRole(s.to_string()))
    }
}

/// Account state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UserStatus {
    /// May sign in
    Active,
    /// Disabled
    Inactive,
}

impl UserStatus {
    /// Display form
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
        }
    }
}

impl Display for UserStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [UserStatus::Active, UserStatus::Inactive]
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ModelError::UnknownUserStatus(s.to_string()))
    }
}

/// User account shown in user management
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Unique identifier
    pub id: RecordId,
    /// Full name
    pub name: String,
    /// Sign-in email
    pub email: String,
    /// Access role
    pub role: Role,
    /// Account state
    pub status: UserStatus,
}

impl User {
    /// Active account with the Agent role
    #[inline]
    #[must_use]
    pub fn is_active_agent(&self) -> bool {
        self.role == Role::Agent && self.status == UserStatus::Active
    }
}

/// User as it appears in a fixture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawUser {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: String,
    pub status: String,
}

impl TryFrom<RawUser> for User {
    type Error = ModelError;

    fn try_from(raw: RawUser) -> Result<Self, Self::Error> {
        let id = RecordId::new(raw.id).require(RecordKind::User)?;
        Ok(Self {
            id,
            name: raw.name,
            email: raw.email,
            role: raw.role.parse()?,
            status: raw.status.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_user(role: &str, status: &str) -> RawUser {
        RawUser {
            id: "u1".into(),
            name: "Sarah Johnson".into(),
            email: "sarah@athenuru.com".into(),
            role: role.into(),
            status: status.into(),
        }
    }

    #[test]
    fn summary_consistency() {
        assert!(AgentSummary::new("1", "John Smith", 45, 24, 8).is_consistent());
        assert!(AgentSummary::new("1", "Idle", 0, 0, 0).is_consistent());
        assert!(!AgentSummary::new("1", "Over", 10, 8, 3).is_consistent());
    }

    #[test]
    fn summary_check_reports_tallies() {
        let err = AgentSummary::new("1", "Over", 10, 8, 3).check().unwrap_err();
        assert_eq!(
            err,
            ModelError::InconsistentAgentSummary {
                agent: "Over".into(),
                assigned: 10,
                converted: 8,
                pending: 3,
            }
        );
    }

    #[test]
    fn summary_consistency_does_not_overflow() {
        assert!(!AgentSummary::new("1", "Max", u32::MAX, u32::MAX, 1).is_consistent());
    }

    #[test]
    fn user_roles_parse() {
        let user = User::try_from(raw_user("Agent", "Active")).unwrap();
        assert!(user.is_active_agent());

        let user = User::try_from(raw_user("manager", "Inactive")).unwrap();
        assert_eq!(user.role, Role::Manager);
        assert!(!user.is_active_agent());
    }

    #[test]
    fn unknown_role_rejected() {
        let err = User::try_from(raw_user("Owner", "Active")).unwrap_err();
        assert_eq!(err, ModelError::UnknownRole("Owner".into()));
    }

    #[test]
    fn unknown_user_status_rejected() {
        let err = User::try_from(raw_user("Agent", "Suspended")).unwrap_err();
        assert_eq!(err, ModelError::UnknownUserStatus("Suspended".into()));
    }
}
