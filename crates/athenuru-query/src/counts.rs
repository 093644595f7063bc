//! Scalar tallies over leads and users
//!
//! Every lead has exactly one status, so summing [`count_by_status`] over
//! [`LeadStatus::ALL`] always gives the number of leads.

use athenuru_model::{Lead, LeadStatus, User};
use serde::Serialize;

/// Number of leads in `status`
#[inline]
#[must_use]
pub fn count_by_status(leads: &[Lead], status: LeadStatus) -> usize {
    leads.iter().filter(|lead| lead.status == status).count()
}

/// Number of leads assigned to `agent` (exact, case-sensitive)
#[inline]
#[must_use]
pub fn count_by_agent(leads: &[Lead], agent: &str) -> usize {
    leads.iter().filter(|lead| lead.is_assigned_to(agent)).count()
}

/// Users with role Agent and status Active
#[inline]
#[must_use]
pub fn count_active_agents(users: &[User]) -> usize {
    users.iter().filter(|user| user.is_active_agent()).count()
}

/// One slice of the status breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: LeadStatus,
    pub count: usize,
}

/// Count per status, all seven in lifecycle order, zeros included
#[must_use]
pub fn status_breakdown(leads: &[Lead]) -> Vec<StatusCount> {
    let mut counts = [0usize; LeadStatus::ALL.len()];
    for lead in leads {
        // ALL is declared in discriminant order
        counts[lead.status as usize] += 1;
    }
    LeadStatus::ALL
        .into_iter()
        .zip(counts)
        .map(|(status, count)| StatusCount { status, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use athenuru_model::{Role, UserStatus};
    use athenuru_test_utils::{five_lead_scenario, lead_for_agent, user};

    #[test]
    fn five_lead_scenario_counts() {
        let leads = five_lead_scenario();
        assert_eq!(count_by_status(&leads, LeadStatus::New), 2);
        assert_eq!(count_by_status(&leads, LeadStatus::Converted), 1);
        assert_eq!(count_by_status(&leads, LeadStatus::Lost), 1);
        assert_eq!(count_by_status(&leads, LeadStatus::Qualified), 1);
        assert_eq!(count_by_status(&leads, LeadStatus::Contacted), 0);
    }

    #[test]
    fn empty_collection_counts_zero() {
        assert_eq!(count_by_status(&[], LeadStatus::New), 0);
        assert_eq!(count_by_agent(&[], "John Smith"), 0);
        assert_eq!(count_active_agents(&[]), 0);
    }

    #[test]
    fn agent_match_is_exact() {
        let leads = vec![
            lead_for_agent("1", "John Smith"),
            lead_for_agent("2", "john smith"),
            lead_for_agent("3", "John Smith "),
            lead_for_agent("4", "John Smith"),
        ];
        assert_eq!(count_by_agent(&leads, "John Smith"), 2);
        assert_eq!(count_by_agent(&leads, "John"), 0);
    }

    #[test]
    fn active_agents_need_both_role_and_status() {
        let users = vec![
            user("1", Role::Agent, UserStatus::Active),
            user("2", Role::Agent, UserStatus::Inactive),
            user("3", Role::Manager, UserStatus::Active),
            user("4", Role::Agent, UserStatus::Active),
        ];
        assert_eq!(count_active_agents(&users), 2);
    }

    #[test]
    fn breakdown_lists_every_status_in_order() {
        let breakdown = status_breakdown(&five_lead_scenario());
        let statuses: Vec<_> = breakdown.iter().map(|s| s.status).collect();
        assert_eq!(statuses, LeadStatus::ALL.to_vec());
        let counts: Vec<_> = breakdown.iter().map(|s| s.count).collect();
        assert_eq!(counts, vec![2, 0, 1, 0, 0, 1, 1]);
    }
}
