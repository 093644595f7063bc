//! Plain-text rendering

use std::fmt::{self, Write};

use athenuru_model::LeadSnapshot;
use athenuru_query::malformed_follow_ups;
use athenuru_views::{
    AdminDashboard, AgentDashboard, AgentPerformanceRow, Dashboard, LeadRow, ManagerDashboard, SummaryCard,
};

/// Render a dashboard as text
///
/// # Errors
/// Propagates errors from `out`
pub fn render_dashboard(out: &mut impl Write, dashboard: &Dashboard) -> fmt::Result {
    heading(out, dashboard.title())?;
    cards(out, dashboard.cards())?;
    match dashboard {
        Dashboard::Admin(admin) => render_admin(out, admin),
        Dashboard::Manager(manager) => render_manager(out, manager),
        Dashboard::Agent(agent) => render_agent(out, agent),
    }
}

fn render_admin(out: &mut impl Write, admin: &AdminDashboard) -> fmt::Result {
    section(out, "Leads by Status")?;
    for slice in &admin.charts.leads_by_status {
        writeln!(out, "  {:<12} {:>4}", slice.status.label(), slice.count)?;
    }

    section(out, "Monthly Growth")?;
    for month in &admin.charts.monthly_growth {
        writeln!(out, "  {} {} {:>4}", month.label, month.year, month.count)?;
    }

    section(out, "Lead Overview")?;
    lead_table(out, &admin.lead_overview)?;

    section(out, "User Management")?;
    for user in &admin.users {
        writeln!(
            out,
            "  {:<16} {:<28} {:<8} {}",
            user.name,
            user.email,
            user.role.as_str(),
            user.status
        )?;
    }
    Ok(())
}

fn render_manager(out: &mut impl Write, manager: &ManagerDashboard) -> fmt::Result {
    section(out, "Lead Assignment")?;
    writeln!(
        out,
        "  showing {} of {} matching",
        manager.lead_assignment.len(),
        manager.matching_leads
    )?;
    lead_table(out, &manager.lead_assignment)?;

    section(out, "Agent Performance")?;
    performance_table(out, &manager.agent_performance)
}

fn render_agent(out: &mut impl Write, agent: &AgentDashboard) -> fmt::Result {
    writeln!(out, "Agent: {}", agent.agent)?;

    section(out, "My Leads")?;
    for row in &agent.my_leads {
        writeln!(
            out,
            "  {:<16} {:<28} {:<12} {}",
            row.name,
            row.email,
            row.status.label(),
            row.next_follow_up.as_deref().unwrap_or("-")
        )?;
    }

    section(out, "Activity Timeline")?;
    for activity in &agent.activity_timeline {
        writeln!(out, "  [{}] {} ({})", activity.kind.as_str(), activity.message, activity.time)?;
    }
    Ok(())
}

fn heading(out: &mut impl Write, title: &str) -> fmt::Result {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(title.len()))
}

fn section(out: &mut impl Write, title: &str) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "{title}")
}

fn cards(out: &mut impl Write, cards: &[SummaryCard]) -> fmt::Result {
    for card in cards {
        writeln!(out, "{:<22} {:>6}", card.title, card.value)?;
    }
    Ok(())
}

fn lead_table(out: &mut impl Write, rows: &[LeadRow]) -> fmt::Result {
    for row in rows {
        writeln!(
            out,
            "  {:<4} {:<16} {:<14} {:<12} {:<14} {}",
            row.id,
            row.name,
            row.source,
            row.status.label(),
            row.assigned_agent,
            row.date
        )?;
    }
    Ok(())
}

fn performance_table(out: &mut impl Write, rows: &[AgentPerformanceRow]) -> fmt::Result {
    writeln!(
        out,
        "  {:<16} {:>8} {:>9} {:>7} {:>6}",
        "Agent", "Assigned", "Converted", "Pending", "Rate"
    )?;
    for row in rows {
        writeln!(
            out,
            "  {:<16} {:>8} {:>9} {:>7} {:>6}",
            row.name,
            row.leads_assigned,
            row.converted,
            row.pending,
            row.conversion_rate.to_string()
        )?;
    }
    Ok(())
}

/// Render a validation summary for a loaded snapshot
///
/// # Errors
/// Propagates errors from `out`
pub fn render_validation(out: &mut impl Write, snapshot: &LeadSnapshot) -> fmt::Result {
    writeln!(out, "fixture OK")?;
    writeln!(out, "  leads:      {}", snapshot.leads().len())?;
    writeln!(out, "  agents:     {}", snapshot.agents().len())?;
    writeln!(out, "  users:      {}", snapshot.users().len())?;
    writeln!(out, "  activities: {}", snapshot.activities().len())?;

    let unmatched = snapshot.unmatched_assignments();
    if !unmatched.is_empty() {
        writeln!(out, "  agents without summary: {}", unmatched.join(", "))?;
    }
    let malformed = malformed_follow_ups(snapshot.leads());
    if !malformed.is_empty() {
        let ids: Vec<_> = malformed.iter().map(|lead| lead.id.as_str()).collect();
        writeln!(out, "  unparseable follow-ups: {}", ids.join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sink that refuses every write
    struct Full;

    impl Write for Full {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn validation_summary_lists_counts() {
        let snapshot = LeadSnapshot::demo().unwrap();
        let mut text = String::new();
        render_validation(&mut text, &snapshot).unwrap();
        assert!(text.starts_with("fixture OK\n  leads:      12\n"));
        assert!(!text.contains("agents without summary"));
    }

    #[test]
    fn write_failure_is_propagated() {
        let snapshot = LeadSnapshot::demo().unwrap();
        assert_eq!(render_validation(&mut Full, &snapshot), Err(fmt::Error));
    }
}
