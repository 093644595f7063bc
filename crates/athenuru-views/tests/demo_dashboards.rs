//! Dashboards composed from the bundled demo snapshot

use athenuru_model::{LeadSnapshot, LeadStatus, Role};
use athenuru_query::{ConversionRate, LeadFilter};
use athenuru_views::{find_card, Dashboard, DashboardConfig, DashboardContext};
use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

fn compose(role: Role, now: DateTime<Utc>, filter: &LeadFilter) -> Dashboard {
    let snapshot = LeadSnapshot::demo().unwrap();
    let config = DashboardConfig::default();
    let ctx = DashboardContext::new(&snapshot, &config, now).unwrap();
    Dashboard::compose(role, &ctx, filter)
}

#[test]
fn admin_totals() {
    let Dashboard::Admin(admin) = compose(Role::Admin, at(2024, 1, 20, 12), &LeadFilter::new()) else {
        panic!("expected admin dashboard");
    };
    let value = |title| find_card(&admin.cards, title).unwrap().value;
    assert_eq!(value("Total Leads"), 12);
    assert_eq!(value("Converted Leads"), 2);
    assert_eq!(value("Lost Leads"), 2);
    assert_eq!(value("Active Agents"), 4);

    let ids: Vec<_> = admin.lead_overview.iter().map(|row| row.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);

    let statuses: usize = admin.charts.leads_by_status.iter().map(|s| s.count).sum();
    assert_eq!(statuses, 12);
    let months: Vec<_> = admin
        .charts
        .monthly_growth
        .iter()
        .map(|m| (m.label.as_str(), m.count))
        .collect();
    assert_eq!(months, vec![("Jan", 7), ("Feb", 3), ("Mar", 2)]);
}

#[test]
fn manager_pending_depends_on_reference_instant() {
    let pending = |now| {
        let dashboard = compose(Role::Manager, now, &LeadFilter::new());
        find_card(dashboard.cards(), "Pending Follow-ups").unwrap().value
    };
    assert_eq!(pending(at(2024, 1, 1, 0)), 0);
    // 01-17, 01-18, 01-19, 01-20 are at or before noon on the 20th
    assert_eq!(pending(at(2024, 1, 20, 12)), 4);
    assert_eq!(pending(at(2025, 1, 1, 0)), 8);
}

#[test]
fn manager_filter_and_rates() {
    let filter = LeadFilter::new().with_status(LeadStatus::New);
    let Dashboard::Manager(manager) = compose(Role::Manager, at(2024, 1, 20, 12), &filter) else {
        panic!("expected manager dashboard");
    };
    assert_eq!(manager.matching_leads, 2);
    assert!(manager
        .lead_assignment
        .iter()
        .all(|row| row.status == LeadStatus::New));

    let rates: Vec<_> = manager
        .agent_performance
        .iter()
        .map(|row| (row.name.as_str(), row.conversion_rate))
        .collect();
    assert_eq!(
        rates,
        vec![
            ("John Smith", ConversionRate::Percent(69)),
            ("Sarah Johnson", ConversionRate::Percent(51)),
            ("Mike Brown", ConversionRate::Percent(78)),
            ("Emily Davis", ConversionRate::Percent(61)),
            ("David Wilson", ConversionRate::Percent(43)),
        ]
    );
}

#[test]
fn agent_dashboard_is_scoped_to_agent() {
    let Dashboard::Agent(agent) = compose(Role::Agent, at(2024, 1, 19, 8), &LeadFilter::new()) else {
        panic!("expected agent dashboard");
    };
    let value = |title| find_card(&agent.cards, title).unwrap().value;
    assert_eq!(value("My Leads"), 5);
    // lead 3 follows up on 2024-01-19
    assert_eq!(value("Follow-ups Today"), 1);
    assert_eq!(value("Converted Leads"), 1);
    assert_eq!(value("Lost Leads"), 1);
    assert_eq!(agent.my_leads.len(), 5);
    assert_eq!(agent.activity_timeline.len(), 5);
}

#[test]
fn dashboards_serialize_with_role_tag() {
    let dashboard = compose(Role::Manager, at(2024, 1, 20, 12), &LeadFilter::new());
    let json = serde_json::to_value(&dashboard).unwrap();
    assert_eq!(json["role"], "manager");
    assert_eq!(json["title"], "Manager Dashboard");
    assert_eq!(json["agentPerformance"][0]["conversionRate"], 69);
}
