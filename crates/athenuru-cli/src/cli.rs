//! Command line definition

use std::path::PathBuf;

use anyhow::{Context, Result};
use athenuru_model::{Calendar, Moment, Role};
use athenuru_query::LeadFilter;
use chrono::{DateTime, NaiveDate, Utc};
use clap::{builder::PossibleValuesParser, value_parser, Arg, ArgAction, ArgMatches, Command};

/// Build the `athenuru` command
#[must_use]
pub fn command() -> Command {
    Command::new("athenuru")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Lead management dashboards over a lead snapshot")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Dashboard config (TOML)"),
        )
        .arg(
            Arg::new("fixture")
                .long("fixture")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Lead fixture (JSON or YAML); the bundled demo when absent"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON on stderr"),
        )
        .subcommand(
            Command::new("dashboard")
                .about("Render the dashboard a role sees")
                .arg(
                    Arg::new("role")
                        .required(true)
                        .value_parser(PossibleValuesParser::new(["admin", "manager", "agent"]))
                        .help("Role whose dashboard to render"),
                )
                .arg(
                    Arg::new("agent")
                        .long("agent")
                        .help("Agent of record for the agent dashboard"),
                )
                .arg(
                    Arg::new("today")
                        .long("today")
                        .conflicts_with("now")
                        .value_parser(value_parser!(NaiveDate))
                        .help("Reference day (YYYY-MM-DD), from its first instant"),
                )
                .arg(
                    Arg::new("now")
                        .long("now")
                        .value_parser(value_parser!(DateTime<Utc>))
                        .help("Reference instant (RFC 3339); the system clock when absent"),
                )
                .arg(
                    Arg::new("agent-filter")
                        .long("agent-filter")
                        .help("Manager table: agent name or \"all\""),
                )
                .arg(
                    Arg::new("status-filter")
                        .long("status-filter")
                        .help("Manager table: lead status or \"all\""),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("validate")
                .about("Load the fixture and report record counts or the first boundary error"),
        )
}

/// Options shared by every subcommand
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    pub config: Option<PathBuf>,
    pub fixture: Option<PathBuf>,
    pub log_json: bool,
}

impl GlobalArgs {
    #[must_use]
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            config: matches.get_one::<PathBuf>("config").cloned(),
            fixture: matches.get_one::<PathBuf>("fixture").cloned(),
            log_json: matches.get_flag("log-json"),
        }
    }
}

/// When the dashboard is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    Now,
    Day(NaiveDate),
    At(DateTime<Utc>),
}

impl Reference {
    /// Resolve to an instant on `calendar`
    ///
    /// # Errors
    /// Fails when the start of a `--today` day is not representable at the
    /// calendar's offset
    pub fn resolve(self, calendar: &Calendar) -> Result<DateTime<Utc>> {
        match self {
            Reference::Now => Ok(Utc::now()),
            Reference::Day(day) => calendar
                .instant_of(&Moment::Day(day))
                .with_context(|| format!("reference day {day} is out of range at the configured offset")),
            Reference::At(at) => Ok(at),
        }
    }
}

/// Parsed `dashboard` arguments
#[derive(Debug, Clone)]
pub struct DashboardArgs {
    pub role: Role,
    pub agent: Option<String>,
    pub reference: Reference,
    pub filter: LeadFilter,
    pub json: bool,
}

impl DashboardArgs {
    /// # Errors
    /// Fails for an unknown role or filter status
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let role: Role = matches
            .get_one::<String>("role")
            .map(String::as_str)
            .unwrap_or_default()
            .parse()
            .context("invalid role")?;

        let reference = match (
            matches.get_one::<NaiveDate>("today"),
            matches.get_one::<DateTime<Utc>>("now"),
        ) {
            (Some(day), _) => Reference::Day(*day),
            (None, Some(at)) => Reference::At(*at),
            (None, None) => Reference::Now,
        };

        let filter = LeadFilter::from_params(
            matches.get_one::<String>("agent-filter").map(String::as_str),
            matches.get_one::<String>("status-filter").map(String::as_str),
        )
        .context("invalid lead filter")?;

        Ok(Self {
            role,
            agent: matches.get_one::<String>("agent").cloned(),
            reference,
            filter,
            json: matches.get_flag("json"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use athenuru_model::LeadStatus;

    fn dashboard_args(argv: &[&str]) -> Result<DashboardArgs> {
        let matches = command().try_get_matches_from(argv)?;
        let (_, sub) = matches.subcommand().unwrap();
        DashboardArgs::from_matches(sub)
    }

    #[test]
    fn command_is_well_formed() {
        command().debug_assert();
    }

    #[test]
    fn parses_dashboard_arguments() {
        let args = dashboard_args(&[
            "athenuru",
            "dashboard",
            "manager",
            "--today",
            "2024-01-20",
            "--status-filter",
            "contacted",
            "--json",
        ])
        .unwrap();
        assert_eq!(args.role, Role::Manager);
        assert_eq!(
            args.reference,
            Reference::Day(NaiveDate::from_ymd_opt(2024, 1, 20).unwrap())
        );
        assert_eq!(args.filter, LeadFilter::new().with_status(LeadStatus::Contacted));
        assert!(args.json);
    }

    #[test]
    fn all_sentinel_leaves_filter_open() {
        let args = dashboard_args(&[
            "athenuru",
            "dashboard",
            "manager",
            "--agent-filter",
            "all",
            "--status-filter",
            "all",
        ])
        .unwrap();
        assert_eq!(args.filter, LeadFilter::new());
        assert_eq!(args.reference, Reference::Now);
    }

    #[test]
    fn rejects_unknown_status_filter() {
        assert!(dashboard_args(&["athenuru", "dashboard", "admin", "--status-filter", "won"]).is_err());
    }

    #[test]
    fn rejects_unknown_role() {
        assert!(command()
            .try_get_matches_from(["athenuru", "dashboard", "owner"])
            .is_err());
    }

    #[test]
    fn today_conflicts_with_now() {
        assert!(command()
            .try_get_matches_from([
                "athenuru",
                "dashboard",
                "agent",
                "--today",
                "2024-01-20",
                "--now",
                "2024-01-20T10:00:00Z",
            ])
            .is_err());
    }

    #[test]
    fn reference_day_resolves_to_start_of_day() {
        let calendar = Calendar::from_offset_minutes(60).unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        let at = Reference::Day(day).resolve(&calendar).unwrap();
        assert_eq!(at.to_rfc3339(), "2024-01-19T23:00:00+00:00");
    }

    #[test]
    fn reference_day_beyond_range_is_an_error() {
        let calendar = Calendar::from_offset_minutes(60).unwrap();
        let err = Reference::Day(NaiveDate::MIN).resolve(&calendar).unwrap_err();
        assert!(err.to_string().contains("out of range"), "{err}");
    }

    #[test]
    fn globals_accepted_after_subcommand() {
        let matches = command()
            .try_get_matches_from(["athenuru", "validate", "--fixture", "leads.yaml", "--log-json"])
            .unwrap();
        let globals = GlobalArgs::from_matches(&matches);
        assert_eq!(globals.fixture, Some(PathBuf::from("leads.yaml")));
        assert!(globals.log_json);
    }
}
