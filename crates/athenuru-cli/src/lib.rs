//! Athenuru CLI
//!
//! Loads a dashboard config and a lead fixture, then renders a role
//! dashboard or reports fixture validity. The binary in `main.rs` is a thin
//! wrapper around [`run`].

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod cli;
pub mod logging;
pub mod report;

use std::ffi::OsString;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use athenuru_model::{Fixture, LeadSnapshot, SummaryPolicy};
use athenuru_views::{Dashboard, DashboardConfig, DashboardContext};
use clap::ArgMatches;

pub use cli::{command, DashboardArgs, GlobalArgs, Reference};

/// Execute parsed arguments, writing the report to `out`
///
/// # Errors
/// Fails when the config or fixture cannot be loaded or validated, or when
/// `out` cannot be written
pub fn run(matches: &ArgMatches, out: &mut impl Write) -> Result<()> {
    let globals = GlobalArgs::from_matches(matches);
    let config = load_config(globals.config.as_deref())?;

    match matches.subcommand() {
        Some(("dashboard", sub)) => {
            let args = DashboardArgs::from_matches(sub)?;
            let config = match &args.agent {
                Some(agent) => config.with_agent(agent.clone()),
                None => config,
            };
            let snapshot = load_snapshot(globals.fixture.as_deref(), config.summary_policy())?;
            let calendar = config.calendar()?;
            let now = args.reference.resolve(&calendar)?;
            let ctx = DashboardContext::new(&snapshot, &config, now)?;
            let dashboard = Dashboard::compose(args.role, &ctx, &args.filter);
            tracing::info!(role = %args.role, %now, "rendering dashboard");

            if args.json {
                serde_json::to_writer_pretty(&mut *out, &dashboard)?;
                writeln!(out)?;
            } else {
                let mut text = String::new();
                report::render_dashboard(&mut text, &dashboard)?;
                out.write_all(text.as_bytes())?;
            }
        }
        Some(("validate", _)) => {
            let snapshot = load_snapshot(globals.fixture.as_deref(), config.summary_policy())?;
            let mut text = String::new();
            report::render_validation(&mut text, &snapshot)?;
            out.write_all(text.as_bytes())?;
        }
        _ => anyhow::bail!("no subcommand given"),
    }
    Ok(())
}

/// Parse `args` and [`run`]
///
/// # Errors
/// Fails on invalid arguments, otherwise as [`run`]
pub fn run_from<I, T>(args: I, out: &mut impl Write) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command().try_get_matches_from(args)?;
    run(&matches, out)
}

fn load_config(path: Option<&Path>) -> Result<DashboardConfig> {
    match path {
        Some(path) => DashboardConfig::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(DashboardConfig::default()),
    }
}

fn load_snapshot(path: Option<&Path>, policy: SummaryPolicy) -> Result<LeadSnapshot> {
    let fixture = match path {
        Some(path) => Fixture::load(path).with_context(|| format!("loading fixture {}", path.display()))?,
        None => Fixture::demo().context("loading bundled demo fixture")?,
    };
    fixture
        .into_snapshot(policy)
        .context("fixture failed validation")
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
