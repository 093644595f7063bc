//! Inputs shared by every dashboard

use athenuru_model::{Calendar, LeadSnapshot};
use chrono::{DateTime, NaiveDate, Utc};

use crate::config::DashboardConfig;
use crate::error::ConfigError;

/// Snapshot, config and reference instant for one composition pass
///
/// The reference instant is explicit so that the same inputs always compose
/// the same dashboard.
#[derive(Debug, Clone, Copy)]
pub struct DashboardContext<'a> {
    snapshot: &'a LeadSnapshot,
    config: &'a DashboardConfig,
    calendar: Calendar,
    now: DateTime<Utc>,
}

impl<'a> DashboardContext<'a> {
    /// # Errors
    /// Returns [`ConfigError::Invalid`] if the configured offset is out of range
    pub fn new(
        snapshot: &'a LeadSnapshot,
        config: &'a DashboardConfig,
        now: DateTime<Utc>,
    ) -> Result<Self, ConfigError> {
        let calendar = config.calendar()?;
        Ok(Self {
            snapshot,
            config,
            calendar,
            now,
        })
    }

    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> &'a LeadSnapshot {
        self.snapshot
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &'a DashboardConfig {
        self.config
    }

    #[inline]
    #[must_use]
    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Reference instant
    #[inline]
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Calendar day of the reference instant
    #[inline]
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.calendar.today(self.now)
    }
}
