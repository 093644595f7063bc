//! Dashboard configuration
//!
//! Loaded from TOML. Every section and key is optional:
//!
//! ```toml
//! [calendar]
//! utc_offset_minutes = -300
//!
//! [validation]
//! agent_summaries = "tolerate"
//!
//! [previews]
//! admin_leads = 5
//! manager_leads = 6
//! agent_leads = 6
//!
//! [agent]
//! name = "John Smith"
//! ```

use std::path::Path;

use athenuru_model::{Calendar, SummaryPolicy};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Agent of record when none is configured
pub const DEFAULT_AGENT: &str = "John Smith";

/// Top-level dashboard configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub calendar: CalendarConfig,
    pub validation: ValidationConfig,
    pub previews: PreviewConfig,
    pub agent: AgentConfig,
}

/// Timezone used for every date computation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    /// Minutes east of UTC
    pub utc_offset_minutes: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    pub agent_summaries: SummaryPolicy,
}

/// Positional preview sizes per table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreviewConfig {
    pub admin_leads: usize,
    pub manager_leads: usize,
    pub agent_leads: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            admin_leads: 5,
            manager_leads: 6,
            agent_leads: 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AgentConfig {
    /// Agent whose dashboard is rendered
    pub name: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_AGENT.to_string(),
        }
    }
}

impl DashboardConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate TOML text
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys, and
    /// a validation error for out-of-range values
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`DashboardConfig::from_toml_str`]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded dashboard config");
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    /// Returns the first out-of-range value found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.calendar()?;
        let previews = [
            ("admin_leads", self.previews.admin_leads),
            ("manager_leads", self.previews.manager_leads),
            ("agent_leads", self.previews.agent_leads),
        ];
        if let Some((table, _)) = previews.into_iter().find(|(_, size)| *size == 0) {
            return Err(ConfigError::EmptyPreview { table });
        }
        Ok(())
    }

    /// Calendar at the configured offset
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] for an offset beyond ±24h
    pub fn calendar(&self) -> Result<Calendar, ConfigError> {
        Ok(Calendar::from_offset_minutes(self.calendar.utc_offset_minutes)?)
    }

    /// Summary policy for snapshot construction
    #[inline]
    #[must_use]
    pub fn summary_policy(&self) -> SummaryPolicy {
        self.validation.agent_summaries
    }

    /// With UTC offset in minutes
    #[inline]
    #[must_use]
    pub fn with_utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.calendar.utc_offset_minutes = minutes;
        self
    }

    /// With summary policy
    #[inline]
    #[must_use]
    pub fn with_summary_policy(mut self, policy: SummaryPolicy) -> Self {
        self.validation.agent_summaries = policy;
        self
    }

    /// With agent of record
    #[inline]
    #[must_use]
    pub fn with_agent(mut self, name: impl Into<String>) -> Self {
        self.agent.name = name.into();
        self
    }

    /// With preview sizes
    #[inline]
    #[must_use]
    pub fn with_previews(mut self, previews: PreviewConfig) -> Self {
        self.previews = previews;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_text_gives_defaults() {
        let config = DashboardConfig::from_toml_str("").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.previews.admin_leads, 5);
        assert_eq!(config.previews.manager_leads, 6);
        assert_eq!(config.agent.name, "John Smith");
        assert_eq!(config.summary_policy(), SummaryPolicy::Enforce);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = DashboardConfig::from_toml_str(
            r#"
            [calendar]
            utc_offset_minutes = 330

            [validation]
            agent_summaries = "tolerate"
            "#,
        )
        .unwrap();
        assert_eq!(config.calendar.utc_offset_minutes, 330);
        assert_eq!(config.summary_policy(), SummaryPolicy::Tolerate);
        assert_eq!(config.previews, PreviewConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = DashboardConfig::from_toml_str("[previews]\nadmin_rows = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let err =
            DashboardConfig::from_toml_str("[validation]\nagent_summaries = \"ignore\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn out_of_range_offset_is_rejected() {
        let err = DashboardConfig::from_toml_str("[calendar]\nutc_offset_minutes = 1500")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn zero_preview_is_rejected() {
        let err = DashboardConfig::from_toml_str("[previews]\nagent_leads = 0").unwrap_err();
        assert!(matches!(err, ConfigError::EmptyPreview { table: "agent_leads" }));
    }

    #[test]
    fn builder_overrides() {
        let config = DashboardConfig::new()
            .with_agent("Mike Brown")
            .with_utc_offset_minutes(-300)
            .with_summary_policy(SummaryPolicy::Tolerate);
        assert_eq!(config.agent.name, "Mike Brown");
        assert_eq!(config.calendar().unwrap().offset().local_minus_utc(), -300 * 60);
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("athenuru.toml");
        std::fs::write(&path, "[agent]\nname = \"Sarah Johnson\"\n").unwrap();
        let config = DashboardConfig::load(&path).unwrap();
        assert_eq!(config.agent.name, "Sarah Johnson");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DashboardConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
