//! Conversion rates
//!
//! A rate over zero assigned leads has no value. It is reported as
//! [`ConversionRate::Undefined`], never as a NaN or a silent zero.

use std::fmt::{self, Display, Formatter};

use athenuru_model::AgentSummary;
use serde::{Serialize, Serializer};

/// Whole-percent share of assigned leads that converted
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConversionRate {
    /// Rounded percentage; exceeds 100 only for tolerated inconsistent tallies
    Percent(u32),
    /// Nothing assigned, so no rate exists
    Undefined,
}

impl ConversionRate {
    /// Rate from raw tallies, rounding half up
    #[must_use]
    pub fn from_counts(converted: u32, assigned: u32) -> Self {
        if assigned == 0 {
            return ConversionRate::Undefined;
        }
        let converted = u64::from(converted);
        let assigned = u64::from(assigned);
        // round(100 * c / a) in integers: (200c + a) / 2a
        let percent = (200 * converted + assigned) / (2 * assigned);
        ConversionRate::Percent(u32::try_from(percent).unwrap_or(u32::MAX))
    }

    /// Percentage, if defined
    #[inline]
    #[must_use]
    pub fn percent(&self) -> Option<u32> {
        match self {
            ConversionRate::Percent(p) => Some(*p),
            ConversionRate::Undefined => None,
        }
    }

    /// True for [`ConversionRate::Undefined`]
    #[inline]
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        matches!(self, ConversionRate::Undefined)
    }
}

impl Display for ConversionRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConversionRate::Percent(p) => write!(f, "{p}%"),
            ConversionRate::Undefined => f.write_str("n/a"),
        }
    }
}

/// Serializes as a number, or `null` when undefined
impl Serialize for ConversionRate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.percent().serialize(serializer)
    }
}

/// `round(100 * converted / leads_assigned)` for one agent
#[inline]
#[must_use]
pub fn conversion_rate(agent: &AgentSummary) -> ConversionRate {
    ConversionRate::from_counts(agent.converted, agent.leads_assigned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use athenuru_test_utils::agent_summary;

    #[test]
    fn rate_rounds_to_nearest_percent() {
        // 24 / 28 = 85.71%
        assert_eq!(
            conversion_rate(&agent_summary("John Smith", 28, 24, 0)),
            ConversionRate::Percent(86)
        );
        // 1 / 3 = 33.33%
        assert_eq!(ConversionRate::from_counts(1, 3), ConversionRate::Percent(33));
    }

    #[test]
    fn exact_half_rounds_up() {
        // 1 / 8 = 12.5%
        assert_eq!(ConversionRate::from_counts(1, 8), ConversionRate::Percent(13));
    }

    #[test]
    fn zero_assigned_is_undefined() {
        let rate = conversion_rate(&agent_summary("Idle", 0, 0, 0));
        assert_eq!(rate, ConversionRate::Undefined);
        assert!(rate.is_undefined());
        assert_eq!(rate.percent(), None);
        assert_eq!(rate.to_string(), "n/a");
    }

    #[test]
    fn bounds() {
        assert_eq!(ConversionRate::from_counts(0, 5), ConversionRate::Percent(0));
        assert_eq!(ConversionRate::from_counts(5, 5), ConversionRate::Percent(100));
        assert_eq!(
            ConversionRate::from_counts(u32::MAX, u32::MAX),
            ConversionRate::Percent(100)
        );
    }

    #[test]
    fn serializes_as_nullable_number() {
        assert_eq!(serde_json::to_string(&ConversionRate::Percent(86)).unwrap(), "86");
        assert_eq!(serde_json::to_string(&ConversionRate::Undefined).unwrap(), "null");
    }
}
