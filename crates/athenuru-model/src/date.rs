//! Calendar dates carried by records
//!
//! Date text is parsed once, at construction. A value that cannot be parsed
//! is kept as [`DateField`] with no moment rather than rejected, so a single
//! bad follow-up never aborts a dashboard.
//!
//! All conversions between wall-clock values and instants go through one
//! [`Calendar`], which pins a fixed UTC offset.

use chrono::{
    DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc,
};
use serde::{Serialize, Serializer};

use crate::error::ModelError;

/// A parsed point in time, as precise as the source text allowed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Moment {
    /// Calendar day only (`2025-06-15`)
    Day(NaiveDate),
    /// Wall-clock time without offset (`2025-06-15T09:30:00`), read in the calendar's offset
    Local(NaiveDateTime),
    /// Instant with explicit offset (RFC 3339)
    At(DateTime<FixedOffset>),
}

impl Moment {
    /// Parse date text, trying day, RFC 3339, then offset-less date-time
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Ok(day) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            return Some(Self::Day(day));
        }
        if let Ok(at) = DateTime::parse_from_rfc3339(text) {
            return Some(Self::At(at));
        }
        ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
            .map(Self::Local)
    }
}

/// Date text from a record together with its parsed form
///
/// Serializes back to the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateField {
    raw: String,
    moment: Option<Moment>,
}

impl DateField {
    /// Parse date text; unparseable text is kept and marked malformed
    #[must_use]
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let moment = Moment::parse(&raw);
        Self { raw, moment }
    }

    /// Field for an already-known calendar day
    #[must_use]
    pub fn day(day: NaiveDate) -> Self {
        Self {
            raw: day.format("%Y-%m-%d").to_string(),
            moment: Some(Moment::Day(day)),
        }
    }

    /// Original text
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Parsed moment, absent when the text was malformed
    #[inline]
    #[must_use]
    pub fn moment(&self) -> Option<&Moment> {
        self.moment.as_ref()
    }

    /// True when the text could not be parsed
    #[inline]
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        self.moment.is_none()
    }
}

impl Serialize for DateField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl std::fmt::Display for DateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Fixed-offset business calendar
///
/// Date-only and offset-less values are read as wall-clock time at this
/// offset; instants are truncated to calendar days at this offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    offset: FixedOffset,
}

impl Calendar {
    /// Calendar at UTC
    #[inline]
    #[must_use]
    pub fn utc() -> Self {
        Self {
            offset: Utc.fix(),
        }
    }

    /// Calendar at the given offset east of UTC
    ///
    /// # Errors
    /// Returns [`ModelError::InvalidUtcOffset`] outside ±24h
    pub fn from_offset_minutes(minutes: i32) -> Result<Self, ModelError> {
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(|offset| Self { offset })
            .ok_or(ModelError::InvalidUtcOffset { minutes })
    }

    /// Configured offset
    #[inline]
    #[must_use]
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Calendar day of `now` at this offset
    #[inline]
    #[must_use]
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.offset).date_naive()
    }

    /// Calendar day a moment falls on
    #[must_use]
    pub fn day_of(&self, moment: &Moment) -> NaiveDate {
        match moment {
            Moment::Day(day) => *day,
            Moment::Local(local) => local.date(),
            Moment::At(at) => at.with_timezone(&self.offset).date_naive(),
        }
    }

    /// Instant a moment denotes; a bare day means its first instant
    ///
    /// `None` when shifting a wall-clock value by the offset leaves the
    /// representable range.
    #[must_use]
    pub fn instant_of(&self, moment: &Moment) -> Option<DateTime<Utc>> {
        match moment {
            Moment::Day(day) => self.localize(day.and_time(NaiveTime::MIN)),
            Moment::Local(local) => self.localize(*local),
            Moment::At(at) => Some(at.with_timezone(&Utc)),
        }
    }

    fn localize(&self, local: NaiveDateTime) -> Option<DateTime<Utc>> {
        local
            .checked_sub_signed(Duration::seconds(i64::from(self.offset.local_minus_utc())))
            .map(|utc| Utc.from_utc_datetime(&utc))
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::utc()
    }
}
