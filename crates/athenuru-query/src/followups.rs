//! Follow-up scheduling views
//!
//! Leads with no follow-up, or with follow-up text that did not parse, never
//! appear in [`due_today`] or [`due_pending`]. The unparseable ones are
//! reported by [`malformed_follow_ups`] instead.

use athenuru_model::{Calendar, Lead, Moment};
use chrono::{DateTime, NaiveDate, Utc};

fn follow_up_moment(lead: &Lead) -> Option<&Moment> {
    lead.next_follow_up.as_ref().and_then(|date| date.moment())
}

/// Leads whose follow-up falls on the calendar day `today`
///
/// Timed follow-ups are truncated to a day at the calendar's offset.
#[must_use]
pub fn due_today<'a>(leads: &'a [Lead], today: NaiveDate, calendar: &Calendar) -> Vec<&'a Lead> {
    let due: Vec<&Lead> = leads
        .iter()
        .filter(|lead| follow_up_moment(lead).is_some_and(|m| calendar.day_of(m) == today))
        .collect();
    tracing::debug!(%today, due = due.len(), "follow-ups due today");
    due
}

/// Leads whose follow-up is at or before `now`
///
/// A date-only follow-up becomes due at the start of that day. A follow-up
/// with no representable instant at the calendar's offset is skipped.
#[must_use]
pub fn due_pending<'a>(
    leads: &'a [Lead],
    now: DateTime<Utc>,
    calendar: &Calendar,
) -> Vec<&'a Lead> {
    let pending: Vec<&Lead> = leads
        .iter()
        .filter(|lead| {
            follow_up_moment(lead)
                .and_then(|m| calendar.instant_of(m))
                .is_some_and(|at| at <= now)
        })
        .collect();
    tracing::debug!(%now, pending = pending.len(), "pending follow-ups");
    pending
}

/// Leads carrying follow-up text that could not be parsed
#[must_use]
pub fn malformed_follow_ups(leads: &[Lead]) -> Vec<&Lead> {
    leads
        .iter()
        .filter(|lead| lead.next_follow_up.as_ref().is_some_and(|d| d.is_malformed()))
        .collect()
}
