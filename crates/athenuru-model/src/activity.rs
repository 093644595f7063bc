//! Activity timeline events

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, RecordKind};
use crate::lead::RecordId;

/// Kind of touchpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Call,
    Email,
    Meeting,
    Note,
}

impl ActivityKind {
    /// Wire form
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Call => "call",
            ActivityKind::Email => "email",
            ActivityKind::Meeting => "meeting",
            ActivityKind::Note => "note",
        }
    }
}

impl FromStr for ActivityKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            ActivityKind::Call,
            ActivityKind::Email,
            ActivityKind::Meeting,
            ActivityKind::Note,
        ]
        .into_iter()
        .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
        .ok_or_else(|| ModelError::UnknownActivityKind(s.to_string()))
    }
}

/// A logged touchpoint; `time` is a display label such as "2 hours ago"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub message: String,
    pub time: String,
}

/// Activity as it appears in a fixture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawActivity {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    #[serde(default)]
    pub time: String,
}

impl TryFrom<RawActivity> for Activity {
    type Error = ModelError;

    fn try_from(raw: RawActivity) -> Result<Self, Self::Error> {
        let id = RecordId::new(raw.id).require(RecordKind::Activity)?;
        Ok(Self {
            id,
            kind: raw.kind.parse()?,
            message: raw.message,
            time: raw.time,
        })
    }
}
