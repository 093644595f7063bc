//! Error types for the record model
//!
//! Every variant here is raised at the data-model boundary (record
//! construction, fixture loading, snapshot building). Derivations downstream
//! never see a value outside the closed sets.

use std::path::PathBuf;

/// Kind of record, used to qualify identifiers in diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// A lead record
    Lead,
    /// An agent summary
    Agent,
    /// A user account
    User,
    /// An activity event
    Activity,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RecordKind::Lead => "lead",
            RecordKind::Agent => "agent",
            RecordKind::User => "user",
            RecordKind::Activity => "activity",
        };
        f.write_str(name)
    }
}

/// Boundary validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Lead status outside the seven lifecycle stages
    #[error("unknown lead status: '{0}'")]
    UnknownStatus(String),

    /// User role outside Admin/Manager/Agent
    #[error("unknown role: '{0}'")]
    UnknownRole(String),

    /// User status outside Active/Inactive
    #[error("unknown user status: '{0}'")]
    UnknownUserStatus(String),

    /// Activity type outside call/email/meeting/note
    #[error("unknown activity type: '{0}'")]
    UnknownActivityKind(String),

    /// Two records of the same kind share an identifier
    #[error("duplicate {kind} id: '{id}'")]
    DuplicateId { kind: RecordKind, id: String },

    /// A required field is blank
    #[error("{kind} '{id}' has an empty {field}")]
    EmptyField {
        kind: RecordKind,
        id: String,
        field: &'static str,
    },

    /// Agent summary where converted + pending exceeds leads assigned
    #[error(
        "agent '{agent}' reports {converted} converted + {pending} pending > {assigned} assigned"
    )]
    InconsistentAgentSummary {
        agent: String,
        assigned: u32,
        converted: u32,
        pending: u32,
    },

    /// UTC offset outside the representable range
    #[error("invalid utc offset: {minutes} minutes")]
    InvalidUtcOffset { minutes: i32 },
}

/// Errors raised while reading a fixture into a snapshot
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// Fixture file could not be read
    #[error("failed to read fixture {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Extension is neither JSON nor YAML
    #[error("unsupported fixture format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Malformed JSON document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed YAML document
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Records parsed but failed boundary validation
    #[error("invalid fixture: {0}")]
    Invalid(#[from] ModelError),
}

/// Result alias for model operations
pub type ModelResult<T> = Result<T, ModelError>;
