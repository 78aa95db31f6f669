//! Record filters for the team and status reports

use std::fmt;

use serde_json::Value;
use tracing::warn;

use crate::record::{
    ExperimentRecord, STATUS_FIELDS, TEAM_ID_FIELDS, coerce_integer, first_present,
    parse_integer_prefix, scalar_text,
};

/// Statuses (lowercase) selected by the status report.
pub const REPORTABLE_STATUSES: &[&str] = &["ready", "wrap_up"];

/// A configured team identifier together with its integer coercion.
///
/// The raw text is kept for file naming; matching only ever uses the numeric
/// form. A non-numeric identifier has no numeric form and matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamId {
    raw: String,
    numeric: Option<i64>,
}

impl TeamId {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let numeric = parse_integer_prefix(&raw);
        Self { raw, numeric }
    }

    /// The identifier exactly as configured.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Integer form used for matching, `None` when it does not parse.
    pub fn numeric(&self) -> Option<i64> {
        self.numeric
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Which records a report keeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterPolicy {
    /// Keep records whose resolved team id equals the target numerically.
    Team(TeamId),
    /// Keep records whose resolved status is `ready` or `wrap_up`, ignoring case.
    Status,
}

impl FilterPolicy {
    /// Decide whether a single record is kept.
    pub fn matches(&self, record: &ExperimentRecord) -> bool {
        match self {
            FilterPolicy::Team(team) => match (resolve_team_id(record), team.numeric()) {
                (Some(found), Some(target)) => found == target,
                _ => false,
            },
            FilterPolicy::Status => resolve_status(record)
                .is_some_and(|status| REPORTABLE_STATUSES.contains(&status.as_str())),
        }
    }

    /// Filter a fetched payload, preserving the original order.
    ///
    /// A payload that is not a JSON array is logged as a warning and yields no
    /// records.
    pub fn apply<'a>(&self, payload: &'a Value) -> Vec<&'a Value> {
        let Some(records) = payload.as_array() else {
            warn!(
                payload = payload_kind(payload),
                "experiments response is not an array; treating it as empty"
            );
            return Vec::new();
        };

        records.iter().filter(|record| self.matches(record)).collect()
    }
}

/// Resolve and coerce a record's team id. `None` is the "not a number" case.
pub fn resolve_team_id(record: &Value) -> Option<i64> {
    first_present(record, TEAM_ID_FIELDS).and_then(coerce_integer)
}

/// Resolve a record's status, lowercased.
pub fn resolve_status(record: &Value) -> Option<String> {
    first_present(record, STATUS_FIELDS)
        .and_then(scalar_text)
        .map(|status| status.to_lowercase())
}

fn payload_kind(payload: &Value) -> &'static str {
    match payload {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
