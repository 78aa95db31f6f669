//! Schema-tolerant access to experiment records
//!
//! The experiments API does not guarantee a fixed schema: the same concept can
//! show up under several field names, sometimes nested under `metadata`. Every
//! fallback chain in the crate resolves through [`first_present`] or
//! [`first_non_empty`] with one of the candidate lists below.

use serde_json::Value;

/// A single experiment as returned by the API. No schema is assumed.
pub type ExperimentRecord = Value;

/// Candidate locations of the owning team's identifier, in lookup order.
pub const TEAM_ID_FIELDS: &[&str] = &[
    "team_id",
    "teamId",
    "owner_team_id",
    "ownerTeamId",
    "metadata.team_id",
    "metadata.teamId",
];

/// Candidate locations of the lifecycle status, in lookup order.
pub const STATUS_FIELDS: &[&str] = &[
    "status",
    "state",
    "experiment_status",
    "metadata.status",
    "metadata.state",
];

/// Candidate locations of the owner (object or plain string).
pub const OWNER_FIELDS: &[&str] = &["owner", "created_by", "createdBy", "author"];

/// Name fields inside a structured owner.
pub const OWNER_NAME_FIELDS: &[&str] = &["name", "full_name", "displayName"];

/// Email fields inside a structured owner.
pub const OWNER_EMAIL_FIELDS: &[&str] = &["email", "email_address"];

/// Experiment display name.
pub const NAME_FIELDS: &[&str] = &["name", "experiment_name"];

/// Experiment identifier.
pub const ID_FIELDS: &[&str] = &["id", "experiment_id"];

/// Resolve a dotted path such as `metadata.team_id` against a record.
///
/// Each segment must address a key of a JSON object; anything else yields `None`.
///
/// # Examples
///
/// ```
/// use eppo_report::record::get_path;
/// use serde_json::json;
///
/// let record = json!({"metadata": {"team_id": 7}});
/// assert_eq!(get_path(&record, "metadata.team_id"), Some(&json!(7)));
/// assert_eq!(get_path(&record, "metadata.teamId"), None);
/// ```
pub fn get_path<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(record, |current, segment| current.as_object()?.get(segment))
}

/// Return the first candidate path whose value is present and not `null`.
pub fn first_present<'a>(record: &'a Value, paths: &[&str]) -> Option<&'a Value> {
    paths
        .iter()
        .filter_map(|path| get_path(record, path))
        .find(|value| !value.is_null())
}

/// Return the first candidate path whose value is non-empty.
///
/// Empty means `null`, `false`, or the empty string.
pub fn first_non_empty<'a>(record: &'a Value, paths: &[&str]) -> Option<&'a Value> {
    paths
        .iter()
        .filter_map(|path| get_path(record, path))
        .find(|value| !is_empty_value(value))
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

/// Render a scalar as text: strings verbatim, numbers and booleans via `Display`.
///
/// Objects, arrays and `null` have no text form and yield `None`.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Coerce a JSON value to an integer the lenient way team ids are compared.
///
/// Integers pass through, floats truncate toward zero, and strings go through
/// [`parse_integer_prefix`]. Every other value is "not a number" (`None`).
pub fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|float| float.is_finite())
                .map(|float| float.trunc() as i64)
        }),
        Value::String(text) => parse_integer_prefix(text),
        _ => None,
    }
}

/// Parse the leading integer of `text`.
///
/// Leading whitespace and a single sign are accepted, then as many decimal digits
/// as follow; trailing garbage is ignored. No digits means no number.
///
/// # Examples
///
/// ```
/// use eppo_report::record::parse_integer_prefix;
///
/// assert_eq!(parse_integer_prefix(" 123"), Some(123));
/// assert_eq!(parse_integer_prefix("42abc"), Some(42));
/// assert_eq!(parse_integer_prefix("-7"), Some(-7));
/// assert_eq!(parse_integer_prefix("growth"), None);
/// ```
pub fn parse_integer_prefix(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = unsigned[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
