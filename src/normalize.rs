//! Normalization of raw experiment records into report rows
//!
//! Both reports share this projection; they only differ in which columns of a
//! [`NormalizedRow`] they print.

use serde_json::Value;

use crate::record::{
    ExperimentRecord, ID_FIELDS, NAME_FIELDS, OWNER_EMAIL_FIELDS, OWNER_FIELDS, OWNER_NAME_FIELDS,
    STATUS_FIELDS, first_non_empty, first_present, scalar_text,
};

/// Name used when a record carries none.
pub const UNNAMED_EXPERIMENT: &str = "Unnamed Experiment";

/// Prefix of the web link to an experiment.
pub const EXPERIMENT_URL_BASE: &str = "https://eppo.cloud/experiments/";

/// Resolved owner of an experiment. Missing parts are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Owner {
    pub name: String,
    pub email: String,
}

impl Owner {
    /// Resolve the owner of a record.
    ///
    /// The source is the first non-empty of `owner`, `created_by`, `createdBy`,
    /// `author`. Objects contribute their name and email fields, strings go
    /// through [`Owner::from_text`], anything else resolves to an empty owner.
    ///
    /// # Examples
    ///
    /// ```
    /// use eppo_report::normalize::Owner;
    /// use serde_json::json;
    ///
    /// let owner = Owner::resolve(&json!({"owner": {"name": "Jane Smith", "email": "jane@x.com"}}));
    /// assert_eq!(owner.name, "Jane Smith");
    /// assert_eq!(owner.email, "jane@x.com");
    /// ```
    pub fn resolve(record: &Value) -> Self {
        match first_non_empty(record, OWNER_FIELDS) {
            Some(source @ Value::Object(_)) => Self {
                name: text_or_empty(first_non_empty(source, OWNER_NAME_FIELDS)),
                email: text_or_empty(first_non_empty(source, OWNER_EMAIL_FIELDS)),
            },
            Some(Value::String(text)) => Self::from_text(text),
            _ => Self::default(),
        }
    }

    /// Interpret a plain-string owner.
    ///
    /// A string containing `@` is an email, and its local part doubles as the
    /// name. Otherwise the whole string is the name.
    pub fn from_text(text: &str) -> Self {
        match text.split_once('@') {
            Some((local, _)) => Self {
                name: local.to_string(),
                email: text.to_string(),
            },
            None => Self {
                name: text.to_string(),
                email: String::new(),
            },
        }
    }
}

/// Canonical per-experiment projection consumed by the CSV serializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRow {
    pub experiment_name: String,
    pub experiment_id: String,
    pub status: String,
    pub owner_name: String,
    pub owner_email: String,
    /// Empty exactly when `experiment_id` is empty.
    pub experiment_url: String,
}

impl NormalizedRow {
    /// Project a raw record onto the canonical row.
    pub fn from_record(record: &ExperimentRecord) -> Self {
        let experiment_name = first_non_empty(record, NAME_FIELDS)
            .and_then(scalar_text)
            .unwrap_or_else(|| UNNAMED_EXPERIMENT.to_string());
        let experiment_id = text_or_empty(first_non_empty(record, ID_FIELDS));
        let status = text_or_empty(first_present(record, STATUS_FIELDS));
        let owner = Owner::resolve(record);
        let experiment_url = experiment_url(&experiment_id);

        Self {
            experiment_name,
            experiment_id,
            status,
            owner_name: owner.name,
            owner_email: owner.email,
            experiment_url,
        }
    }
}

/// Web link for an experiment id, or an empty string when there is no id.
///
/// # Examples
///
/// ```
/// use eppo_report::normalize::experiment_url;
///
/// assert_eq!(experiment_url("exp_456"), "https://eppo.cloud/experiments/exp_456");
/// assert_eq!(experiment_url(""), "");
/// ```
pub fn experiment_url(experiment_id: &str) -> String {
    if experiment_id.is_empty() {
        String::new()
    } else {
        format!("{EXPERIMENT_URL_BASE}{experiment_id}")
    }
}

/// Normalize a sequence of records, preserving order.
pub fn normalize_all<'a, I>(records: I) -> Vec<NormalizedRow>
where
    I: IntoIterator<Item = &'a Value>,
{
    records.into_iter().map(NormalizedRow::from_record).collect()
}

fn text_or_empty(value: Option<&Value>) -> String {
    value.and_then(scalar_text).unwrap_or_default()
}
