//! Configuration types for report runs.

use std::{fmt, path::PathBuf};

use tracing::warn;

use crate::{
    Result,
    adapters::DEFAULT_BASE_URL,
    error::Error,
    pipeline::{ReportKind, TeamId},
};

/// Environment variable holding the API key (required).
pub const API_KEY_VAR: &str = "EPPO_API_KEY";
/// Environment variable overriding the API root.
pub const BASE_URL_VAR: &str = "EPPO_BASE_URL";
/// Environment variable holding the team for the team report.
pub const TEAM_ID_VAR: &str = "TEAM_ID";

/// Connection settings for the experiments API.
///
/// Values are read through a lookup function so tests never touch the process
/// environment. Empty values count as unset.
///
/// # Examples
///
/// ```
/// use eppo_report::app::ApiSettings;
///
/// let settings = ApiSettings::from_lookup(|name| match name {
///     "EPPO_API_KEY" => Some("key".to_string()),
///     _ => None,
/// })?;
/// assert_eq!(settings.base_url, "https://eppo.cloud/api/v1");
/// # Ok::<(), eppo_report::Error>(())
/// ```
#[derive(Clone)]
pub struct ApiSettings {
    pub api_key: String,
    pub base_url: String,
}

impl ApiSettings {
    /// Load settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env_lookup)
    }

    /// Load settings through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingConfiguration` when `EPPO_API_KEY` is unset or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = non_empty(lookup(API_KEY_VAR)).ok_or_else(|| Error::missing(API_KEY_VAR))?;
        let base_url =
            non_empty(lookup(BASE_URL_VAR)).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self { api_key, base_url })
    }

    /// Override the base URL, e.g. from a command-line flag.
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = non_empty(base_url) {
            self.base_url = url;
        }
        self
    }
}

impl fmt::Debug for ApiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiSettings")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Resolve the team for the team report.
///
/// An explicit value wins over `TEAM_ID`. A value that is not numeric is
/// accepted but logged, since it can never match a record.
///
/// # Errors
///
/// Returns `Error::MissingConfiguration` when neither source provides a value.
pub fn load_team_id<F>(explicit: Option<String>, lookup: F) -> Result<TeamId>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = non_empty(explicit)
        .or_else(|| non_empty(lookup(TEAM_ID_VAR)))
        .ok_or_else(|| Error::missing(TEAM_ID_VAR))?;

    let team = TeamId::new(raw);
    if team.numeric().is_none() {
        warn!(team_id = %team, "team id is not numeric; no experiments will match");
    }
    Ok(team)
}

/// Configuration for a single report run.
///
/// # Examples
///
/// ```
/// use eppo_report::app::ReportConfig;
/// use eppo_report::pipeline::ReportKind;
///
/// let config = ReportConfig::new(ReportKind::Status).with_output_dir("reports");
/// assert_eq!(config.output_dir.to_str(), Some("reports"));
/// ```
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Which report to produce
    pub kind: ReportKind,
    /// Directory the CSV file is written into
    pub output_dir: PathBuf,
}

impl ReportConfig {
    /// Create a report configuration writing into the current directory.
    pub fn new(kind: ReportKind) -> Self {
        Self {
            kind,
            output_dir: PathBuf::from("."),
        }
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}

/// Read a variable from the process environment.
pub fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
