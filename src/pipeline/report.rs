//! The shared report pipeline: filter, normalize, summarize
//!
//! Team and status reports run the same steps and differ only in the
//! [`FilterPolicy`] and the column set chosen by their [`ReportKind`].

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde_json::Value;
use tracing::debug;

use super::filter::{FilterPolicy, TeamId};
use crate::{
    export::{Column, STATUS_COLUMNS, TEAM_COLUMNS},
    normalize::{NormalizedRow, normalize_all},
};

/// Which report to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportKind {
    /// Experiments owned by one team.
    Team(TeamId),
    /// Experiments in the `ready` or `wrap_up` state.
    Status,
}

impl ReportKind {
    pub fn filter_policy(&self) -> FilterPolicy {
        match self {
            ReportKind::Team(team) => FilterPolicy::Team(team.clone()),
            ReportKind::Status => FilterPolicy::Status,
        }
    }

    pub fn columns(&self) -> &'static [Column] {
        match self {
            ReportKind::Team(_) => TEAM_COLUMNS,
            ReportKind::Status => STATUS_COLUMNS,
        }
    }

    /// File name for a report produced on `date`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use eppo_report::pipeline::{ReportKind, TeamId};
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
    /// assert_eq!(
    ///     ReportKind::Team(TeamId::new("123")).file_name(date),
    ///     "eppo_experiments_team_123_2024-03-09.csv"
    /// );
    /// assert_eq!(
    ///     ReportKind::Status.file_name(date),
    ///     "eppo_ready_wrap_up_experiments_2024-03-09.csv"
    /// );
    /// ```
    pub fn file_name(&self, date: NaiveDate) -> String {
        let date = date.format("%Y-%m-%d");
        match self {
            ReportKind::Team(team) => format!("eppo_experiments_team_{team}_{date}.csv"),
            ReportKind::Status => format!("eppo_ready_wrap_up_experiments_{date}.csv"),
        }
    }

    /// Short human-readable label for console output.
    pub fn label(&self) -> String {
        match self {
            ReportKind::Team(team) => format!("team {team}"),
            ReportKind::Status => "ready / wrap_up status".to_string(),
        }
    }
}

/// Rows selected for a report, in the order the API returned them.
#[derive(Debug, Clone)]
pub struct Report {
    pub kind: ReportKind,
    /// Records in the fetched payload, `None` when it was not an array.
    pub fetched: Option<usize>,
    pub rows: Vec<NormalizedRow>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn summary(&self) -> ReportSummary {
        ReportSummary::from_rows(&self.rows)
    }
}

/// Statistics printed after a report run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub total: usize,
    /// Distinct non-empty owner emails, compared exactly.
    pub unique_owner_emails: usize,
    /// Rows per lowercased status; rows without a status are not counted.
    pub status_counts: BTreeMap<String, usize>,
}

impl ReportSummary {
    pub fn from_rows(rows: &[NormalizedRow]) -> Self {
        let emails: BTreeSet<&str> = rows
            .iter()
            .map(|row| row.owner_email.as_str())
            .filter(|email| !email.is_empty())
            .collect();

        let mut status_counts = BTreeMap::new();
        for row in rows.iter().filter(|row| !row.status.is_empty()) {
            *status_counts.entry(row.status.to_lowercase()).or_insert(0) += 1;
        }

        Self {
            total: rows.len(),
            unique_owner_emails: emails.len(),
            status_counts,
        }
    }
}

/// Runs filtering and normalization for one report kind.
pub struct ReportPipeline {
    kind: ReportKind,
}

impl ReportPipeline {
    pub fn new(kind: ReportKind) -> Self {
        Self { kind }
    }

    /// Filter and normalize a fetched payload.
    pub fn run(&self, payload: &Value) -> Report {
        let fetched = payload.as_array().map(Vec::len);
        let selected = self.kind.filter_policy().apply(payload);
        let rows = normalize_all(selected);

        debug!(
            report = %self.kind.label(),
            fetched = ?fetched,
            matched = rows.len(),
            "report pipeline finished"
        );

        Report {
            kind: self.kind.clone(),
            fetched,
            rows,
        }
    }
}
