//! Dependency injection container for report runs.
//!
//! The container owns the experiment source and the report date, and wires the
//! fetch → filter → normalize → export steps together.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use chrono::{NaiveDate, Utc};
use tracing::{error, info};

use super::config::{ApiSettings, ReportConfig};
use crate::{
    Result,
    adapters::EppoApiSource,
    error::Error,
    export::ReportCsvExporter,
    pipeline::{Report, ReportPipeline, ReportSummary},
    ports::ExperimentSource,
};

/// What happened to the CSV file of a report run.
#[derive(Debug)]
pub enum OutputStatus {
    /// No experiment matched, so no file was written.
    NoMatches,
    /// The report was written to this path.
    Written(PathBuf),
    /// Writing failed; the in-memory report is still available.
    WriteFailed { path: PathBuf, error: Error },
}

/// Result of a completed report run.
#[derive(Debug)]
pub struct ReportRun {
    pub report: Report,
    pub output: OutputStatus,
}

impl ReportRun {
    pub fn summary(&self) -> ReportSummary {
        self.report.summary()
    }

    /// Path of the written file, if any.
    pub fn written_path(&self) -> Option<&Path> {
        match &self.output {
            OutputStatus::Written(path) => Some(path.as_path()),
            _ => None,
        }
    }
}

/// Application with dependency injection.
///
/// # Examples
///
/// ## Testing with an in-memory source
///
/// ```
/// use chrono::NaiveDate;
/// use eppo_report::adapters::InMemorySource;
/// use eppo_report::app::{App, ReportConfig};
/// use eppo_report::pipeline::ReportKind;
/// use serde_json::json;
///
/// let app = App::for_testing()
///     .with_source(InMemorySource::new(json!([{"status": "draft"}])))
///     .with_report_date(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())
///     .build();
///
/// let run = app.run_report(&ReportConfig::new(ReportKind::Status))?;
/// assert!(run.report.is_empty());
/// assert!(run.written_path().is_none());
/// # Ok::<(), eppo_report::Error>(())
/// ```
pub struct App {
    /// Where experiments are fetched from
    source: Arc<dyn ExperimentSource + Send + Sync>,
    /// Fixed report date (None = today in UTC)
    report_date: Option<NaiveDate>,
}

impl App {
    /// Create an app that fetches from the Eppo API.
    pub fn new(settings: &ApiSettings) -> Self {
        Self {
            source: Arc::new(EppoApiSource::new(
                settings.base_url.as_str(),
                settings.api_key.as_str(),
            )),
            report_date: None,
        }
    }

    /// Create a builder for constructing an app with custom dependencies.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    /// Get the experiment source.
    pub fn source(&self) -> Arc<dyn ExperimentSource + Send + Sync> {
        Arc::clone(&self.source)
    }

    /// Date stamped into report file names.
    pub fn report_date(&self) -> NaiveDate {
        self.report_date.unwrap_or_else(|| Utc::now().date_naive())
    }

    /// Fetch experiments and produce one report.
    ///
    /// # Errors
    ///
    /// Only fetch failures are returned. A payload of the wrong shape yields an
    /// empty report, and a failed file write is reported through
    /// [`OutputStatus::WriteFailed`].
    pub fn run_report(&self, config: &ReportConfig) -> Result<ReportRun> {
        let payload = self.source.fetch_all()?;
        Ok(self.report_from_payload(config, &payload))
    }

    /// Produce a report from an already fetched payload.
    pub fn report_from_payload(
        &self,
        config: &ReportConfig,
        payload: &serde_json::Value,
    ) -> ReportRun {
        let report = ReportPipeline::new(config.kind.clone()).run(payload);

        if report.is_empty() {
            info!(report = %config.kind.label(), "no experiments matched; skipping CSV output");
            return ReportRun {
                report,
                output: OutputStatus::NoMatches,
            };
        }

        let path = config
            .output_dir
            .join(config.kind.file_name(self.report_date()));
        let output = match ReportCsvExporter::export(&path, config.kind.columns(), &report.rows) {
            Ok(rows) => {
                info!(path = %path.display(), rows, "report written");
                OutputStatus::Written(path)
            }
            Err(error) => {
                error!(path = %path.display(), %error, "failed to write report");
                OutputStatus::WriteFailed { path, error }
            }
        };

        ReportRun { report, output }
    }
}

/// Builder for constructing an app with custom dependencies.
///
/// Primarily used for testing to inject a canned source and a fixed date.
pub struct AppBuilder {
    source: Option<Arc<dyn ExperimentSource + Send + Sync>>,
    report_date: Option<NaiveDate>,
}

impl AppBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            source: None,
            report_date: None,
        }
    }

    /// Set a custom experiment source.
    pub fn with_source<S>(mut self, source: S) -> Self
    where
        S: ExperimentSource + Send + Sync + 'static,
    {
        self.source = Some(Arc::new(source));
        self
    }

    /// Fix the date used in report file names.
    pub fn with_report_date(mut self, date: NaiveDate) -> Self {
        self.report_date = Some(date);
        self
    }

    /// Build the app.
    ///
    /// Without an explicit source the app serves an empty experiment list.
    pub fn build(self) -> App {
        App {
            source: self
                .source
                .unwrap_or_else(|| Arc::new(crate::adapters::InMemorySource::default())),
            report_date: self.report_date,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
