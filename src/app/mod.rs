//! Application layer with dependency injection container.
//!
//! The container owns infrastructure dependencies (the experiment source) and
//! runs the report use case on top of them, following hexagonal architecture
//! principles.
//!
//! # Architecture
//!
//! ```text
//! ExperimentSource::fetch_all ──► FilterPolicy::apply ──► normalize_all ──► ReportCsvExporter
//!   (EppoApiSource / InMemory)      (team or status)       (NormalizedRow)     (CSV + summary)
//! ```
//!
//! # Usage
//!
//! ## Production
//!
//! ```no_run
//! use eppo_report::app::{ApiSettings, App, ReportConfig};
//! use eppo_report::pipeline::ReportKind;
//!
//! let settings = ApiSettings::from_env()?;
//! let app = App::new(&settings);
//! let run = app.run_report(&ReportConfig::new(ReportKind::Status))?;
//! println!("Total experiments: {}", run.summary().total);
//! # Ok::<(), eppo_report::Error>(())
//! ```

pub mod config;
pub mod container;

pub use config::{ApiSettings, ReportConfig, env_lookup, load_team_id};
pub use container::{App, AppBuilder, OutputStatus, ReportRun};
