//! Eppo experiment reports
//!
//! This crate provides:
//! - Schema-tolerant field lookup over raw experiment records
//! - Team and status filters over the fetched experiment list
//! - Normalization of owners, names and links into report rows
//! - CSV export with summary statistics
//! - An HTTP adapter for the Eppo REST API

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod export;
pub mod normalize;
pub mod pipeline;
pub mod ports;
pub mod record;

pub use error::{Error, Result};
pub use normalize::{NormalizedRow, Owner};
pub use pipeline::{FilterPolicy, Report, ReportKind, ReportPipeline, ReportSummary, TeamId};
