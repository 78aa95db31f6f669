//! Report pipeline abstractions
//!
//! This module provides:
//! - Record filters by team id or lifecycle status
//! - The shared filter → normalize pipeline
//! - Summary statistics over the selected rows

pub mod filter;
pub mod report;

pub use filter::{FilterPolicy, REPORTABLE_STATUSES, TeamId, resolve_status, resolve_team_id};
pub use report::{Report, ReportKind, ReportPipeline, ReportSummary};
