//! CLI infrastructure for the Eppo experiment reports
//!
//! This module provides the command-line interface for producing team and
//! status reports.

pub mod commands;
pub mod output;
