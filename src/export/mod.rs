//! Export of normalized experiment rows
//!
//! Each report kind owns a fixed column set; the CSV exporter renders any of
//! them with the same escaping rules.

mod columns;
mod report_csv;

pub use columns::{Column, RowField, STATUS_COLUMNS, TEAM_COLUMNS, header, project};
pub use report_csv::ReportCsvExporter;
