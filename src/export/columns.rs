//! Column projections of [`NormalizedRow`] for each report

use crate::normalize::NormalizedRow;

/// A field of a normalized row that can be printed in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    ExperimentName,
    ExperimentId,
    Status,
    OwnerName,
    OwnerEmail,
    ExperimentUrl,
}

impl RowField {
    pub fn value(self, row: &NormalizedRow) -> &str {
        match self {
            RowField::ExperimentName => &row.experiment_name,
            RowField::ExperimentId => &row.experiment_id,
            RowField::Status => &row.status,
            RowField::OwnerName => &row.owner_name,
            RowField::OwnerEmail => &row.owner_email,
            RowField::ExperimentUrl => &row.experiment_url,
        }
    }
}

/// A named output column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    pub field: RowField,
}

impl Column {
    pub const fn new(header: &'static str, field: RowField) -> Self {
        Self { header, field }
    }
}

/// Columns of the team report.
pub const TEAM_COLUMNS: &[Column] = &[
    Column::new("experiment_name", RowField::ExperimentName),
    Column::new("experiment_id", RowField::ExperimentId),
    Column::new("owner.name", RowField::OwnerName),
    Column::new("owner.email", RowField::OwnerEmail),
    Column::new("experiment_url", RowField::ExperimentUrl),
];

/// Columns of the ready / wrap-up status report.
pub const STATUS_COLUMNS: &[Column] = &[
    Column::new("owner", RowField::OwnerName),
    Column::new("owner_email", RowField::OwnerEmail),
    Column::new("experiment_name", RowField::ExperimentName),
    Column::new("experiment_id", RowField::ExperimentId),
    Column::new("experiment_status", RowField::Status),
    Column::new("experiment_link", RowField::ExperimentUrl),
];

/// Header labels of a column set, in order.
pub fn header(columns: &[Column]) -> Vec<&'static str> {
    columns.iter().map(|column| column.header).collect()
}

/// Project one row onto a column set.
pub fn project<'a>(columns: &[Column], row: &'a NormalizedRow) -> Vec<&'a str> {
    columns.iter().map(|column| column.field.value(row)).collect()
}
