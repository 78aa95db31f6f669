//! CSV rendering and export of experiment reports
//!
//! Fields are quoted only when they contain a comma, a double quote or a line
//! break; embedded quotes are doubled. Rows end with a bare `\n`.

use std::{fs, path::Path};

use csv::{QuoteStyle, Terminator, WriterBuilder};

use super::columns::{Column, header, project};
use crate::{Result, error::Error, normalize::NormalizedRow};

/// Exporter for report CSV files
pub struct ReportCsvExporter;

impl ReportCsvExporter {
    /// Render the header and one line per row into memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use eppo_report::export::{ReportCsvExporter, TEAM_COLUMNS};
    ///
    /// let bytes = ReportCsvExporter::render(TEAM_COLUMNS, &[])?;
    /// assert_eq!(
    ///     String::from_utf8(bytes).unwrap(),
    ///     "experiment_name,experiment_id,owner.name,owner.email,experiment_url\n"
    /// );
    /// # Ok::<(), eppo_report::Error>(())
    /// ```
    pub fn render(columns: &[Column], rows: &[NormalizedRow]) -> Result<Vec<u8>> {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(header(columns))?;
        for row in rows {
            writer.write_record(project(columns, row))?;
        }

        writer.into_inner().map_err(|err| Error::Io {
            operation: "flush CSV buffer".to_string(),
            source: err.into_error(),
        })
    }

    /// Render and write a report to `path`, creating parent directories.
    ///
    /// # Returns
    /// Number of data rows written
    pub fn export(path: &Path, columns: &[Column], rows: &[NormalizedRow]) -> Result<usize> {
        let bytes = Self::render(columns, rows)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                operation: format!("create output directory {}", parent.display()),
                source,
            })?;
        }

        fs::write(path, bytes).map_err(|source| Error::Io {
            operation: format!("write report to {}", path.display()),
            source,
        })?;

        Ok(rows.len())
    }
}
