//! Experiment source port.
//!
//! This module defines the trait boundary between the report pipeline and the
//! infrastructure that fetches experiments.

use serde_json::Value;

use crate::Result;

/// Port for fetching the full experiment collection.
///
/// Implementations return the decoded payload as-is. Callers must not assume it
/// is an array: the report pipeline checks the shape and degrades a malformed
/// payload to zero records.
///
/// # Examples
///
/// ```
/// use eppo_report::adapters::InMemorySource;
/// use eppo_report::ports::ExperimentSource;
/// use serde_json::json;
///
/// let source = InMemorySource::new(json!([{"id": "exp_1"}]));
/// assert!(source.fetch_all()?.is_array());
/// # Ok::<(), eppo_report::Error>(())
/// ```
pub trait ExperimentSource {
    /// Fetch every experiment visible to the configured credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No response was received (`Error::Transport`)
    /// - The API answered with a non-success status (`Error::Api`)
    fn fetch_all(&self) -> Result<Value>;

    /// Human-readable description of where experiments come from.
    fn describe(&self) -> String;
}
