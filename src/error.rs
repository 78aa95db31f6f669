//! Error types for the eppo-report crate

use thiserror::Error;

/// Main error type for the eppo-report crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("missing required environment variable {variable}")]
    MissingConfiguration { variable: String },

    #[error("network error: no response from {url}: {message}")]
    Transport { url: String, message: String },

    #[error("API error: {url} returned HTTP {status}: {body}")]
    Api {
        url: String,
        status: u16,
        body: String,
    },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Build a missing-configuration error for the named variable.
    pub fn missing(variable: &str) -> Self {
        Error::MissingConfiguration {
            variable: variable.to_string(),
        }
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
