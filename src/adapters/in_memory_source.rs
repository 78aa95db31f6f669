//! In-memory experiment source for testing.
//!
//! This adapter serves a fixed payload (or a fixed failure) without any network
//! I/O, so report runs can be exercised end to end in tests.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use serde_json::Value;

use crate::{Result, error::Error, ports::ExperimentSource};

#[derive(Clone)]
enum Canned {
    Payload(Value),
    ApiFailure { status: u16, body: String },
    TransportFailure(String),
}

/// In-memory source for testing.
///
/// Clones share the fetch counter, so a test can hand one clone to the app and
/// keep another to check how often it was called.
///
/// # Examples
///
/// ```
/// use eppo_report::adapters::InMemorySource;
/// use eppo_report::ports::ExperimentSource;
/// use serde_json::json;
///
/// let source = InMemorySource::new(json!([]));
/// source.fetch_all()?;
/// assert_eq!(source.fetch_count(), 1);
/// # Ok::<(), eppo_report::Error>(())
/// ```
#[derive(Clone)]
pub struct InMemorySource {
    canned: Canned,
    fetches: Arc<AtomicUsize>,
}

impl InMemorySource {
    /// Serve `payload` on every fetch.
    pub fn new(payload: Value) -> Self {
        Self::with(Canned::Payload(payload))
    }

    /// Fail every fetch as if the API answered with `status`.
    pub fn api_failure(status: u16, body: impl Into<String>) -> Self {
        Self::with(Canned::ApiFailure {
            status,
            body: body.into(),
        })
    }

    /// Fail every fetch as if no response arrived.
    pub fn transport_failure(message: impl Into<String>) -> Self {
        Self::with(Canned::TransportFailure(message.into()))
    }

    fn with(canned: Canned) -> Self {
        Self {
            canned,
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of fetches served so far, across all clones.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl Default for InMemorySource {
    fn default() -> Self {
        Self::new(Value::Array(Vec::new()))
    }
}

impl ExperimentSource for InMemorySource {
    fn fetch_all(&self) -> Result<Value> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match &self.canned {
            Canned::Payload(value) => Ok(value.clone()),
            Canned::ApiFailure { status, body } => Err(Error::Api {
                url: self.describe(),
                status: *status,
                body: body.clone(),
            }),
            Canned::TransportFailure(message) => Err(Error::Transport {
                url: self.describe(),
                message: message.clone(),
            }),
        }
    }

    fn describe(&self) -> String {
        "memory://experiments".to_string()
    }
}
