//! Eppo REST API experiment source.
//!
//! Issues a single authenticated `GET {base_url}/experiments` and hands back the
//! decoded JSON body. There is no pagination or retry.

use std::{fmt, time::Duration};

use serde_json::Value;
use tracing::{debug, error, info};
use ureq::Agent;

use crate::{Result, error::Error, ports::ExperimentSource};

/// Default API root when `EPPO_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://eppo.cloud/api/v1";

/// Header carrying the API key.
pub const TOKEN_HEADER: &str = "X-Eppo-Token";

/// Upper bound on the whole request, connect through body.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Experiment source backed by the Eppo REST API.
pub struct EppoApiSource {
    agent: Agent,
    base_url: String,
    api_key: String,
}

impl EppoApiSource {
    /// Create a source for `base_url` authenticated with `api_key`.
    ///
    /// A trailing `/` on the base URL is ignored.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let agent: Agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(REQUEST_TIMEOUT))
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Full URL of the experiments collection.
    pub fn experiments_url(&self) -> String {
        format!("{}/experiments", self.base_url)
    }

    fn decode_body(url: &str, body: String) -> Value {
        match serde_json::from_str(&body) {
            Ok(value) => value,
            Err(err) => {
                debug!(%url, error = %err, "response body is not JSON; passing it through as text");
                Value::String(body)
            }
        }
    }
}

impl fmt::Debug for EppoApiSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EppoApiSource")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl ExperimentSource for EppoApiSource {
    fn fetch_all(&self) -> Result<Value> {
        let url = self.experiments_url();
        info!(%url, "fetching experiments");

        let mut response = self
            .agent
            .get(&url)
            .header(TOKEN_HEADER, self.api_key.as_str())
            .header("Content-Type", "application/json")
            .call()
            .map_err(|err| {
                error!(%url, error = %err, "network error while fetching experiments");
                Error::Transport {
                    url: url.clone(),
                    message: err.to_string(),
                }
            })?;

        let status = response.status();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|err| Error::Transport {
                url: url.clone(),
                message: format!("failed reading response body: {err}"),
            })?;

        if !status.is_success() {
            error!(%url, status = status.as_u16(), %body, "experiments API returned an error");
            return Err(Error::Api {
                url,
                status: status.as_u16(),
                body,
            });
        }

        info!(%url, status = status.as_u16(), bytes = body.len(), "experiments fetched");
        Ok(Self::decode_body(&url, body))
    }

    fn describe(&self) -> String {
        self.experiments_url()
    }
}
