use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::types::WatchError;

use super::queries::StatusQuery;
use super::ReviewApi;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the homework-review status endpoint.
#[derive(Clone)]
pub struct ReviewApiClient {
    http: Client,
    endpoint: String,
    token: String,
}

impl ReviewApiClient {
    pub fn new(config: &Config) -> Result<Self, WatchError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(WatchError::Http)?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            token: config.practicum_token.clone(),
        })
    }
}

#[async_trait]
impl ReviewApi for ReviewApiClient {
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value, WatchError> {
        let query = StatusQuery { from_date };
        debug!(from_date, "requesting homework statuses");
        let response = self
            .http
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&query)
            .send()
            .await
            .map_err(|err| WatchError::UpstreamUnavailable(err.to_string()))?;

        // Anything other than a plain 200 counts as an unavailable upstream.
        if response.status() != StatusCode::OK {
            return Err(WatchError::UpstreamUnavailable(format!(
                "{} returned {}",
                self.endpoint,
                response.status()
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|err| WatchError::UpstreamUnavailable(err.to_string()))
    }
}
