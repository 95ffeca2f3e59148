mod client;
mod queries;
mod types;

pub use client::ReviewApiClient;
pub use types::Submission;

use async_trait::async_trait;
use serde_json::Value;

use crate::types::WatchError;

/// Seam between the polling loop and the remote review API.
#[async_trait]
pub trait ReviewApi {
    /// Fetch homework statuses changed since `from_date` (epoch seconds).
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value, WatchError>;
}
