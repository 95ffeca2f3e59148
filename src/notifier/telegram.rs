use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::info;

use crate::config::Config;
use crate::types::WatchError;

use super::Notifier;

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Telegram Bot API adapter: delivers watcher messages via sendMessage.
#[derive(Clone)]
pub struct TelegramNotifier {
    http: Client,
    api_base: String,
    token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(config: &Config) -> Result<Self, WatchError> {
        Self::with_api_base(config, TELEGRAM_API_BASE)
    }

    /// Point the adapter at a different API host. Used by tests.
    pub fn with_api_base(config: &Config, api_base: &str) -> Result<Self, WatchError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(WatchError::Http)?;

        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
            token: config.telegram_token.clone(),
            chat_id: config.telegram_chat_id.clone(),
        })
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), WatchError> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.token);
        let body = SendMessage {
            chat_id: &self.chat_id,
            text,
        };
        let response = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(WatchError::Http)?;

        if !response.status().is_success() {
            return Err(WatchError::Notify(format!(
                "sendMessage returned {}",
                response.status()
            )));
        }

        info!("notification delivered");
        Ok(())
    }
}
