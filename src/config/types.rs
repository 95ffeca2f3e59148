use std::time::Duration;

pub(super) const DEFAULT_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub(super) const DEFAULT_POLL_INTERVAL_SECS: u64 = 600;

/// Runtime configuration for the homework watcher.
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth token for the homework-review API.
    pub practicum_token: String,
    /// Telegram bot token.
    pub telegram_token: String,
    /// Chat that receives status-change and error notifications.
    pub telegram_chat_id: String,
    /// Homework status endpoint.
    pub endpoint: String,
    /// Fixed delay between poll cycles.
    pub poll_interval: Duration,
}
