use std::env;
use std::time::Duration;

use tracing::{error, warn};

use crate::types::WatchError;

use super::types::{Config, DEFAULT_ENDPOINT, DEFAULT_POLL_INTERVAL_SECS};

impl Config {
    /// Load configuration from the process environment.
    /// Every missing required variable gets its own log line before the
    /// error is returned, so a misconfigured deployment shows the full list.
    pub fn from_env() -> Result<Self, WatchError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, WatchError> {
        let mut missing = Vec::new();
        let practicum_token = required(&lookup, "PRACTICUM_TOKEN", &mut missing);
        let telegram_token = required(&lookup, "TELEGRAM_TOKEN", &mut missing);
        let telegram_chat_id = required(&lookup, "TELEGRAM_CHAT_ID", &mut missing);

        if !missing.is_empty() {
            for name in &missing {
                error!(variable = %name, "required environment variable is not set");
            }
            return Err(WatchError::Config(format!(
                "missing environment variables: {}",
                missing.join(", ")
            )));
        }

        let endpoint = lookup("HOMEWORK_API_URL")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let poll_interval = match lookup("POLL_INTERVAL_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!(value = %raw, "invalid POLL_INTERVAL_SECS, using default");
                    Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS)
                }
            },
            None => Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
        };

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint,
            poll_interval,
        })
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> String {
    match lookup(name).filter(|value| !value.trim().is_empty()) {
        Some(value) => value,
        None => {
            missing.push(name);
            String::new()
        }
    }
}
