use std::time::Duration;

use chrono::Utc;
use serde_json::Value;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::notifier::Notifier;
use crate::review_api::ReviewApi;
use crate::types::{FaultKind, WatchError};

use super::dedup::ErrorDedup;
use super::interpret::{check_response, parse_status};

/// Polls the review API on a fixed cadence and forwards status changes to
/// the notifier. Error notices are dedup-gated; status changes never are.
pub struct StatusWatcher<A, N> {
    api: A,
    notifier: N,
    dedup: ErrorDedup,
    cursor: i64,
    interval: Duration,
}

impl<A: ReviewApi, N: Notifier> StatusWatcher<A, N> {
    pub fn new(api: A, notifier: N, interval: Duration) -> Self {
        Self::with_cursor(api, notifier, interval, Utc::now().timestamp())
    }

    /// Start from an explicit watermark instead of the current wall clock.
    pub fn with_cursor(api: A, notifier: N, interval: Duration, cursor: i64) -> Self {
        Self {
            api,
            notifier,
            dedup: ErrorDedup::new(),
            cursor,
            interval,
        }
    }

    /// Epoch-second watermark sent with the next poll.
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Poll forever. No fault inside a cycle terminates the loop; the fixed
    /// delay applies whether the cycle succeeded or failed.
    pub async fn run(&mut self) {
        info!(interval_secs = self.interval.as_secs(), "starting poll loop");
        loop {
            self.cycle().await;
            sleep(self.interval).await;
        }
    }

    /// One fetch → check → interpret → notify pass.
    pub async fn cycle(&mut self) {
        match self.poll_once().await {
            Ok(message) => {
                // Genuine status changes are always delivered, never deduped.
                self.send_logged(&message).await;
            }
            Err(err) => self.handle_fault(err).await,
        }
    }

    async fn poll_once(&mut self) -> Result<String, WatchError> {
        let raw = self.api.fetch_statuses(self.cursor).await?;
        self.dedup.clear(FaultKind::UpstreamUnavailable);
        self.advance_cursor(&raw);
        let submissions = check_response(&raw, &mut self.dedup)?;
        parse_status(&submissions, &mut self.dedup)
    }

    /// The cursor tracks server time: it moves after every successful fetch,
    /// no matter how the rest of the cycle turns out.
    fn advance_cursor(&mut self, raw: &Value) {
        match raw.get("current_date").and_then(Value::as_i64) {
            Some(server_time) => self.cursor = server_time,
            None => warn!("response has no current_date, keeping previous cursor"),
        }
    }

    async fn handle_fault(&mut self, err: WatchError) {
        match err.kind() {
            Some(FaultKind::NoUpdate) => {
                debug!("no new homework statuses");
                self.notify_once(FaultKind::NoUpdate, &err.to_string()).await;
            }
            Some(kind) => {
                error!(error = %err, "poll cycle failed");
                let text = format!("Homework watcher hit an error: {err}");
                self.notify_once(kind, &text).await;
            }
            // Outside the known taxonomy: keep the loop alive, never notify.
            None => error!(error = %err, "unexpected failure, continuing"),
        }
    }

    async fn notify_once(&mut self, kind: FaultKind, text: &str) {
        if !self.dedup.should_notify(kind) {
            return;
        }
        self.send_logged(text).await;
        // Delivery is fire-and-forget: the flag flips even if the send
        // failed, so a flaky notifier cannot change loop behavior.
        self.dedup.mark_notified(kind);
    }

    async fn send_logged(&self, text: &str) {
        if let Err(err) = self.notifier.send(text).await {
            warn!(error = %err, "failed to deliver notification");
        }
    }
}
