mod telegram;

pub use telegram::TelegramNotifier;

use async_trait::async_trait;

use crate::types::WatchError;

/// Outbound channel for watcher notifications. Delivery failures are the
/// caller's to log; they never feed back into the polling state machine.
#[async_trait]
pub trait Notifier {
    async fn send(&self, text: &str) -> Result<(), WatchError>;
}
