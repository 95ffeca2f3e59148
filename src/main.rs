use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use homework_watch::config::Config;
use homework_watch::notifier::TelegramNotifier;
use homework_watch::review_api::ReviewApiClient;
use homework_watch::watcher::StatusWatcher;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Startup preconditions are the only thing allowed to stop the process.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "refusing to start");
            std::process::exit(1);
        }
    };

    let api = match ReviewApiClient::new(&config) {
        Ok(api) => api,
        Err(err) => {
            error!(error = %err, "failed to build review API client");
            std::process::exit(1);
        }
    };

    let notifier = match TelegramNotifier::new(&config) {
        Ok(notifier) => notifier,
        Err(err) => {
            error!(error = %err, "failed to build Telegram notifier");
            std::process::exit(1);
        }
    };

    info!(endpoint = %config.endpoint, "homework watcher configured");
    let mut watcher = StatusWatcher::new(api, notifier, config.poll_interval);
    watcher.run().await;
}
