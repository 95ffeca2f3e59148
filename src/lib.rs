//! Watches the Practicum homework-review API and forwards status changes to
//! a Telegram chat, deduplicating repeated error notices across poll cycles.

pub mod config;
pub mod notifier;
pub mod review_api;
pub mod types;
pub mod watcher;
