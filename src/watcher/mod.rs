mod dedup;
mod interpret;
mod poller;
pub mod verdicts;

pub use dedup::ErrorDedup;
pub use interpret::{check_response, parse_status};
pub use poller::StatusWatcher;
