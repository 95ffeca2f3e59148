use thiserror::Error;

/// Errors raised while watching the homework-review API.
#[derive(Debug, Error)]
pub enum WatchError {
    #[error("review API is unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("review API returned something other than a JSON object")]
    ResponseType,

    #[error("review API response contains no data")]
    ResponseValue,

    #[error("review API response is missing the \"homeworks\" key")]
    MissingHomeworks,

    #[error("\"homeworks\" value is not a list")]
    NotAList,

    #[error("status {0:?} is not in the verdict catalog")]
    UnknownStatus(String),

    #[error("no new review updates yet")]
    NoUpdate,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("notification delivery failed: {0}")]
    Notify(String),
}

/// Deduplication key for error notifications. Every kind the watcher can
/// report to the chat is listed here, so the dedup state is complete by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    UpstreamUnavailable,
    ResponseType,
    ResponseValue,
    MissingHomeworks,
    NotAList,
    UnknownStatus,
    NoUpdate,
}

impl FaultKind {
    pub const ALL: [FaultKind; 7] = [
        FaultKind::UpstreamUnavailable,
        FaultKind::ResponseType,
        FaultKind::ResponseValue,
        FaultKind::MissingHomeworks,
        FaultKind::NotAList,
        FaultKind::UnknownStatus,
        FaultKind::NoUpdate,
    ];
}

impl WatchError {
    /// Dedup key for this error, or `None` for faults outside the notified
    /// taxonomy (those are logged but never forwarded to the chat).
    pub fn kind(&self) -> Option<FaultKind> {
        match self {
            WatchError::UpstreamUnavailable(_) => Some(FaultKind::UpstreamUnavailable),
            WatchError::ResponseType => Some(FaultKind::ResponseType),
            WatchError::ResponseValue => Some(FaultKind::ResponseValue),
            WatchError::MissingHomeworks => Some(FaultKind::MissingHomeworks),
            WatchError::NotAList => Some(FaultKind::NotAList),
            WatchError::UnknownStatus(_) => Some(FaultKind::UnknownStatus),
            WatchError::NoUpdate => Some(FaultKind::NoUpdate),
            WatchError::Config(_) | WatchError::Http(_) | WatchError::Notify(_) => None,
        }
    }
}
