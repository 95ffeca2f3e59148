use std::collections::HashMap;

use crate::types::FaultKind;

/// Tracks which fault kinds have already been reported to the chat, so an
/// unresolved error streak produces exactly one notification.
#[derive(Debug)]
pub struct ErrorDedup {
    reported: HashMap<FaultKind, bool>,
}

impl ErrorDedup {
    pub fn new() -> Self {
        Self {
            reported: FaultKind::ALL.iter().map(|kind| (*kind, false)).collect(),
        }
    }

    /// True iff this kind has not been reported since it last cleared.
    pub fn should_notify(&self, kind: FaultKind) -> bool {
        // Every kind is registered in new(); indexing keeps a broken
        // invariant from passing silently.
        !self.reported[&kind]
    }

    pub fn mark_notified(&mut self, kind: FaultKind) {
        self.reported.insert(kind, true);
    }

    /// Re-arm notifications for a kind whose condition has cleared.
    pub fn clear(&mut self, kind: FaultKind) {
        self.reported.insert(kind, false);
    }
}

impl Default for ErrorDedup {
    fn default() -> Self {
        Self::new()
    }
}
