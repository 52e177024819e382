//! Transient confirmation of the most recent creation.

use std::sync::Mutex;

use crate::domain::entities::CreationResult;

/// Holds the last [`CreationResult`] until the user dismisses it.
#[derive(Debug, Default)]
pub struct ResultPresentation {
    current: Mutex<Option<CreationResult>>,
}

impl ResultPresentation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `result` and makes the confirmation visible.
    pub fn show(&self, result: CreationResult) {
        *self.slot() = Some(result);
    }

    /// Clears the stored result and hides the confirmation.
    pub fn dismiss(&self) {
        self.slot().take();
    }

    pub fn current(&self) -> Option<CreationResult> {
        self.slot().clone()
    }

    pub fn is_visible(&self) -> bool {
        self.slot().is_some()
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<CreationResult>> {
        // Writers never leave the slot half-updated.
        self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
