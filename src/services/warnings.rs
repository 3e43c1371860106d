//! Warning Log
//!
//! Collecting `WarningSink` that keeps every posted warning until it is
//! dismissed. Toasts are dropped by `dismiss_toasts`; sticky warnings stay
//! until `clear`.

use std::sync::Mutex;

use gene_expression_core::{Warning, WarningSink};

#[derive(Debug, Default)]
pub struct WarningLog {
    entries: Mutex<Vec<Warning>>,
}

impl WarningLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all warnings currently shown
    pub fn entries(&self) -> Vec<Warning> {
        self.lock().clone()
    }

    /// Messages currently shown, oldest first
    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|w| w.message.clone()).collect()
    }

    /// Drop toast-style warnings, keeping sticky ones
    pub fn dismiss_toasts(&self) {
        self.lock().retain(|w| w.sticky);
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Warning>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl WarningSink for WarningLog {
    fn post(&self, warning: Warning) {
        tracing::warn!(sticky = warning.sticky, "{}", warning.message);
        self.lock().push(warning);
    }
}
