//! User-Facing Warnings
//!
//! Non-fatal validation failures are reported as human-readable warnings.
//! Toast warnings disappear on their own; sticky warnings stay visible until
//! the user dismisses them, which is what the bulk-add path uses so that
//! several rejections from one submission can all be read.

use serde::{Deserialize, Serialize};

use crate::error::GeneError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Warning {
    pub message: String,
    /// Whether the warning stays visible until dismissed
    #[serde(default)]
    pub sticky: bool,
}

impl Warning {
    /// A toast-style warning
    pub fn toast(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            sticky: false,
        }
    }

    /// A warning that stays around until dismissed
    pub fn sticky(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            sticky: true,
        }
    }

    pub fn from_error(err: &GeneError, sticky: bool) -> Self {
        Self {
            message: err.to_string(),
            sticky,
        }
    }
}

/// Accepts warnings for display.
pub trait WarningSink: Send + Sync {
    fn post(&self, warning: Warning);
}
