//! Add-Gene Lifecycle
//!
//! Event types and the per-operation state machine that mark the boundary of
//! an asynchronous add operation. The external state store consumes these
//! events to flip its "loading" flag and to surface completion or failure.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Which add path produced an event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AddMode {
    /// One gene picked from the autosuggest list
    Single,
    /// A delimited list of genes typed into the bulk-add form
    Bulk,
}

impl fmt::Display for AddMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Bulk => write!(f, "bulk"),
        }
    }
}

/// Lifecycle phase carried by an event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LifecyclePhase {
    Start,
    Complete,
    Error,
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Complete => write!(f, "complete"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A discrete lifecycle signal for one add operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleEvent {
    /// Identifier shared by every event of one operation
    pub operation_id: String,
    pub mode: AddMode,
    pub phase: LifecyclePhase,
}

impl LifecycleEvent {
    pub fn new(operation_id: impl Into<String>, mode: AddMode, phase: LifecyclePhase) -> Self {
        Self {
            operation_id: operation_id.into(),
            mode,
            phase,
        }
    }

    /// Action label in the form the store understands,
    /// e.g. "bulk user defined gene start".
    pub fn action_type(&self) -> String {
        format!("{} user defined gene {}", self.mode, self.phase)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, LifecyclePhase::Complete | LifecyclePhase::Error)
    }
}

/// State of a single add operation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AddState {
    #[default]
    Idle,
    Pending,
    Complete,
    Error,
}

impl AddState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, AddState::Complete | AddState::Error)
    }

    /// Apply a lifecycle phase, returning the next state.
    ///
    /// Only `Idle -> Pending -> {Complete | Error}` is legal; a terminal
    /// state is entered exactly once.
    pub fn advance(self, phase: LifecyclePhase) -> CoreResult<AddState> {
        match (self, phase) {
            (AddState::Idle, LifecyclePhase::Start) => Ok(AddState::Pending),
            (AddState::Pending, LifecyclePhase::Complete) => Ok(AddState::Complete),
            (AddState::Pending, LifecyclePhase::Error) => Ok(AddState::Error),
            (state, phase) => Err(CoreError::validation(format!(
                "illegal lifecycle transition: {:?} on {}",
                state, phase
            ))),
        }
    }
}

/// Receives lifecycle signals. Implemented by the application state store.
pub trait LifecycleSink: Send + Sync {
    fn emit(&self, event: LifecycleEvent);
}
