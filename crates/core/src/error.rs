//! Core Error Types
//!
//! Defines the foundational error types used across the gene expression
//! workspace. They depend on nothing but thiserror and std.
//!
//! Two families live here:
//! - `CoreError` - failures reported across the collaborator seams (fetch, lifecycle)
//! - `GeneError` - the user-facing validation taxonomy for adding genes

use thiserror::Error;

/// Core error type for the gene expression workspace.
///
/// Only the failures the collaborator seams can report live here. The
/// application crate wraps it and adds config and storage variants.
#[derive(Error, Debug)]
pub enum CoreError {
    /// An illegal lifecycle transition or malformed input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Expression data could not be fetched
    #[error("Fetch error: {0}")]
    Fetch(String),
}

/// Result type alias for core errors
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a fetch error
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }
}

/// Convert CoreError to a string
impl From<CoreError> for String {
    fn from(err: CoreError) -> String {
        err.to_string()
    }
}

/// Reasons an add-gene request is turned down.
///
/// The `Display` output is the message shown to the user. Validation
/// variants are reported as warnings and never abort a bulk add;
/// `FetchFailed` only surfaces through the lifecycle error signal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneError {
    /// The gene is already part of the user-defined set
    #[error("That gene already exists")]
    AlreadyExists,

    /// The user-defined set is full
    #[error("That's too many genes, you can have at most {limit} user defined genes")]
    LimitExceeded { limit: usize },

    /// The name does not match any gene in the reference list.
    ///
    /// `name` is the text as the user typed it; `None` when the message
    /// should not echo the input back (single-gene path).
    #[error("{} doesn't appear to be a valid gene name.", .name.as_deref().unwrap_or("That"))]
    NotFound { name: Option<String> },

    /// Bulk input contained only delimiters
    #[error("Must enter a gene name.")]
    NoGeneEntered,

    /// The fetch collaborator rejected the request
    #[error("Failed to load expression data for {gene}: {reason}")]
    FetchFailed { gene: String, reason: String },
}

impl GeneError {
    /// Create a not-found error that echoes the typed name
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            name: Some(name.into()),
        }
    }

    /// Stable machine-readable code, used in logs
    pub fn code(&self) -> &'static str {
        match self {
            GeneError::AlreadyExists => "already_exists",
            GeneError::LimitExceeded { .. } => "limit_exceeded",
            GeneError::NotFound { .. } => "not_found",
            GeneError::NoGeneEntered => "no_gene_entered",
            GeneError::FetchFailed { .. } => "fetch_failed",
        }
    }
}
