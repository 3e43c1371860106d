//! Resolution Models
//!
//! Outcomes produced by the single-gene and bulk resolvers.

use gene_expression_core::GeneError;

/// Outcome of resolving one candidate name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Accepted; carries the reference list's casing
    Resolved(String),
    /// Rejected with a validation error
    Rejected(GeneError),
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    pub fn resolved_name(&self) -> Option<&str> {
        match self {
            Resolution::Resolved(name) => Some(name),
            Resolution::Rejected(_) => None,
        }
    }

    pub fn error(&self) -> Option<&GeneError> {
        match self {
            Resolution::Resolved(_) => None,
            Resolution::Rejected(err) => Some(err),
        }
    }
}

/// A bulk-add candidate and what became of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateOutcome {
    /// Candidate text as typed
    pub input: String,
    pub resolution: Resolution,
}

/// Result of running the bulk resolver over one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkResolution {
    /// Empty input; nothing to do
    Noop,
    /// Input held only delimiters
    NoGeneEntered,
    /// One outcome per distinct candidate, in first-seen order
    Candidates(Vec<CandidateOutcome>),
}

impl BulkResolution {
    /// Accepted canonical names, in candidate order
    pub fn accepted(&self) -> Vec<String> {
        match self {
            BulkResolution::Candidates(outcomes) => outcomes
                .iter()
                .filter_map(|o| o.resolution.resolved_name().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Rejected candidates, in candidate order
    pub fn rejected(&self) -> Vec<&CandidateOutcome> {
        match self {
            BulkResolution::Candidates(outcomes) => outcomes
                .iter()
                .filter(|o| !o.resolution.is_resolved())
                .collect(),
            _ => Vec::new(),
        }
    }
}
