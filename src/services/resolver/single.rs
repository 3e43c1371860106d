//! Single-gene resolution.

use gene_expression_core::GeneError;

use super::GeneResolver;
use crate::models::resolution::Resolution;

impl<'a> GeneResolver<'a> {
    /// Resolve one candidate against the current selection.
    ///
    /// Returns `None` for an absent or empty candidate. Checks run in order:
    /// already selected (exact match), selection full, unknown name.
    pub fn resolve_single(&self, candidate: Option<&str>, user_genes: &[String]) -> Option<Resolution> {
        let candidate = candidate.filter(|c| !c.is_empty())?;

        if user_genes.iter().any(|g| g == candidate) {
            return Some(Resolution::Rejected(GeneError::AlreadyExists));
        }

        if user_genes.len() >= self.limit {
            return Some(Resolution::Rejected(GeneError::LimitExceeded {
                limit: self.limit,
            }));
        }

        match self.canonical_upper(&candidate.to_uppercase()) {
            Some(canonical) => Some(Resolution::Resolved(canonical.to_string())),
            None => Some(Resolution::Rejected(GeneError::NotFound { name: None })),
        }
    }
}
