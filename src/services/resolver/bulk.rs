//! Bulk resolution.
//!
//! Input such as `Apod,,, Cd74,,    ,,,    Foo,    Bar-2,,` is split on runs
//! of commas and whitespace. Every distinct candidate is resolved on its
//! own; a rejection never stops the remaining candidates.

use std::collections::HashSet;

use gene_expression_core::GeneError;

use super::GeneResolver;
use crate::models::resolution::{BulkResolution, CandidateOutcome, Resolution};
use crate::services::gene_index::GeneIndex;

/// Commas and any Unicode whitespace. Tab- and newline-separated lists
/// pasted from a spreadsheet split the same way as space-separated ones,
/// which is wider than a plain `[ ,]+` split.
fn is_delimiter(c: char) -> bool {
    c == ',' || c.is_whitespace()
}

/// Split bulk input into candidates: empty tokens dropped, exact duplicates
/// removed, first occurrence order kept.
pub fn tokenize_bulk_input(input: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    input
        .split(is_delimiter)
        .filter(|token| !token.is_empty())
        .filter(|token| seen.insert(*token))
        .map(str::to_string)
        .collect()
}

impl<'a> GeneResolver<'a> {
    /// Resolve a bulk-add submission against the current selection.
    ///
    /// Candidates that differ only in case share one outcome, placed where
    /// the first spelling appeared. A `NotFound` warning echoes the last
    /// spelling typed. With `enforce_limit`, candidates past the selection
    /// limit are rejected with `LimitExceeded`.
    pub fn resolve_bulk(
        &self,
        input: &str,
        user_genes: &[String],
        enforce_limit: bool,
    ) -> BulkResolution {
        if input.is_empty() {
            return BulkResolution::Noop;
        }

        let candidates = tokenize_bulk_input(input);
        if candidates.is_empty() {
            return BulkResolution::NoGeneEntered;
        }

        // Both lists are short-lived, so they are indexed per call.
        let upper_candidates = GeneIndex::build(&candidates[..]);
        let upper_user_genes = GeneIndex::build(user_genes);

        let mut accepted = 0;
        let outcomes = upper_candidates
            .keys()
            .iter()
            .filter_map(|upper| {
                let typed = &candidates[upper_candidates.position_upper(upper)?];
                let resolution = if upper_user_genes.position_upper(upper).is_some() {
                    Resolution::Rejected(GeneError::AlreadyExists)
                } else if enforce_limit && user_genes.len() + accepted >= self.limit {
                    Resolution::Rejected(GeneError::LimitExceeded { limit: self.limit })
                } else {
                    match self.canonical_upper(upper) {
                        Some(canonical) => {
                            accepted += 1;
                            Resolution::Resolved(canonical.to_string())
                        }
                        None => Resolution::Rejected(GeneError::not_found(typed.as_str())),
                    }
                };
                tracing::debug!(candidate = %typed, resolved = resolution.is_resolved(), "bulk candidate");
                Some(CandidateOutcome {
                    input: typed.clone(),
                    resolution,
                })
            })
            .collect();

        BulkResolution::Candidates(outcomes)
    }
}
