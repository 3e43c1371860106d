//! Gene Name Resolution
//!
//! Validates user-supplied gene names against the dataset's reference list
//! and the user's current selection.
//!
//! Architecture:
//! - single.rs: one name picked from the autosuggest list
//! - bulk.rs:   a comma/whitespace delimited list typed into the bulk form
//!
//! Both paths take an explicit snapshot of the user-defined gene set; they
//! never read or mutate live state.

pub mod bulk;
pub mod single;

use crate::services::gene_index::GeneIndex;

pub use bulk::tokenize_bulk_input;

/// Reference data a resolution runs against.
#[derive(Debug, Clone, Copy)]
pub struct GeneResolver<'a> {
    reference: &'a [String],
    index: &'a GeneIndex,
    limit: usize,
}

impl<'a> GeneResolver<'a> {
    /// `index` must have been built from `reference`.
    pub fn new(reference: &'a [String], index: &'a GeneIndex, limit: usize) -> Self {
        Self {
            reference,
            index,
            limit,
        }
    }

    /// Canonical spelling for an uppercased key, if the dataset has it
    fn canonical_upper(&self, upper: &str) -> Option<&'a str> {
        self.index
            .position_upper(upper)
            .and_then(|i| self.reference.get(i))
            .map(String::as_str)
    }
}
