//! Expression Data
//!
//! The payload returned by the fetch collaborator: one gene's expression
//! values across all cells, plus the summary the histogram panel is drawn
//! from.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneExpressionData {
    /// Canonical gene name
    pub gene: String,
    /// One value per cell
    pub values: Vec<f32>,
}

/// Range summary of an expression vector. Non-finite values are skipped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionSummary {
    pub min: f32,
    pub max: f32,
    pub finite_count: usize,
    pub non_finite_count: usize,
}

impl GeneExpressionData {
    pub fn new(gene: impl Into<String>, values: Vec<f32>) -> Self {
        Self {
            gene: gene.into(),
            values,
        }
    }

    /// Returns `None` when there is no finite value to summarize.
    pub fn summary(&self) -> Option<ExpressionSummary> {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        let mut finite_count = 0;
        for v in self.values.iter().copied().filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
            finite_count += 1;
        }
        if finite_count == 0 {
            return None;
        }
        Some(ExpressionSummary {
            min,
            max,
            finite_count,
            non_finite_count: self.values.len() - finite_count,
        })
    }
}
