//! In-Memory Expression Fetcher
//!
//! `GeneDataFetcher` backed by an expression matrix held in memory. A
//! successful fetch commits the gene into the selection store, which is the
//! only place the user-defined gene set is mutated.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use gene_expression_core::{CoreError, CoreResult, GeneDataFetcher, GeneExpressionData};

use crate::state::GeneSelectionStore;

pub struct InMemoryExpressionFetcher {
    /// Canonical gene name -> per-cell values
    matrix: HashMap<String, Vec<f32>>,
    store: Arc<GeneSelectionStore>,
}

impl InMemoryExpressionFetcher {
    pub fn new(matrix: HashMap<String, Vec<f32>>, store: Arc<GeneSelectionStore>) -> Self {
        Self { matrix, store }
    }
}

#[async_trait]
impl GeneDataFetcher for InMemoryExpressionFetcher {
    async fn fetch_gene(&self, gene: &str) -> CoreResult<GeneExpressionData> {
        let values = self
            .matrix
            .get(gene)
            .ok_or_else(|| CoreError::fetch(format!("no expression data for {}", gene)))?;

        let data = GeneExpressionData::new(gene, values.clone());
        if self.store.commit(data.clone()) {
            tracing::debug!("Committed {} to user defined genes", gene);
        }
        Ok(data)
    }
}

impl std::fmt::Debug for InMemoryExpressionFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryExpressionFetcher")
            .field("genes", &self.matrix.len())
            .finish()
    }
}
