//! Collaborator Traits
//!
//! Boundary contracts between the resolution/dispatch core and the
//! application that hosts it. The core reads the reference gene list and the
//! user's current selection, asks a fetcher for expression data, and never
//! mutates the selection itself.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::expression::GeneExpressionData;

/// Supplies the ordered list of every gene in the current dataset.
///
/// Implementations should hand out the same `Arc` for as long as the
/// dataset is unchanged; the memoized index keys on it.
pub trait ReferenceGeneProvider: Send + Sync {
    fn reference_genes(&self) -> Arc<[String]>;
}

/// Supplies a snapshot of the user-defined gene set.
pub trait UserGeneProvider: Send + Sync {
    /// Current selection, in insertion order
    fn user_defined_genes(&self) -> Vec<String>;

    /// Whether an add operation is in flight
    fn is_loading(&self) -> bool;
}

/// Fetches expression data for one canonical gene name.
///
/// On success the hosting store is expected to commit the gene into the
/// user-defined set. Retries, if any, belong to the implementation.
#[async_trait]
pub trait GeneDataFetcher: Send + Sync {
    async fn fetch_gene(&self, gene: &str) -> CoreResult<GeneExpressionData>;
}

impl ReferenceGeneProvider for Arc<[String]> {
    fn reference_genes(&self) -> Arc<[String]> {
        Arc::clone(self)
    }
}
