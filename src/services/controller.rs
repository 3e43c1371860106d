//! Gene Expression Controller
//!
//! Entry points behind the "add gene" and "bulk add genes" controls. Each
//! call snapshots the user's selection, resolves the input, posts a warning
//! for every rejection and hands accepted genes to the dispatch
//! orchestrator.

use std::sync::Arc;

use gene_expression_core::{
    GeneDataFetcher, GeneError, LifecycleSink, ReferenceGeneProvider, UserGeneProvider, Warning,
    WarningSink,
};

use crate::models::resolution::{BulkResolution, CandidateOutcome, Resolution};
use crate::models::settings::GeneExpressionConfig;
use crate::services::dispatch::{DispatchOrchestrator, DispatchReport};
use crate::services::gene_index::MemoizedGeneIndex;
use crate::services::resolver::GeneResolver;
use crate::utils::error::{AppError, AppResult};

/// Result of a single-gene add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddGeneOutcome {
    /// Nothing was selected
    Noop,
    /// Rejected before any fetch; a warning was posted
    Rejected(GeneError),
    /// The fetch ran; the report tells whether it succeeded
    Dispatched(DispatchReport),
}

/// Result of a bulk add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkAddOutcome {
    /// Empty input
    Noop,
    /// Input held no gene names; a warning was posted
    NoGeneEntered,
    /// Accepted genes were fetched as one batch
    Dispatched {
        report: DispatchReport,
        rejected: Vec<CandidateOutcome>,
    },
}

pub struct GeneExpressionController {
    config: GeneExpressionConfig,
    reference: Arc<dyn ReferenceGeneProvider>,
    user_genes: Arc<dyn UserGeneProvider>,
    warnings: Arc<dyn WarningSink>,
    orchestrator: DispatchOrchestrator,
    reference_index: MemoizedGeneIndex,
}

impl GeneExpressionController {
    pub fn new(
        config: GeneExpressionConfig,
        reference: Arc<dyn ReferenceGeneProvider>,
        user_genes: Arc<dyn UserGeneProvider>,
        fetcher: Arc<dyn GeneDataFetcher>,
        lifecycle: Arc<dyn LifecycleSink>,
        warnings: Arc<dyn WarningSink>,
    ) -> AppResult<Self> {
        config.validate().map_err(AppError::config)?;
        Ok(Self {
            config,
            reference,
            user_genes,
            warnings,
            orchestrator: DispatchOrchestrator::new(fetcher, lifecycle),
            reference_index: MemoizedGeneIndex::new(),
        })
    }

    pub fn config(&self) -> &GeneExpressionConfig {
        &self.config
    }

    /// Add one gene picked from the autosuggest list.
    pub async fn add_gene(&self, candidate: Option<&str>) -> AddGeneOutcome {
        let reference = self.reference.reference_genes();
        let index = self.reference_index.get(&reference);
        let resolver = GeneResolver::new(&reference, &index, self.config.max_user_defined_genes);
        let selected = self.user_genes.user_defined_genes();

        match resolver.resolve_single(candidate, &selected) {
            None => AddGeneOutcome::Noop,
            Some(Resolution::Rejected(err)) => {
                self.warn(&err, self.config.single_warnings_sticky);
                AddGeneOutcome::Rejected(err)
            }
            Some(Resolution::Resolved(gene)) => {
                AddGeneOutcome::Dispatched(self.orchestrator.dispatch_single(&gene).await)
            }
        }
    }

    /// Add every gene named in a comma/whitespace delimited list.
    ///
    /// Rejected candidates are reported one warning each and skipped; the
    /// rest are fetched together under a single lifecycle.
    pub async fn bulk_add(&self, input: &str) -> BulkAddOutcome {
        let reference = self.reference.reference_genes();
        let index = self.reference_index.get(&reference);
        let resolver = GeneResolver::new(&reference, &index, self.config.max_user_defined_genes);
        let selected = self.user_genes.user_defined_genes();

        let resolution =
            resolver.resolve_bulk(input, &selected, self.config.bulk_add_enforces_limit);

        let outcomes = match resolution {
            BulkResolution::Noop => return BulkAddOutcome::Noop,
            BulkResolution::NoGeneEntered => {
                self.warn(&GeneError::NoGeneEntered, self.config.bulk_warnings_sticky);
                return BulkAddOutcome::NoGeneEntered;
            }
            BulkResolution::Candidates(outcomes) => outcomes,
        };

        let mut accepted = Vec::new();
        let mut rejected = Vec::new();
        for outcome in outcomes {
            match &outcome.resolution {
                Resolution::Resolved(gene) => accepted.push(gene.clone()),
                Resolution::Rejected(err) => {
                    self.warn(err, self.config.bulk_warnings_sticky);
                    rejected.push(outcome);
                }
            }
        }

        tracing::info!(
            "Bulk add: {} accepted, {} rejected",
            accepted.len(),
            rejected.len()
        );

        let report = self.orchestrator.dispatch_bulk(&accepted[..]).await;
        BulkAddOutcome::Dispatched { report, rejected }
    }

    fn warn(&self, err: &GeneError, sticky: bool) {
        self.warnings.post(Warning::from_error(err, sticky));
    }
}

impl std::fmt::Debug for GeneExpressionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneExpressionController")
            .field("config", &self.config)
            .field("reference_index", &self.reference_index)
            .finish_non_exhaustive()
    }
}
