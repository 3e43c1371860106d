//! Dispatch Orchestrator
//!
//! Sends accepted genes to the fetch collaborator and reports one
//! start/complete/error lifecycle per add operation. A bulk add issues all
//! fetches at once, waits for every one to settle, and then reports a single
//! outcome for the whole batch. Failed fetches are never retried here.

use std::sync::Arc;

use futures_util::future::join_all;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gene_expression_core::{
    AddMode, AddState, GeneDataFetcher, GeneError, LifecycleEvent, LifecyclePhase, LifecycleSink,
};

/// Summary of one finished add operation.
///
/// Only counts are reported; which genes failed is visible in logs, not to
/// the lifecycle consumer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DispatchReport {
    pub operation_id: String,
    pub mode: AddMode,
    pub state: AddState,
    /// Number of fetches issued
    pub requested: usize,
    /// Number of fetches that failed
    pub failed: usize,
}

impl DispatchReport {
    pub fn succeeded(&self) -> bool {
        self.state == AddState::Complete
    }
}

/// One add operation moving through `Idle -> Pending -> terminal`.
struct AddOperation {
    id: String,
    mode: AddMode,
    state: AddState,
}

impl AddOperation {
    fn new(mode: AddMode) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            mode,
            state: AddState::Idle,
        }
    }
}

pub struct DispatchOrchestrator {
    fetcher: Arc<dyn GeneDataFetcher>,
    lifecycle: Arc<dyn LifecycleSink>,
}

impl DispatchOrchestrator {
    pub fn new(fetcher: Arc<dyn GeneDataFetcher>, lifecycle: Arc<dyn LifecycleSink>) -> Self {
        Self { fetcher, lifecycle }
    }

    /// Fetch one gene: start, then complete or error.
    pub async fn dispatch_single(&self, gene: &str) -> DispatchReport {
        self.run(AddMode::Single, std::slice::from_ref(&gene)).await
    }

    /// Fetch every gene concurrently under one start and one terminal signal.
    ///
    /// An empty batch still reports start followed by complete.
    pub async fn dispatch_bulk<S: AsRef<str> + Sync>(&self, genes: &[S]) -> DispatchReport {
        self.run(AddMode::Bulk, genes).await
    }

    async fn run<S: AsRef<str> + Sync>(&self, mode: AddMode, genes: &[S]) -> DispatchReport {
        let mut op = AddOperation::new(mode);
        self.transition(&mut op, LifecyclePhase::Start);

        let fetches = genes.iter().map(|gene| {
            let gene = gene.as_ref();
            async move { (gene, self.fetcher.fetch_gene(gene).await) }
        });
        let results = join_all(fetches).await;

        let mut failed = 0;
        for (gene, result) in results {
            if let Err(e) = result {
                let err = GeneError::FetchFailed {
                    gene: gene.to_string(),
                    reason: e.to_string(),
                };
                tracing::warn!(operation_id = %op.id, code = err.code(), "{}", err);
                failed += 1;
            }
        }

        let phase = if failed == 0 {
            LifecyclePhase::Complete
        } else {
            LifecyclePhase::Error
        };
        self.transition(&mut op, phase);

        DispatchReport {
            operation_id: op.id,
            mode: op.mode,
            state: op.state,
            requested: genes.len(),
            failed,
        }
    }

    fn transition(&self, op: &mut AddOperation, phase: LifecyclePhase) {
        match op.state.advance(phase) {
            Ok(next) => {
                op.state = next;
                tracing::info!(operation_id = %op.id, mode = %op.mode, "user defined gene {}", phase);
                self.lifecycle
                    .emit(LifecycleEvent::new(op.id.clone(), op.mode, phase));
            }
            Err(e) => {
                tracing::error!(operation_id = %op.id, "{}", e);
            }
        }
    }
}

impl std::fmt::Debug for DispatchOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatchOrchestrator").finish_non_exhaustive()
    }
}
