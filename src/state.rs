//! Application State
//!
//! In-memory stand-ins for the application state store: the dataset's
//! reference gene list and the user's gene selection. The selection store
//! follows the two-phase flow of the add operation: resolvers read a
//! snapshot, lifecycle events toggle the loading flag, and genes are only
//! committed once their expression data has been fetched.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use gene_expression_core::{
    GeneExpressionData, LifecycleEvent, LifecyclePhase, LifecycleSink, ReferenceGeneProvider,
    UserGeneProvider,
};

/// Reference gene list for the loaded dataset.
#[derive(Debug)]
pub struct StaticReferenceGenes {
    genes: RwLock<Arc<[String]>>,
}

impl StaticReferenceGenes {
    pub fn new(genes: Vec<String>) -> Self {
        Self {
            genes: RwLock::new(genes.into()),
        }
    }

    /// Swap in the gene list of a newly loaded dataset
    pub fn replace(&self, genes: Vec<String>) {
        let mut guard = self.genes.write().unwrap_or_else(|e| e.into_inner());
        *guard = genes.into();
    }
}

impl ReferenceGeneProvider for StaticReferenceGenes {
    fn reference_genes(&self) -> Arc<[String]> {
        let guard = self.genes.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&*guard)
    }
}

#[derive(Debug, Default)]
struct SelectionState {
    /// User-defined genes, in the order they were committed
    genes: Vec<String>,
    /// Fetched data per committed gene
    expression: HashMap<String, GeneExpressionData>,
    /// Add operations that have started but not settled
    pending: HashSet<String>,
    /// Every lifecycle event received
    events: Vec<LifecycleEvent>,
}

/// User-defined gene selection plus add-operation bookkeeping.
#[derive(Debug, Default)]
pub struct GeneSelectionStore {
    state: RwLock<SelectionState>,
}

impl GeneSelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the selection (e.g. restored from a saved session)
    pub fn with_genes(genes: Vec<String>) -> Self {
        let store = Self::new();
        store.write().genes = genes;
        store
    }

    /// Record fetched data and add the gene to the selection.
    ///
    /// Returns `false` when the gene was already selected; its data is
    /// refreshed either way.
    pub fn commit(&self, data: GeneExpressionData) -> bool {
        let mut state = self.write();
        let added = !state.genes.contains(&data.gene);
        if added {
            state.genes.push(data.gene.clone());
        }
        state.expression.insert(data.gene.clone(), data);
        added
    }

    /// Remove a gene from the selection
    pub fn remove(&self, gene: &str) -> bool {
        let mut state = self.write();
        state.expression.remove(gene);
        let before = state.genes.len();
        state.genes.retain(|g| g != gene);
        state.genes.len() != before
    }

    pub fn clear(&self) {
        let mut state = self.write();
        state.genes.clear();
        state.expression.clear();
    }

    pub fn expression(&self, gene: &str) -> Option<GeneExpressionData> {
        self.read().expression.get(gene).cloned()
    }

    pub fn events(&self) -> Vec<LifecycleEvent> {
        self.read().events.clone()
    }

    /// Store action labels of all received events, oldest first
    pub fn action_log(&self) -> Vec<String> {
        self.read().events.iter().map(|e| e.action_type()).collect()
    }

    fn read(&self) -> RwLockReadGuard<'_, SelectionState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, SelectionState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl UserGeneProvider for GeneSelectionStore {
    fn user_defined_genes(&self) -> Vec<String> {
        self.read().genes.clone()
    }

    fn is_loading(&self) -> bool {
        !self.read().pending.is_empty()
    }
}

impl LifecycleSink for GeneSelectionStore {
    fn emit(&self, event: LifecycleEvent) {
        let mut state = self.write();
        match event.phase {
            LifecyclePhase::Start => {
                state.pending.insert(event.operation_id.clone());
            }
            LifecyclePhase::Complete | LifecyclePhase::Error => {
                state.pending.remove(&event.operation_id);
            }
        }
        state.events.push(event);
    }
}
