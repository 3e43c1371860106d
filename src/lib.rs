//! Gene Expression
//!
//! Resolution and dispatch logic behind the gene expression panel of a
//! single-cell viewer. It includes:
//! - Case-insensitive gene indexing over the dataset's reference list
//! - Single-gene and bulk-add validation against the user's selection
//! - Concurrent expression fetches reported as one start/complete/error lifecycle
//! - JSON configuration and in-memory collaborator implementations

pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

pub use models::resolution::{BulkResolution, CandidateOutcome, Resolution};
pub use models::settings::{GeneExpressionConfig, GeneExpressionConfigUpdate};
pub use services::{
    AddGeneOutcome, BulkAddOutcome, DispatchOrchestrator, DispatchReport,
    GeneExpressionController, GeneIndex, GeneResolver, MemoizedGeneIndex,
};
pub use state::{GeneSelectionStore, StaticReferenceGenes};
pub use storage::ConfigService;
pub use utils::error::{AppError, AppResult};
