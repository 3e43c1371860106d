//! Services
//!
//! Gene name resolution and add-gene orchestration.
//!
//! - gene_index.rs:  case-insensitive name -> position lookup, memoized
//! - resolver/:      single-gene and bulk resolution
//! - dispatch.rs:    concurrent fetches under one lifecycle
//! - controller.rs:  event-handler facade tying the pieces together
//! - fetch.rs:       in-memory expression data fetcher
//! - warnings.rs:    collecting warning sink

pub mod controller;
pub mod dispatch;
pub mod fetch;
pub mod gene_index;
pub mod resolver;
pub mod warnings;

pub use controller::{AddGeneOutcome, BulkAddOutcome, GeneExpressionController};
pub use dispatch::{DispatchOrchestrator, DispatchReport};
pub use fetch::InMemoryExpressionFetcher;
pub use gene_index::{GeneIndex, MemoizedGeneIndex};
pub use resolver::{tokenize_bulk_input, GeneResolver};
pub use warnings::WarningLog;
