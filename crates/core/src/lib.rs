//! Gene Expression Core
//!
//! Error types, lifecycle events, warnings and collaborator traits shared by
//! the gene expression workspace. This crate has no dependency on the
//! resolution or dispatch logic; it only defines the seams.
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`) and the add-gene taxonomy (`GeneError`)
//! - `lifecycle` - Start/complete/error events and the per-operation state machine
//! - `warning` - User-facing warning type and sink
//! - `collaborators` - Reference list, user selection and fetch traits
//! - `expression` - Fetched expression data and its summary

pub mod collaborators;
pub mod error;
pub mod expression;
pub mod lifecycle;
pub mod warning;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CoreError, CoreResult, GeneError};

// ── Lifecycle ──────────────────────────────────────────────────────────
pub use lifecycle::{AddMode, AddState, LifecycleEvent, LifecyclePhase, LifecycleSink};

// ── Warnings ───────────────────────────────────────────────────────────
pub use warning::{Warning, WarningSink};

// ── Collaborators ──────────────────────────────────────────────────────
pub use collaborators::{GeneDataFetcher, ReferenceGeneProvider, UserGeneProvider};
pub use expression::{ExpressionSummary, GeneExpressionData};
