//! Add Flow Integration Tests
//!
//! Drives the controller with the in-memory store and fetcher and checks
//! warnings, lifecycle events and the committed selection.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use gene_expression::services::{InMemoryExpressionFetcher, WarningLog};
use gene_expression::{
    AddGeneOutcome, BulkAddOutcome, GeneExpressionConfig, GeneExpressionController,
    GeneSelectionStore, StaticReferenceGenes,
};
use gene_expression_core::{
    AddState, CoreError, CoreResult, GeneDataFetcher, GeneError, GeneExpressionData,
    LifecyclePhase, UserGeneProvider, Warning,
};

const REFERENCE: &[&str] = &["Apod", "Cd74", "Bar-2", "Xist", "Malat1", "Sox17"];

fn reference() -> Vec<String> {
    REFERENCE.iter().map(|s| s.to_string()).collect()
}

fn matrix(skip: &[&str]) -> HashMap<String, Vec<f32>> {
    REFERENCE
        .iter()
        .filter(|g| !skip.contains(g))
        .enumerate()
        .map(|(i, g)| (g.to_string(), vec![0.0, i as f32, f32::NAN]))
        .collect()
}

struct Setup {
    controller: GeneExpressionController,
    store: Arc<GeneSelectionStore>,
    warnings: Arc<WarningLog>,
}

fn setup_with(config: GeneExpressionConfig, selected: Vec<String>, missing: &[&str]) -> Setup {
    let store = Arc::new(GeneSelectionStore::with_genes(selected));
    let warnings = Arc::new(WarningLog::new());
    let fetcher = Arc::new(InMemoryExpressionFetcher::new(matrix(missing), store.clone()));
    let controller = GeneExpressionController::new(
        config,
        Arc::new(StaticReferenceGenes::new(reference())),
        store.clone(),
        fetcher,
        store.clone(),
        warnings.clone(),
    )
    .expect("valid config");
    Setup {
        controller,
        store,
        warnings,
    }
}

fn setup() -> Setup {
    setup_with(GeneExpressionConfig::default(), Vec::new(), &[])
}

// ============================================================================
// Single add
// ============================================================================

#[tokio::test]
async fn test_single_add_then_duplicate() {
    let s = setup();

    let first = s.controller.add_gene(Some("Apod")).await;
    assert!(matches!(first, AddGeneOutcome::Dispatched(ref r) if r.state == AddState::Complete));
    assert!(!s.store.is_loading());

    let second = s.controller.add_gene(Some("Apod")).await;
    assert_eq!(second, AddGeneOutcome::Rejected(GeneError::AlreadyExists));

    assert_eq!(s.store.user_defined_genes(), vec!["Apod".to_string()]);
    assert_eq!(
        s.store.action_log(),
        vec![
            "single user defined gene start",
            "single user defined gene complete",
        ]
    );
    assert_eq!(s.warnings.entries(), vec![Warning::toast("That gene already exists")]);
}

#[tokio::test]
async fn test_single_add_limit_reached() {
    let selected: Vec<String> = (0..16).map(|i| format!("Gene{}", i)).collect();
    let s = setup_with(GeneExpressionConfig::default(), selected, &[]);

    let outcome = s.controller.add_gene(Some("Xist")).await;

    assert_eq!(
        outcome,
        AddGeneOutcome::Rejected(GeneError::LimitExceeded { limit: 16 })
    );
    assert_eq!(
        s.warnings.messages(),
        vec!["That's too many genes, you can have at most 16 user defined genes".to_string()]
    );
    assert!(s.store.events().is_empty());
}

#[tokio::test]
async fn test_single_add_fetch_failure_reports_error() {
    let s = setup_with(GeneExpressionConfig::default(), Vec::new(), &["Sox17"]);

    let outcome = s.controller.add_gene(Some("sox17")).await;

    let AddGeneOutcome::Dispatched(report) = outcome else {
        panic!("expected dispatch");
    };
    assert_eq!(report.state, AddState::Error);
    assert!(s.store.user_defined_genes().is_empty());
    // Fetch failures are not user warnings
    assert!(s.warnings.entries().is_empty());
    assert_eq!(
        s.store.action_log(),
        vec!["single user defined gene start", "single user defined gene error"]
    );
}

// ============================================================================
// Bulk add
// ============================================================================

#[tokio::test]
async fn test_bulk_add_reference_example() {
    let s = setup();

    let outcome = s
        .controller
        .bulk_add("Apod,,, Cd74,,    ,,,    Foo,    Bar-2,,")
        .await;

    let BulkAddOutcome::Dispatched { report, rejected } = outcome else {
        panic!("expected dispatch");
    };
    assert_eq!(report.requested, 3);
    assert_eq!(report.state, AddState::Complete);
    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0].input, "Foo");

    let committed: HashSet<String> = s.store.user_defined_genes().into_iter().collect();
    let expected: HashSet<String> = ["Apod", "Cd74", "Bar-2"].iter().map(|s| s.to_string()).collect();
    assert_eq!(committed, expected);

    assert_eq!(
        s.warnings.entries(),
        vec![Warning::sticky("Foo doesn't appear to be a valid gene name.")]
    );
    assert_eq!(
        s.store.action_log(),
        vec!["bulk user defined gene start", "bulk user defined gene complete"]
    );
}

#[tokio::test]
async fn test_bulk_add_partial_fetch_failure_is_one_error() {
    let s = setup_with(GeneExpressionConfig::default(), Vec::new(), &["Cd74"]);

    let outcome = s.controller.bulk_add("Apod Cd74 Xist").await;

    let BulkAddOutcome::Dispatched { report, rejected } = outcome else {
        panic!("expected dispatch");
    };
    assert!(rejected.is_empty());
    assert_eq!(report.state, AddState::Error);
    assert_eq!(report.failed, 1);

    let events = s.store.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].phase, LifecyclePhase::Error);
    // The successful fetches were still committed
    let committed: HashSet<String> = s.store.user_defined_genes().into_iter().collect();
    assert!(committed.contains("Apod"));
    assert!(committed.contains("Xist"));
    assert!(!committed.contains("Cd74"));
}

#[tokio::test]
async fn test_bulk_add_all_rejected_still_completes() {
    let s = setup_with(GeneExpressionConfig::default(), vec!["Apod".to_string()], &[]);

    let outcome = s.controller.bulk_add("APOD, Foo").await;

    let BulkAddOutcome::Dispatched { report, rejected } = outcome else {
        panic!("expected dispatch");
    };
    assert_eq!(report.requested, 0);
    assert_eq!(report.state, AddState::Complete);
    assert_eq!(rejected.len(), 2);
    assert_eq!(
        s.warnings.messages(),
        vec![
            "That gene already exists".to_string(),
            "Foo doesn't appear to be a valid gene name.".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_bulk_add_blank_input() {
    let s = setup();

    assert_eq!(s.controller.bulk_add("").await, BulkAddOutcome::Noop);
    assert_eq!(s.controller.bulk_add("   ").await, BulkAddOutcome::NoGeneEntered);

    assert_eq!(s.warnings.entries(), vec![Warning::sticky("Must enter a gene name.")]);
    assert!(s.store.events().is_empty());
}

#[tokio::test]
async fn test_bulk_add_with_limit_enforced() {
    let config = GeneExpressionConfig {
        max_user_defined_genes: 2,
        bulk_add_enforces_limit: true,
        ..Default::default()
    };
    let s = setup_with(config, Vec::new(), &[]);

    let outcome = s.controller.bulk_add("Apod Cd74 Xist").await;

    let BulkAddOutcome::Dispatched { report, rejected } = outcome else {
        panic!("expected dispatch");
    };
    assert_eq!(report.requested, 2);
    assert_eq!(rejected.len(), 1);
    assert_eq!(s.store.user_defined_genes().len(), 2);
}

// ============================================================================
// Overlapping adds
// ============================================================================

/// Fetcher that records every call and commits nothing, so two adds
/// validated against the same snapshot both get through.
struct CountingFetcher {
    calls: Mutex<Vec<String>>,
}

#[async_trait]
impl GeneDataFetcher for CountingFetcher {
    async fn fetch_gene(&self, gene: &str) -> CoreResult<GeneExpressionData> {
        self.calls.lock().unwrap().push(gene.to_string());
        if gene == "Malat1" {
            return Err(CoreError::fetch("backend timeout"));
        }
        Ok(GeneExpressionData::new(gene, vec![1.0]))
    }
}

#[tokio::test]
async fn test_overlapping_adds_validate_against_same_snapshot() {
    let store = Arc::new(GeneSelectionStore::new());
    let fetcher = Arc::new(CountingFetcher {
        calls: Mutex::new(Vec::new()),
    });
    let controller = GeneExpressionController::new(
        GeneExpressionConfig::default(),
        Arc::new(StaticReferenceGenes::new(reference())),
        store.clone(),
        fetcher.clone(),
        store.clone(),
        Arc::new(WarningLog::new()),
    )
    .unwrap();

    let (single, bulk) = tokio::join!(
        controller.add_gene(Some("Apod")),
        controller.bulk_add("Apod, Malat1")
    );

    assert!(matches!(single, AddGeneOutcome::Dispatched(ref r) if r.succeeded()));
    let BulkAddOutcome::Dispatched { report, .. } = bulk else {
        panic!("expected dispatch");
    };
    assert_eq!(report.state, AddState::Error);

    // No lock is taken between the two adds: Apod was fetched twice
    let calls = fetcher.calls.lock().unwrap();
    assert_eq!(calls.iter().filter(|g| g.as_str() == "Apod").count(), 2);

    // Each operation settled exactly once
    let events = store.events();
    let ids: HashSet<&str> = events.iter().map(|e| e.operation_id.as_str()).collect();
    assert_eq!(ids.len(), 2);
    assert_eq!(events.iter().filter(|e| e.is_terminal()).count(), 2);
    assert!(!store.is_loading());
}

#[tokio::test]
async fn test_fetched_summary_available_after_commit() {
    let s = setup();
    s.controller.add_gene(Some("Cd74")).await;

    let data = s.store.expression("Cd74").expect("committed data");
    let summary = data.summary().expect("finite values");
    assert_eq!(summary.min, 0.0);
    assert_eq!(summary.non_finite_count, 1);
}
