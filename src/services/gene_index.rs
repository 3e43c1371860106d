//! Gene Index
//!
//! Case-insensitive lookup from gene name to its position in a reference
//! list, plus a single-slot memoizer for the large, rarely changing dataset
//! list so that it is not rebuilt on every keystroke.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Uppercased gene name -> position in the list the index was built from.
///
/// Iteration order of `keys` matches the first time each uppercased name
/// was seen. When two names collide after uppercasing, the later position
/// wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneIndex {
    positions: HashMap<String, usize>,
    keys: Vec<String>,
}

impl GeneIndex {
    pub fn build<S: AsRef<str>>(genes: &[S]) -> Self {
        let mut positions: HashMap<String, usize> = HashMap::with_capacity(genes.len());
        let mut keys = Vec::with_capacity(genes.len());
        for (i, gene) in genes.iter().enumerate() {
            let upper = gene.as_ref().to_uppercase();
            if positions.insert(upper.clone(), i).is_none() {
                keys.push(upper);
            }
        }
        Self { positions, keys }
    }

    /// Position of `name` (matched case-insensitively)
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(&name.to_uppercase()).copied()
    }

    /// Position of an already uppercased key
    pub fn position_upper(&self, upper: &str) -> Option<usize> {
        self.positions.get(upper).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Distinct uppercased names in first-seen order
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

struct CacheSlot {
    input: Arc<[String]>,
    index: Arc<GeneIndex>,
}

/// Remembers the index of the last reference list it was asked about.
///
/// A hit is either the same allocation or an equal sequence. Only one entry
/// is kept, so a changed dataset simply replaces it.
#[derive(Default)]
pub struct MemoizedGeneIndex {
    slot: Mutex<Option<CacheSlot>>,
}

impl MemoizedGeneIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, genes: &Arc<[String]>) -> Arc<GeneIndex> {
        // Poisoning cannot leave the slot half-written.
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(cached) = slot.as_ref() {
            if Arc::ptr_eq(&cached.input, genes) || cached.input[..] == genes[..] {
                return Arc::clone(&cached.index);
            }
        }

        tracing::debug!("Building gene index over {} reference genes", genes.len());
        let index = Arc::new(GeneIndex::build(&genes[..]));
        *slot = Some(CacheSlot {
            input: Arc::clone(genes),
            index: Arc::clone(&index),
        });
        index
    }

    pub fn clear(&self) {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        *slot = None;
    }
}

impl std::fmt::Debug for MemoizedGeneIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cached = self
            .slot
            .lock()
            .map(|s| s.as_ref().map(|c| c.input.len()))
            .unwrap_or(None);
        f.debug_struct("MemoizedGeneIndex")
            .field("cached_len", &cached)
            .finish()
    }
}
