use serde::{Deserialize, Serialize};

/// Ordered per-type card counts for a deck.
///
/// The deck size is always the sum of the entries; the pool is never
/// mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPool {
    counts: Vec<u32>,
}

impl CardPool {
    pub fn new(counts: Vec<u32>) -> Self {
        Self { counts }
    }

    pub fn deck_size(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn type_count(&self) -> usize {
        self.counts.len()
    }

    pub fn count(&self, index: usize) -> Option<u32> {
        self.counts.get(index).copied()
    }

    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl From<Vec<u32>> for CardPool {
    fn from(counts: Vec<u32>) -> Self {
        Self::new(counts)
    }
}
