use crate::model::pool::CardPool;
use serde::{Deserialize, Serialize};

/// Per-type draw constraints with per-index defaulting.
///
/// A caller may set a bound for some types and omit others: a missing
/// minimum defaults to 0 and a missing maximum defaults to the type's pool
/// count. The vectors may be shorter than the pool; missing trailing
/// entries are treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawBounds {
    minimums: Vec<Option<u32>>,
    maximums: Vec<Option<u32>>,
}

impl DrawBounds {
    /// Bounds that admit every hand.
    pub fn unconstrained() -> Self {
        Self::default()
    }

    pub fn new(minimums: Vec<Option<u32>>, maximums: Vec<Option<u32>>) -> Self {
        Self { minimums, maximums }
    }

    /// Lower bounds only, one per leading type.
    pub fn at_least(minimums: &[u32]) -> Self {
        Self {
            minimums: minimums.iter().copied().map(Some).collect(),
            maximums: Vec::new(),
        }
    }

    pub fn with_min(mut self, index: usize, count: u32) -> Self {
        if self.minimums.len() <= index {
            self.minimums.resize(index + 1, None);
        }
        self.minimums[index] = Some(count);
        self
    }

    pub fn with_max(mut self, index: usize, count: u32) -> Self {
        if self.maximums.len() <= index {
            self.maximums.resize(index + 1, None);
        }
        self.maximums[index] = Some(count);
        self
    }

    pub fn minimum(&self, index: usize) -> Option<u32> {
        self.minimums.get(index).copied().flatten()
    }

    pub fn maximum(&self, index: usize) -> Option<u32> {
        self.maximums.get(index).copied().flatten()
    }

    /// Longest explicitly specified prefix across both vectors.
    pub fn len(&self) -> usize {
        self.minimums.len().max(self.maximums.len())
    }

    pub fn is_empty(&self) -> bool {
        self.minimums.is_empty() && self.maximums.is_empty()
    }

    /// Applies defaulting against a pool, one concrete bound pair per type.
    ///
    /// Explicit maximums are clamped to the type's pool count; no hand can
    /// hold more copies than exist. A minimum above the pool count is left
    /// as-is and makes that type infeasible, which empties the enumeration
    /// downstream instead of failing.
    pub fn resolve(&self, pool: &CardPool) -> ResolvedBounds {
        let mut minimums = Vec::with_capacity(pool.type_count());
        let mut maximums = Vec::with_capacity(pool.type_count());
        for (index, &available) in pool.counts().iter().enumerate() {
            minimums.push(self.minimum(index).unwrap_or(0));
            maximums.push(self.maximum(index).unwrap_or(available).min(available));
        }
        ResolvedBounds { minimums, maximums }
    }
}

/// Concrete per-type bounds produced by [`DrawBounds::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBounds {
    pub minimums: Vec<u32>,
    pub maximums: Vec<u32>,
}
