// Capped, deduplicating candidate accumulator.

use hashbrown::HashSet;

/// Collects candidate strings for one suggestion category.
///
/// Duplicates are silently dropped and insertion order is preserved, so
/// truncation at the cap keeps the earliest-generated candidates. Together
/// with a seeded random source this makes generator output fully
/// deterministic; with an unseeded source the surviving entries vary from
/// call to call, which callers are expected to tolerate.
pub struct CandidateSet {
    /// Maximum number of candidates to keep.
    limit: usize,
    /// Collected candidates, in insertion order.
    items: Vec<String>,
    /// Already-seen strings, for deduplication.
    seen: HashSet<String>,
}

impl CandidateSet {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            items: Vec::with_capacity(limit.min(32)),
            seen: HashSet::new(),
        }
    }

    /// Add a candidate. Returns `false` if it was a duplicate or the set
    /// is already at its cap.
    pub fn push(&mut self, candidate: String) -> bool {
        if self.items.len() >= self.limit {
            return false;
        }
        if !self.seen.insert(candidate.clone()) {
            return false;
        }
        self.items.push(candidate);
        true
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.limit
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Consume the set and return the collected candidates.
    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}
