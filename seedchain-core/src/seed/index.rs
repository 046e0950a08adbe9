//! Exact-match seed index
//!
//! Maps every length-k substring of the database sequences to the ordered
//! list of places it occurs, using hash-based lookup for instant membership
//! tests during the query scan.

use std::collections::HashMap;

use crate::types::SeedLoc;

use super::{SeedError, SeedResult};

/// Exact-match seed index over a collection of database sequences.
///
/// Each length-k substring (seed) maps to every `(seq_id, offset)` location
/// where it occurs, in scan order: `seq_id` ascending across sequences,
/// `offset` ascending within one. Downstream chaining relies on that ordering
/// for reproducible tie-breaking.
///
/// The seed length is fixed at construction and travels with the index;
/// operations that take an external k assert it against the stored value
/// instead of trusting the caller.
///
/// The index performs no internal mutation after [`build`](SeedIndex::build),
/// so it can be shared read-only across concurrent queries.
#[derive(Debug, Clone)]
pub struct SeedIndex {
    k: usize,
    seeds: HashMap<Vec<u8>, Vec<SeedLoc>>,
    num_sequences: usize,
}

impl SeedIndex {
    /// Build an index from `sequences` using seed length `k`.
    ///
    /// Sequences shorter than k contribute no seeds; this is a valid
    /// degenerate case, not an error. Empty input yields an empty index.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::InvalidParams`] when `k == 0`.
    pub fn build<S: AsRef<[u8]>>(sequences: &[S], k: usize) -> SeedResult<Self> {
        if k == 0 {
            return Err(SeedError::InvalidParams(
                "seed length k must be at least 1".to_string(),
            ));
        }

        let mut seeds: HashMap<Vec<u8>, Vec<SeedLoc>> = HashMap::new();

        for (seq_id, sequence) in sequences.iter().enumerate() {
            let sequence = sequence.as_ref();
            if sequence.len() < k {
                continue;
            }
            for offset in 0..=sequence.len() - k {
                let seed = sequence[offset..offset + k].to_vec();
                seeds
                    .entry(seed)
                    .or_default()
                    .push(SeedLoc { seq_id, offset });
            }
        }

        Ok(Self {
            k,
            seeds,
            num_sequences: sequences.len(),
        })
    }

    /// The seed length this index was built with.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Occurrence list for a seed, ordered by `(seq_id, offset)`.
    pub fn occurrences(&self, seed: &[u8]) -> Option<&[SeedLoc]> {
        self.seeds.get(seed).map(Vec::as_slice)
    }

    pub fn contains(&self, seed: &[u8]) -> bool {
        self.seeds.contains_key(seed)
    }

    /// Number of distinct seeds in the index.
    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    /// Number of database sequences the index was built from, including
    /// sequences too short to contribute seeds.
    pub fn num_sequences(&self) -> usize {
        self.num_sequences
    }

    /// Total occurrence records across all seeds.
    pub fn total_occurrences(&self) -> usize {
        self.seeds.values().map(Vec::len).sum()
    }

    /// Assert that a caller-supplied seed length matches the one the index
    /// was built with.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::KMismatch`] on disagreement, so a misconfigured
    /// pipeline fails fast instead of silently producing wrong results.
    pub fn ensure_k(&self, supplied_k: usize) -> SeedResult<()> {
        if supplied_k != self.k {
            return Err(SeedError::KMismatch {
                index_k: self.k,
                supplied_k,
            });
        }
        Ok(())
    }
}
