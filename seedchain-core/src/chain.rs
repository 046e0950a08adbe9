//! Chain merging for seedchain
//!
//! Consolidates the seed hits shared between a query and each database
//! sequence into one contiguous ungapped alignment span per sequence, using
//! a greedy forward-progress acceptance rule. The result is the candidate
//! region that downstream extension, scoring, and reporting consume.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::seed::{scan_query, QueryHits, SeedIndex, SeedResult};
use crate::types::SeqId;

/// Filler symbol for query positions not covered by any accepted seed.
pub const GAP: u8 = b'-';

/// A merged, collinear set of seed hits against one database sequence,
/// representing a candidate ungapped alignment region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chain {
    /// Matched span, one cell per query position. Cells covered by an
    /// accepted seed hold that seed's letter; all others hold [`GAP`].
    #[serde(serialize_with = "serialize_span")]
    pub span: Vec<u8>,
    /// Database sequence this chain aligns to.
    pub seq_id: SeqId,
    /// Start of the span within the database sequence, inferred from the
    /// first seed in sort order as `offset_in_sequence - offset_in_query`.
    /// Negative when the query overhangs the start of the sequence.
    pub start_offset: i64,
}

fn serialize_span<S: Serializer>(span: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(span))
}

impl Chain {
    /// The span as text, gaps included.
    pub fn span_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.span)
    }

    /// Number of query positions covered by accepted seeds.
    pub fn matched_positions(&self) -> usize {
        self.span.iter().filter(|&&cell| cell != GAP).count()
    }
}

/// Merge the seed hits of one query into at most one [`Chain`] per database
/// sequence.
///
/// Every hit fans out through `index` to all of its occurrences, grouped by
/// database sequence. Within one sequence the resulting
/// `(query_offset, seq_offset, seed)` triples are sorted by their natural
/// tuple order (query offset first) and walked greedily: a triple is
/// accepted only when its `seq_offset` strictly exceeds the `seq_offset` of
/// the last accepted triple, so accepted seeds always make forward progress
/// through the database sequence. Rejected triples are dropped silently.
/// This is a greedy heuristic, not an optimal chain selection; it can keep
/// forward-progressing seeds from different diagonals (see the module tests).
///
/// The first triple in sort order fixes the chain's `start_offset`. Chains
/// are returned sorted by `seq_id` ascending. A query with no hits yields an
/// empty vector.
///
/// # Errors
///
/// Fails fast with [`SeedError::KMismatch`](crate::seed::SeedError::KMismatch)
/// when `k` differs from the seed length bound into `index`.
pub fn merge(
    hits: &QueryHits,
    query: &[u8],
    index: &SeedIndex,
    k: usize,
) -> SeedResult<Vec<Chain>> {
    index.ensure_k(k)?;

    // Fan each query seed out to every place it occurs in the database.
    let mut per_sequence: BTreeMap<SeqId, Vec<(usize, usize, &[u8])>> = BTreeMap::new();
    for (seed, query_offset) in hits.iter() {
        if let Some(occurrences) = index.occurrences(seed) {
            for loc in occurrences {
                per_sequence
                    .entry(loc.seq_id)
                    .or_default()
                    .push((query_offset, loc.offset, seed));
            }
        }
    }

    let mut chains = Vec::with_capacity(per_sequence.len());
    for (seq_id, mut triples) in per_sequence {
        triples.sort_unstable();

        let (first_query_offset, first_seq_offset, _) = triples[0];
        let start_offset = first_seq_offset as i64 - first_query_offset as i64;

        let mut span = vec![GAP; query.len()];
        let mut prev_seq_offset: i64 = -1;
        for (query_offset, seq_offset, seed) in triples {
            // Forward progress relative to the last accepted seed, not the
            // previous triple in sort order.
            if (seq_offset as i64) <= prev_seq_offset {
                continue;
            }
            span[query_offset..query_offset + k].copy_from_slice(seed);
            prev_seq_offset = seq_offset as i64;
        }

        chains.push(Chain {
            span,
            seq_id,
            start_offset,
        });
    }

    Ok(chains)
}

/// Run the full pipeline for one query: scan it against `index`, then merge
/// the hits into chains. The seed length is read from the index, so this
/// entry point cannot mismatch k.
pub fn search(index: &SeedIndex, query: &[u8]) -> SeedResult<Vec<Chain>> {
    let k = index.k();
    let hits = scan_query(query, index, k)?;
    merge(&hits, query, index, k)
}
