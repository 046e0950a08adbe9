//! Seed indexing and query matching
//!
//! This module provides exact-match seed (k-mer) indexing over a database of
//! sequences and the query-side scan that looks those seeds up, which form
//! the basis for downstream chain merging.

pub mod index;
pub mod matcher;

pub use index::SeedIndex;
pub use matcher::{scan_query, QueryHits};

/// Result type for seeding operations
pub type SeedResult<T> = Result<T, SeedError>;

/// Errors that can occur during seeding
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("Seed length mismatch: index was built with k={index_k}, caller supplied k={supplied_k}")]
    KMismatch { index_k: usize, supplied_k: usize },
}
