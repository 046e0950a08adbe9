//! Sequence file ingestion for seedchain

pub mod fasta;

pub use fasta::{read_fasta, FastaError};
