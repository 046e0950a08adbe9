use serde::{Deserialize, Serialize};

/// Zero-based position of a database sequence in the input collection.
pub type SeqId = usize;

/// One occurrence of a seed within a database sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeedLoc {
    pub seq_id: SeqId,
    /// Zero-based start of the occurrence within sequence `seq_id`.
    pub offset: usize,
}

/// A named sequence as read from a FASTA file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRecord {
    /// First whitespace-delimited token of the FASTA header.
    pub id: String,
    /// Uppercased sequence letters.
    pub seq: Vec<u8>,
}

impl SequenceRecord {
    pub fn new(id: impl Into<String>, seq: impl Into<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            seq: seq.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}
