//! FASTA/FASTQ sequence file parser
//!
//! Fast parsing of FASTA and FASTQ files using the needletail library.
//! Gzip-compressed input is detected and decompressed automatically.

use std::path::Path;

use anyhow::Result;
use needletail::parse_fastx_file;
use thiserror::Error;

use crate::types::SequenceRecord;

#[derive(Debug, Error)]
pub enum FastaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Empty file or no sequences found")]
    EmptyFile,
}

/// Read every record of a FASTA/FASTQ file into memory, in file order.
///
/// Record ids are the first whitespace-delimited token of the header line;
/// sequence letters are uppercased so that seed matching is not sensitive to
/// soft-masked (lowercase) input.
pub fn read_fasta<P: AsRef<Path>>(path: P) -> Result<Vec<SequenceRecord>> {
    let mut records = Vec::new();
    let mut reader = parse_fastx_file(&path).map_err(|e| FastaError::Parse(e.to_string()))?;

    while let Some(record) = reader.next() {
        let record = record.map_err(|e| FastaError::Parse(e.to_string()))?;
        let id = String::from_utf8_lossy(record.id())
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_string();
        let seq = record.seq().to_ascii_uppercase();
        records.push(SequenceRecord { id, seq });
    }

    if records.is_empty() {
        Err(FastaError::EmptyFile.into())
    } else {
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_fasta(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp fasta");
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_read_records_in_file_order() {
        let file = write_fasta(">seq1\nAPEPTIDE\n>seq2\nPEPTIDEA\n");
        let records = read_fasta(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "seq1");
        assert_eq!(records[0].seq, b"APEPTIDE");
        assert_eq!(records[1].id, "seq2");
        assert_eq!(records[1].seq, b"PEPTIDEA");
    }

    #[test]
    fn test_multi_line_sequences_are_joined() {
        let file = write_fasta(">seq1\nAPEP\nTIDE\n");
        let records = read_fasta(file.path()).unwrap();
        assert_eq!(records[0].seq, b"APEPTIDE");
    }

    #[test]
    fn test_id_is_first_header_token() {
        let file = write_fasta(">seq1 homo sapiens fragment\nAPEPTIDE\n");
        let records = read_fasta(file.path()).unwrap();
        assert_eq!(records[0].id, "seq1");
    }

    #[test]
    fn test_lowercase_input_is_uppercased() {
        let file = write_fasta(">seq1\napepTIDE\n");
        let records = read_fasta(file.path()).unwrap();
        assert_eq!(records[0].seq, b"APEPTIDE");
    }

    #[test]
    fn test_empty_file_is_an_error() {
        let file = write_fasta("");
        assert!(read_fasta(file.path()).is_err());
    }
}
