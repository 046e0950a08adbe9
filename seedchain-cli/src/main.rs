use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;

use seedchain_core::io::read_fasta;
use seedchain_core::{chain, SeedIndex, SequenceRecord};

#[derive(Parser)]
#[command(name = "seedchain")]
#[command(about = "Seedchain - seed-and-chain sequence similarity search")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search query sequences against a sequence database
    Search {
        /// Database FASTA file
        #[arg(short, long)]
        database: PathBuf,

        /// Query FASTA file
        #[arg(short, long)]
        query: PathBuf,

        /// Seed length (word size)
        #[arg(short, long, default_value_t = 3)]
        k: usize,

        /// Emit results as JSON instead of tab-separated lines
        #[arg(long)]
        json: bool,
    },

    /// Print seed index statistics for a database
    Stats {
        /// Database FASTA file
        #[arg(short, long)]
        database: PathBuf,

        /// Seed length (word size)
        #[arg(short, long, default_value_t = 3)]
        k: usize,
    },
}

/// One reported chain, resolved to sequence names for display.
#[derive(Debug, Serialize)]
struct ChainRow {
    query: String,
    target: String,
    start_offset: i64,
    matched: usize,
    query_len: usize,
    span: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Search {
            database,
            query,
            k,
            json,
        } => run_search(&database, &query, k, json),
        Commands::Stats { database, k } => run_stats(&database, k),
    }
}

fn load_database(path: &Path, k: usize) -> Result<(Vec<SequenceRecord>, SeedIndex)> {
    let records =
        read_fasta(path).with_context(|| format!("reading database {}", path.display()))?;
    let sequences: Vec<&[u8]> = records.iter().map(|r| r.seq.as_slice()).collect();
    let index = SeedIndex::build(&sequences, k)?;
    info!(
        "indexed {} sequences: {} distinct seeds, {} occurrence records",
        index.num_sequences(),
        index.len(),
        index.total_occurrences()
    );
    Ok((records, index))
}

fn run_search(database: &Path, query: &Path, k: usize, json: bool) -> Result<()> {
    let (db_records, index) = load_database(database, k)?;
    let queries =
        read_fasta(query).with_context(|| format!("reading queries {}", query.display()))?;

    let mut rows = Vec::new();
    for record in &queries {
        let chains = chain::search(&index, &record.seq)?;
        info!("query {}: {} chains", record.id, chains.len());
        for c in &chains {
            rows.push(ChainRow {
                query: record.id.clone(),
                target: db_records[c.seq_id].id.clone(),
                start_offset: c.start_offset,
                matched: c.matched_positions(),
                query_len: record.seq.len(),
                span: c.span_str().into_owned(),
            });
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            println!(
                "{}\t{}\t{}\t{}/{}\t{}",
                row.query, row.target, row.start_offset, row.matched, row.query_len, row.span
            );
        }
    }
    Ok(())
}

fn run_stats(database: &Path, k: usize) -> Result<()> {
    let (_records, index) = load_database(database, k)?;
    println!("sequences\t{}", index.num_sequences());
    println!("distinct_seeds\t{}", index.len());
    println!("occurrence_records\t{}", index.total_occurrences());
    Ok(())
}
