use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seedchain_core::{chain, scan_query, SeedIndex};

fn generate_test_sequence(length: usize) -> Vec<u8> {
    let pattern = b"MKVLAAGITPEHWQRSDFNC";
    let mut sequence = Vec::with_capacity(length);

    while sequence.len() < length {
        let remaining = length - sequence.len();
        let chunk_size = std::cmp::min(pattern.len(), remaining);
        sequence.extend_from_slice(&pattern[..chunk_size]);
    }

    sequence
}

fn generate_database(num_sequences: usize, length: usize) -> Vec<Vec<u8>> {
    (0..num_sequences)
        .map(|i| {
            // Rotate the pattern per sequence so the sequences overlap
            // without being identical.
            let mut sequence = generate_test_sequence(length + i);
            sequence.drain(..i);
            sequence
        })
        .collect()
}

fn bench_index_build(c: &mut Criterion) {
    let database = generate_database(10, 1000);

    c.bench_function("index_build_10x1kb", |b| {
        b.iter(|| {
            let index = SeedIndex::build(black_box(&database), 5).unwrap();
            black_box(index)
        })
    });
}

fn bench_query_scan(c: &mut Criterion) {
    let database = generate_database(10, 1000);
    let index = SeedIndex::build(&database, 5).unwrap();
    let query = generate_test_sequence(500);

    c.bench_function("query_scan_500", |b| {
        b.iter(|| {
            let hits = scan_query(black_box(&query), &index, 5).unwrap();
            black_box(hits)
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let database = generate_database(10, 1000);
    let index = SeedIndex::build(&database, 5).unwrap();
    let query = generate_test_sequence(500);

    c.bench_function("search_500_vs_10x1kb", |b| {
        b.iter(|| {
            let chains = chain::search(&index, black_box(&query)).unwrap();
            black_box(chains)
        })
    });
}

criterion_group!(benches, bench_index_build, bench_query_scan, bench_search);
criterion_main!(benches);
