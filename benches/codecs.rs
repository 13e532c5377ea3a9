//! Benchmarks for the CSV and share-token codecs.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sheetlink::{csv, share, Table};

/// A `cols` x `rows` table with cells that need quoting.
fn sample_table(cols: usize, rows: usize) -> Table {
    let columns = (0..cols).map(|c| format!("Col {c}")).collect();
    let rows = (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| format!("r{r}c{c}, \"quoted\" ✓"))
                .collect()
        })
        .collect();
    Table::new(columns, rows)
}

fn bench_csv(c: &mut Criterion) {
    let mut group = c.benchmark_group("csv");
    for rows in [50, 1000, 5000] {
        let table = sample_table(9, rows);
        let all: Vec<usize> = (0..table.col_count()).collect();
        let text = csv::encode(&table, &all);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("encode", rows), &table, |b, t| {
            b.iter(|| csv::encode(black_box(t), &all))
        });
        group.bench_with_input(BenchmarkId::new("decode", rows), &text, |b, s| {
            b.iter(|| csv::decode(black_box(s)))
        });
    }
    group.finish();
}

fn bench_share(c: &mut Criterion) {
    let mut group = c.benchmark_group("share");
    for rows in [50, 1000] {
        let table = sample_table(9, rows);
        let token = share::encode(&table);
        group.throughput(Throughput::Bytes(token.len() as u64));
        group.bench_with_input(BenchmarkId::new("encode", rows), &table, |b, t| {
            b.iter(|| share::encode(black_box(t)))
        });
        group.bench_with_input(BenchmarkId::new("decode", rows), &token, |b, s| {
            b.iter(|| share::decode(black_box(s)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_csv, bench_share);
criterion_main!(benches);
