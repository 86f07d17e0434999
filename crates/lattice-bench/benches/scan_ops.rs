//! Criterion micro-benchmarks for the scan primitives.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lattice_bench::{direction_list, number_list};
use lattice_grid::Direction;
use lattice_scan::{scan, Cursor};

/// Benchmark: scan 10K space-separated u64 values.
fn bench_scan_unsigned(c: &mut Criterion) {
    let text = number_list(10_000, 7);

    c.bench_function("scan_unsigned_10k", |b| {
        b.iter(|| {
            let mut cursor = Cursor::new(text.as_slice());
            let mut sum = 0u64;
            loop {
                sum = sum.wrapping_add(scan::unsigned::<u64, _>(&mut cursor).unwrap());
                match scan::prefix(&mut cursor, b" ") {
                    Ok(()) => {}
                    Err(e) if e.is_no_match() => break,
                    Err(e) => panic!("unexpected error: {e}"),
                }
            }
            black_box(sum);
        });
    });
}

/// Benchmark: match 10K direction keywords.
fn bench_scan_keyword(c: &mut Criterion) {
    let text = direction_list(10_000);

    c.bench_function("scan_keyword_10k", |b| {
        b.iter(|| {
            let mut cursor = Cursor::new(text.as_slice());
            let mut count = 0usize;
            while !cursor.at_end().unwrap() {
                let direction: Direction = scan::keyword(&mut cursor).unwrap();
                scan::prefix(&mut cursor, b"\n").unwrap();
                black_box(direction);
                count += 1;
            }
            black_box(count);
        });
    });
}

criterion_group!(benches, bench_scan_unsigned, bench_scan_keyword);
criterion_main!(benches);
