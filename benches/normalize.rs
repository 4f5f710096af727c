// benches/normalize.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gdp_etl::extract::RawRow;
use gdp_etl::normalize::normalize;
use gdp_etl::pipeline::normalize_rows;

fn synth_rows(n: usize) -> Vec<RawRow> {
    (0..n)
        .map(|i| RawRow {
            country: format!("Country {i}"),
            gdp: format!("{},{:03}", i + 1, i % 1000),
            year: format!("2024[n {}]", i % 9 + 1),
        })
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let rows = synth_rows(10_000);

    c.bench_function("normalize_single", |b| {
        b.iter(|| {
            let mut kept = 0usize;
            for row in &rows {
                if normalize(black_box(row)).unwrap().is_some() {
                    kept += 1;
                }
            }
            black_box(kept)
        })
    });

    c.bench_function("normalize_pool_10k", |b| {
        b.iter(|| {
            let out = normalize_rows(black_box(rows.clone())).unwrap();
            black_box(out.len())
        })
    });
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
