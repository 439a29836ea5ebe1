use criterion::{black_box, criterion_group, criterion_main, Criterion};
use eaw_width::{Breakpoints, OverrideMode, WidthTable};

const DATA: &str = include_str!("../data/EastAsianWidth.txt");

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("build default table", |b| b.iter(WidthTable::new));

    c.bench_function("build and compress", |b| {
        b.iter(|| {
            let (table, _) =
                WidthTable::from_reader(black_box(DATA).as_bytes(), OverrideMode::SingleOnly)
                    .unwrap();
            Breakpoints::compress(&table)
        })
    });

    c.bench_function("build and compress expanding ranges", |b| {
        b.iter(|| {
            let (table, _) =
                WidthTable::from_reader(black_box(DATA).as_bytes(), OverrideMode::ExpandRanges)
                    .unwrap();
            Breakpoints::compress(&table)
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
