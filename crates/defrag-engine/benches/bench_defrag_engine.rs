use criterion::{black_box, criterion_group, criterion_main, Criterion};
use defrag_engine::{Compactor, Strategy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_disk_map(digits: usize) -> String {
    let mut rng = StdRng::seed_from_u64(42);
    (0..digits)
        .map(|i| {
            // files are never empty, like real puzzle inputs
            let lo = if i % 2 == 0 { 1 } else { 0 };
            char::from(b'0' + rng.gen_range(lo..10u8))
        })
        .collect()
}

fn bench_blocks(c: &mut Criterion) {
    let small = generate_disk_map(1_000);
    let puzzle = generate_disk_map(19_999);

    let scan = Compactor::scan();
    let indexed = Compactor::indexed();
    c.bench_function("blocks_scan_1k", |b| {
        b.iter(|| black_box(scan.compact(black_box(&small), Strategy::Blocks)))
    });
    c.bench_function("blocks_indexed_1k", |b| {
        b.iter(|| black_box(indexed.compact(black_box(&small), Strategy::Blocks)))
    });
    c.bench_function("blocks_indexed_20k", |b| {
        b.iter(|| black_box(indexed.compact(black_box(&puzzle), Strategy::Blocks)))
    });
}

fn bench_files(c: &mut Criterion) {
    let puzzle = generate_disk_map(19_999);

    for (name, compactor) in [("scan", Compactor::scan()), ("indexed", Compactor::indexed())] {
        c.bench_function(&format!("files_{name}_20k"), |b| {
            b.iter(|| black_box(compactor.compact(black_box(&puzzle), Strategy::Files)))
        });
    }
}

criterion_group!(benches, bench_blocks, bench_files);
criterion_main!(benches);
