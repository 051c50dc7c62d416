use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::BTreeSet;
use venn_core::SolverConfig;
use venn_layout::{compute_layout, pack_elements, solve_separation};

fn overlapping_pair(n: u32) -> (BTreeSet<u32>, BTreeSet<u32>) {
    // Roughly a third of the union in the intersection.
    let a: BTreeSet<u32> = (0..n).collect();
    let b: BTreeSet<u32> = (n * 2 / 3..n * 5 / 3).collect();
    (a, b)
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    // One pair per tier: comfortable, moderate, tight, very_tight, warning.
    for n in [8u32, 14, 22, 34, 120] {
        let (a, b) = overlapping_pair(n);
        let union = a.union(&b).count();
        group.bench_with_input(BenchmarkId::new("compute", union), &(a, b), |bench, (a, b)| {
            bench.iter(|| compute_layout(black_box(a), black_box(b)))
        });
    }
    group.finish();
}

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");
    for n in [8u32, 22, 120] {
        let (a, b) = overlapping_pair(n);
        let layout = compute_layout(&a, &b);
        let elements: Vec<u32> = a.union(&b).cloned().collect();
        group.bench_function(BenchmarkId::new("pack_elements", elements.len()), |bench| {
            bench.iter(|| pack_elements(black_box(&elements), &a, &b, &layout))
        });
    }
    group.finish();
}

fn bench_solver(c: &mut Criterion) {
    let config = SolverConfig::default();
    c.bench_function("solve_separation", |bench| {
        bench.iter(|| solve_separation(black_box(1.8), black_box(2.44), &config))
    });
}

criterion_group!(benches, bench_layout, bench_pack, bench_solver);
criterion_main!(benches);
