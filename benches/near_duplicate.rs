use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use slidewin::{Bounds, Bucketed, DetectionStrategy, OrderedWindow};

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("near_duplicate");
    let mut rng = StdRng::seed_from_u64(220);

    // Values are spread far enough apart that no pair matches, so every
    // strategy has to scan the whole slice
    let elements = (0..100_000i64)
        .map(|x| x * 1_000 + rng.random_range(0..10))
        .collect::<Vec<_>>();

    for index_bound in [10, 1_000, 100_000] {
        let bounds = Bounds::new(index_bound, 100);

        for strategy in [&Bucketed as &dyn DetectionStrategy, &OrderedWindow] {
            group.bench_function(
                format!("{} k={index_bound}", strategy.get_name()),
                |b| {
                    b.iter(|| assert!(!strategy.detect(&elements, bounds)));
                },
            );
        }
    }
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
