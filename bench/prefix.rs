use criterion::{criterion_group, criterion_main, Criterion};
use lc_tree::{Tree, TxRef};

fn filled_tree(leaf_size: u32, n: u32) -> Tree<TxRef> {
    let mut tree = Tree::<TxRef>::with_leaf_size(leaf_size).unwrap();
    for clock in 0..n {
        tree.insert(clock, &TxRef::new(rand::random())).unwrap();
    }
    tree
}

fn bench_prefix(c: &mut Criterion) {
    let mut group = c.benchmark_group("Range Tree Prefix");
    let tree = filled_tree(16, 100_000);

    group.bench_function("Root", |b| b.iter(|| tree.root()));

    group.bench_function("Zero To", |b| {
        b.iter(|| {
            for clock in (0..100_000).step_by(997) {
                tree.zero_to(clock).unwrap();
            }
        })
    });

    group.bench_function("Drop Leaves", |b| {
        b.iter_batched(
            || filled_tree(16, 10_000),
            |mut tree| tree.drop_leaves(),
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_prefix);
criterion_main!(benches);
