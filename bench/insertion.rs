use criterion::{criterion_group, criterion_main, Criterion};
use lc_tree::{Tree, TxRef};

pub fn generate_random_tx_ref() -> TxRef {
    let mut bytes = [0u8; 32];
    for byte in bytes.iter_mut() {
        *byte = rand::random();
    }
    TxRef::new(bytes)
}

fn bench_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("Range Tree Insertion");

    group.bench_function("Sequential Clocks", |b| {
        b.iter(|| {
            let mut tree = Tree::<TxRef>::with_leaf_size(16).unwrap();
            for clock in 0..1000 {
                tree.insert(clock, &generate_random_tx_ref()).unwrap();
            }
        })
    });

    group.bench_function("Sparse Clocks", |b| {
        b.iter(|| {
            let mut tree = Tree::<TxRef>::with_leaf_size(16).unwrap();
            for _ in 0..1000 {
                let clock = rand::random::<u32>() % (1 << 24);
                tree.insert(clock, &generate_random_tx_ref()).unwrap();
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_insertion);
criterion_main!(benches);
