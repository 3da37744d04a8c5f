use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pagetree::BTree;

/// Deterministic scatter of `0..n` (7919 is prime, so this is a permutation
/// whenever `n` is not a multiple of it).
fn scattered(n: u64) -> Vec<u64> {
    (0..n).map(|i| (i * 7919) % n).collect()
}

fn build(t: usize, keys: &[u64]) -> BTree<u64> {
    let mut tree = BTree::new(t).unwrap();
    for &k in keys {
        tree.insert(k);
    }
    tree
}

pub fn insert_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for n in [1_000u64, 10_000, 100_000] {
        let keys = scattered(n);
        for t in [2usize, 16, 64] {
            group.bench_with_input(BenchmarkId::new(format!("t={t}"), n), &keys, |b, keys| {
                b.iter(|| build(t, keys))
            });
        }
    }
}

pub fn search_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for n in [1_000u64, 100_000] {
        let keys = scattered(n);
        for t in [2usize, 16, 64] {
            let tree = build(t, &keys);
            group.bench_with_input(BenchmarkId::new(format!("t={t}"), n), &keys, |b, keys| {
                b.iter(|| {
                    for k in keys.iter().step_by(7) {
                        black_box(tree.contains(k));
                    }
                })
            });
        }
    }
}

pub fn delete_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_then_delete_all");
    for n in [1_000u64, 10_000] {
        let keys = scattered(n);
        for t in [2usize, 16] {
            group.bench_with_input(BenchmarkId::new(format!("t={t}"), n), &keys, |b, keys| {
                b.iter(|| {
                    let mut tree = build(t, keys);
                    for k in keys {
                        tree.delete(k).unwrap();
                    }
                    assert!(tree.is_empty());
                })
            });
        }
    }
}

criterion_group!(benches, insert_benchmark, search_benchmark, delete_benchmark);
criterion_main!(benches);
