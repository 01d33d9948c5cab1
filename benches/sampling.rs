use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tombola::pick::{weighted_index, weighted_index_float};
use tombola::shuffle::{shuffle, subset};

fn bench_weighted_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighted_index");
    let sizes = [10, 100, 1000];

    for &size in &sizes {
        let weights: Vec<u32> = (1..=size as u32).collect();
        group.bench_function(format!("int_n{}", size), |b| {
            let mut rng = rand::rng();
            b.iter(|| weighted_index(black_box(&weights), &mut rng).unwrap())
        });
    }

    for &size in &sizes {
        let weights: Vec<f32> = (1..=size).map(|i| i as f32).collect();
        group.bench_function(format!("float_n{}", size), |b| {
            let mut rng = rand::rng();
            b.iter(|| weighted_index_float(black_box(&weights), &mut rng).unwrap())
        });
    }
    group.finish();
}

fn bench_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("shuffle");
    let sizes = [100, 1_000, 10_000];

    for &size in &sizes {
        group.bench_function(format!("n{}", size), |b| {
            let mut rng = rand::rng();
            let mut items: Vec<usize> = (0..size).collect();
            b.iter(|| {
                shuffle(black_box(&mut items), &mut rng);
            })
        });
    }
    group.finish();
}

fn bench_subset(c: &mut Criterion) {
    let mut group = c.benchmark_group("subset");
    let sizes = [100, 1_000, 10_000];
    let count = 50;

    for &size in &sizes {
        let items: Vec<usize> = (0..size).collect();
        group.bench_function(format!("n{}_k{}", size, count), |b| {
            let mut rng = rand::rng();
            b.iter(|| {
                black_box(subset(black_box(&items), count, &mut rng).unwrap());
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_weighted_index, bench_shuffle, bench_subset);
criterion_main!(benches);
