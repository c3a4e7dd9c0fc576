//! Criterion benchmarks for the knapsack solver and the partition.
//!
//! Uses the stock list of a two-transporter delivery (capacities in grams)
//! plus seeded random instances of growing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_partition::boundary::{Hardware, Plan, Transporter};
use u_partition::knapsack::{ItemType, KnapsackConfig, KnapsackRunner};
use u_partition::partition::PartitionRunner;

fn delivery_hardware() -> Vec<Hardware> {
    vec![
        Hardware::new("Notebook Büro 13\"", 205, 2451, 40),
        Hardware::new("Notebook Büro 14\"", 420, 2978, 35),
        Hardware::new("Notebook outdoor", 450, 3625, 80),
        Hardware::new("Mobiltelefon Büro", 60, 717, 30),
        Hardware::new("Mobiltelefon Outdoor", 157, 988, 60),
        Hardware::new("Mobiltelefon Heavy Duty", 220, 1220, 65),
        Hardware::new("Tablet Büro klein", 620, 1405, 40),
        Hardware::new("Tablet Büro groß", 250, 1455, 40),
        Hardware::new("Tablet outdoor klein", 540, 1690, 45),
        Hardware::new("Tablet outdoor groß", 370, 1980, 68),
    ]
}

fn delivery_transporters() -> Vec<Transporter> {
    vec![
        Transporter::new(1_100_000, 72_400),
        Transporter::new(1_100_000, 85_700),
    ]
}

fn random_items(n: usize, seed: u64) -> Vec<ItemType> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            ItemType::new(
                format!("{i}"),
                rng.random_range(1..200),
                rng.random_range(100..5000),
                rng.random_range(1..100),
            )
        })
        .collect()
}

fn bench_delivery_plan(c: &mut Criterion) {
    let plan = match Plan::new(&delivery_hardware(), &delivery_transporters()) {
        Ok(plan) => plan,
        Err(err) => panic!("delivery data rejected: {err}"),
    };

    let mut group = c.benchmark_group("delivery_plan");
    group.sample_size(10);
    group.bench_function("two_transporters", |b| {
        b.iter(|| black_box(black_box(&plan).run()))
    });
    group.finish();
}

fn bench_knapsack_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack_random");
    group.sample_size(10);

    for &n in &[5, 10, 20] {
        let items = random_items(n, 42);
        let config = KnapsackConfig::default();
        group.bench_with_input(BenchmarkId::from_parameter(n), &items, |b, items| {
            b.iter(|| {
                let result = KnapsackRunner::run(black_box(items), black_box(500_000), &config);
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_partition_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition_random");
    group.sample_size(10);

    for &n in &[5, 10, 20] {
        let items = random_items(n, 7);
        group.bench_with_input(BenchmarkId::from_parameter(n), &items, |b, items| {
            b.iter(|| {
                let result = PartitionRunner::run(black_box(items), black_box([300_000, 250_000]));
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_delivery_plan,
    bench_knapsack_random,
    bench_partition_random
);
criterion_main!(benches);
