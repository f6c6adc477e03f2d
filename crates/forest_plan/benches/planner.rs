mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use forest_plan::prelude::*;

fn plan_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("planner/plan");

    for density in Density::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(density.name()),
            &density,
            |b, &density| {
                let mut planner = Planner::new(
                    PlannerConfig::new(density)
                        .with_seed(common::SEEDS[0])
                        .with_random_season(),
                );
                b.iter(|| black_box(planner.plan()));
            },
        );
    }

    group.finish();
}

fn transform_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("planner/random_transform");
    const BATCH: u64 = 1024;
    group.throughput(common::objects_throughput(BATCH));

    for seed in common::SEEDS {
        group.bench_with_input(BenchmarkId::from_parameter(seed), &seed, |b, &seed| {
            let mut planner = Planner::reproducible(seed);
            b.iter(|| {
                for _ in 0..BATCH {
                    black_box(planner.random_transform());
                }
            });
        });
    }

    group.finish();
}

fn populate_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene/populate");
    let config = PopulateConfig::default();

    for density in [Density::Sparse, Density::Dense] {
        let mut sizing = Planner::new(PlannerConfig::new(density).with_seed(common::SEEDS[1]));
        let plan = sizing.get_all_counts();
        group.throughput(common::objects_throughput(plan.total()));

        group.bench_with_input(
            BenchmarkId::from_parameter(density.name()),
            &plan,
            |b, plan| {
                let mut planner = Planner::reproducible(common::SEEDS[2]);
                b.iter(|| {
                    let mut scene = RecordingScene::new();
                    let summary = populate(&mut planner, plan, &config, &mut scene);
                    black_box((summary, scene.len()));
                });
            },
        );
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = plan_benches, transform_benches, populate_benches
}
criterion_main!(benches);
