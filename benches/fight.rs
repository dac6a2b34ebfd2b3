//! Benchmarks for the battle center engine.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- fight
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use battle_center::creature::Relation;
use battle_center::{Creature, CreatureRules, MatchingEngine, TypeChart};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const TYPES: &str = "Normal,Fire,Water,Grass,Electric,Ice,Rock,Ghost";

// ============================================================================
// HELPER FUNCTIONS - Deterministic creature generation
// ============================================================================

fn rules() -> CreatureRules {
    let mut chart = TypeChart::from_csv(TYPES);
    let _ = chart.relate("Fire", Relation::WeakTo, "Water");
    let _ = chart.relate("Grass", Relation::WeakTo, "Fire");
    let _ = chart.relate("Water", Relation::WeakTo, "Electric");
    let _ = chart.relate("Rock", Relation::StrongAgainst, "Ice");
    CreatureRules::new(chart)
}

/// Same seed = same creatures
fn generate_creatures(count: usize, seed: u64) -> Vec<Creature> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let kinds: Vec<&str> = TYPES.split(',').collect();

    (0..count)
        .map(|i| {
            let kind = kinds[rng.gen_range(0..kinds.len())];
            Creature::new(format!("mon-{i}"), "Bench Pokemon", 1.0, 10.0, rng.gen_range(0..=150), kind)
        })
        .collect()
}

/// Engine pre-filled with `count` creatures
fn populated_engine(count: usize, capacity: usize) -> MatchingEngine<CreatureRules> {
    let mut engine = MatchingEngine::new(capacity, 8, TYPES, rules()).unwrap();
    for creature in generate_creatures(count, 42) {
        let _ = engine.insert(&creature);
    }
    engine
}

// ============================================================================
// BENCHMARK: Insert
// ============================================================================

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    group.measurement_time(Duration::from_secs(5));

    for count in [1_000, 10_000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("creatures", count), &count, |b, &count| {
            let creatures = generate_creatures(count, 7);
            b.iter_batched(
                || MatchingEngine::new(count, 8, TYPES, rules()).unwrap(),
                |mut engine| {
                    for creature in &creatures {
                        black_box(engine.insert(creature)).unwrap();
                    }
                    engine.total_len()
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Remove Strongest
// ============================================================================

fn bench_remove_strongest(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_strongest");
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("drain_10k", |b| {
        b.iter_batched(
            || populated_engine(10_000, 10_000),
            |mut engine| {
                for kind in TYPES.split(',') {
                    while let Some(creature) = engine.remove_strongest(kind) {
                        black_box(creature);
                    }
                }
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Fight
// ============================================================================

fn bench_fight(c: &mut Criterion) {
    let mut group = c.benchmark_group("fight");
    group.sample_size(1000);

    let engine = populated_engine(10_000, 10_000);
    let challengers = generate_creatures(256, 99);

    group.bench_function("across_8_types", |b| {
        let mut next = challengers.iter().cycle();
        b.iter(|| {
            let challenger = next.next().unwrap();
            let outcome = engine.fight(black_box(challenger)).unwrap();
            black_box(outcome.fight().map(|fight| fight.score.diff))
        });
    });

    group.finish();
}

// ============================================================================
// CRITERION ENTRY POINT
// ============================================================================

criterion_group!(benches, bench_insert, bench_remove_strongest, bench_fight);
criterion_main!(benches);
