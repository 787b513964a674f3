//! Benchmarks for the ranking pass
//!
//! Run with: cargo bench --package recommender
//!
//! Scores a synthetic candidate pool against a fixed preference set, at
//! zero variety (deterministic path) and with jitter.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use recommender::{RoomRecommender, UserPreferences};
use rooms::{ClassType, Room, TableType};

fn synthetic_rooms(count: u32) -> Vec<Room> {
    (1..=count)
        .map(|id| {
            let class_type = match id % 3 {
                0 => ClassType::Lab,
                1 => ClassType::Lecture,
                _ => ClassType::Classroom,
            };
            let table_type = match id % 4 {
                0 => TableType::SmallDesk,
                1 => TableType::BigDesk,
                2 => TableType::LargeDesk,
                _ => TableType::Table,
            };
            Room::new(
                id,
                id % 2 == 0,
                id % 5 == 0,
                class_type,
                id % 7 == 0,
                table_type,
                format!("Building {}", id % 4),
            )
        })
        .collect()
}

fn test_prefs() -> UserPreferences {
    let order = ["windows", "outlets", "tableType", "classType", "printer"];
    let values = ["true", "false", "Lecture", "true", "SmallDesk"];
    UserPreferences::parse(&order, &values, "Building 1").unwrap()
}

fn bench_deterministic_ranking(c: &mut Criterion) {
    let candidates = synthetic_rooms(50);
    let history = synthetic_rooms(10);
    let prefs = test_prefs();
    let recommender = RoomRecommender::new();

    c.bench_function("rank_50_candidates_no_variety", |b| {
        b.iter(|| {
            let ranked = recommender
                .recommend(black_box(candidates.clone()), &prefs, &history, 0.0)
                .unwrap();
            black_box(ranked)
        })
    });
}

fn bench_jittered_ranking(c: &mut Criterion) {
    let candidates = synthetic_rooms(50);
    let history = synthetic_rooms(10);
    let prefs = test_prefs();
    let recommender = RoomRecommender::new();
    let mut rng = StdRng::seed_from_u64(99);

    c.bench_function("rank_50_candidates_variety_3", |b| {
        b.iter(|| {
            let ranked = recommender
                .recommend_with_rng(black_box(candidates.clone()), &prefs, &history, 3.0, &mut rng)
                .unwrap();
            black_box(ranked)
        })
    });
}

criterion_group!(benches, bench_deterministic_ranking, bench_jittered_ranking);
criterion_main!(benches);
