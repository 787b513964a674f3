//! Integration tests for the recommender.
//!
//! These run the reference scenario end to end: six candidate rooms, a
//! ranked preference order, and a 10-room history window dominated by
//! lecture rooms with outlets.

use rand::SeedableRng;
use rand::rngs::StdRng;
use recommender::{RoomRecommender, UserPreferences};
use rooms::{ClassType, Room, TableType};

fn reference_rooms() -> Vec<Room> {
    vec![
        Room::new(101, true, false, ClassType::Lecture, false, TableType::SmallDesk, "Building B"),
        Room::new(102, true, true, ClassType::Lecture, false, TableType::LargeDesk, "Building A"),
        Room::new(103, false, true, ClassType::Lab, true, TableType::Table, "Building C"),
        Room::new(104, true, false, ClassType::Lecture, true, TableType::SmallDesk, "Building C"),
        Room::new(105, false, false, ClassType::Classroom, true, TableType::LargeDesk, "Building B"),
        Room::new(106, true, true, ClassType::Classroom, false, TableType::SmallDesk, "Building A"),
    ]
}

/// The user's last ten visits: room 101 four times, 102 twice, the rest
/// once each.
fn reference_history() -> Vec<Room> {
    let rooms = reference_rooms();
    [101, 101, 102, 101, 105, 104, 103, 106, 102, 101]
        .iter()
        .map(|&id| rooms.iter().find(|r| r.id == id).unwrap().clone())
        .collect()
}

fn reference_prefs() -> UserPreferences {
    let order = ["windows", "outlets", "tableType", "classType", "printer"];
    let values = ["true", "false", "Lecture", "true", "SmallDesk"];
    UserPreferences::parse(&order, &values, "Building B").unwrap()
}

#[test]
fn test_deterministic_at_zero_variety() {
    let recommender = RoomRecommender::new();

    let first = recommender
        .recommend(reference_rooms(), &reference_prefs(), &reference_history(), 0.0)
        .unwrap();
    let second = recommender
        .recommend(reference_rooms(), &reference_prefs(), &reference_history(), 0.0)
        .unwrap();

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.room.id, b.room.id);
        assert_eq!(a.weight, b.weight);
        assert_eq!(a.original_rank, b.original_rank);
    }
}

#[test]
fn test_zero_variety_ranking_and_weights() {
    // Hand-derived from the scenario. History signals: outlets dominant
    // (8-of-10, ideal agrees: 2 -> 3), lectures dominant (7-of-10,
    // ideal agrees: 4 -> 5), printer minority (3-of-10, ideal
    // conflicts: 5 -> 10/3), windows and desks mixed. With a +1 recency
    // term per visit at variety 0:
    //   101: 6.5 + 4 visits = 10.5
    //   104: 7 + 2/3 + 1    = 8.6667
    //   102: 4.0 + 2        = 6.0
    //   106: 3.0 + 1        = 4.0
    //   105: 2 + 2/3 + 1    = 3.6667
    //   103: 2/3 + 1 + 1    = 2.6667
    let recommender = RoomRecommender::new();
    let ranked = recommender
        .recommend(reference_rooms(), &reference_prefs(), &reference_history(), 0.0)
        .unwrap();

    let ids: Vec<u32> = ranked.iter().map(|s| s.room.id).collect();
    assert_eq!(ids, vec![101, 104, 102, 106, 105, 103]);

    let expected = [10.5, 26.0 / 3.0, 6.0, 4.0, 11.0 / 3.0, 8.0 / 3.0];
    for (scored, want) in ranked.iter().zip(expected) {
        assert!(
            (scored.weight - want).abs() < 1e-9,
            "room {} weight {} != {}",
            scored.room.id,
            scored.weight,
            want
        );
    }
}

#[test]
fn test_zero_variety_rank_monotonicity() {
    let recommender = RoomRecommender::new();
    let ranked = recommender
        .recommend(reference_rooms(), &reference_prefs(), &reference_history(), 0.0)
        .unwrap();

    for (idx, scored) in ranked.iter().enumerate() {
        assert_eq!(scored.original_rank, idx + 1);
        if idx > 0 {
            assert!(ranked[idx - 1].weight >= scored.weight);
        }
    }
}

#[test]
fn test_variety_preserves_original_rank_semantics() {
    // At variety 4 the recency term is exactly zero, so the base
    // ranking is pure feature matching: 104, 101, 102, 106, 105, 103.
    // The jitter may reorder the returned list but never original_rank.
    let recommender = RoomRecommender::new();
    let mut rng = StdRng::seed_from_u64(1234);
    let ranked = recommender
        .recommend_with_rng(
            reference_rooms(),
            &reference_prefs(),
            &reference_history(),
            4.0,
            &mut rng,
        )
        .unwrap();

    let base_order = [104, 101, 102, 106, 105, 103];
    for scored in &ranked {
        let expected_rank = base_order.iter().position(|&id| id == scored.room.id).unwrap() + 1;
        assert_eq!(scored.original_rank, expected_rank, "room {}", scored.room.id);
    }

    let mut ranks: Vec<usize> = ranked.iter().map(|s| s.original_rank).collect();
    ranks.sort_unstable();
    assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_self_similar_candidate_outscores_opposite() {
    let twin = Room::new(
        201,
        true,
        false,
        ClassType::Lecture,
        true,
        TableType::SmallDesk,
        "Building B",
    );
    let opposite = Room::new(
        202,
        false,
        true,
        ClassType::Lab,
        false,
        TableType::Table,
        "Building Q",
    );

    let recommender = RoomRecommender::new();
    let ranked = recommender
        .recommend(
            vec![opposite, twin],
            &reference_prefs(),
            &reference_history(),
            0.0,
        )
        .unwrap();

    assert_eq!(ranked[0].room.id, 201);
    assert!(ranked[0].weight > ranked[1].weight);
}

#[test]
fn test_typo_in_preference_order_is_tolerated() {
    let order = ["windows", "outlets", "tabletype", "classType", "printer"];
    let values = ["true", "false", "Lecture", "true", "SmallDesk"];
    let prefs = UserPreferences::parse(&order, &values, "Building B").unwrap();

    let recommender = RoomRecommender::new();
    let ranked = recommender
        .recommend(reference_rooms(), &prefs, &reference_history(), 0.0)
        .unwrap();

    // Still a full ranking; the table-type feature just carries no
    // weight of its own
    assert_eq!(ranked.len(), 6);
    for (idx, scored) in ranked.iter().enumerate() {
        assert_eq!(scored.original_rank, idx + 1);
    }
}

#[test]
fn test_inputs_are_not_mutated() {
    let history = reference_history();
    let prefs = reference_prefs();
    let before = history.clone();

    let recommender = RoomRecommender::new();
    recommender
        .recommend(reference_rooms(), &prefs, &history, 2.0)
        .unwrap();

    assert_eq!(history, before);
}
