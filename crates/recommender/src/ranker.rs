//! The ranking pass itself.
//!
//! Brings the pieces together for one scoring invocation:
//! 1. Validate input shape (window length, variety level)
//! 2. Profile the history window and derive adjusted feature weights
//! 3. Score every candidate against the ideal room, including the
//!    recency term, and sort — this is the deterministic base ranking
//! 4. Optionally jitter the weights for variety and re-sort
//!
//! Every call is an independent, read-only computation over its inputs;
//! calls may run concurrently as long as each gets its own RNG (the
//! default entry point uses the thread-local generator).

use crate::error::{RecommendError, Result};
use crate::history::{HISTORY_WINDOW, HistoryProfile};
use crate::preference::UserPreferences;
use crate::weights::FeatureWeights;
use rand::Rng;
use rayon::prelude::*;
use rooms::Room;
use tracing::{debug, instrument};

/// Base of the exponential jitter scale: noise drawn from
/// `U(0,1) * JITTER_BASE^variety`.
const JITTER_BASE: f64 = 1.8;

/// Variety level at which the recency term crosses zero. Below it,
/// recently-visited rooms are penalized; above it, they are boosted.
const RECENCY_PIVOT: f64 = 4.0;

/// One ranked candidate.
#[derive(Debug, Clone)]
pub struct ScoredRoom {
    /// Final weight, including jitter when variety is non-zero.
    pub weight: f64,
    /// 1-based position in the deterministic ranking, before jitter.
    /// Lets a caller see how much the randomization reordered the list.
    pub original_rank: usize,
    pub room: Room,
}

/// Scores and ranks candidate rooms against a user's preferences.
///
/// ## Example Usage
/// ```ignore
/// use recommender::{RoomRecommender, UserPreferences};
///
/// let prefs = UserPreferences::parse(&order, &values, "Building B")?;
/// let recommender = RoomRecommender::new();
/// let ranked = recommender.recommend(candidates, &prefs, &history, 2.0)?;
/// ```
#[derive(Debug, Clone)]
pub struct RoomRecommender {
    jitter_base: f64,
}

impl RoomRecommender {
    /// Create a recommender with the default jitter scale.
    pub fn new() -> Self {
        Self {
            jitter_base: JITTER_BASE,
        }
    }

    /// Configure the exponential jitter base (default: 1.8)
    pub fn with_jitter_base(mut self, base: f64) -> Self {
        self.jitter_base = base;
        self
    }

    /// Rank candidates using the process-wide thread-local RNG.
    ///
    /// Fully deterministic when `variety_level` is 0 (the RNG is never
    /// consulted). For reproducible jittered rankings, use
    /// [`recommend_with_rng`](Self::recommend_with_rng) with a seeded
    /// generator.
    pub fn recommend(
        &self,
        candidates: Vec<Room>,
        preferences: &UserPreferences,
        history: &[Room],
        variety_level: f64,
    ) -> Result<Vec<ScoredRoom>> {
        self.recommend_with_rng(candidates, preferences, history, variety_level, &mut rand::rng())
    }

    /// Rank candidates with an injected random source.
    ///
    /// ## Algorithm
    /// 1. Derive rank weights from the preference order, adjusted by
    ///    the history window's dominance signals
    /// 2. Per candidate: sum half of each matched feature weight, plus
    ///    `(1 - variety/4)` per history occurrence of the candidate's id
    /// 3. Stable-sort descending by weight and record each candidate's
    ///    1-based `original_rank`; ties keep their input order
    /// 4. When `variety_level != 0`, add `U(0,1) * 1.8^variety` to each
    ///    weight and re-sort; `original_rank` is untouched
    ///
    /// # Errors
    /// - `HistoryLength` if `history` is not exactly [`HISTORY_WINDOW`]
    ///   rooms
    /// - `NegativeVariety` if `variety_level < 0`
    #[instrument(skip_all, fields(candidates = candidates.len(), variety = variety_level))]
    pub fn recommend_with_rng<R: Rng + ?Sized>(
        &self,
        candidates: Vec<Room>,
        preferences: &UserPreferences,
        history: &[Room],
        variety_level: f64,
        rng: &mut R,
    ) -> Result<Vec<ScoredRoom>> {
        if variety_level < 0.0 {
            return Err(RecommendError::NegativeVariety(variety_level));
        }
        if history.len() != HISTORY_WINDOW {
            return Err(RecommendError::HistoryLength {
                expected: HISTORY_WINDOW,
                found: history.len(),
            });
        }
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let profile = HistoryProfile::from_window(history);
        let weights =
            FeatureWeights::from_order(&preferences.order).adjust_for_history(&preferences.ideal, &profile);
        debug!(?weights, "Adjusted feature weights");

        // Recency matching is by stable room id, so a re-fetched copy of
        // a visited room still counts as a revisit.
        let recency_term = 1.0 - variety_level / RECENCY_PIVOT;
        let mut ranked: Vec<(f64, Room)> = candidates
            .into_par_iter()
            .map(|room| {
                let mut weight = weights.score(&room, &preferences.ideal);
                let visits = history.iter().filter(|past| past.id == room.id).count();
                weight += visits as f64 * recency_term;
                (weight, room)
            })
            .collect();

        ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

        let mut results: Vec<ScoredRoom> = ranked
            .into_iter()
            .enumerate()
            .map(|(idx, (weight, room))| ScoredRoom {
                weight,
                original_rank: idx + 1,
                room,
            })
            .collect();

        if variety_level != 0.0 {
            let scale = self.jitter_base.powf(variety_level);
            for scored in &mut results {
                scored.weight += rng.random::<f64>() * scale;
            }
            results.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        }

        debug!("Ranked {} candidates", results.len());
        Ok(results)
    }
}

impl Default for RoomRecommender {
    fn default() -> Self {
        Self::new()
    }
}
