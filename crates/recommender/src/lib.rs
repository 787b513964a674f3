//! # Recommender Crate
//!
//! This crate implements preference-driven ranking of candidate study
//! rooms.
//!
//! ## Components
//!
//! - **preference**: parse a user's ranked feature order and raw
//!   preference vector into typed data, including the synthetic "ideal
//!   room" candidates are scored against
//! - **history**: aggregate the 10-room recently-visited window into
//!   per-feature counts
//! - **weights**: derive per-feature weights from preference rank,
//!   reinforced or discounted by dominant history signals
//! - **ranker**: score candidates, apply the recency term, and
//!   optionally jitter the ranking for variety
//!
//! ## Example Usage
//!
//! ```ignore
//! use recommender::{RoomRecommender, UserPreferences};
//!
//! let order = ["windows", "outlets", "tableType", "classType", "printer"];
//! let values = ["true", "false", "Lecture", "true", "SmallDesk"];
//! let prefs = UserPreferences::parse(&order, &values, "Building B")?;
//!
//! let recommender = RoomRecommender::new();
//! let ranked = recommender.recommend(candidates, &prefs, &history, 2.0)?;
//!
//! for scored in &ranked {
//!     println!("room {} weight {:.2}", scored.room.id, scored.weight);
//! }
//! ```
//!
//! ## Concurrency
//!
//! A ranking pass reads only its inputs; per-candidate scoring runs on
//! the Rayon pool and the random source is either the thread-local
//! generator or an injected one, so concurrent calls need no
//! coordination.

// Public modules
pub mod error;
pub mod history;
pub mod preference;
pub mod ranker;
pub mod weights;

// Re-export commonly used types
pub use error::{RecommendError, Result};
pub use history::{HISTORY_WINDOW, HistoryProfile};
pub use preference::{FEATURE_COUNT, Feature, PreferenceOrder, UserPreferences};
pub use ranker::{RoomRecommender, ScoredRoom};
pub use weights::FeatureWeights;
