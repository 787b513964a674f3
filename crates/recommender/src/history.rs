//! Aggregation over the recently-visited-rooms window.
//!
//! The scorer looks at a user's last [`HISTORY_WINDOW`] rooms in two
//! ways: per-feature counts (how many of them had outlets, were labs,
//! and so on) feed the weight adjustment, and per-room occurrence counts
//! feed the recency term. This module computes the former once up front,
//! the same "aggregate once, query cheaply" shape as a user context.

use rooms::{ClassType, Room, TableType};

/// Number of rooms in the history window.
///
/// The dominance thresholds below are derived for exactly this window
/// size; callers supplying a different length are rejected rather than
/// silently mis-scored.
pub const HISTORY_WINDOW: usize = 10;

/// A feature value seen in at least this many history rooms is a
/// dominant signal (7-of-10).
pub(crate) const DOMINANT_COUNT: usize = 7;

/// A feature value seen in at most this many history rooms is a
/// minority signal (3-of-10).
pub(crate) const MINORITY_COUNT: usize = 3;

/// Per-feature value counts over the history window.
#[derive(Debug, Clone, Copy, Default)]
pub struct HistoryProfile {
    pub outlets_yes: usize,
    pub windows_yes: usize,
    pub printer_yes: usize,
    pub labs: usize,
    pub lectures: usize,
    pub small_desks: usize,
    pub big_desks: usize,
}

impl HistoryProfile {
    /// Count feature values across the window in a single pass.
    ///
    /// Ordering within the window is irrelevant here; only the counts
    /// matter.
    pub fn from_window(history: &[Room]) -> Self {
        let mut profile = Self::default();
        for room in history {
            if room.outlets {
                profile.outlets_yes += 1;
            }
            if room.windows {
                profile.windows_yes += 1;
            }
            if room.printer {
                profile.printer_yes += 1;
            }
            match room.class_type {
                ClassType::Lab => profile.labs += 1,
                ClassType::Lecture => profile.lectures += 1,
                ClassType::Classroom => {}
            }
            match room.table_type {
                TableType::SmallDesk => profile.small_desks += 1,
                TableType::BigDesk => profile.big_desks += 1,
                TableType::LargeDesk | TableType::Table => {}
            }
        }
        profile
    }
}
