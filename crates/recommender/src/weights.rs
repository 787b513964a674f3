//! Per-feature weight derivation.
//!
//! Weights flow through two stages before scoring:
//! 1. Rank weights from the preference order (rank 1 ⇒ weight 1,
//!    rank 5 ⇒ weight 5; unranked features stay 0)
//! 2. Historical adjustment from the window profile (reinforce a stated
//!    preference the history agrees with, discount one it contradicts)
//!
//! The building weight never moves: it is fixed at 1 and only applies
//! when a candidate sits in the caller's target building.

use crate::history::{DOMINANT_COUNT, HistoryProfile, MINORITY_COUNT};
use crate::preference::{Feature, PreferenceOrder};
use rooms::{ClassType, Room, TableType};

/// Fixed weight for the building match.
const BUILDING_WEIGHT: f64 = 1.0;

/// Added to a weight when the history window agrees with the stated
/// preference.
const REINFORCEMENT_BOOST: f64 = 1.0;

/// Divides a weight when the history window contradicts the stated
/// preference.
const CONFLICT_DIVISOR: f64 = 1.5;

/// Adjusted per-feature weights used to score candidates.
#[derive(Debug, Clone, Copy)]
pub struct FeatureWeights {
    pub outlets: f64,
    pub windows: f64,
    pub class_type: f64,
    pub printer: f64,
    pub table_type: f64,
    pub building: f64,
}

impl FeatureWeights {
    /// Derive rank weights from the preference order (stage 1).
    pub fn from_order(order: &PreferenceOrder) -> Self {
        let rank_weight = |feature| match order.rank_of(feature) {
            Some(rank) => rank as f64,
            None => 0.0,
        };

        Self {
            outlets: rank_weight(Feature::Outlets),
            windows: rank_weight(Feature::Windows),
            class_type: rank_weight(Feature::ClassType),
            printer: rank_weight(Feature::Printer),
            table_type: rank_weight(Feature::TableType),
            building: BUILDING_WEIGHT,
        }
    }

    /// Apply the historical adjustment (stage 2).
    ///
    /// ## Algorithm
    /// Per feature, against the window profile:
    /// - dominant signal (>= 7-of-10) toward the ideal's value: +1
    /// - dominant signal away from the ideal's value: divide by 1.5
    /// - minority signal (<= 3-of-10): the same, mirrored
    /// - mixed signal: weight is left alone
    ///
    /// The categorical features branch three ways instead of two: labs
    /// dominant, lectures dominant, or both rare — in which case the
    /// default category (Classroom / Table) is assumed preferred.
    /// Big desks and small desks branch the same way.
    pub fn adjust_for_history(mut self, ideal: &Room, profile: &HistoryProfile) -> Self {
        adjust_flag(&mut self.outlets, profile.outlets_yes, ideal.outlets);
        adjust_flag(&mut self.windows, profile.windows_yes, ideal.windows);
        adjust_flag(&mut self.printer, profile.printer_yes, ideal.printer);

        if profile.labs >= DOMINANT_COUNT {
            reinforce_or_discount(&mut self.class_type, ideal.class_type == ClassType::Lab);
        } else if profile.lectures >= DOMINANT_COUNT {
            reinforce_or_discount(&mut self.class_type, ideal.class_type == ClassType::Lecture);
        } else if profile.labs + profile.lectures <= MINORITY_COUNT {
            reinforce_or_discount(
                &mut self.class_type,
                ideal.class_type == ClassType::Classroom,
            );
        }

        if profile.big_desks >= DOMINANT_COUNT {
            reinforce_or_discount(&mut self.table_type, ideal.table_type == TableType::BigDesk);
        } else if profile.small_desks >= DOMINANT_COUNT {
            reinforce_or_discount(&mut self.table_type, ideal.table_type == TableType::SmallDesk);
        } else if profile.small_desks + profile.big_desks <= MINORITY_COUNT {
            reinforce_or_discount(&mut self.table_type, ideal.table_type == TableType::Table);
        }

        self
    }

    /// Base match score for a candidate against the ideal room.
    ///
    /// Each matching feature contributes half its weight; the building
    /// contributes half its fixed weight when the candidate sits in the
    /// ideal's (target) building. Recency and jitter are layered on top
    /// by the ranker.
    pub fn score(&self, candidate: &Room, ideal: &Room) -> f64 {
        let mut weight = 0.0;
        if candidate.outlets == ideal.outlets {
            weight += self.outlets / 2.0;
        }
        if candidate.windows == ideal.windows {
            weight += self.windows / 2.0;
        }
        if candidate.class_type == ideal.class_type {
            weight += self.class_type / 2.0;
        }
        if candidate.printer == ideal.printer {
            weight += self.printer / 2.0;
        }
        if candidate.table_type == ideal.table_type {
            weight += self.table_type / 2.0;
        }
        if candidate.building == ideal.building {
            weight += self.building / 2.0;
        }
        weight
    }
}

/// Two-way dominance adjustment for a boolean feature.
fn adjust_flag(weight: &mut f64, yes_count: usize, ideal_wants_yes: bool) {
    if yes_count >= DOMINANT_COUNT {
        reinforce_or_discount(weight, ideal_wants_yes);
    } else if yes_count <= MINORITY_COUNT {
        reinforce_or_discount(weight, !ideal_wants_yes);
    }
}

fn reinforce_or_discount(weight: &mut f64, history_agrees: bool) {
    if history_agrees {
        *weight += REINFORCEMENT_BOOST;
    } else {
        *weight /= CONFLICT_DIVISOR;
    }
}
