//! User preference parsing.
//!
//! This module turns the raw inputs a caller supplies — a ranked list of
//! feature names and a vector of raw preference values — into typed data
//! the scorer can work with:
//! - `PreferenceOrder`: which feature sits at which importance rank
//! - the synthetic "ideal room" every candidate is compared against
//!
//! Parsing happens once up front, so the scoring loop never touches
//! strings.

use crate::error::{RecommendError, Result};
use rooms::{Room, RoomId};

/// Number of rankable room features.
///
/// The dominance thresholds in [`crate::history`] are derived for this
/// feature set; changing it means re-deriving them.
pub const FEATURE_COUNT: usize = 5;

/// Id given to the synthetic ideal room. Never scored or displayed.
const IDEAL_ROOM_ID: RoomId = 0;

/// A rankable room feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Outlets,
    Windows,
    ClassType,
    Printer,
    TableType,
}

impl Feature {
    /// Parse a preference-order token.
    ///
    /// Returns `None` for unrecognized tokens. Callers treat that as
    /// "ignore this slot", matching the tolerant behavior documented in
    /// the scoring contract, so a typo'd feature name simply keeps a
    /// zero weight.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "outlets" => Some(Feature::Outlets),
            "windows" => Some(Feature::Windows),
            "classType" => Some(Feature::ClassType),
            "printer" => Some(Feature::Printer),
            "tableType" => Some(Feature::TableType),
            _ => None,
        }
    }
}

/// A user's ranked feature importance.
///
/// Slot 0 is the most important feature. Slots holding `None` came from
/// unrecognized tokens and contribute nothing to any weight.
#[derive(Debug, Clone)]
pub struct PreferenceOrder {
    slots: [Option<Feature>; FEATURE_COUNT],
}

impl PreferenceOrder {
    /// Parse a ranked list of feature-name tokens.
    ///
    /// # Errors
    /// `PreferenceOrderLength` if `tokens` is not exactly
    /// [`FEATURE_COUNT`] long. Unrecognized tokens are not an error.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        if tokens.len() != FEATURE_COUNT {
            return Err(RecommendError::PreferenceOrderLength {
                expected: FEATURE_COUNT,
                found: tokens.len(),
            });
        }

        let mut slots = [None; FEATURE_COUNT];
        for (slot, token) in slots.iter_mut().zip(tokens) {
            *slot = Feature::from_token(token.as_ref());
        }
        Ok(Self { slots })
    }

    /// The 1-based importance rank of a feature, or `None` if the
    /// feature never appeared in the order.
    pub fn rank_of(&self, feature: Feature) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| *slot == Some(feature))
            .map(|idx| idx + 1)
    }
}

/// Everything the scorer needs to know about a user, parsed once.
///
/// Bundles the importance order with the ideal room built from the raw
/// preference vector and the target building.
#[derive(Debug, Clone)]
pub struct UserPreferences {
    pub order: PreferenceOrder,
    /// Synthetic room built from the preference vector; the scoring
    /// target every candidate is compared against.
    pub ideal: Room,
}

impl UserPreferences {
    /// Parse raw preference inputs.
    ///
    /// `values` carries one raw value per feature, in the fixed field
    /// order `[outlets, windows, classType, printer, tableType]`:
    /// booleans as `"true"`/`"false"` (anything other than `"true"`
    /// reads as false), categorical fields as their literal enum
    /// strings.
    ///
    /// # Errors
    /// - `PreferenceOrderLength` / `PreferenceVectorLength` on wrong
    ///   input lengths
    /// - `InvalidValue` if a categorical value is outside its closed set
    pub fn parse<S: AsRef<str>, V: AsRef<str>>(
        order_tokens: &[S],
        values: &[V],
        target_building: impl Into<String>,
    ) -> Result<Self> {
        let order = PreferenceOrder::parse(order_tokens)?;

        if values.len() != FEATURE_COUNT {
            return Err(RecommendError::PreferenceVectorLength {
                expected: FEATURE_COUNT,
                found: values.len(),
            });
        }

        let ideal = Room::new(
            IDEAL_ROOM_ID,
            parse_flag(values[0].as_ref()),
            parse_flag(values[1].as_ref()),
            values[2].as_ref().parse()?,
            parse_flag(values[3].as_ref()),
            values[4].as_ref().parse()?,
            target_building,
        );

        Ok(Self { order, ideal })
    }
}

/// Boolean preference values are the literal string "true"; every other
/// string reads as false.
fn parse_flag(value: &str) -> bool {
    value == "true"
}
