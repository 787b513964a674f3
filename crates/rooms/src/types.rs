//! Core domain types for study-space rooms.
//!
//! This module defines the fundamental data structures used throughout the
//! system:
//! - Type alias for room identity (RoomId)
//! - Closed enums for the categorical amenities (ClassType, TableType)
//! - The immutable Room struct shared by candidates, history entries and
//!   the synthetic ideal room

use crate::error::RoomDataError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a room.
///
/// Identity is stable across fetches; the recommender uses it for
/// recency matching and display, never for scoring.
pub type RoomId = u32;

/// The kind of room a space is.
///
/// `Classroom` is the default assumption when neither labs nor lecture
/// halls dominate a user's recent history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassType {
    Lecture,
    Lab,
    Classroom,
}

impl FromStr for ClassType {
    type Err = RoomDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Lecture" => Ok(ClassType::Lecture),
            "Lab" => Ok(ClassType::Lab),
            "Classroom" => Ok(ClassType::Classroom),
            _ => Err(RoomDataError::InvalidValue {
                field: "classType".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClassType::Lecture => "Lecture",
            ClassType::Lab => "Lab",
            ClassType::Classroom => "Classroom",
        };
        f.write_str(s)
    }
}

/// The kind of work surface a room offers.
///
/// `Table` is the default assumption when neither big nor small desks
/// dominate a user's recent history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableType {
    SmallDesk,
    BigDesk,
    LargeDesk,
    Table,
}

impl FromStr for TableType {
    type Err = RoomDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SmallDesk" => Ok(TableType::SmallDesk),
            "BigDesk" => Ok(TableType::BigDesk),
            "LargeDesk" => Ok(TableType::LargeDesk),
            "Table" => Ok(TableType::Table),
            _ => Err(RoomDataError::InvalidValue {
                field: "tableType".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for TableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TableType::SmallDesk => "SmallDesk",
            TableType::BigDesk => "BigDesk",
            TableType::LargeDesk => "LargeDesk",
            TableType::Table => "Table",
        };
        f.write_str(s)
    }
}

/// A study-space room.
///
/// Rooms are immutable once constructed: the recommender only ever reads
/// them, whether they arrive as candidates, as history entries, or as the
/// synthetic ideal room built from a preference vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub outlets: bool,
    pub windows: bool,
    pub class_type: ClassType,
    pub printer: bool,
    pub table_type: TableType,
    /// Free-form building identifier (e.g. "Building B")
    pub building: String,
}

impl Room {
    /// Create a new room.
    pub fn new(
        id: RoomId,
        outlets: bool,
        windows: bool,
        class_type: ClassType,
        printer: bool,
        table_type: TableType,
        building: impl Into<String>,
    ) -> Self {
        Self {
            id,
            outlets,
            windows,
            class_type,
            printer,
            table_type,
            building: building.into(),
        }
    }
}
