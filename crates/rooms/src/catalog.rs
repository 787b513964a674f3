//! In-memory catalog of rooms.
//!
//! The catalog is the read-only store the rest of the system queries:
//! it owns the rooms and hands out references, with an id index for
//! O(1) lookups.

use crate::error::{Result, RoomDataError};
use crate::types::{Room, RoomId};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Indexed collection of rooms loaded from a catalog file.
#[derive(Debug, Default)]
pub struct RoomCatalog {
    rooms: Vec<Room>,
    by_id: HashMap<RoomId, usize>,
}

impl RoomCatalog {
    /// Creates a new, empty catalog
    pub fn new() -> Self {
        Self {
            rooms: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// Load a catalog from a JSON file containing an array of rooms.
    ///
    /// # Errors
    /// - `IoError` if the file can't be opened or read
    /// - `ParseError` if the JSON doesn't match the Room schema
    /// - `DuplicateId` if two rooms share an id
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let rooms: Vec<Room> = serde_json::from_reader(BufReader::new(file))?;

        let mut catalog = Self::new();
        for room in rooms {
            catalog.insert_room(room)?;
        }
        Ok(catalog)
    }

    /// Insert a room into the catalog, rejecting duplicate ids
    pub fn insert_room(&mut self, room: Room) -> Result<()> {
        if self.by_id.contains_key(&room.id) {
            return Err(RoomDataError::DuplicateId(room.id));
        }
        self.by_id.insert(room.id, self.rooms.len());
        self.rooms.push(room);
        Ok(())
    }

    /// Get a room by id
    pub fn get_room(&self, id: RoomId) -> Option<&Room> {
        self.by_id.get(&id).map(|&idx| &self.rooms[idx])
    }

    /// All rooms, in catalog order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Number of rooms in the catalog
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
