//! # Rooms Crate
//!
//! This crate holds the shared domain model for study-space rooms.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Room, ClassType, TableType)
//! - **catalog**: RoomCatalog, an indexed in-memory store loaded from JSON
//! - **error**: Error types for parsing and catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use rooms::RoomCatalog;
//! use std::path::Path;
//!
//! let catalog = RoomCatalog::load_from_file(Path::new("data/rooms.json"))?;
//! let room = catalog.get_room(101).unwrap();
//!
//! println!("Room {} is in {}", room.id, room.building);
//! ```

// Public modules
pub mod catalog;
pub mod error;
pub mod types;

// Re-export commonly used types for convenience
pub use catalog::RoomCatalog;
pub use error::{Result, RoomDataError};
pub use types::{ClassType, Room, RoomId, TableType};
