//! Dungeon rooms
//!
//! Contains room placement, room content and the value types they share.

mod content;
mod geometry;
mod room;

pub use content::{ContentPattern, RoomContent};
pub use geometry::{Board, CorridorEndpoint, Direction, IntRange};
pub use room::Room;
