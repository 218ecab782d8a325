//! rg-core: Room generation for corridor-grown dungeons
//!
//! Places rooms on a bounded board, either centred (the starting room) or
//! attached to the end of a corridor, and fills them with obstacle patterns.
//! All randomness flows through an explicit, seedable [`GameRng`].

pub mod dungeon;
pub mod error;
pub mod options;

mod consts;
mod rng;

pub use consts::*;
pub use error::RoomError;
pub use options::GenOptions;
pub use rng::GameRng;
