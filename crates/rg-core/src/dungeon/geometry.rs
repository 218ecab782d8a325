//! Board extents, dimension ranges and corridor endpoints
//!
//! Plain value types handed to room placement on every call.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::RoomError;
use crate::rng::GameRng;

/// Board extents in tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub columns: i32,
    pub rows: i32,
}

impl Board {
    pub const fn new(columns: i32, rows: i32) -> Self {
        Self { columns, rows }
    }

    /// Check if a tile coordinate lies on the board
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..self.columns).contains(&x) && (0..self.rows).contains(&y)
    }
}

/// Inclusive integer range used to sample room dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntRange {
    pub min: i32,
    pub max: i32,
}

impl IntRange {
    /// Create a range without checking it
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Create a range of positive dimensions
    pub fn try_new(min: i32, max: i32) -> Result<Self, RoomError> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// A range that always yields `value`
    pub const fn exactly(value: i32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Check that the range is non-empty and yields positive values
    pub fn validate(&self) -> Result<(), RoomError> {
        if self.min < 1 || self.min > self.max {
            return Err(RoomError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Sample a value in `min..=max`
    pub fn random(&self, rng: &mut GameRng) -> i32 {
        rng.range_inclusive(self.min, self.max)
    }
}

/// Compass direction a corridor travels into a room
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// Terminus of the corridor a room attaches to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorridorEndpoint {
    pub direction: Direction,
    pub end_x: i32,
    pub end_y: i32,
}

impl CorridorEndpoint {
    pub const fn new(direction: Direction, end_x: i32, end_y: i32) -> Self {
        Self {
            direction,
            end_x,
            end_y,
        }
    }
}
