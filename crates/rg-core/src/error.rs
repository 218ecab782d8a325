//! Error types for room generation
//!
//! Placement never fails: out-of-board dimensions and positions are clamped.
//! These errors cover checked reads, range construction and options loading.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoomError {
    #[error("content cell ({x}, {y}) is outside a {width}x{height} room")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    #[error("invalid dimension range {min}..={max}")]
    InvalidRange { min: i32, max: i32 },

    #[error("invalid board {columns}x{rows}")]
    InvalidBoard { columns: i32, rows: i32 },

    #[error("room dimension up to {max} does not fit a board extent of {extent}")]
    RangeExceedsBoard { max: i32, extent: i32 },

    #[error("corridor end ({x}, {y}) is off the board")]
    CorridorOffBoard { x: i32, y: i32 },

    #[error("options error: {0}")]
    Options(String),

    #[error("could not serialize room: {0}")]
    Output(String),
}
