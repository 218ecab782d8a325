//! Tile codes and fixed room dimensions

/// Passable floor tile
pub const TILE_EMPTY: u8 = 1;

/// Obstacle codes are sampled from `OBSTACLE_CODE_MIN..OBSTACLE_CODE_END`
pub const OBSTACLE_CODE_MIN: u8 = 1;
pub const OBSTACLE_CODE_END: u8 = 5;

/// Starting room footprint
pub const BOOTSTRAP_WIDTH: i32 = 3;
pub const BOOTSTRAP_HEIGHT: i32 = 3;

/// Smallest dimension a clamped room may shrink to
pub const MIN_ROOM_DIMENSION: i32 = 1;
