//! Room interior content
//!
//! A room's content is a grid of tile codes owned by the room. The starting
//! room is filled uniformly with empty floor; every other room gets one of
//! four obstacle patterns scattered over its interior. Border cells are
//! always left empty so corridors can attach anywhere along an edge.

use serde::Serialize;
use strum::{Display, EnumIter};

use crate::consts::{OBSTACLE_CODE_END, OBSTACLE_CODE_MIN, TILE_EMPTY};
use crate::error::RoomError;
use crate::rng::GameRng;

/// Obstacle layout applied to a room interior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[repr(u8)]
pub enum ContentPattern {
    /// Obstacles only in even columns
    EvenColumns = 0,
    /// Obstacles only in even rows
    EvenRows = 1,
    /// Checkerboard on even `col + row`
    EvenDiagonal = 2,
    /// Checkerboard on odd `col + row`
    OddDiagonal = 3,
}

impl ContentPattern {
    pub const COUNT: u32 = 4;

    /// Pattern for a variant index, wrapping modulo 4
    pub fn from_index(index: u32) -> Self {
        match index % Self::COUNT {
            0 => ContentPattern::EvenColumns,
            1 => ContentPattern::EvenRows,
            2 => ContentPattern::EvenDiagonal,
            _ => ContentPattern::OddDiagonal,
        }
    }

    /// Pick a pattern uniformly
    pub fn random(rng: &mut GameRng) -> Self {
        Self::from_index(rng.rn2(Self::COUNT))
    }

    /// Check if an interior cell may hold an obstacle under this pattern
    pub fn qualifies(self, col: i32, row: i32) -> bool {
        match self {
            ContentPattern::EvenColumns => col % 2 == 0,
            ContentPattern::EvenRows => row % 2 == 0,
            ContentPattern::EvenDiagonal => (col + row) % 2 == 0,
            ContentPattern::OddDiagonal => (col + row) % 2 != 0,
        }
    }
}

/// Tile codes for a `width` x `height` room, indexed by `(col, row)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomContent {
    width: i32,
    height: i32,
    /// Column-major: cell `(x, y)` lives at `x * height + y`
    cells: Vec<u8>,
}

impl RoomContent {
    /// Grid with every cell set to `code`
    fn filled(width: i32, height: i32, code: u8) -> Self {
        let len = (width.max(0) as usize) * (height.max(0) as usize);
        Self {
            width,
            height,
            cells: vec![code; len],
        }
    }

    /// Empty floor everywhere
    pub fn uniform(width: i32, height: i32) -> Self {
        Self::filled(width, height, TILE_EMPTY)
    }

    /// Random obstacle layout using a randomly chosen pattern
    pub fn patterned(width: i32, height: i32, rng: &mut GameRng) -> Self {
        let pattern = ContentPattern::random(rng);
        tracing::trace!(%pattern, width, height, "filling room content");
        Self::with_pattern(width, height, pattern, rng)
    }

    /// Random obstacle layout using `pattern`
    ///
    /// Each interior cell flips a coin; on heads, a cell the pattern accepts
    /// gets a code sampled from 1..=4. Every other cell is empty floor.
    pub fn with_pattern(
        width: i32,
        height: i32,
        pattern: ContentPattern,
        rng: &mut GameRng,
    ) -> Self {
        let mut content = Self::filled(width, height, TILE_EMPTY);

        for i in 0..width {
            for y in 0..height {
                let border = i == 0 || y == 0 || i == width - 1 || y == height - 1;
                if border || !rng.coin() || !pattern.qualifies(i, y) {
                    continue;
                }
                let code = rng.range_exclusive(OBSTACLE_CODE_MIN as i32, OBSTACLE_CODE_END as i32);
                let idx = content.index(i, y);
                content.cells[idx] = code as u8;
            }
        }

        content
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    fn index(&self, x: i32, y: i32) -> usize {
        (x * self.height + y) as usize
    }

    /// Tile code at `(x, y)`
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    pub fn get(&self, x: i32, y: i32) -> u8 {
        assert!(
            self.in_bounds(x, y),
            "content cell ({x}, {y}) is outside a {}x{} room",
            self.width,
            self.height
        );
        self.cells[self.index(x, y)]
    }

    /// Tile code at `(x, y)`, or an error if it is outside the grid
    pub fn try_get(&self, x: i32, y: i32) -> Result<u8, RoomError> {
        if !self.in_bounds(x, y) {
            return Err(RoomError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.cells[self.index(x, y)])
    }

    /// Tile codes of row `y`, from column 0 upward
    pub fn row(&self, y: i32) -> impl Iterator<Item = u8> + '_ {
        (0..self.width).map(move |x| self.get(x, y))
    }

    /// Check that every border cell is empty floor
    pub fn border_is_clear(&self) -> bool {
        (0..self.width).all(|x| {
            (0..self.height).all(|y| {
                let border = x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1;
                !border || self.get(x, y) == TILE_EMPTY
            })
        })
    }
}
