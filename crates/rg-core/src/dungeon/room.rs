//! Room footprints and placement
//!
//! The first room of a dungeon sits at the centre of the board. Every later
//! room is grown off the end of a corridor: it is sized from the caller's
//! ranges, then shrunk and shifted until it fits on the board with the
//! corridor touching one of its edges.

use serde::Serialize;

use super::content::RoomContent;
use super::geometry::{Board, CorridorEndpoint, Direction, IntRange};
use crate::consts::{BOOTSTRAP_HEIGHT, BOOTSTRAP_WIDTH, MIN_ROOM_DIMENSION};
use crate::error::RoomError;
use crate::rng::GameRng;

/// A placed room with its content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Room {
    /// X coordinate of the lower-left tile
    x: i32,
    /// Y coordinate of the lower-left tile
    y: i32,
    width: i32,
    height: i32,
    /// Direction of the corridor entering this room (None for the starting room)
    entering_direction: Option<Direction>,
    content: RoomContent,
}

/// Clamp `value` into `floor..=ceiling`, with the floor winning when the
/// window is empty.
fn clamp_floor(value: i32, floor: i32, ceiling: i32) -> i32 {
    value.min(ceiling).max(floor)
}

impl Room {
    /// Place the starting room: a 3x3 empty room centred on the board
    ///
    /// Boards smaller than 3x3 give a room that overhangs the board.
    pub fn bootstrap(board: Board) -> Self {
        let width = BOOTSTRAP_WIDTH;
        let height = BOOTSTRAP_HEIGHT;
        let x = (board.columns as f64 / 2.0 - width as f64 / 2.0).round_ties_even() as i32;
        let y = (board.rows as f64 / 2.0 - height as f64 / 2.0).round_ties_even() as i32;

        tracing::debug!(x, y, width, height, "placed starting room");

        Self {
            x,
            y,
            width,
            height,
            entering_direction: None,
            content: RoomContent::uniform(width, height),
        }
    }

    /// Place a room at the end of `corridor`
    ///
    /// Width and height are sampled from the ranges. The dimension along the
    /// corridor's travel is clamped to the space left between the corridor end
    /// and the board edge, the room is attached to the corridor end, and the
    /// cross-axis position is sampled so the corridor column (or row) falls
    /// inside the room before being clamped onto the board.
    pub fn anchored(
        width_range: IntRange,
        height_range: IntRange,
        board: Board,
        corridor: &CorridorEndpoint,
        rng: &mut GameRng,
    ) -> Self {
        let mut width = width_range.random(rng);
        let mut height = height_range.random(rng);
        let (end_x, end_y) = (corridor.end_x, corridor.end_y);
        let (sampled_width, sampled_height) = (width, height);

        let (x, y) = match corridor.direction {
            Direction::North => {
                height = clamp_floor(height, MIN_ROOM_DIMENSION, board.rows - end_y);
                let x = rng.range_exclusive(end_x - width + 1, end_x);
                (clamp_floor(x, 0, board.columns - width), end_y)
            }
            Direction::East => {
                width = clamp_floor(width, MIN_ROOM_DIMENSION, board.columns - end_x);
                let y = rng.range_exclusive(end_y - height + 1, end_y);
                (end_x, clamp_floor(y, 0, board.rows - height))
            }
            Direction::South => {
                height = clamp_floor(height, MIN_ROOM_DIMENSION, end_y);
                let x = rng.range_exclusive(end_x - width + 1, end_x);
                (clamp_floor(x, 0, board.columns - width), end_y - height + 1)
            }
            Direction::West => {
                width = clamp_floor(width, MIN_ROOM_DIMENSION, end_x);
                let y = rng.range_exclusive(end_y - height + 1, end_y);
                (end_x - width + 1, clamp_floor(y, 0, board.rows - height))
            }
        };

        tracing::debug!(
            direction = %corridor.direction,
            end_x,
            end_y,
            sampled_width,
            sampled_height,
            x,
            y,
            width,
            height,
            "placed room at corridor end"
        );

        let content = RoomContent::patterned(width, height, rng);
        debug_assert!(content.border_is_clear());

        Self {
            x,
            y,
            width,
            height,
            entering_direction: Some(corridor.direction),
            content,
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn entering_direction(&self) -> Option<Direction> {
        self.entering_direction
    }

    pub fn content(&self) -> &RoomContent {
        &self.content
    }

    /// Tile code at room-local `(x, y)`
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside `0..width` x `0..height`.
    pub fn get_content(&self, x: i32, y: i32) -> u8 {
        self.content.get(x, y)
    }

    /// Tile code at room-local `(x, y)`, checked
    pub fn try_get_content(&self, x: i32, y: i32) -> Result<u8, RoomError> {
        self.content.try_get(x, y)
    }

    /// Check if a board tile is inside this room's footprint
    pub fn contains(&self, board_x: i32, board_y: i32) -> bool {
        (self.x..self.x + self.width).contains(&board_x)
            && (self.y..self.y + self.height).contains(&board_y)
    }

    /// Tile code at a board coordinate, if the room covers it
    pub fn content_at(&self, board_x: i32, board_y: i32) -> Option<u8> {
        self.contains(board_x, board_y)
            .then(|| self.content.get(board_x - self.x, board_y - self.y))
    }

    /// Check if the footprint lies entirely on `board`
    pub fn fits(&self, board: Board) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x + self.width <= board.columns
            && self.y + self.height <= board.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TILE_EMPTY;

    #[test]
    fn test_bootstrap_centres_room() {
        let room = Room::bootstrap(Board::new(10, 10));
        assert_eq!((room.x(), room.y()), (4, 4));
        assert_eq!((room.width(), room.height()), (3, 3));
        assert_eq!(room.entering_direction(), None);
        assert!(room.fits(Board::new(10, 10)));
    }

    #[test]
    fn test_bootstrap_rounding() {
        // 4.5 - 1.5 = 3.0, 6.0 - 1.5 = 4.5 -> 4 (ties to even)
        let room = Room::bootstrap(Board::new(9, 12));
        assert_eq!((room.x(), room.y()), (3, 4));
        let room = Room::bootstrap(Board::new(80, 21));
        assert_eq!((room.x(), room.y()), (38, 9));
    }

    #[test]
    fn test_bootstrap_content_is_empty() {
        let room = Room::bootstrap(Board::new(20, 20));
        for x in 0..3 {
            for y in 0..3 {
                assert_eq!(room.get_content(x, y), TILE_EMPTY);
            }
        }
    }

    #[test]
    fn test_east_scenario() {
        let mut rng = GameRng::new(99);
        let corridor = CorridorEndpoint::new(Direction::East, 5, 5);
        let room = Room::anchored(
            IntRange::exactly(2),
            IntRange::exactly(2),
            Board::new(20, 20),
            &corridor,
            &mut rng,
        );
        assert_eq!((room.x(), room.y()), (5, 4));
        assert_eq!((room.width(), room.height()), (2, 2));
        assert_eq!(room.entering_direction(), Some(Direction::East));
    }

    #[test]
    fn test_north_clamps_height_to_board_top() {
        let mut rng = GameRng::new(1);
        let corridor = CorridorEndpoint::new(Direction::North, 10, 17);
        let room = Room::anchored(
            IntRange::exactly(5),
            IntRange::exactly(8),
            Board::new(20, 20),
            &corridor,
            &mut rng,
        );
        assert_eq!(room.height(), 3);
        assert_eq!(room.y(), 17);
        assert!(room.fits(Board::new(20, 20)));
    }

    #[test]
    fn test_south_room_top_meets_corridor() {
        let mut rng = GameRng::new(2);
        let corridor = CorridorEndpoint::new(Direction::South, 6, 4);
        let room = Room::anchored(
            IntRange::exactly(4),
            IntRange::exactly(7),
            Board::new(20, 20),
            &corridor,
            &mut rng,
        );
        assert_eq!(room.height(), 4);
        assert_eq!(room.y(), 1);
        assert_eq!(room.y() + room.height() - 1, 4);
    }

    #[test]
    fn test_west_room_right_edge_meets_corridor() {
        let mut rng = GameRng::new(3);
        let corridor = CorridorEndpoint::new(Direction::West, 12, 9);
        let room = Room::anchored(
            IntRange::exactly(6),
            IntRange::exactly(3),
            Board::new(20, 20),
            &corridor,
            &mut rng,
        );
        assert_eq!(room.width(), 6);
        assert_eq!(room.x() + room.width() - 1, 12);
    }

    #[test]
    fn test_dimension_floor_is_one() {
        let mut rng = GameRng::new(4);
        let corridor = CorridorEndpoint::new(Direction::North, 3, 10);
        let room = Room::anchored(
            IntRange::exactly(3),
            IntRange::exactly(5),
            Board::new(10, 10),
            &corridor,
            &mut rng,
        );
        assert_eq!(room.height(), 1);
    }

    #[test]
    fn test_corridor_at_board_origin_edges() {
        let board = Board::new(10, 10);
        let mut rng = GameRng::new(5);

        let corridor = CorridorEndpoint::new(Direction::South, 4, 0);
        let (width, height) = (IntRange::exactly(3), IntRange::exactly(6));
        let room = Room::anchored(width, height, board, &corridor, &mut rng);
        assert_eq!((room.height(), room.y()), (1, 0));
        assert!(room.fits(board));
        assert!(room.contains(4, 0));

        let corridor = CorridorEndpoint::new(Direction::West, 0, 4);
        let (width, height) = (IntRange::exactly(6), IntRange::exactly(3));
        let room = Room::anchored(width, height, board, &corridor, &mut rng);
        assert_eq!((room.width(), room.x()), (1, 0));
        assert!(room.fits(board));
        assert!(room.contains(0, 4));
    }

    #[test]
    fn test_clamp_floor() {
        assert_eq!(clamp_floor(5, 1, 10), 5);
        assert_eq!(clamp_floor(12, 1, 10), 10);
        assert_eq!(clamp_floor(-2, 0, 10), 0);
        assert_eq!(clamp_floor(5, 1, 0), 1);
    }

    #[test]
    fn test_content_at_board_coordinates() {
        let room = Room::bootstrap(Board::new(10, 10));
        assert_eq!(room.content_at(4, 4), Some(TILE_EMPTY));
        assert_eq!(room.content_at(6, 6), Some(TILE_EMPTY));
        assert_eq!(room.content_at(7, 6), None);
        assert!(room.contains(5, 5));
        assert!(!room.contains(3, 5));
    }

    #[test]
    fn test_try_get_content() {
        let room = Room::bootstrap(Board::new(10, 10));
        assert_eq!(room.try_get_content(1, 1), Ok(TILE_EMPTY));
        assert!(room.try_get_content(3, 1).is_err());
    }
}
