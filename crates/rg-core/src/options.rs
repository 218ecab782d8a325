//! Generation options
//!
//! Board extents, room dimension ranges and the RNG seed, loadable from a
//! JSON options file. Missing fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dungeon::{Board, IntRange};
use crate::error::RoomError;
use crate::rng::GameRng;

/// User-configurable generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenOptions {
    /// Fixed seed; a fresh one is drawn when absent
    pub seed: Option<u64>,
    pub columns: i32,
    pub rows: i32,
    pub room_width: IntRange,
    pub room_height: IntRange,
}

impl Default for GenOptions {
    fn default() -> Self {
        Self {
            seed: None,
            columns: 40,
            rows: 40,
            room_width: IntRange::new(3, 10),
            room_height: IntRange::new(3, 10),
        }
    }
}

impl GenOptions {
    /// Load options from a file
    pub fn load_from_file(path: &Path) -> Result<Self, RoomError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| RoomError::Options(format!("{}: {}", path.display(), e)))?;

        Self::parse_config(&contents)
    }

    /// Parse options from a JSON string
    pub fn parse_config(contents: &str) -> Result<Self, RoomError> {
        serde_json::from_str(contents).map_err(|e| RoomError::Options(e.to_string()))
    }

    /// Check that the board is non-empty and both ranges yield positive
    /// sizes no larger than the board
    pub fn validate(&self) -> Result<(), RoomError> {
        if self.columns <= 0 || self.rows <= 0 {
            return Err(RoomError::InvalidBoard {
                columns: self.columns,
                rows: self.rows,
            });
        }
        for (range, extent) in [(self.room_width, self.columns), (self.room_height, self.rows)] {
            range.validate()?;
            if range.max > extent {
                return Err(RoomError::RangeExceedsBoard {
                    max: range.max,
                    extent,
                });
            }
        }
        Ok(())
    }

    pub fn board(&self) -> Board {
        Board::new(self.columns, self.rows)
    }

    /// RNG for this run, seeded from `seed` when set
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let options = GenOptions::default();
        assert!(options.validate().is_ok());
        assert_eq!(options.board(), Board::new(40, 40));
    }

    #[test]
    fn test_parse_partial_config() {
        let options = GenOptions::parse_config(r#"{"seed": 7, "columns": 25}"#).unwrap();
        assert_eq!(options.seed, Some(7));
        assert_eq!(options.columns, 25);
        assert_eq!(options.rows, 40);
        assert_eq!(options.rng().seed(), 7);
    }

    #[test]
    fn test_parse_ranges() {
        let options = GenOptions::parse_config(
            r#"{"room_width": {"min": 2, "max": 4}, "room_height": {"min": 5, "max": 5}}"#,
        )
        .unwrap();
        assert_eq!(options.room_width, IntRange::new(2, 4));
        assert_eq!(options.room_height, IntRange::exactly(5));
    }

    #[test]
    fn test_parse_error() {
        let err = GenOptions::parse_config("{columns: }").unwrap_err();
        assert!(matches!(err, RoomError::Options(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let options = GenOptions {
            rows: 0,
            ..GenOptions::default()
        };
        assert_eq!(
            options.validate(),
            Err(RoomError::InvalidBoard {
                columns: 40,
                rows: 0
            })
        );

        let options = GenOptions {
            room_height: IntRange::new(6, 2),
            ..GenOptions::default()
        };
        assert_eq!(
            options.validate(),
            Err(RoomError::InvalidRange { min: 6, max: 2 })
        );
    }

    #[test]
    fn test_validate_rejects_rooms_wider_than_board() {
        let options = GenOptions {
            columns: 5,
            rows: 5,
            room_width: IntRange::exactly(8),
            room_height: IntRange::new(2, 3),
            ..GenOptions::default()
        };
        assert_eq!(
            options.validate(),
            Err(RoomError::RangeExceedsBoard { max: 8, extent: 5 })
        );

        let options = GenOptions {
            rows: 6,
            room_height: IntRange::new(3, 7),
            ..GenOptions::default()
        };
        assert_eq!(
            options.validate(),
            Err(RoomError::RangeExceedsBoard { max: 7, extent: 6 })
        );

        let options = GenOptions {
            columns: 5,
            rows: 5,
            room_width: IntRange::exactly(5),
            room_height: IntRange::exactly(5),
            ..GenOptions::default()
        };
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_missing_file() {
        let err = GenOptions::load_from_file(Path::new("/nonexistent/roomgen.json")).unwrap_err();
        assert!(matches!(err, RoomError::Options(_)));
    }
}
