use serde::{Deserialize, Serialize};

pub use board::*;
pub use cascade::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use snapshot::*;
pub use types::*;

mod board;
mod cascade;
mod cell;
mod error;
mod generator;
mod session;
mod snapshot;
mod types;

/// Board dimensions and mine count of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    /// Smallest supported board side.
    pub const MIN_SIDE: Coord = 2;
    /// Largest supported board side.
    pub const MAX_SIDE: Coord = 15;
    /// Board used whenever the requested configuration is rejected.
    pub const DEFAULT: Self = Self::new_unchecked(6, 6, 4);

    pub const fn new_unchecked(width: Coord, height: Coord, mines: CellCount) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    /// Checks raw user input. Size is checked first, the mine count only
    /// once the size is known to be valid.
    pub fn validate(width: u32, height: u32, mines: u32) -> Result<Self> {
        let (width, height) = Self::validate_size(width, height)?;
        let mines = Self::validate_mine_count(width, height, mines)?;
        Ok(Self::new_unchecked(width, height, mines))
    }

    /// Checks both sides against `MIN_SIDE..=MAX_SIDE`.
    pub fn validate_size(width: u32, height: u32) -> Result<(Coord, Coord)> {
        if Self::side_in_range(width) && Self::side_in_range(height) {
            // both sides fit in a `Coord` once in range
            Ok((width as Coord, height as Coord))
        } else {
            Err(ConfigError::InvalidSize { width, height })
        }
    }

    /// Checks that `mines` fits on a `width` by `height` board.
    pub fn validate_mine_count(width: Coord, height: Coord, mines: u32) -> Result<CellCount> {
        let capacity = mult(width, height);
        match CellCount::try_from(mines) {
            Ok(mines) if mines <= capacity => Ok(mines),
            _ => Err(ConfigError::InvalidMineCount {
                mines,
                capacity: capacity.into(),
            }),
        }
    }

    pub const fn side_in_range(side: u32) -> bool {
        side >= Self::MIN_SIDE as u32 && side <= Self::MAX_SIDE as u32
    }

    /// Size as `(height, width)`, the shape of the cell grid.
    pub const fn size(&self) -> Coord2 {
        (self.height, self.width)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_bounds() {
        assert_eq!(GameConfig::validate(2, 2, 0), Ok(GameConfig::new_unchecked(2, 2, 0)));
        assert_eq!(
            GameConfig::validate(15, 15, 225),
            Ok(GameConfig::new_unchecked(15, 15, 225))
        );
    }

    #[test]
    fn validate_rejects_size_before_mines() {
        assert_eq!(
            GameConfig::validate(1, 20, 999),
            Err(ConfigError::InvalidSize {
                width: 1,
                height: 20
            })
        );
        assert_eq!(
            GameConfig::validate(16, 5, 3),
            Err(ConfigError::InvalidSize {
                width: 16,
                height: 5
            })
        );
    }

    #[test]
    fn validate_rejects_too_many_mines() {
        assert_eq!(
            GameConfig::validate(5, 5, 26),
            Err(ConfigError::InvalidMineCount {
                mines: 26,
                capacity: 25
            })
        );
        assert!(GameConfig::validate(3, 3, u32::MAX).is_err());
    }

    #[test]
    fn default_is_six_by_six_with_four_mines() {
        let config = GameConfig::default();

        assert_eq!((config.width, config.height, config.mines), (6, 6, 4));
        assert_eq!(config.total_cells(), 36);
    }

    #[test]
    fn config_deserializes_from_json() {
        let config: GameConfig =
            serde_json::from_str(r#"{"width": 8, "height": 5, "mines": 12}"#).unwrap();

        assert_eq!(config, GameConfig::new_unchecked(8, 5, 12));
        assert_eq!(config.size(), (5, 8));
    }
}
