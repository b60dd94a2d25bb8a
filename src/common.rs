//! Common types for Battleship: grid coordinates and the error taxonomy.

use core::fmt;

use crate::player::Player;

/// A grid cell, addressed by column then row.
///
/// Coordinates are the universal key for ship placement, hits and misses, so
/// they compare, order and hash structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub col: usize,
    pub row: usize,
}

impl Coordinate {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Returns `true` when both axes lie in `[0, grid_size)`.
    pub fn in_bounds(&self, grid_size: usize) -> bool {
        self.col < grid_size && self.row < grid_size
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Interprets the tuple as `(col, row)`.
    fn from((col, row): (usize, usize)) -> Self {
        Self::new(col, row)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Reasons a game configuration can never produce a valid fleet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Grid size of zero.
    EmptyGrid,
    /// No ship lengths were given.
    NoShips,
    /// A ship was requested with length zero.
    ZeroLengthShip { index: usize },
    /// A ship is longer than the grid is wide.
    ShipTooLong { length: usize, grid_size: usize },
    /// The fleet needs more cells than the grid holds.
    FleetTooLarge { cells: usize, capacity: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyGrid => write!(f, "Grid size must be at least 1"),
            ConfigError::NoShips => write!(f, "Fleet must contain at least one ship"),
            ConfigError::ZeroLengthShip { index } => {
                write!(f, "Ship #{} has length 0", index)
            }
            ConfigError::ShipTooLong { length, grid_size } => write!(
                f,
                "Ship of length {} cannot fit on a {}x{} grid",
                length, grid_size, grid_size
            ),
            ConfigError::FleetTooLarge { cells, capacity } => write!(
                f,
                "Fleet needs {} cells but the grid only has {}",
                cells, capacity
            ),
        }
    }
}

/// Errors returned by fleet construction and game operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The configuration can never be satisfied.
    Config(ConfigError),
    /// Guess outside the grid.
    InvalidCoordinate { coord: Coordinate, grid_size: usize },
    /// Guess submitted after the game was won.
    GameOver { winner: Player },
    /// Random placement ran out of attempts for a ship.
    UnableToPlaceShip { length: usize, attempts: usize },
    /// A ship has no cells.
    EmptyShip,
    /// Ship cells leave the grid.
    ShipOutOfBounds,
    /// Ship cells are not a straight, gap-free run.
    ShipNotStraight,
    /// Two ships of one fleet share a cell.
    ShipOverlaps,
    /// Fleet ship lengths do not match the configured ship lengths.
    FleetMismatch,
}

impl GameError {
    /// Returns `true` for errors that abort game setup.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            GameError::Config(_) | GameError::UnableToPlaceShip { .. } | GameError::FleetMismatch
        )
    }
}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        GameError::Config(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Config(e) => write!(f, "Configuration error: {}", e),
            GameError::InvalidCoordinate { coord, grid_size } => write!(
                f,
                "Coordinate {} is outside the {}x{} grid",
                coord, grid_size, grid_size
            ),
            GameError::GameOver { winner } => write!(f, "Game is over, {} won", winner),
            GameError::UnableToPlaceShip { length, attempts } => write!(
                f,
                "Unable to place ship of length {} after {} attempts",
                length, attempts
            ),
            GameError::EmptyShip => write!(f, "Ship has no cells"),
            GameError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            GameError::ShipNotStraight => {
                write!(f, "Ship cells must form a straight contiguous line")
            }
            GameError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            GameError::FleetMismatch => {
                write!(f, "Fleet does not match the configured ship lengths")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Config(e) => Some(e),
            _ => None,
        }
    }
}
