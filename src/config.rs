use alloc::vec::Vec;

use crate::common::ConfigError;

pub const DEFAULT_GRID_SIZE: usize = 7;
pub const DEFAULT_SHIP_LENGTHS: [usize; 3] = [3, 2, 2];

/// Pixels per grid cell on the click surface.
pub const CELL_SIZE: usize = 40;

/// Random placement attempts allowed per ship before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Grid size and fleet composition shared by both players.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    grid_size: usize,
    ship_lengths: Vec<usize>,
}

impl GameConfig {
    /// Build a validated configuration.
    pub fn new(grid_size: usize, ship_lengths: Vec<usize>) -> Result<Self, ConfigError> {
        check_fleet_fits(grid_size, &ship_lengths)?;
        Ok(Self {
            grid_size,
            ship_lengths,
        })
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Ship lengths in placement order.
    pub fn ship_lengths(&self) -> &[usize] {
        &self.ship_lengths
    }

    /// Total number of ship segments per fleet.
    pub fn total_ship_cells(&self) -> usize {
        self.ship_lengths.iter().sum()
    }

    /// Re-check the configuration. Always `Ok` for values built through `new`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_fleet_fits(self.grid_size, &self.ship_lengths)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            ship_lengths: DEFAULT_SHIP_LENGTHS.to_vec(),
        }
    }
}

/// Fail fast on fleets that can never be placed on a `grid_size` square grid.
///
/// Passing this check does not guarantee random placement succeeds: a dense
/// fleet can still paint itself into a corner, which placement reports
/// separately once its attempt budget runs out.
pub fn check_fleet_fits(grid_size: usize, ship_lengths: &[usize]) -> Result<(), ConfigError> {
    if grid_size == 0 {
        return Err(ConfigError::EmptyGrid);
    }
    if ship_lengths.is_empty() {
        return Err(ConfigError::NoShips);
    }
    for (index, &length) in ship_lengths.iter().enumerate() {
        if length == 0 {
            return Err(ConfigError::ZeroLengthShip { index });
        }
        if length > grid_size {
            return Err(ConfigError::ShipTooLong { length, grid_size });
        }
    }
    let cells: usize = ship_lengths.iter().sum();
    let capacity = grid_size.saturating_mul(grid_size);
    if cells > capacity {
        return Err(ConfigError::FleetTooLarge { cells, capacity });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size(), 7);
        assert_eq!(config.ship_lengths(), &[3, 2, 2]);
        assert_eq!(config.total_ship_cells(), 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_ship_longer_than_grid() {
        assert_eq!(
            GameConfig::new(4, vec![5]),
            Err(ConfigError::ShipTooLong {
                length: 5,
                grid_size: 4
            })
        );
    }

    #[test]
    fn rejects_degenerate_configs() {
        assert_eq!(GameConfig::new(0, vec![1]), Err(ConfigError::EmptyGrid));
        assert_eq!(GameConfig::new(5, vec![]), Err(ConfigError::NoShips));
        assert_eq!(
            GameConfig::new(5, vec![2, 0]),
            Err(ConfigError::ZeroLengthShip { index: 1 })
        );
        assert_eq!(
            GameConfig::new(2, vec![2, 2, 1]),
            Err(ConfigError::FleetTooLarge {
                cells: 5,
                capacity: 4
            })
        );
    }

    #[test]
    fn full_grid_is_allowed() {
        assert!(GameConfig::new(2, vec![2, 2]).is_ok());
    }
}
