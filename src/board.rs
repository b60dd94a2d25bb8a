//! Fleets, random fleet generation, and per-player hit/miss tracking.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use log::{trace, warn};
use rand::Rng;

use crate::common::{Coordinate, GameError};
use crate::config::{check_fleet_fits, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Ship};

/// Opponent guesses against one player's waters.
///
/// `hits` and `misses` are disjoint and inserting an existing entry is a
/// no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    hits: BTreeSet<Coordinate>,
    misses: BTreeSet<Coordinate>,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hits(&self) -> &BTreeSet<Coordinate> {
        &self.hits
    }

    pub fn misses(&self) -> &BTreeSet<Coordinate> {
        &self.misses
    }

    /// Returns `true` if the cell has already been guessed.
    pub fn is_guessed(&self, coord: Coordinate) -> bool {
        self.hits.contains(&coord) || self.misses.contains(&coord)
    }

    /// Total number of distinct guesses recorded.
    pub fn guess_count(&self) -> usize {
        self.hits.len() + self.misses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty() && self.misses.is_empty()
    }

    /// Record a hit. Returns `false` if the cell was already guessed.
    pub(crate) fn record_hit(&mut self, coord: Coordinate) -> bool {
        !self.misses.contains(&coord) && self.hits.insert(coord)
    }

    /// Record a miss. Returns `false` if the cell was already guessed.
    pub(crate) fn record_miss(&mut self, coord: Coordinate) -> bool {
        !self.hits.contains(&coord) && self.misses.insert(coord)
    }
}

/// All ships belonging to one player for one round.
///
/// Every cell lies in the grid and no two ships share a cell.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Fleet {
    grid_size: usize,
    ships: Vec<Ship>,
}

impl Fleet {
    /// Assemble a fleet from already-built ships, checking bounds and overlap.
    pub fn from_ships(grid_size: usize, ships: Vec<Ship>) -> Result<Self, GameError> {
        let mut claimed = BTreeSet::new();
        for ship in &ships {
            for &cell in ship.cells() {
                if !cell.in_bounds(grid_size) {
                    return Err(GameError::ShipOutOfBounds);
                }
                if !claimed.insert(cell) {
                    return Err(GameError::ShipOverlaps);
                }
            }
        }
        Ok(Self { grid_size, ships })
    }

    /// Randomly place one ship per entry of `ship_lengths`, in order.
    ///
    /// The configuration is checked up front so impossible fleets fail with
    /// [`GameError::Config`] instead of sampling forever. Each ship then gets
    /// [`MAX_PLACEMENT_ATTEMPTS`] tries.
    pub fn generate<R: Rng>(
        grid_size: usize,
        ship_lengths: &[usize],
        rng: &mut R,
    ) -> Result<Self, GameError> {
        check_fleet_fits(grid_size, ship_lengths)?;
        let mut claimed = BTreeSet::new();
        let mut ships = Vec::with_capacity(ship_lengths.len());
        for &length in ship_lengths {
            let ship = random_placement(rng, grid_size, length, &claimed)?;
            claimed.extend(ship.cells().iter().copied());
            ships.push(ship);
        }
        Ok(Self { grid_size, ships })
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Ship lengths in fleet order.
    pub fn ship_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.ships.iter().map(Ship::len)
    }

    /// The ship occupying `coord`, with its index in the fleet.
    pub fn ship_at(&self, coord: Coordinate) -> Option<(usize, &Ship)> {
        self.ships.iter().enumerate().find(|(_, s)| s.contains(coord))
    }

    pub fn occupies(&self, coord: Coordinate) -> bool {
        self.ship_at(coord).is_some()
    }

    /// Iterate over every occupied cell.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.ships.iter().flat_map(|s| s.cells().iter().copied())
    }

    /// Ships not yet sunk by `board`'s hits.
    pub fn ships_afloat(&self, board: &BoardState) -> usize {
        self.ships
            .iter()
            .filter(|s| !s.is_sunk(board.hits()))
            .count()
    }

    /// Returns `true` when every ship is sunk.
    pub fn all_sunk(&self, board: &BoardState) -> bool {
        self.ships.iter().all(|s| s.is_sunk(board.hits()))
    }
}

/// Convenience wrapper around [`Fleet::generate`].
pub fn generate_fleet<R: Rng>(
    grid_size: usize,
    ship_lengths: &[usize],
    rng: &mut R,
) -> Result<Fleet, GameError> {
    Fleet::generate(grid_size, ship_lengths, rng)
}

/// Sample a ship of `length` that fits the grid and avoids `claimed`.
pub fn random_placement<R: Rng>(
    rng: &mut R,
    grid_size: usize,
    length: usize,
    claimed: &BTreeSet<Coordinate>,
) -> Result<Ship, GameError> {
    if length == 0 || length > grid_size {
        return Err(GameError::UnableToPlaceShip {
            length,
            attempts: 0,
        });
    }
    for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
        let orient = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let max_c = if orient == Orientation::Horizontal {
            grid_size - length
        } else {
            grid_size - 1
        };
        let max_r = if orient == Orientation::Vertical {
            grid_size - length
        } else {
            grid_size - 1
        };
        let anchor = Coordinate::new(rng.random_range(0..=max_c), rng.random_range(0..=max_r));
        let ship = Ship::new(anchor, orient, length, grid_size)?;
        if ship.cells().iter().any(|c| claimed.contains(c)) {
            trace!(
                "placement attempt {} for length {} at {} collided",
                attempt,
                length,
                anchor
            );
            continue;
        }
        return Ok(ship);
    }
    warn!(
        "gave up placing ship of length {} after {} attempts",
        length, MAX_PLACEMENT_ATTEMPTS
    );
    Err(GameError::UnableToPlaceShip {
        length,
        attempts: MAX_PLACEMENT_ATTEMPTS,
    })
}
