//! Ships: straight runs of grid cells.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::common::{Coordinate, GameError};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Cells share a row; columns increase.
    Horizontal,
    /// Cells share a column; rows increase.
    Vertical,
}

impl Orientation {
    /// The `i`-th cell of a run starting at `anchor`.
    fn step(self, anchor: Coordinate, i: usize) -> Coordinate {
        match self {
            Orientation::Horizontal => Coordinate::new(anchor.col + i, anchor.row),
            Orientation::Vertical => Coordinate::new(anchor.col, anchor.row + i),
        }
    }
}

/// A placed ship. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    orientation: Orientation,
    cells: Vec<Coordinate>,
}

impl Ship {
    /// Place a ship of `length` cells starting at `anchor` and extending along
    /// `orientation`. Fails if any cell would leave a `grid_size` grid.
    pub fn new(
        anchor: Coordinate,
        orientation: Orientation,
        length: usize,
        grid_size: usize,
    ) -> Result<Self, GameError> {
        if length == 0 {
            return Err(GameError::EmptyShip);
        }
        let (start, span) = match orientation {
            Orientation::Horizontal => (anchor.col, anchor.row),
            Orientation::Vertical => (anchor.row, anchor.col),
        };
        if span >= grid_size || start + length > grid_size {
            return Err(GameError::ShipOutOfBounds);
        }
        let cells = (0..length).map(|i| orientation.step(anchor, i)).collect();
        Ok(Self { orientation, cells })
    }

    /// Build a ship from explicit cells, e.g. `[(0,0), (1,0), (2,0)]`.
    ///
    /// Cells must be listed in increasing order along one axis with no gaps.
    /// Single-cell ships are treated as horizontal.
    pub fn from_cells(cells: Vec<Coordinate>, grid_size: usize) -> Result<Self, GameError> {
        let anchor = *cells.first().ok_or(GameError::EmptyShip)?;
        let orientation = match cells.get(1) {
            Some(next) if next.row == anchor.row => Orientation::Horizontal,
            Some(next) if next.col == anchor.col => Orientation::Vertical,
            Some(_) => return Err(GameError::ShipNotStraight),
            None => Orientation::Horizontal,
        };
        let straight = cells
            .iter()
            .enumerate()
            .all(|(i, &c)| c == orientation.step(anchor, i));
        if !straight {
            return Err(GameError::ShipNotStraight);
        }
        if cells.iter().any(|c| !c.in_bounds(grid_size)) {
            return Err(GameError::ShipOutOfBounds);
        }
        Ok(Self { orientation, cells })
    }

    /// Occupied cells, starting from the anchor.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    pub fn anchor(&self) -> Coordinate {
        self.cells[0]
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: ships have at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells.contains(&coord)
    }

    /// Number of this ship's cells present in `hits`.
    pub fn hits_taken(&self, hits: &BTreeSet<Coordinate>) -> usize {
        self.cells.iter().filter(|c| hits.contains(c)).count()
    }

    /// A ship is sunk once every one of its cells has been hit.
    pub fn is_sunk(&self, hits: &BTreeSet<Coordinate>) -> bool {
        self.cells.iter().all(|c| hits.contains(c))
    }
}
