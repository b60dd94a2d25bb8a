//! Read-only projections of a [`Game`] for drawing, plus click quantization.
//!
//! Nothing here mutates the game. A frontend calls these after every
//! `submit_guess` or `restart` and redraws from the result.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::{
    common::Coordinate,
    game::{Game, GameStatus, GuessOutcome, GuessReport},
    player::Player,
};

/// What to draw in one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMark {
    /// Not yet guessed; contents hidden.
    Unknown,
    /// Own board, no ship, not guessed.
    Water,
    /// Own board, ship segment not yet hit.
    Ship,
    Hit,
    Miss,
}

/// A square grid of marks, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    size: usize,
    cells: Vec<CellMark>,
}

impl GridView {
    fn filled(size: usize, mark: CellMark) -> Self {
        Self {
            size,
            cells: alloc::vec![mark; size * size],
        }
    }

    fn set(&mut self, coord: Coordinate, mark: CellMark) {
        if coord.in_bounds(self.size) {
            self.cells[coord.row * self.size + coord.col] = mark;
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, coord: Coordinate) -> Option<CellMark> {
        if coord.in_bounds(self.size) {
            Some(self.cells[coord.row * self.size + coord.col])
        } else {
            None
        }
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellMark]> + '_ {
        self.cells.chunks(self.size.max(1))
    }
}

/// `viewer`'s picture of the opponent's waters: only hits and misses show.
pub fn attack_grid_for(game: &Game, viewer: Player) -> GridView {
    let board = game.board(viewer.opponent());
    let mut grid = GridView::filled(game.grid_size(), CellMark::Unknown);
    for &c in board.hits() {
        grid.set(c, CellMark::Hit);
    }
    for &c in board.misses() {
        grid.set(c, CellMark::Miss);
    }
    grid
}

/// `owner`'s own board with ships revealed and the opponent's guesses overlaid.
pub fn own_grid_for(game: &Game, owner: Player) -> GridView {
    let board = game.board(owner);
    let mut grid = GridView::filled(game.grid_size(), CellMark::Water);
    for c in game.fleet(owner).cells() {
        grid.set(c, CellMark::Ship);
    }
    for &c in board.hits() {
        grid.set(c, CellMark::Hit);
    }
    for &c in board.misses() {
        grid.set(c, CellMark::Miss);
    }
    grid
}

/// The attack grid of the player whose turn it is.
pub fn attack_grid(game: &Game) -> GridView {
    attack_grid_for(game, game.turn())
}

/// The own board of the player whose turn it is.
pub fn own_grid(game: &Game) -> GridView {
    own_grid_for(game, game.turn())
}

/// Banner text for the current status.
pub fn status_message(game: &Game) -> String {
    match game.status() {
        GameStatus::InProgress(p) => format!("{}'s move", p),
        GameStatus::Won(p) => format!("{} wins!", p),
    }
}

/// Text for a guess result. A win takes precedence over the sink it includes.
pub fn outcome_message(report: &GuessReport) -> Option<String> {
    outcome_message_with(report, |coord| format!("{}", coord))
}

/// Like [`outcome_message`], with cells written by `label` (e.g. `A1`).
pub fn outcome_message_with<F>(report: &GuessReport, label: F) -> Option<String>
where
    F: Fn(Coordinate) -> String,
{
    let player = report.player;
    match &report.outcome {
        GuessOutcome::AlreadyGuessed => None,
        GuessOutcome::Miss => Some(format!("{} missed at {}", player, label(report.coordinate))),
        GuessOutcome::Hit => Some(format!("{} scored a hit at {}", player, label(report.coordinate))),
        GuessOutcome::Sunk(_) => Some(format!("{} sunk a ship!", player)),
        GuessOutcome::Win { winner, .. } => Some(format!("{} wins!", winner)),
    }
}

/// Map a click in pixels to the grid cell under it.
///
/// Returns `None` for clicks left of or above the grid, past its far edge, or
/// when `cell_size` is zero.
pub fn quantize_click(x: i64, y: i64, cell_size: usize, grid_size: usize) -> Option<Coordinate> {
    if x < 0 || y < 0 || cell_size == 0 {
        return None;
    }
    let coord = Coordinate::new(x as usize / cell_size, y as usize / cell_size);
    coord.in_bounds(grid_size).then_some(coord)
}
