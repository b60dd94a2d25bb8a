#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};

use crate::{
    common::{Coordinate, GameError},
    game::{Game, GuessReport},
    session::{Command, Controller},
    view::{attack_grid, outcome_message_with, own_grid, status_message, CellMark, GridView},
};

/// Columns are labelled with letters, so grids wider than the alphabet cannot
/// be addressed from the terminal.
pub const MAX_CLI_GRID_SIZE: usize = 26;

/// Terminal frontend: prints both grids and reads commands line by line.
pub struct CliController<R, W> {
    input: R,
    output: W,
}

impl CliController<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliController<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn print_grid(&mut self, grid: &GridView) -> io::Result<()> {
        let rule = "═".repeat(2 * grid.size() + 4);
        writeln!(self.output, "    ╔{}╗", rule)?;
        write!(self.output, "    ║   ")?;
        for c in 0..grid.size() {
            write!(self.output, " {}", column_label(c))?;
        }
        writeln!(self.output, " ║")?;
        writeln!(self.output, "    ╠{}╣", rule)?;
        for (r, row) in grid.rows().enumerate() {
            write!(self.output, "    ║ {:2}", r + 1)?;
            for mark in row {
                write!(self.output, " {}", mark_char(*mark))?;
            }
            writeln!(self.output, " ║")?;
        }
        writeln!(self.output, "    ╚{}╝", rule)?;
        Ok(())
    }

    fn render(&mut self, game: &Game) -> io::Result<()> {
        let player = game.turn();
        writeln!(self.output)?;
        writeln!(self.output, "{}", status_message(game))?;
        writeln!(self.output, "Opponent waters:")?;
        self.print_grid(&attack_grid(game))?;
        writeln!(self.output, "\n{}'s fleet:", player)?;
        self.print_grid(&own_grid(game))?;
        writeln!(self.output, "    Legend: S=Ship  X=Hit  o=Miss  .=Water  ?=Unknown")?;
        Ok(())
    }

    /// Print one line of feedback. The session keeps going if the sink fails.
    fn say(&mut self, text: &str) {
        if let Err(e) = writeln!(self.output, "{}", text) {
            log::warn!("failed to write to terminal: {}", e);
        }
    }
}

impl<R: BufRead, W: Write> Controller for CliController<R, W> {
    fn next_command(&mut self, game: &Game) -> anyhow::Result<Command> {
        let size = game.grid_size();
        check_width(size)?;
        loop {
            write!(
                self.output,
                "Enter guess (A1-{}), 'restart' or 'quit': ",
                coord_to_string(Coordinate::new(size - 1, size - 1))
            )?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(Command::Quit);
            }
            match parse_command(line.trim(), size) {
                Ok(cmd) => return Ok(cmd),
                Err(msg) => writeln!(self.output, "Invalid input: {}", msg)?,
            }
        }
    }

    fn show(&mut self, game: &Game) {
        if let Err(e) = check_width(game.grid_size()) {
            log::warn!("not drawing board: {}", e);
            return;
        }
        if let Err(e) = self.render(game) {
            log::warn!("failed to draw board: {}", e);
        }
    }

    fn report(&mut self, report: &GuessReport) {
        let text = outcome_message_with(report, coord_to_string)
            .unwrap_or_else(|| format!("{} was already guessed", coord_to_string(report.coordinate)));
        self.say(&text);
    }

    fn reject(&mut self, error: &GameError) {
        self.say(&format!("Error: {}", error));
    }
}

fn check_width(grid_size: usize) -> anyhow::Result<()> {
    if grid_size > MAX_CLI_GRID_SIZE {
        anyhow::bail!(
            "grid size {} is too wide for the terminal (max {})",
            grid_size,
            MAX_CLI_GRID_SIZE
        );
    }
    Ok(())
}

/// Letter for a column, or `?` past `Z`.
fn column_label(col: usize) -> char {
    (b'A'..=b'Z').nth(col).map(char::from).unwrap_or('?')
}

fn mark_char(mark: CellMark) -> char {
    match mark {
        CellMark::Unknown => '?',
        CellMark::Water => '.',
        CellMark::Ship => 'S',
        CellMark::Hit => 'X',
        CellMark::Miss => 'o',
    }
}

/// Format a coordinate the way players type it, e.g. `C4`.
pub fn coord_to_string(coord: Coordinate) -> String {
    format!("{}{}", column_label(coord.col), coord.row + 1)
}

/// Parse a cell like `B3` (column letter, one-based row) on a `grid_size` grid.
pub fn parse_coord(input: &str, grid_size: usize) -> Result<Coordinate, String> {
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter", col_ch));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= grid_size {
        return Err(format!(
            "Column '{}' out of bounds - must be A-{}",
            col_ch,
            column_label(grid_size.saturating_sub(1))
        ));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .trim()
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, grid_size))?;
    if row == 0 || row > grid_size {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, grid_size));
    }
    Ok(Coordinate::new(col, row - 1))
}

/// Parse one line of player input.
pub fn parse_command(input: &str, grid_size: usize) -> Result<Command, String> {
    match input.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "r" | "restart" => Ok(Command::Restart),
        _ => parse_coord(input, grid_size).map(Command::Guess),
    }
}
