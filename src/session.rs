//! Drives a [`Game`] from a frontend's input.
//!
//! A frontend implements [`Controller`]; [`run_session`] asks it for commands,
//! applies them to the game, and hands results back for display.

use log::{debug, warn};

use crate::{
    common::{Coordinate, GameError},
    game::{Game, GuessOutcome, GuessReport},
};

/// Everything a player can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Guess(Coordinate),
    Restart,
    Quit,
}

/// Interface implemented by frontends.
///
/// A controller is responsible for:
/// - Producing the next command for whoever's turn it is
/// - Showing the game after every change
/// - Showing guess results and rejected input
pub trait Controller {
    /// Choose the next command. Returning an error ends the session.
    fn next_command(&mut self, game: &Game) -> anyhow::Result<Command>;

    /// Redraw the game.
    fn show(&mut self, _game: &Game) {}

    /// Inform the frontend of a resolved guess.
    fn report(&mut self, _report: &GuessReport) {}

    /// Inform the frontend that input was rejected.
    fn reject(&mut self, _error: &GameError) {}
}

/// Tally of a finished session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Wins per player, indexed by [`crate::Player::index`].
    pub wins: [usize; 2],
    /// Guesses that changed the game.
    pub guesses: usize,
    /// Guesses that struck a ship, sinking and winning ones included.
    pub hits: usize,
    pub restarts: usize,
}

/// Run commands from `controller` against `game` until it asks to quit.
///
/// Invalid coordinates and guesses after a win are reported through
/// [`Controller::reject`] and the loop continues. A restart that cannot
/// generate fleets ends the session with that error.
pub fn run_session<C: Controller + ?Sized>(
    game: &mut Game,
    controller: &mut C,
) -> anyhow::Result<SessionSummary> {
    let mut summary = SessionSummary::default();
    loop {
        controller.show(game);
        match controller.next_command(game)? {
            Command::Guess(coord) => match game.submit_guess(coord) {
                Ok(report) => {
                    if !report.outcome.is_noop() {
                        summary.guesses += 1;
                    }
                    if report.outcome.is_hit() {
                        summary.hits += 1;
                    }
                    if let GuessOutcome::Win { winner, .. } = report.outcome {
                        summary.wins[winner.index()] += 1;
                    }
                    controller.report(&report);
                }
                Err(err @ (GameError::InvalidCoordinate { .. } | GameError::GameOver { .. })) => {
                    debug!("rejected guess at {}: {}", coord, err);
                    controller.reject(&err);
                }
                Err(err) => return Err(anyhow::anyhow!(err)),
            },
            Command::Restart => {
                game.restart().map_err(|e| {
                    warn!("restart failed: {}", e);
                    anyhow::anyhow!(e)
                })?;
                summary.restarts += 1;
            }
            Command::Quit => break,
        }
    }
    Ok(summary)
}
