use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{
    board::{BoardState, Fleet},
    common::{Coordinate, GameError},
    config::GameConfig,
    player::Player,
    ship::Ship,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// Waiting on the given player's guess.
    InProgress(Player),
    /// Terminal until `restart`.
    Won(Player),
}

/// What a single guess did.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessOutcome {
    /// The cell was guessed before. Nothing changed.
    AlreadyGuessed,
    /// Empty water. The turn passes.
    Miss,
    /// Struck a ship that is still afloat.
    Hit,
    /// Struck and sank this ship; the opponent still has ships.
    Sunk(Ship),
    /// Struck and sank this ship, which was the opponent's last.
    Win { winner: Player, ship: Ship },
}

impl GuessOutcome {
    /// Returns `true` if the guess left the game untouched.
    pub fn is_noop(&self) -> bool {
        matches!(self, GuessOutcome::AlreadyGuessed)
    }

    /// Returns `true` for every outcome that struck a ship.
    pub fn is_hit(&self) -> bool {
        matches!(
            self,
            GuessOutcome::Hit | GuessOutcome::Sunk(_) | GuessOutcome::Win { .. }
        )
    }

    /// The ship sunk by this guess, including the final ship of a win.
    pub fn sunk_ship(&self) -> Option<&Ship> {
        match self {
            GuessOutcome::Sunk(ship) | GuessOutcome::Win { ship, .. } => Some(ship),
            _ => None,
        }
    }
}

/// Result of [`Game::submit_guess`], for the frontend to render.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GuessReport {
    /// Who made the guess.
    pub player: Player,
    pub coordinate: Coordinate,
    pub outcome: GuessOutcome,
    /// Status after the guess was applied.
    pub status: GameStatus,
}

/// Serializable snapshot of everything a renderer reads.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub config: GameConfig,
    pub status: GameStatus,
    /// Indexed by [`Player::index`].
    pub fleets: [Fleet; 2],
    /// Opponent guesses against each player's waters, indexed by owner.
    pub boards: [BoardState; 2],
}

/// Hot-seat game: two fleets, their hit/miss sets, and whose turn it is.
///
/// All mutation goes through [`Game::submit_guess`] and [`Game::restart`].
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    rng: SmallRng,
    fleets: [Fleet; 2],
    boards: [BoardState; 2],
    status: GameStatus,
}

impl Game {
    /// Start a game seeded from the thread RNG.
    #[cfg(feature = "std")]
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let mut seed_rng = rand::rng();
        Self::with_rng(config, SmallRng::from_rng(&mut seed_rng))
    }

    /// Start a reproducible game.
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }

    /// Start a game drawing fleets (now and on every restart) from `rng`.
    pub fn with_rng(config: GameConfig, mut rng: SmallRng) -> Result<Self, GameError> {
        config.validate()?;
        let fleets = Self::generate_fleets(&config, &mut rng)?;
        Ok(Self::assemble(config, rng, fleets))
    }

    /// Start a game with fixed fleets. `rng` is only used by `restart`.
    ///
    /// Each fleet must match the configured grid size and ship lengths.
    pub fn from_fleets(
        config: GameConfig,
        fleets: [Fleet; 2],
        rng: SmallRng,
    ) -> Result<Self, GameError> {
        config.validate()?;
        for fleet in &fleets {
            if fleet.grid_size() != config.grid_size()
                || !fleet.ship_lengths().eq(config.ship_lengths().iter().copied())
            {
                return Err(GameError::FleetMismatch);
            }
        }
        Ok(Self::assemble(config, rng, fleets))
    }

    fn assemble(config: GameConfig, rng: SmallRng, fleets: [Fleet; 2]) -> Self {
        Self {
            config,
            rng,
            fleets,
            boards: [BoardState::new(), BoardState::new()],
            status: GameStatus::InProgress(Player::One),
        }
    }

    fn generate_fleets(config: &GameConfig, rng: &mut SmallRng) -> Result<[Fleet; 2], GameError> {
        let first = Fleet::generate(config.grid_size(), config.ship_lengths(), rng)?;
        let second = Fleet::generate(config.grid_size(), config.ship_lengths(), rng)?;
        Ok([first, second])
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid_size(&self) -> usize {
        self.config.grid_size()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The player to move, or the winner once the game is over.
    pub fn turn(&self) -> Player {
        match self.status {
            GameStatus::InProgress(p) | GameStatus::Won(p) => p,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(p) => Some(p),
            GameStatus::InProgress(_) => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Ships owned by `player`.
    pub fn fleet(&self, player: Player) -> &Fleet {
        &self.fleets[player.index()]
    }

    /// Opponent guesses recorded against `player`'s waters.
    pub fn board(&self, player: Player) -> &BoardState {
        &self.boards[player.index()]
    }

    /// Resolve a guess by the player whose turn it is against the opponent.
    ///
    /// Out-of-range coordinates and guesses after a win are rejected without
    /// touching any state. A repeated guess yields
    /// [`GuessOutcome::AlreadyGuessed`] and is likewise a no-op. Hits keep
    /// the turn; misses pass it.
    pub fn submit_guess(&mut self, coord: Coordinate) -> Result<GuessReport, GameError> {
        let grid_size = self.config.grid_size();
        if !coord.in_bounds(grid_size) {
            return Err(GameError::InvalidCoordinate { coord, grid_size });
        }
        let player = match self.status {
            GameStatus::InProgress(p) => p,
            GameStatus::Won(winner) => return Err(GameError::GameOver { winner }),
        };
        let target = player.opponent().index();

        let outcome = if self.boards[target].is_guessed(coord) {
            GuessOutcome::AlreadyGuessed
        } else if let Some((_, ship)) = self.fleets[target].ship_at(coord) {
            self.boards[target].record_hit(coord);
            let board = &self.boards[target];
            if self.fleets[target].all_sunk(board) {
                GuessOutcome::Win {
                    winner: player,
                    ship: ship.clone(),
                }
            } else if ship.is_sunk(board.hits()) {
                GuessOutcome::Sunk(ship.clone())
            } else {
                GuessOutcome::Hit
            }
        } else {
            self.boards[target].record_miss(coord);
            GuessOutcome::Miss
        };

        match &outcome {
            GuessOutcome::Miss => self.status = GameStatus::InProgress(player.opponent()),
            GuessOutcome::Win { winner, .. } => {
                info!("{} wins after {} guesses", winner, self.boards[target].guess_count());
                self.status = GameStatus::Won(*winner);
            }
            GuessOutcome::Sunk(ship) => {
                info!("{} sank a ship of length {}", player, ship.len());
            }
            GuessOutcome::AlreadyGuessed | GuessOutcome::Hit => {}
        }
        debug!("{} guessed {} -> {:?}", player, coord, outcome);

        Ok(GuessReport {
            player,
            coordinate: coord,
            outcome,
            status: self.status,
        })
    }

    /// Discard the current round and deal fresh fleets.
    ///
    /// Both fleets are generated before anything is replaced, so on error the
    /// current game is left as it was.
    pub fn restart(&mut self) -> Result<(), GameError> {
        let fleets = Self::generate_fleets(&self.config, &mut self.rng)?;
        self.fleets = fleets;
        self.boards = [BoardState::new(), BoardState::new()];
        self.status = GameStatus::InProgress(Player::One);
        info!("game restarted");
        Ok(())
    }

    /// Snapshot the current state.
    pub fn state(&self) -> GameState {
        GameState {
            config: self.config.clone(),
            status: self.status,
            fleets: self.fleets.clone(),
            boards: self.boards.clone(),
        }
    }
}
