#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use anyhow::{bail, Context};
#[cfg(feature = "std")]
use battleship_hotseat::{
    init_logging, run_session, CliController, Game, GameConfig, Player, DEFAULT_GRID_SIZE,
    DEFAULT_SHIP_LENGTHS, MAX_CLI_GRID_SIZE,
};
#[cfg(feature = "std")]
use clap::Parser;

/// Two players, one terminal: sink the other side's fleet first.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Width and height of each player's grid.
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    size: usize,
    /// Ship lengths, placed in this order.
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SHIP_LENGTHS)]
    ships: Vec<usize>,
    #[arg(long, help = "Fix RNG seed for reproducible fleets (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if cli.size > MAX_CLI_GRID_SIZE {
        bail!(
            "grid size {} is too wide for the terminal (max {})",
            cli.size,
            MAX_CLI_GRID_SIZE
        );
    }
    let config = GameConfig::new(cli.size, cli.ships).context("invalid game configuration")?;

    let mut game = match cli.seed {
        Some(seed) => {
            println!("Using fixed seed: {} (fleets will be reproducible)", seed);
            Game::seeded(config, seed)
        }
        None => Game::new(config),
    }
    .context("failed to set up the game")?;

    println!("Hot-seat Battleship. Take turns at the keyboard; a hit earns another shot.");
    let mut controller = CliController::stdio();
    let summary = run_session(&mut game, &mut controller)?;

    println!(
        "\nThanks for playing! {} guesses ({} hits), {} restarts.",
        summary.guesses, summary.hits, summary.restarts
    );
    for player in Player::ALL {
        println!("{}: {} win(s)", player, summary.wins[player.index()]);
    }
    Ok(())
}
