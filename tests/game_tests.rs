use battleship_hotseat::{
    Coordinate, Fleet, Game, GameConfig, GameError, GameStatus, GuessOutcome, Player, Ship,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn ship(list: &[(usize, usize)]) -> Ship {
    let cells = list.iter().copied().map(Coordinate::from).collect();
    Ship::from_cells(cells, 7).unwrap()
}

/// Player one's ships sit along the bottom and right edges.
fn fleet_one() -> Fleet {
    Fleet::from_ships(
        7,
        vec![
            ship(&[(0, 6), (1, 6), (2, 6)]),
            ship(&[(6, 0), (6, 1)]),
            ship(&[(4, 2), (4, 3)]),
        ],
    )
    .unwrap()
}

/// Player two's ship A is horizontal at the top-left corner.
fn fleet_two() -> Fleet {
    Fleet::from_ships(
        7,
        vec![
            ship(&[(0, 0), (1, 0), (2, 0)]),
            ship(&[(0, 2), (0, 3)]),
            ship(&[(4, 4), (5, 4)]),
        ],
    )
    .unwrap()
}

fn fixed_game() -> Game {
    Game::from_fleets(
        GameConfig::default(),
        [fleet_one(), fleet_two()],
        SmallRng::seed_from_u64(0),
    )
    .unwrap()
}

fn c(col: usize, row: usize) -> Coordinate {
    Coordinate::new(col, row)
}

#[test]
fn test_initial_state() {
    let game = fixed_game();
    assert_eq!(game.status(), GameStatus::InProgress(Player::One));
    assert_eq!(game.turn(), Player::One);
    assert_eq!(game.winner(), None);
    for p in Player::ALL {
        assert!(game.board(p).is_empty());
    }
}

#[test]
fn test_hit_keeps_turn() {
    let mut game = fixed_game();
    let report = game.submit_guess(c(0, 0)).unwrap();
    assert_eq!(report.player, Player::One);
    assert_eq!(report.outcome, GuessOutcome::Hit);
    assert_eq!(report.status, GameStatus::InProgress(Player::One));
    assert!(game.board(Player::Two).hits().contains(&c(0, 0)));
    assert!(game.board(Player::One).is_empty());
}

#[test]
fn test_miss_passes_turn() {
    let mut game = fixed_game();
    let report = game.submit_guess(c(6, 6)).unwrap();
    assert_eq!(report.outcome, GuessOutcome::Miss);
    assert!(!report.outcome.is_hit());
    assert_eq!(game.turn(), Player::Two);
    assert!(game.board(Player::Two).misses().contains(&c(6, 6)));

    // Player two now fires at player one's waters.
    let report = game.submit_guess(c(0, 6)).unwrap();
    assert_eq!(report.player, Player::Two);
    assert_eq!(report.outcome, GuessOutcome::Hit);
    assert!(game.board(Player::One).hits().contains(&c(0, 6)));
    assert_eq!(game.turn(), Player::Two);
}

#[test]
fn test_three_length_ship_hit_hit_sunk() {
    let mut game = fixed_game();
    assert_eq!(game.submit_guess(c(0, 0)).unwrap().outcome, GuessOutcome::Hit);
    assert_eq!(game.submit_guess(c(1, 0)).unwrap().outcome, GuessOutcome::Hit);
    let report = game.submit_guess(c(2, 0)).unwrap();
    assert_eq!(report.outcome, GuessOutcome::Sunk(ship(&[(0, 0), (1, 0), (2, 0)])));
    assert!(report.outcome.is_hit());
    assert_eq!(game.turn(), Player::One);
    assert_eq!(game.fleet(Player::Two).ships_afloat(game.board(Player::Two)), 2);
}

#[test]
fn test_win_only_on_last_cell() {
    let mut game = fixed_game();
    let targets: Vec<Coordinate> = fleet_two().cells().collect();
    let (last, rest) = targets.split_last().unwrap();
    for &cell in rest {
        let report = game.submit_guess(cell).unwrap();
        assert!(
            !matches!(report.outcome, GuessOutcome::Win { .. }),
            "won early at {}",
            cell
        );
        assert!(!game.is_over());
    }
    let report = game.submit_guess(*last).unwrap();
    assert_eq!(
        report.outcome,
        GuessOutcome::Win {
            winner: Player::One,
            ship: ship(&[(4, 4), (5, 4)]),
        }
    );
    assert_eq!(report.outcome.sunk_ship().map(Ship::len), Some(2));
    assert_eq!(game.status(), GameStatus::Won(Player::One));
    assert_eq!(game.winner(), Some(Player::One));
}

#[test]
fn test_no_guess_after_win() {
    let mut game = fixed_game();
    for cell in fleet_two().cells().collect::<Vec<_>>() {
        game.submit_guess(cell).unwrap();
    }
    let before = game.state();
    assert_eq!(
        game.submit_guess(c(6, 6)),
        Err(GameError::GameOver {
            winner: Player::One
        })
    );
    assert_eq!(game.state(), before);
}

#[test]
fn test_repeated_guess_is_noop() {
    let mut game = fixed_game();
    game.submit_guess(c(0, 0)).unwrap();
    let before = game.state();
    let report = game.submit_guess(c(0, 0)).unwrap();
    assert_eq!(report.outcome, GuessOutcome::AlreadyGuessed);
    assert!(report.outcome.is_noop());
    assert_eq!(game.state(), before);

    // A repeated miss does not hand the turn over either.
    game.submit_guess(c(6, 6)).unwrap();
    assert_eq!(game.turn(), Player::Two);
    game.submit_guess(c(3, 3)).unwrap();
    assert_eq!(game.turn(), Player::One);
    let before = game.state();
    let report = game.submit_guess(c(6, 6)).unwrap();
    assert_eq!(report.outcome, GuessOutcome::AlreadyGuessed);
    assert_eq!(game.turn(), Player::One);
    assert_eq!(game.state(), before);
}

#[test]
fn test_out_of_range_guess_rejected() {
    let mut game = fixed_game();
    let before = game.state();
    assert_eq!(
        game.submit_guess(c(7, 0)),
        Err(GameError::InvalidCoordinate {
            coord: c(7, 0),
            grid_size: 7
        })
    );
    assert!(game.submit_guess(c(0, 100)).is_err());
    assert_eq!(game.state(), before);
}

#[test]
fn test_restart_resets_everything() {
    let mut game = fixed_game();
    game.submit_guess(c(0, 0)).unwrap();
    game.submit_guess(c(6, 6)).unwrap();
    assert_eq!(game.turn(), Player::Two);

    game.restart().unwrap();
    assert_eq!(game.status(), GameStatus::InProgress(Player::One));
    for p in Player::ALL {
        assert!(game.board(p).is_empty());
        let fleet = game.fleet(p);
        assert_eq!(fleet.ship_lengths().collect::<Vec<_>>(), vec![3, 2, 2]);
        assert_eq!(
            fleet.cells().collect::<std::collections::BTreeSet<_>>().len(),
            7
        );
    }
}

#[test]
fn test_restart_after_win() {
    let mut game = fixed_game();
    for cell in fleet_two().cells().collect::<Vec<_>>() {
        game.submit_guess(cell).unwrap();
    }
    assert!(game.is_over());
    game.restart().unwrap();
    assert!(!game.is_over());
    assert!(game.submit_guess(c(3, 3)).is_ok());
}

/// A 3x3 grid filled exactly: sequential random placement often paints
/// itself into a corner.
fn packed_config() -> GameConfig {
    GameConfig::new(3, vec![2, 2, 2, 2, 1]).unwrap()
}

#[test]
fn test_failed_restart_leaves_game_untouched() {
    let mut failures = 0;
    for seed in 0..500 {
        let Ok(mut game) = Game::seeded(packed_config(), seed) else {
            continue;
        };
        game.submit_guess(c(1, 1)).unwrap();
        let before = game.state();
        match game.restart() {
            Ok(()) => assert!(game.board(Player::Two).is_empty()),
            Err(err) => {
                assert!(matches!(err, GameError::UnableToPlaceShip { .. }));
                assert_eq!(game.state(), before);
                failures += 1;
            }
        }
    }
    assert!(failures > 0, "no restart ran out of placement attempts");
}

#[test]
fn test_from_fleets_checks_configuration() {
    let config = GameConfig::new(7, vec![3, 2]).unwrap();
    let err = Game::from_fleets(
        config,
        [fleet_one(), fleet_two()],
        SmallRng::seed_from_u64(0),
    )
    .unwrap_err();
    assert_eq!(err, GameError::FleetMismatch);
    assert!(err.is_configuration());
}

#[test]
fn test_seeded_games_match() {
    let a = Game::seeded(GameConfig::default(), 99).unwrap();
    let b = Game::seeded(GameConfig::default(), 99).unwrap();
    assert_eq!(a.state(), b.state());
    assert_ne!(a.fleet(Player::One).cells().count(), 0);
}

#[test]
fn test_new_game_from_entropy() {
    let game = Game::new(GameConfig::new(10, vec![5, 4, 3, 3, 2]).unwrap()).unwrap();
    assert_eq!(game.grid_size(), 10);
    assert_eq!(game.fleet(Player::Two).len(), 5);
}

#[test]
fn test_state_serializes_to_json() {
    let mut game = fixed_game();
    game.submit_guess(c(0, 0)).unwrap();
    let json = serde_json::to_value(game.state()).unwrap();
    assert_eq!(json["status"]["InProgress"], "One");
    assert_eq!(json["boards"][1]["hits"][0]["col"], 0);
    assert_eq!(json["fleets"][1]["ships"].as_array().map(Vec::len), Some(3));
}
