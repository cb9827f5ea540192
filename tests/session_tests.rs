use std::sync::Arc;

use gridhunt::{
    placement, AiPlayer, Board, BoardError, Coord, GameStatus, GridStore, HitGrid, LocalGame,
    Player, Seat,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Places a random fleet and resigns on its first turn.
struct Resigner;

impl Player for Resigner {
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        placement::random_layout(rng, board);
        Ok(())
    }

    fn select_target(&mut self, _rng: &mut SmallRng, _attacks: &HitGrid) -> Option<Coord> {
        None
    }
}

#[test]
fn test_ai_vs_ai_game_finishes() {
    for seed in 0..8 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = LocalGame::new(Box::new(AiPlayer::new()), Box::new(AiPlayer::new()));
        game.setup(&mut rng).unwrap();
        let outcome = game.run(&mut rng).unwrap();

        assert!(!outcome.forfeit);
        let loser = outcome.winner.other();
        assert_eq!(game.engine(loser).status(), GameStatus::Lost);
        assert_eq!(game.engine(outcome.winner).status(), GameStatus::Won);
        assert!(outcome.first_guesses <= 100 && outcome.second_guesses <= 100);
        match outcome.winner {
            Seat::First => assert_eq!(outcome.first_guesses, outcome.second_guesses + 1),
            Seat::Second => assert_eq!(outcome.first_guesses, outcome.second_guesses),
        }
    }
}

#[test]
fn test_winning_layout_is_stored() {
    let dir = tempfile::tempdir().unwrap();
    let pool = Arc::new(GridStore::open(dir.path()).unwrap());
    let mut rng = SmallRng::seed_from_u64(31);

    let mut game = LocalGame::new(
        Box::new(AiPlayer::with_pool(Arc::clone(&pool))),
        Box::new(AiPlayer::with_pool(Arc::clone(&pool))),
    );
    game.setup(&mut rng).unwrap();
    let outcome = game.run(&mut rng).unwrap();

    // Both opponents save the same winning layout, which lands in one file.
    assert_eq!(pool.len().unwrap(), 1);
    let stored = pool.load(&mut rng).unwrap().unwrap();
    assert_eq!(&stored, game.engine(outcome.winner).board());
}

#[test]
fn test_resigning_player_loses() {
    let dir = tempfile::tempdir().unwrap();
    let pool = Arc::new(GridStore::open(dir.path()).unwrap());
    let mut rng = SmallRng::seed_from_u64(32);

    let mut game = LocalGame::new(
        Box::new(Resigner),
        Box::new(AiPlayer::with_pool(Arc::clone(&pool))),
    );
    game.setup(&mut rng).unwrap();
    let outcome = game.run(&mut rng).unwrap();

    assert!(outcome.forfeit);
    assert_eq!(outcome.winner, Seat::Second);
    assert_eq!(outcome.first_guesses, 0);
    assert_eq!(pool.len().unwrap(), 1);
}
