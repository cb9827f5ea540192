use std::sync::Arc;

use gridhunt::{init_logging, AiPlayer, GridStore, LocalGame, Seat};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 && args.len() != 4 {
        eprintln!("Usage: {} <seed1> <seed2> [grids-dir]", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;
    let pool = match args.get(3) {
        Some(dir) => Some(Arc::new(GridStore::open(dir)?)),
        None => None,
    };

    let player = |pool: &Option<Arc<GridStore>>| match pool {
        Some(store) => AiPlayer::with_pool(Arc::clone(store)),
        None => AiPlayer::new(),
    };

    // Placement draws from the first seed, the game itself from the second.
    let mut setup_rng = SmallRng::seed_from_u64(seed1);
    let mut play_rng = SmallRng::seed_from_u64(seed2);

    let mut game = LocalGame::new(Box::new(player(&pool)), Box::new(player(&pool)));
    game.setup(&mut setup_rng)?;
    let outcome = game.run(&mut play_rng)?;

    let winner = match outcome.winner {
        Seat::First => "player1",
        Seat::Second => "player2",
    };
    let pool_size = match &pool {
        Some(store) => Some(store.len()?),
        None => None,
    };

    let result = json!({
        "player1": {"guesses": outcome.first_guesses},
        "player2": {"guesses": outcome.second_guesses},
        "winner": winner,
        "pool_size": pool_size,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
