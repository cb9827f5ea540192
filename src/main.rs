use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use gridhunt::{grid_dir, init_logging, AiPlayer, CliPlayer, GridStore, LocalGame, Player, Seat};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer opponent in this terminal.
    Local {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Layout pool directory (defaults to $GRIDHUNT_GRIDS or ./grids)")]
        grids: Option<PathBuf>,
        #[arg(long, help = "Do not read or write the layout pool")]
        no_pool: bool,
    },
    /// Inspect or empty the layout pool.
    Pool {
        #[arg(long, help = "Layout pool directory (defaults to $GRIDHUNT_GRIDS or ./grids)")]
        grids: Option<PathBuf>,
        #[command(subcommand)]
        action: PoolAction,
    },
}

#[derive(Subcommand)]
enum PoolAction {
    /// List stored layouts.
    List,
    /// Delete every stored layout.
    Clear,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Local {
            seed,
            grids,
            no_pool,
        } => {
            let mut rng = if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };

            let opponent = if no_pool {
                AiPlayer::new()
            } else {
                let store = GridStore::open(grids.unwrap_or_else(grid_dir))?;
                AiPlayer::with_pool(Arc::new(store))
            };
            let human: Box<dyn Player> = Box::new(CliPlayer::new());

            let mut game = LocalGame::new(human, Box::new(opponent));
            game.setup(&mut rng)?;
            let outcome = game.run(&mut rng)?;
            match (outcome.winner, outcome.forfeit) {
                (Seat::First, _) => println!("You won in {} shots.", outcome.first_guesses),
                (Seat::Second, true) => println!("You resigned."),
                (Seat::Second, false) => {
                    println!("The computer won in {} shots.", outcome.second_guesses)
                }
            }
        }
        Commands::Pool { grids, action } => {
            let store = GridStore::open(grids.unwrap_or_else(grid_dir))?;
            match action {
                PoolAction::List => {
                    let entries = store.entries()?;
                    println!("{} layout(s) in {}", entries.len(), store.dir().display());
                    for path in entries {
                        println!("  {}", path.display());
                    }
                }
                PoolAction::Clear => {
                    let removed = store.clear()?;
                    println!("Removed {} layout(s) from {}", removed, store.dir().display());
                }
            }
        }
    }
    Ok(())
}
