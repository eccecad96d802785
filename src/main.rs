//! Labyrinth-AI: a computer player for the tile-sliding maze game.
//!
//! ## Usage
//!
//! - `labyrinth-ai serve` - Answer referee commands on stdin/stdout
//! - `labyrinth-ai demo` - Watch AI seats play each other (the default)
//! - `labyrinth-ai move --setup game.json --player 2` - Print one move

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};

use labyrinth_ai::config::EngineConfig;
use labyrinth_ai::constants::{DEFAULT_MOVE_COUNT_LIMIT, DEFAULT_MOVE_LIMIT_SECS, DEFAULT_PLAYERS};
use labyrinth_ai::controller::GameController;
use labyrinth_ai::protocol::ProtocolEngine;
use labyrinth_ai::setup::GameSetup;

/// Labyrinth-AI: a computer player for the tile-sliding maze game
#[derive(Parser)]
#[command(name = "labyrinth-ai")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for the move search and random layouts
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Seconds a move may take before a warning is logged
    #[arg(long, global = true, default_value_t = DEFAULT_MOVE_LIMIT_SECS)]
    move_limit: f64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the referee command loop on stdin/stdout
    Serve,
    /// Play a self-play game on a random layout
    Demo {
        /// Number of AI seats
        #[arg(long, default_value_t = DEFAULT_PLAYERS)]
        players: usize,
        /// Stop after this many moves
        #[arg(long, default_value_t = DEFAULT_MOVE_COUNT_LIMIT)]
        max_moves: usize,
    },
    /// Print the move one seat would play in a saved setup
    Move {
        /// JSON setup file
        #[arg(long)]
        setup: PathBuf,
        /// Seat to play for
        #[arg(long, default_value_t = 1)]
        player: u8,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => {
            let config = EngineConfig::new(
                cli.seed,
                cli.move_limit,
                DEFAULT_MOVE_COUNT_LIMIT,
                DEFAULT_PLAYERS,
            )?;
            ProtocolEngine::new(config)
                .run()
                .context("command loop failed")?;
        }
        Some(Commands::Move { setup, player }) => {
            let config = EngineConfig::new(
                cli.seed,
                cli.move_limit,
                DEFAULT_MOVE_COUNT_LIMIT,
                DEFAULT_PLAYERS,
            )?;
            print_move(&config, &setup, player)?;
        }
        Some(Commands::Demo { players, max_moves }) => {
            let config = EngineConfig::new(cli.seed, cli.move_limit, max_moves, players)?;
            run_demo(&config)?;
        }
        None => run_demo(&EngineConfig::new(
            cli.seed,
            cli.move_limit,
            DEFAULT_MOVE_COUNT_LIMIT,
            DEFAULT_PLAYERS,
        )?)?,
    }
    Ok(())
}

fn print_move(config: &EngineConfig, path: &Path, player: u8) -> Result<()> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let setup: GameSetup =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    let mut controller = GameController::from_setup(player, &setup, config.rng_for(player))?;
    let mv = controller.produce_move()?;
    println!("{}", serde_json::to_string_pretty(&mv)?);
    Ok(())
}

fn run_demo(config: &EngineConfig) -> Result<()> {
    println!("Labyrinth-AI self-play, {} seats\n", config.players);

    let setup = GameSetup::random(&mut config.rng(), config.players)?;
    let mut seats = (1..=config.players as u8)
        .map(|p| GameController::from_setup(p, &setup, config.rng_for(p)))
        .collect::<labyrinth_ai::Result<Vec<_>>>()?;
    println!("{}", seats[0].board());

    let mut turn = 0;
    let winner = loop {
        if turn >= config.move_count_limit {
            break None;
        }
        let seat = turn % seats.len();
        let started = Instant::now();
        let mv = seats[seat].produce_move()?;
        if started.elapsed() > config.move_limit {
            warn!(
                "player {} took {:.2}s",
                mv.player_id,
                started.elapsed().as_secs_f64()
            );
        }
        for controller in &mut seats {
            controller.apply_move(&mv)?;
        }
        turn += 1;

        let board = seats[0].board();
        let left = board.treasure_queue(mv.player_id)?.len();
        info!("turn {turn}: {mv} ({left} treasures left)");
        if board.has_finished(mv.player_id)? {
            break Some(mv.player_id);
        }
    };

    println!("{}", seats[0].board());
    match winner {
        Some(player) => println!("Player {player} wins after {turn} moves"),
        None => println!("No winner after {turn} moves"),
    }
    Ok(())
}
