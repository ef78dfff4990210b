//! Noughts and crosses - console driver.
//!
//! The engine decides; this binary prompts, reads one line per move,
//! resubmits on rejection, and prints the board after every accepted
//! placement.

#![warn(missing_docs)]

mod cli;
mod render;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::Cli;
use noughts_engine::{Game, GameStatus, MoveError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::Write;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    };
    let mut game = match cli.first_mover {
        Some(mark) => Game::with_first_mover(mark),
        None => Game::new(&mut rng),
    };
    info!(mover = %game.mover(), "game created");

    println!("{}", render::board_grid(game.board()));
    println!(
        "\n{}",
        render::first_mover(game.mover(), cli.first_mover.is_none())
    );

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    while !game.is_over() {
        print!("{}", render::move_prompt(game.mover()));
        stdout.flush()?;

        let mut line = String::new();
        let read = stdin.read_line(&mut line).context("reading a move")?;
        if read == 0 {
            bail!("input ended before the game finished");
        }
        println!();

        match game.submit_move(line.trim()) {
            Ok(status) => {
                println!("{}", render::board_grid(game.board()));
                match status {
                    GameStatus::InProgress => {}
                    GameStatus::Won(mark) => println!("\n{}", render::won(mark)),
                    GameStatus::Draw => println!("\n{}", render::draw()),
                }
            }
            Err(error @ (MoveError::InvalidFormat(_) | MoveError::CellOccupied(_))) => {
                debug!(%error, "move rejected");
                println!("{}", render::rejected(&error));
            }
            // The loop exits on a terminal status before this can happen.
            Err(MoveError::GameOver) => unreachable!("moves are only submitted while in progress"),
        }
    }

    Ok(())
}
