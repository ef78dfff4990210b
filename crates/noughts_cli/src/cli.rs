//! Command-line interface for noughts.

use clap::Parser;
use noughts_engine::Mark;

/// Noughts and crosses for two players at one terminal.
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player noughts and crosses on a 3x3 grid", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed for the first-mover coin flip (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Mark that moves first, skipping the coin flip (O or X)
    #[arg(long, value_name = "MARK")]
    pub first_mover: Option<Mark>,
}
