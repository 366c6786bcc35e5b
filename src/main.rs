//! Headless runner (default binary).
//!
//! Plays the role of the external scheduler: it calls `tick` at the
//! configured cadence on a simulated clock and feeds commands from a small
//! scripted policy between ticks. No rendering, no keyboard.
//!
//! Usage: `blockfall [CONFIG_JSON] [--max-ticks N]`

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use blockfall::core::{Game, GameEvent};
use blockfall::types::{Command, GameConfig, GameState};

/// Commands the scripted policy picks from between ticks
const POLICY_COMMANDS: [Command; 4] = [
    Command::MoveLeft,
    Command::MoveRight,
    Command::Rotate,
    Command::SoftDrop,
];

/// Play one headless game and print the final snapshot as JSON
#[derive(Parser, Debug)]
#[command(name = "blockfall", version)]
struct Args {
    /// JSON game config (defaults apply to missing fields)
    #[arg(value_name = "CONFIG_JSON")]
    config: Option<PathBuf>,

    /// Stop after this many gravity ticks even if the game is still running
    #[arg(long, default_value_t = 10_000)]
    max_ticks: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => GameConfig::default(),
    };

    let mut game = Game::new(config).context("invalid game configuration")?;
    let summary = run(&mut game, args.max_ticks);

    eprintln!(
        "seed={} ticks={} simulated={:?} locks={} lines={} score={} state={}",
        game.seed(),
        summary.ticks,
        summary.simulated,
        summary.locks,
        game.lines(),
        game.score(),
        game.state().as_str(),
    );
    println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
    Ok(())
}

fn load_config(path: &Path) -> Result<GameConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))
}

struct RunSummary {
    ticks: u64,
    simulated: Duration,
    locks: u64,
}

fn run(game: &mut Game, max_ticks: u64) -> RunSummary {
    let mut policy = StdRng::seed_from_u64(game.seed());
    let mut summary = RunSummary {
        ticks: 0,
        simulated: Duration::ZERO,
        locks: 0,
    };

    while summary.ticks < max_ticks && game.state() == GameState::Playing {
        for _ in 0..policy.gen_range(0..3) {
            let command = POLICY_COMMANDS[policy.gen_range(0..POLICY_COMMANDS.len())];
            game.apply(command);
        }

        game.tick();
        summary.ticks += 1;
        summary.simulated += game.tick_interval();

        for event in game.take_events() {
            match event {
                GameEvent::Locked { lines_cleared, .. } => {
                    summary.locks += 1;
                    if lines_cleared > 0 {
                        eprintln!("tick {}: cleared {} line(s)", summary.ticks, lines_cleared);
                    }
                }
                GameEvent::StateChanged { to, .. } => {
                    eprintln!("tick {}: state -> {}", summary.ticks, to.as_str());
                }
                GameEvent::Restarted => {}
            }
        }
    }

    summary
}
