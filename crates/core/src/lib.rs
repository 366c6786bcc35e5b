//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on windowing, rendering, input or timers:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for every rule
//! - **Portable**: Any scheduler or renderer can drive it
//!
//! # Module Structure
//!
//! - [`board`]: flat occupancy grid with the row-collapse primitive
//! - [`pieces`]: the seven tetromino shapes and clockwise rotation
//! - [`rng`]: uniform random piece queue with one-step lookahead
//! - [`controller`]: the falling piece, collision checks and locking
//! - [`line_clear`]: bottom-up full-row removal
//! - [`scoring`]: spawn and clear points
//! - [`game`]: the Playing / Paused / GameOver state machine
//! - [`snapshot`]: owned, serializable view for renderers
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every draw is independent, repeats allowed
//! - **Geometric rotation**: clockwise 90° turn at the same anchor, no wall kicks
//! - **Immediate lock**: a piece locks on the first tick it cannot fall
//! - **Scoring**: +5 per spawn; 100 / 400 / 1500 / 4000 for 1-4 rows
//!
//! # Example
//!
//! ```
//! use blockfall_core::Game;
//! use blockfall_types::{Command, GameConfig, GameState};
//!
//! let mut game = Game::new(GameConfig::default().seeded(12345)).unwrap();
//! assert_eq!(game.score(), 5); // first spawn
//!
//! game.apply(Command::MoveLeft);
//! game.apply(Command::Rotate);
//! game.tick();
//!
//! assert_eq!(game.state(), GameState::Playing);
//! ```
//!
//! # Timing
//!
//! The engine never reads a clock. The caller invokes [`Game::tick`] every
//! [`Game::tick_interval`] (500ms by default) while the game is Playing.

pub mod board;
pub mod controller;
pub mod error;
pub mod game;
pub mod line_clear;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use controller::{ActivePiece, LockReport, PieceController, TickOutcome};
pub use error::ConfigError;
pub use game::{Game, GameEvent};
pub use line_clear::clear_full_rows;
pub use pieces::{spawn_shape, PieceCatalog, Shape};
pub use rng::PieceQueue;
pub use scoring::{clear_score, ScoreTracker};
pub use snapshot::{GameSnapshot, NextSnapshot};
