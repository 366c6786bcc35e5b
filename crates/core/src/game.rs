//! Game module - the Playing / Paused / GameOver state machine
//!
//! This module ties together all core components: board, piece controller,
//! generator, clear engine and score. It accepts gravity ticks from an
//! external scheduler and discrete commands from an input collaborator, and
//! exposes read-only queries for rendering.

use std::time::Duration;

use rand::random;

use crate::board::Board;
use crate::controller::{ActivePiece, PieceCells, PieceController, TickOutcome};
use crate::error::ConfigError;
use crate::pieces::{PieceCatalog, ShapeCells};
use crate::rng::PieceQueue;
use crate::scoring::ScoreTracker;
use crate::snapshot::{GameSnapshot, NextSnapshot};
use crate::types::{Command, GameConfig, GameState, PieceKind};

/// Engine-side record of something observers may care about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A piece locked into the board
    Locked {
        lines_cleared: usize,
        score_delta: u64,
    },
    /// The state machine moved between states
    StateChanged { from: GameState, to: GameState },
    /// Board, score and queue were reset
    Restarted,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    controller: PieceController,
    score: ScoreTracker,
    state: GameState,
    /// Pending events, drained by `take_events`
    events: Vec<GameEvent>,
}

impl Game {
    /// Create a game with the standard seven-piece catalog
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_catalog(config, PieceCatalog::standard())
    }

    /// Create a game drawing pieces from `catalog`
    ///
    /// Fails if the board has no rows or columns, its cell count overflows,
    /// the tick interval is zero, or the catalog is empty. The first piece is spawned immediately.
    pub fn with_catalog(config: GameConfig, catalog: PieceCatalog) -> Result<Self, ConfigError> {
        if config.rows == 0 || config.cols == 0 {
            return Err(ConfigError::EmptyBoard {
                rows: config.rows,
                cols: config.cols,
            });
        }
        let fits_in_memory = config
            .rows
            .checked_mul(config.cols)
            .is_some_and(|cells| cells <= isize::MAX as usize);
        if !fits_in_memory {
            return Err(ConfigError::BoardTooLarge {
                rows: config.rows,
                cols: config.cols,
            });
        }
        if config.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        let seed = config.seed.unwrap_or_else(random);
        let queue = PieceQueue::new(catalog, seed).ok_or(ConfigError::EmptyCatalog)?;

        let board = Board::new(config.rows, config.cols);
        let mut score = ScoreTracker::new();
        let controller = PieceController::new(queue, config.spawn_policy, &board, &mut score);

        let mut game = Self {
            config,
            board,
            controller,
            score,
            state: GameState::Playing,
            events: Vec::new(),
        };
        if !game.controller.can_move(&game.board, 0, 0) {
            game.transition(GameState::GameOver);
        }
        Ok(game)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Cadence at which the scheduler should call `tick`
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.config.tick_interval_ms)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u64 {
        self.score.score()
    }

    pub fn lines(&self) -> u64 {
        self.score.lines()
    }

    pub fn seed(&self) -> u64 {
        self.controller.seed()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board occupancy, row-major, 0 or 1 per cell
    pub fn board_cells(&self) -> &[u8] {
        self.board.cells()
    }

    pub fn active_piece(&self) -> &ActivePiece {
        self.controller.active()
    }

    /// Board coordinates covered by the active piece
    pub fn active_piece_cells(&self) -> PieceCells {
        self.controller.active().cells(&self.board)
    }

    pub fn next_piece(&self) -> PieceKind {
        self.controller.next_kind()
    }

    /// Filled cells of the queued piece relative to its top-left corner
    pub fn next_piece_cells(&self) -> ShapeCells {
        self.controller.next_shape().cells()
    }

    /// Gravity tick from the scheduler
    ///
    /// Returns true when gameplay advanced. Ignored unless Playing.
    pub fn tick(&mut self) -> bool {
        if self.state != GameState::Playing {
            return false;
        }

        match self.controller.tick(&mut self.board, &mut self.score) {
            TickOutcome::Moved => {}
            TickOutcome::Locked(report) => {
                self.events.push(GameEvent::Locked {
                    lines_cleared: report.lines_cleared,
                    score_delta: report.score_delta,
                });
                if report.topped_out {
                    self.transition(GameState::GameOver);
                }
            }
        }
        true
    }

    /// Apply a discrete command
    ///
    /// Returns false when the command is illegal in the current state or
    /// would not change anything; nothing is modified in that case.
    pub fn apply(&mut self, command: Command) -> bool {
        match (self.state, command) {
            (GameState::Paused, Command::Resume | Command::TogglePause) => {
                self.transition(GameState::Playing);
                true
            }
            (GameState::Paused, _) => false,

            (GameState::Playing, Command::Pause | Command::TogglePause) => {
                self.transition(GameState::Paused);
                true
            }
            (GameState::Playing | GameState::GameOver, Command::Restart) => {
                self.restart();
                true
            }
            (GameState::GameOver, _) => false,

            (GameState::Playing, Command::MoveLeft) => {
                self.controller.try_move(&self.board, 0, -1)
            }
            (GameState::Playing, Command::MoveRight) => {
                self.controller.try_move(&self.board, 0, 1)
            }
            (GameState::Playing, Command::SoftDrop) => {
                self.controller.try_move(&self.board, 1, 0)
            }
            (GameState::Playing, Command::Rotate) => self.controller.rotate(&self.board),
            (GameState::Playing, Command::Resume) => false,
        }
    }

    /// Clear board, score and queue, spawn a fresh piece, and resume play
    fn restart(&mut self) {
        self.board.clear();
        self.score.reset();
        let fits = self.controller.reset(&self.board, &mut self.score);
        self.events.push(GameEvent::Restarted);

        let target = if fits {
            GameState::Playing
        } else {
            GameState::GameOver
        };
        self.transition(target);
    }

    fn transition(&mut self, to: GameState) {
        if self.state == to {
            return;
        }
        self.events.push(GameEvent::StateChanged {
            from: self.state,
            to,
        });
        self.state = to;
    }

    /// Take and clear pending events, oldest first
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Copy everything a renderer needs into an owned snapshot
    pub fn snapshot(&self) -> GameSnapshot {
        let next = self.controller.next_shape();
        GameSnapshot {
            rows: self.board.rows(),
            cols: self.board.cols(),
            board: self.board.cells().to_vec(),
            active_kind: self.controller.active().kind,
            active: self.active_piece_cells().to_vec(),
            next: NextSnapshot {
                kind: self.next_piece(),
                height: next.height(),
                width: next.width(),
                cells: next.cells().to_vec(),
            },
            score: self.score(),
            lines: self.lines(),
            state: self.state,
            seed: self.seed(),
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
