//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by the engine and by the
//! collaborators that drive it (schedulers, renderers, input mappers).
//! All types are plain data with no engine logic attached.
//!
//! # Board Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Columns**: 10 (indexed 0-9, left to right)
//!
//! Both are configurable per game through [`GameConfig`].
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TICK_INTERVAL_MS` | 500 | Gravity tick cadence expected from the scheduler |
//!
//! # Scoring
//!
//! | Event | Points |
//! |-------|--------|
//! | Piece spawned | 5 |
//! | 1 row cleared | 100 |
//! | 2 rows cleared | 400 |
//! | 3 rows cleared | 1500 |
//! | 4 rows cleared | 4000 |

use serde::{Deserialize, Serialize};

/// Default number of board rows
pub const DEFAULT_ROWS: usize = 20;

/// Default number of board columns
pub const DEFAULT_COLS: usize = 10;

/// Default gravity tick interval (milliseconds)
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 500;

/// Points awarded each time a new active piece is introduced
pub const SPAWN_BONUS: u64 = 5;

/// Points by number of rows removed in a single clear pass
///
/// Index 0 = no rows, index 4 = four rows.
pub const CLEAR_SCORES: [u64; 5] = [0, 100, 400, 1500, 4000];

/// The seven tetromino piece kinds
///
/// - **O**: 2x2 square
/// - **I**: 1x4 bar
/// - **T**: T-shaped
/// - **L**: L-shaped
/// - **J**: reverse L
/// - **S**: S-shaped
/// - **Z**: Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    O,
    I,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::I,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "o" => Some(PieceKind::O),
            "i" => Some(PieceKind::I),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::O => "o",
            PieceKind::I => "i",
            PieceKind::T => "t",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }
}

/// Discrete commands delivered by the input collaborator between ticks
///
/// Each command is applied atomically and synchronously. Illegal commands
/// are rejected without side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Move piece one row down outside the tick cadence
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Suspend play
    Pause,
    /// Continue a paused game
    Resume,
    /// Pause when playing, resume when paused (the "escape" key)
    TogglePause,
    /// Start a fresh game
    Restart,
}

impl Command {
    /// Parse command from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("ROTATE"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "rotate" => Some(Command::Rotate),
            "pause" => Some(Command::Pause),
            "resume" => Some(Command::Resume),
            "togglepause" | "escape" => Some(Command::TogglePause),
            "restart" => Some(Command::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::Rotate => "rotate",
            Command::Pause => "pause",
            Command::Resume => "resume",
            Command::TogglePause => "togglePause",
            Command::Restart => "restart",
        }
    }
}

/// Lifecycle state of a game; exactly one is current at any time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameState {
    #[default]
    Playing,
    Paused,
    GameOver,
}

impl GameState {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameState::Playing => "playing",
            GameState::Paused => "paused",
            GameState::GameOver => "gameOver",
        }
    }
}

/// Column placement for freshly spawned pieces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpawnPolicy {
    /// `floor((cols - width) / 2)`
    #[default]
    Centered,
    /// Uniform over every column that keeps the piece in bounds
    Random,
}

/// Engine configuration, fixed for the lifetime of a game
///
/// Missing fields fall back to the defaults when deserialized:
///
/// ```
/// use blockfall_types::{GameConfig, SpawnPolicy};
///
/// let config = GameConfig::default();
/// assert_eq!((config.rows, config.cols), (20, 10));
/// assert_eq!(config.tick_interval_ms, 500);
/// assert_eq!(config.spawn_policy, SpawnPolicy::Centered);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub tick_interval_ms: u64,
    pub spawn_policy: SpawnPolicy,
    /// RNG seed; `None` picks one at random when the game is created
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Config with the given board size and defaults elsewhere
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            spawn_policy: SpawnPolicy::Centered,
            seed: None,
        }
    }
}

/// Position of a single cell as `(row, col)`, row 0 at the top
pub type CellPos = (usize, usize);
