//! Scoring module - spawn and line-clear points
//!
//! The clear table is deliberately superlinear: clearing four rows at once is
//! worth 40 singles.

use crate::types::{CLEAR_SCORES, SPAWN_BONUS};

/// Points for clearing `lines` rows in a single pass
///
/// Counts above the table use the four-row value.
pub fn clear_score(lines: usize) -> u64 {
    CLEAR_SCORES[lines.min(CLEAR_SCORES.len() - 1)]
}

/// Running score and line total for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreTracker {
    score: u64,
    lines: u64,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Total rows cleared
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Add the spawn bonus; returns the points awarded
    pub fn award_spawn(&mut self) -> u64 {
        self.score = self.score.saturating_add(SPAWN_BONUS);
        SPAWN_BONUS
    }

    /// Add the clear bonus for one pass; returns the points awarded
    pub fn award_clear(&mut self, lines: usize) -> u64 {
        let points = clear_score(lines);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(lines as u64);
        points
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
