use serde::Serialize;

use crate::types::{CellPos, GameState, PieceKind};

/// Queued piece preview, cells relative to the shape's top-left corner
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextSnapshot {
    pub kind: PieceKind,
    pub height: usize,
    pub width: usize,
    pub cells: Vec<CellPos>,
}

/// Owned copy of the renderable game state
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major occupancy of the locked stack, 0 or 1 per cell
    pub board: Vec<u8>,
    pub active_kind: PieceKind,
    /// Board coordinates of the falling piece
    pub active: Vec<CellPos>,
    pub next: NextSnapshot,
    pub score: u64,
    pub lines: u64,
    pub state: GameState,
    pub seed: u64,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.state == GameState::Playing
    }

    /// Board with the active piece drawn in, one string per row
    ///
    /// `#` locked cell, `@` active piece, `.` empty.
    pub fn render_rows(&self) -> Vec<String> {
        let mut grid: Vec<Vec<char>> = self
            .board
            .chunks(self.cols.max(1))
            .map(|row| row.iter().map(|&c| if c != 0 { '#' } else { '.' }).collect())
            .collect();
        for &(r, c) in &self.active {
            if let Some(cell) = grid.get_mut(r).and_then(|row| row.get_mut(c)) {
                *cell = '@';
            }
        }
        grid.into_iter().map(|row| row.into_iter().collect()).collect()
    }
}
