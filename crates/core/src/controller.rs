//! Active piece controller - owns the falling piece
//!
//! Validates and applies moves and rotations against the board, and performs
//! the lock sequence (merge, clear, score, spawn) when gravity can no longer
//! move the piece down.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::line_clear::clear_full_rows;
use crate::pieces::{spawn_shape, Shape, MAX_SHAPE_DIM};
use crate::rng::PieceQueue;
use crate::scoring::ScoreTracker;
use crate::types::{CellPos, PieceKind, SpawnPolicy};

/// Board cells covered by one piece
pub type PieceCells = ArrayVec<CellPos, { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

/// Active falling piece
///
/// `row`/`col` is the board position of the shape's top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub row: isize,
    pub col: isize,
}

impl ActivePiece {
    /// Check if every filled cell, offset by the delta, is in bounds and empty
    pub fn fits(&self, board: &Board, d_row: isize, d_col: isize) -> bool {
        Self::shape_fits(&self.shape, board, self.row + d_row, self.col + d_col)
    }

    fn shape_fits(shape: &Shape, board: &Board, row: isize, col: isize) -> bool {
        shape
            .cells()
            .iter()
            .all(|&(r, c)| board.is_free(row + r as isize, col + c as isize))
    }

    /// Board coordinates of the filled cells (cells outside the board are skipped)
    pub fn cells(&self, board: &Board) -> PieceCells {
        self.shape
            .cells()
            .iter()
            .filter_map(|&(r, c)| {
                let row = self.row + r as isize;
                let col = self.col + c as isize;
                board
                    .get(row, col)
                    .map(|_| (row as usize, col as usize))
            })
            .collect()
    }
}

/// Result of one gravity tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The piece moved down one row
    Moved,
    /// The piece could not move and was locked into the board
    Locked(LockReport),
}

/// What happened during a lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockReport {
    pub lines_cleared: usize,
    /// Clear bonus plus the spawn bonus of the next piece
    pub score_delta: u64,
    /// The next piece does not fit at its spawn position
    pub topped_out: bool,
}

#[derive(Debug, Clone)]
pub struct PieceController {
    active: ActivePiece,
    queue: PieceQueue,
    spawn_policy: SpawnPolicy,
}

impl PieceController {
    /// Create the controller and spawn the first piece
    ///
    /// The first spawn earns the spawn bonus like every other one. Check
    /// `can_move(board, 0, 0)` afterwards: a board narrower than the piece
    /// cannot hold it.
    pub fn new(
        queue: PieceQueue,
        spawn_policy: SpawnPolicy,
        board: &Board,
        score: &mut ScoreTracker,
    ) -> Self {
        // Placeholder, replaced by the spawn below.
        let kind = queue.peek();
        let mut controller = Self {
            active: ActivePiece {
                kind,
                shape: spawn_shape(kind),
                row: 0,
                col: 0,
            },
            queue,
            spawn_policy,
        };
        controller.spawn(board, score);
        controller
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    /// Kind of the queued piece
    pub fn next_kind(&self) -> PieceKind {
        self.queue.peek()
    }

    /// Spawn-orientation shape of the queued piece
    pub fn next_shape(&self) -> Shape {
        spawn_shape(self.queue.peek())
    }

    pub fn seed(&self) -> u64 {
        self.queue.seed()
    }

    /// Promote the queued piece to active and draw a new queued piece
    ///
    /// Returns whether the new piece fits at its spawn position.
    pub fn spawn(&mut self, board: &Board, score: &mut ScoreTracker) -> bool {
        let kind = self.queue.draw();
        let shape = spawn_shape(kind);
        let col = self.spawn_column(board.cols(), shape.width());

        self.active = ActivePiece {
            kind,
            shape,
            row: 0,
            col,
        };
        score.award_spawn();

        self.can_move(board, 0, 0)
    }

    fn spawn_column(&mut self, cols: usize, width: usize) -> isize {
        match self.spawn_policy {
            SpawnPolicy::Random if cols >= width => self.queue.gen_upto(cols - width) as isize,
            // floor, also when the piece is wider than the board
            _ => (cols as isize - width as isize).div_euclid(2),
        }
    }

    /// Check if the active piece can be translated by the delta
    pub fn can_move(&self, board: &Board, d_row: isize, d_col: isize) -> bool {
        self.active.fits(board, d_row, d_col)
    }

    /// Translate the active piece if the target position is legal
    pub fn try_move(&mut self, board: &Board, d_row: isize, d_col: isize) -> bool {
        if !self.can_move(board, d_row, d_col) {
            return false;
        }
        self.active.row += d_row;
        self.active.col += d_col;
        true
    }

    /// Rotate the active piece clockwise in place (no wall kicks)
    pub fn rotate(&mut self, board: &Board) -> bool {
        let rotated = self.active.shape.rotate_cw();
        if !ActivePiece::shape_fits(&rotated, board, self.active.row, self.active.col) {
            return false;
        }
        self.active.shape = rotated;
        true
    }

    /// Gravity step: move down, or lock when blocked
    pub fn tick(&mut self, board: &mut Board, score: &mut ScoreTracker) -> TickOutcome {
        if self.try_move(board, 1, 0) {
            return TickOutcome::Moved;
        }
        TickOutcome::Locked(self.lock(board, score))
    }

    /// Merge the active piece into the board, clear rows, and spawn the next piece
    pub fn lock(&mut self, board: &mut Board, score: &mut ScoreTracker) -> LockReport {
        for (row, col) in self.active.cells(board) {
            board.occupy(row as isize, col as isize);
        }

        let before = score.score();
        let lines_cleared = clear_full_rows(board);
        score.award_clear(lines_cleared);
        let fits = self.spawn(board, score);

        LockReport {
            lines_cleared,
            score_delta: score.score() - before,
            topped_out: !fits,
        }
    }

    /// Start over on an emptied board with a freshly drawn queue
    pub fn reset(&mut self, board: &Board, score: &mut ScoreTracker) -> bool {
        self.queue.refresh();
        self.spawn(board, score)
    }
}
