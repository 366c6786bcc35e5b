//! Line clearing - removes every full row after a lock

use crate::board::Board;

/// Remove all full rows and return how many were removed
///
/// Scans from the bottom row up. After collapsing a row the same index is
/// tested again, because the row above has just been shifted into it.
pub fn clear_full_rows(board: &mut Board) -> usize {
    let mut cleared = 0;
    let mut row = board.rows();

    while row > 0 {
        if board.is_row_full(row - 1) {
            board.collapse_row(row - 1);
            cleared += 1;
            // re-test the same index
            continue;
        }
        row -= 1;
    }

    cleared
}
