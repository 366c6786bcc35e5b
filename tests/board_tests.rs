//! Board tests - grid queries, lock-merge primitive and row collapse

use blockfall::core::{clear_full_rows, Board};
use blockfall::types::{DEFAULT_COLS, DEFAULT_ROWS};

#[test]
fn test_board_new_empty() {
    let board = Board::new(DEFAULT_ROWS, DEFAULT_COLS);
    assert_eq!(board.rows(), 20);
    assert_eq!(board.cols(), 10);

    // All cells should be empty
    for row in 0..20 {
        for col in 0..10 {
            assert!(board.is_free(row, col), "Cell ({}, {}) should be free", row, col);
            assert_eq!(board.get(row, col), Some(0));
        }
    }
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(20, 10);

    // Negative coordinates
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);

    // Beyond bounds
    assert_eq!(board.get(20, 0), None);
    assert_eq!(board.get(0, 10), None);
}

#[test]
fn test_board_occupy() {
    let mut board = Board::new(20, 10);

    assert!(board.occupy(10, 5));
    assert!(board.is_occupied(10, 5));
    assert!(!board.is_free(10, 5));

    // Occupying twice keeps the cell filled
    assert!(board.occupy(10, 5));
    assert_eq!(board.get(10, 5), Some(1));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_board_occupy_out_of_bounds() {
    let mut board = Board::new(20, 10);

    // Should return false for out of bounds
    assert!(!board.occupy(-1, 0));
    assert!(!board.occupy(0, -1));
    assert!(!board.occupy(20, 0));
    assert!(!board.occupy(0, 10));
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_board_is_occupied_out_of_bounds() {
    let board = Board::new(20, 10);

    // Out of bounds is neither occupied nor free
    assert!(!board.is_occupied(-1, 0));
    assert!(!board.is_free(-1, 0));
    assert!(!board.is_occupied(0, 10));
    assert!(!board.is_free(0, 10));
}

#[test]
fn test_board_is_row_full() {
    let mut board = Board::new(20, 10);

    // Empty row is not full
    assert!(!board.is_row_full(5));

    // Fill the entire row 5
    for col in 0..10 {
        board.occupy(5, col);
    }
    assert!(board.is_row_full(5));

    // Leave one cell empty in row 6
    for col in 0..9 {
        board.occupy(6, col);
    }
    assert!(!board.is_row_full(6));

    // Out of range rows are never full
    assert!(!board.is_row_full(20));
}

#[test]
fn test_board_collapse_row() {
    let mut board = Board::new(20, 10);

    // Fill row 5
    for col in 0..10 {
        board.occupy(5, col);
    }

    // Put something above it
    board.occupy(3, 0);
    board.occupy(4, 1);

    assert!(board.collapse_row(5));

    // What was at row 4 should now be at row 5 (shifted down)
    assert!(board.is_occupied(5, 1));
    // What was at row 3 should now be at row 4
    assert!(board.is_occupied(4, 0));
    // Row 3 is empty now
    assert!(board.is_free(3, 0));
    assert_eq!(board.filled_count(), 2);
}

#[test]
fn test_board_collapse_keeps_rows_below() {
    let mut board = Board::from_rows(&[
        "....", //
        "#.#.", //
        "####", //
        ".##.", //
    ]);
    assert!(board.collapse_row(2));
    assert_eq!(board.to_rows(), vec!["....", "....", "#.#.", ".##."]);
}

#[test]
fn test_clear_full_rows_bottom_two() {
    let mut board = Board::new(20, 10);

    // Fill rows 18 and 19 (bottom two)
    for col in 0..10 {
        board.occupy(18, col);
        board.occupy(19, col);
    }

    // Put something at row 17
    board.occupy(17, 0);

    assert_eq!(clear_full_rows(&mut board), 2);
    assert!(board.is_occupied(19, 0));
    assert_eq!(board.filled_count(), 1);

    // A second scan has nothing left to clear
    assert_eq!(clear_full_rows(&mut board), 0);
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_board_clear() {
    let mut board = Board::from_rows(&["#.#", "###"]);
    board.clear();
    assert_eq!(board.filled_count(), 0);
    assert_eq!(board.cells(), &[0; 6]);
}
