//! Board module - manages the game grid
//!
//! The board is a `rows x cols` occupancy grid (20x10 by default) where each
//! cell is 0 (empty) or 1 (filled by the locked stack).
//! Uses one flat row-major buffer allocated once per game.
//! Coordinates: (row, col) where row 0 is the top and col 0 is the left edge.
//! Query coordinates are signed so callers can probe cells left of or above the grid.

/// Value of an empty cell
pub const EMPTY: u8 = 0;

/// Value of a filled cell
pub const FILLED: u8 = 1;

/// The game board - flat buffer of `rows * cols` cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<u8>,
}

impl Board {
    /// Create a new empty board
    ///
    /// Dimensions are validated by the caller (see `Game::new`).
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![EMPTY; rows * cols],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: isize, col: isize) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return None;
        }
        Some(row as usize * self.cols + col as usize)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: isize, col: isize) -> Option<u8> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, row: isize, col: isize) -> bool {
        matches!(self.get(row, col), Some(FILLED))
    }

    /// Check if position is free (within bounds and empty)
    pub fn is_free(&self, row: isize, col: isize) -> bool {
        matches!(self.get(row, col), Some(EMPTY))
    }

    /// Mark a cell as permanently filled
    /// Returns false if out of bounds
    pub fn occupy(&mut self, row: isize, col: isize) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = FILLED;
                true
            }
            None => false,
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .map(|cells| cells.iter().all(|&c| c == FILLED))
            .unwrap_or(false)
    }

    /// Remove a row: shift every row above it down by one and empty the top row
    /// Returns false if the row is out of bounds
    pub fn collapse_row(&mut self, row: usize) -> bool {
        if row >= self.rows {
            return false;
        }

        let width = self.cols;
        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..row * width, width);
        self.cells[..width].fill(EMPTY);

        true
    }

    /// Cells of a single row
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == FILLED).count()
    }

    /// Empty the entire board
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Build a board from text rows, `#` for filled and anything else for empty
    ///
    /// Every row must have the same width.
    pub fn from_rows(rows: &[&str]) -> Self {
        let cols = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let mut board = Self::new(rows.len(), cols);
        for (r, line) in rows.iter().enumerate() {
            assert_eq!(line.chars().count(), cols, "ragged row {r}");
            for (c, ch) in line.chars().enumerate() {
                if ch == '#' {
                    board.occupy(r as isize, c as isize);
                }
            }
        }
        board
    }

    /// Render the board as text rows (inverse of `from_rows`)
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols.max(1))
            .take(self.rows)
            .map(|row| {
                row.iter()
                    .map(|&c| if c == FILLED { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(
            blockfall_types::DEFAULT_ROWS,
            blockfall_types::DEFAULT_COLS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(20, 10);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(0, 9), Some(9));
        assert_eq!(board.index(1, 0), Some(10));
        assert_eq!(board.index(19, 9), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(0, 10), None);
        assert_eq!(board.index(20, 0), None);
    }

    #[test]
    fn test_collapse_row_shifts_rows_above() {
        let mut board = Board::from_rows(&[
            "#...", //
            ".#..", //
            "####", //
            "..#.", //
        ]);

        assert!(board.collapse_row(2));

        assert_eq!(
            board.to_rows(),
            vec!["....", "#...", ".#..", "..#."]
        );
    }

    #[test]
    fn test_collapse_top_row_only_empties_it() {
        let mut board = Board::from_rows(&["####", "#..#"]);
        assert!(board.collapse_row(0));
        assert_eq!(board.to_rows(), vec!["....", "#..#"]);
        assert!(!board.collapse_row(2));
    }

    #[test]
    fn test_from_rows_roundtrip() {
        let rows = ["..#", "###", "#.."];
        let board = Board::from_rows(&rows);
        assert_eq!(board.rows(), 3);
        assert_eq!(board.cols(), 3);
        assert_eq!(board.filled_count(), 5);
        assert_eq!(board.to_rows(), rows);
    }
}
