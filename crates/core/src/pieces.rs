//! Pieces module - Tetromino shapes and clockwise rotation
//!
//! Shapes are small binary matrices stored in fixed-size buffers. Rotation is
//! purely geometric: every call recomputes the 90° clockwise turn of the
//! current matrix, so there is no rotation-state table and no wall kicks.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Largest width or height a shape may have
pub const MAX_SHAPE_DIM: usize = 4;

/// Filled cells of one shape, `(row, col)` relative to its top-left corner
pub type ShapeCells = ArrayVec<(usize, usize), { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

/// A binary shape matrix of `height x width` cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    height: u8,
    width: u8,
    /// Row-major, only the first `height * width` entries are meaningful
    bits: [bool; MAX_SHAPE_DIM * MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from `0`/`1` rows
    ///
    /// # Panics
    ///
    /// Panics if the matrix is empty, ragged, or larger than 4x4. Only used
    /// for the static catalog and in tests.
    pub fn from_matrix<const W: usize>(matrix: &[[u8; W]]) -> Self {
        assert!(!matrix.is_empty() && W > 0, "empty shape");
        assert!(matrix.len() <= MAX_SHAPE_DIM && W <= MAX_SHAPE_DIM);

        let mut bits = [false; MAX_SHAPE_DIM * MAX_SHAPE_DIM];
        for (r, row) in matrix.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                bits[r * W + c] = v != 0;
            }
        }
        Self {
            height: matrix.len() as u8,
            width: W as u8,
            bits,
        }
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    /// Whether the cell at (row, col) is filled; false outside the matrix
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.height() && col < self.width() && self.bits[row * self.width() + col]
    }

    /// Filled cells in row-major order
    pub fn cells(&self) -> ShapeCells {
        let mut out = ShapeCells::new();
        for r in 0..self.height() {
            for c in 0..self.width() {
                if self.is_filled(r, c) {
                    out.push((r, c));
                }
            }
        }
        out
    }

    pub fn cell_count(&self) -> usize {
        self.cells().len()
    }

    /// Rotate 90° clockwise into a fresh buffer
    ///
    /// For an R x C source the result is C x R with
    /// `rotated[c][R - 1 - r] = source[r][c]`.
    pub fn rotate_cw(&self) -> Self {
        let (src_h, src_w) = (self.height(), self.width());
        // rotated dims: height = src_w, width = src_h
        let mut bits = [false; MAX_SHAPE_DIM * MAX_SHAPE_DIM];
        for r in 0..src_h {
            for c in 0..src_w {
                bits[c * src_h + (src_h - 1 - r)] = self.bits[r * src_w + c];
            }
        }
        Self {
            height: self.width,
            width: self.height,
            bits,
        }
    }
}

/// Get the spawn-orientation shape for a piece kind
pub fn spawn_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::O => Shape::from_matrix(&[[1, 1], [1, 1]]),
        PieceKind::I => Shape::from_matrix(&[[1, 1, 1, 1]]),
        PieceKind::T => Shape::from_matrix(&[[0, 1, 0], [1, 1, 1]]),
        PieceKind::L => Shape::from_matrix(&[[1, 0], [1, 0], [1, 1]]),
        PieceKind::J => Shape::from_matrix(&[[0, 1], [0, 1], [1, 1]]),
        PieceKind::S => Shape::from_matrix(&[[0, 1, 1], [1, 1, 0]]),
        PieceKind::Z => Shape::from_matrix(&[[1, 1, 0], [0, 1, 1]]),
    }
}

/// The set of piece kinds the generator draws from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceCatalog {
    kinds: ArrayVec<PieceKind, 7>,
}

impl PieceCatalog {
    /// All seven tetrominoes
    pub fn standard() -> Self {
        Self::from_kinds(&PieceKind::ALL)
    }

    /// Catalog restricted to the given kinds (duplicates are dropped)
    pub fn from_kinds(kinds: &[PieceKind]) -> Self {
        let mut out = ArrayVec::new();
        for &kind in kinds {
            if !out.contains(&kind) {
                out.push(kind);
            }
        }
        Self { kinds: out }
    }

    pub fn kinds(&self) -> &[PieceKind] {
        &self.kinds
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl Default for PieceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
