use thiserror::Error;

/// Rejected engine configuration; the only error the engine reports
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must have at least one row and one column (got {rows}x{cols})")]
    EmptyBoard { rows: usize, cols: usize },
    #[error("board of {rows}x{cols} cells is too large")]
    BoardTooLarge { rows: usize, cols: usize },
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
    #[error("piece catalog is empty")]
    EmptyCatalog,
}
