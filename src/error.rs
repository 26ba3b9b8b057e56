//! Error types for seeding and configuring a simulation

use crate::game_of_life::Position;
use thiserror::Error;

/// A seed configuration that cannot be turned into a grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("duplicate coordinate {0} in seed")]
    DuplicatePosition(Position),

    #[error("line {line}: `{text}` is not a valid `row,col` coordinate")]
    InvalidCoordinate { line: usize, text: String },

    #[error("invalid character '{ch}' at row {row}, column {col}")]
    InvalidCell { ch: char, row: usize, col: usize },

    #[error("pattern contains no rows")]
    Empty,
}

/// Errors surfaced by the library outside of the generation engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GolError {
    #[error(transparent)]
    Seed(#[from] SeedError),

    #[error("{0} is not a valid preset ID")]
    UnknownPreset(usize),

    #[error("Refresh rate must be between {min} and {max}.")]
    InvalidRefreshRate { value: f64, min: f64, max: f64 },

    #[error("viewport sides must be between 1 and {}, got {height}x{width}", crate::utils::display::MAX_VIEWPORT_SIDE)]
    InvalidViewport { height: usize, width: usize },
}
