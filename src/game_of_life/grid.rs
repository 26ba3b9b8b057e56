//! Sparse grid representation for Game of Life on an unbounded plane

use crate::error::SeedError;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Offsets of the eight Moore neighbours
const NEIGHBOUR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// A cell coordinate on the integer plane.
///
/// Ordering is row-major, so sorting a set of positions yields them in
/// reading order. Coordinates near the limits of `i64` overflow when their
/// neighbours are computed; patterns are expected to stay well inside that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i64,
    pub col: i64,
}

impl Position {
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// The eight positions horizontally, vertically and diagonally adjacent
    pub fn neighbours(self) -> impl Iterator<Item = Position> {
        NEIGHBOUR_OFFSETS
            .iter()
            .map(move |&(dr, dc)| Position::new(self.row + dr, self.col + dc))
    }

    pub fn offset(self, d_row: i64, d_col: i64) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }
}

impl From<(i64, i64)> for Position {
    fn from((row, col): (i64, i64)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Smallest rectangle enclosing every live cell (inclusive bounds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_row: i64,
    pub max_row: i64,
    pub min_col: i64,
    pub max_col: i64,
}

impl Bounds {
    pub fn height(&self) -> u64 {
        self.max_row.abs_diff(self.min_row) + 1
    }

    pub fn width(&self) -> u64 {
        self.max_col.abs_diff(self.min_col) + 1
    }
}

/// The set of live cells of one generation.
///
/// Any position not in the set is dead. The grid has no size; display code
/// decides which part of the plane to show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    live: HashSet<Position>,
}

impl Grid {
    /// Create a grid with no live cells
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a grid whose live set is exactly `positions`; repeats collapse
    pub fn seed(positions: impl IntoIterator<Item = Position>) -> Self {
        Self {
            live: positions.into_iter().collect(),
        }
    }

    /// Create a grid from a seed table, rejecting repeated coordinates
    pub fn try_seed(positions: impl IntoIterator<Item = Position>) -> Result<Self, SeedError> {
        let mut live = HashSet::new();
        for position in positions {
            if !live.insert(position) {
                return Err(SeedError::DuplicatePosition(position));
            }
        }
        Ok(Self { live })
    }

    /// Convenience constructor from `(row, col)` pairs
    pub fn from_coords(coords: &[(i64, i64)]) -> Self {
        Self::seed(coords.iter().copied().map(Position::from))
    }

    /// Wrap an already computed live set
    pub(crate) fn from_live_set(live: HashSet<Position>) -> Self {
        Self { live }
    }

    pub fn is_alive(&self, position: Position) -> bool {
        self.live.contains(&position)
    }

    /// Count living neighbours of a cell. There is no edge: every position has
    /// eight neighbours, whatever its coordinates.
    pub fn live_neighbor_count(&self, position: Position) -> u8 {
        position
            .neighbours()
            .filter(|neighbour| self.live.contains(neighbour))
            .count() as u8
    }

    /// Live cells in no particular order
    pub fn live_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.live.iter().copied()
    }

    /// Live cells in row-major order
    pub fn sorted_positions(&self) -> Vec<Position> {
        self.live.iter().copied().sorted().collect()
    }

    pub fn population(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Bounding box of the live cells, `None` for an empty grid
    pub fn bounding_box(&self) -> Option<Bounds> {
        let (min_row, max_row) = self.live.iter().map(|p| p.row).minmax().into_option()?;
        let (min_col, max_col) = self.live.iter().map(|p| p.col).minmax().into_option()?;
        Some(Bounds { min_row, max_row, min_col, max_col })
    }

    /// The same pattern shifted by the given offset
    pub fn translated(&self, d_row: i64, d_col: i64) -> Self {
        Self::seed(self.live.iter().map(|p| p.offset(d_row, d_col)))
    }
}

impl FromIterator<Position> for Grid {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Self {
        Self::seed(iter)
    }
}
