//! A running simulation: the current grid and its generation number

use super::grid::Bounds;
use super::{GameOfLifeRules, Grid, Position};
use log::trace;
use serde::{Deserialize, Serialize};

/// Owns the current generation and counts how many steps produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Universe {
    grid: Grid,
    generation: u64,
}

/// Serializable view of one generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub generation: u64,
    pub population: usize,
    pub bounds: Option<Bounds>,
    pub cells: Vec<Position>,
}

impl Universe {
    /// Start a simulation at generation 0
    pub fn new(grid: Grid) -> Self {
        Self { grid, generation: 0 }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// True once no live cells remain; every later generation is empty too
    pub fn is_extinct(&self) -> bool {
        self.grid.is_empty()
    }

    /// Advance one generation and return the new grid
    pub fn step(&mut self) -> &Grid {
        self.grid = GameOfLifeRules::evolve(&self.grid);
        self.generation += 1;
        trace!(
            "generation {} has {} live cells",
            self.generation,
            self.grid.population()
        );
        &self.grid
    }

    /// Advance `generations` steps
    pub fn advance(&mut self, generations: u64) -> &Grid {
        for _ in 0..generations {
            self.step();
        }
        &self.grid
    }

    /// Iterator over successive generations, starting with the one after the current
    pub fn generations(&mut self) -> impl Iterator<Item = (u64, Grid)> + '_ {
        std::iter::from_fn(move || {
            let grid = self.step().clone();
            Some((self.generation, grid))
        })
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            generation: self.generation,
            population: self.grid.population(),
            bounds: self.grid.bounding_box(),
            cells: self.grid.sorted_positions(),
        }
    }
}
