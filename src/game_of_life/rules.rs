//! Game of Life rules and generation stepping

use super::{Grid, Position};
use rayon::prelude::*;
use std::collections::HashSet;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Compute the next generation.
    ///
    /// Only live cells and their neighbours can be alive next generation, so
    /// those are the only positions evaluated. Every candidate reads from
    /// `current` alone, which keeps the result independent of evaluation order.
    pub fn evolve(current: &Grid) -> Grid {
        let candidates: Vec<Position> = Self::candidates(current).into_iter().collect();

        let next: HashSet<Position> = candidates
            .into_par_iter()
            .filter(|&position| {
                Self::should_be_alive(
                    current.is_alive(position),
                    current.live_neighbor_count(position),
                )
            })
            .collect();

        Grid::from_live_set(next)
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = Self::evolve(&grid);
        }
        grid
    }

    /// Live cells plus every neighbour of a live cell
    pub fn candidates(grid: &Grid) -> HashSet<Position> {
        grid.live_positions()
            .flat_map(|position| std::iter::once(position).chain(position.neighbours()))
            .collect()
    }

    /// Check if a cell should be alive in the next generation given its current state and neighbor count.
    ///
    /// Equivalent to the four classical rules: fewer than two neighbours dies,
    /// two or three survives, more than three dies, a dead cell with exactly
    /// three is born.
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        neighbor_count == 3 || (neighbor_count == 2 && current_state)
    }
}
