//! Conway's Game of Life
//!
//! A sparse, unbounded implementation: only live cells are stored and each
//! generation is computed from an immutable snapshot of the previous one.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod utils;

pub use config::Settings;
pub use error::{GolError, SeedError};
pub use game_of_life::{GameOfLifeRules, Grid, Position, Universe};

use anyhow::Result;

/// Build the starting universe described by `settings`.
///
/// A pattern file takes precedence over the preset id.
pub fn seed_universe(settings: &Settings) -> Result<Universe> {
    let grid = match &settings.simulation.pattern_file {
        Some(path) => game_of_life::load_pattern_from_file(path)?,
        None => {
            let viewport = settings.viewport()?;
            let preset = game_of_life::preset_by_id(
                settings.simulation.preset,
                &viewport,
                &mut rand::thread_rng(),
            )?;
            log::info!("seeding from preset {} ({})", preset.id, preset.name);
            preset.grid()?
        }
    };
    Ok(Universe::new(grid))
}
