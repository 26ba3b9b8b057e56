//! Built-in starting patterns
//!
//! Coordinates are `(row, col)` and place each pattern inside the default
//! 40x80 viewport.

use super::{Grid, Position};
use crate::error::{GolError, SeedError};
use crate::utils::Viewport;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A named seed configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub id: usize,
    pub name: String,
    pub cells: Vec<Position>,
}

impl Preset {
    fn from_table(id: usize, name: &str, cells: &[(i64, i64)]) -> Self {
        Self {
            id,
            name: name.to_string(),
            cells: cells.iter().copied().map(Position::from).collect(),
        }
    }

    /// Seed a grid from this preset; a repeated coordinate is an error
    pub fn grid(&self) -> Result<Grid, SeedError> {
        Grid::try_seed(self.cells.iter().copied())
    }
}

const BLOCK: &[(i64, i64)] = &[(7, 7), (8, 7), (7, 8), (8, 8)];

const BEEHIVE: &[(i64, i64)] = &[(6, 10), (6, 11), (7, 9), (7, 12), (8, 10), (8, 11)];

const BEACON: &[(i64, i64)] = &[
    (2, 2), (2, 3), (3, 2), (3, 3),
    (4, 4), (4, 5), (5, 4), (5, 5),
];

const GLIDER: &[(i64, i64)] = &[(2, 3), (3, 4), (4, 2), (4, 3), (4, 4)];

const R_PENTOMINO: &[(i64, i64)] = &[(10, 51), (10, 52), (11, 50), (11, 51), (12, 51)];

const PULSAR: &[(i64, i64)] = &[
    (1, 5), (1, 11),
    (2, 5), (2, 11),
    (3, 5), (3, 6), (3, 10), (3, 11),
    (5, 1), (5, 2), (5, 3), (5, 6), (5, 7), (5, 9), (5, 10), (5, 13), (5, 14), (5, 15),
    (6, 3), (6, 5), (6, 7), (6, 9), (6, 11), (6, 13),
    (7, 5), (7, 6), (7, 10), (7, 11),
    (9, 5), (9, 6), (9, 10), (9, 11),
    (10, 3), (10, 5), (10, 7), (10, 9), (10, 11), (10, 13),
    (11, 1), (11, 2), (11, 3), (11, 6), (11, 7), (11, 9), (11, 10), (11, 13), (11, 14), (11, 15),
    (13, 5), (13, 6), (13, 10), (13, 11),
    (14, 5), (14, 11),
    (15, 5), (15, 11),
];

const PENTADECATHLON: &[(i64, i64)] = &[
    (4, 5),
    (5, 4), (5, 6),
    (6, 3), (6, 7),
    (7, 3), (7, 7),
    (8, 3), (8, 7),
    (9, 3), (9, 7),
    (10, 3), (10, 7),
    (11, 3), (11, 7),
    (12, 4), (12, 6),
    (13, 5),
];

/// Fixed presets, numbered from 0
pub fn presets() -> Vec<Preset> {
    [
        ("Block", BLOCK),
        ("Beehive", BEEHIVE),
        ("Beacon", BEACON),
        ("Glider", GLIDER),
        ("R-pentomino", R_PENTOMINO),
        ("Pulsar", PULSAR),
        ("Pentadecathlon", PENTADECATHLON),
    ]
    .iter()
    .enumerate()
    .map(|(id, (name, cells))| Preset::from_table(id, name, cells))
    .collect()
}

/// Id of the random preset, one past the fixed table
pub fn random_preset_id() -> usize {
    presets().len()
}

/// Number of selectable presets, including the random one
pub fn preset_count() -> usize {
    random_preset_id() + 1
}

/// Menu entries as `(id, name)`, including the random preset
pub fn menu_entries() -> Vec<(usize, String)> {
    presets()
        .into_iter()
        .map(|preset| (preset.id, preset.name))
        .chain(std::iter::once((random_preset_id(), "Random".to_string())))
        .collect()
}

/// Check a preset id without building the preset
pub fn validate_preset_id(id: usize) -> Result<usize, GolError> {
    if id < preset_count() {
        Ok(id)
    } else {
        Err(GolError::UnknownPreset(id))
    }
}

/// A random population scattered over `viewport`.
///
/// Draws between 4 and `height * width` coordinates; coordinates that repeat
/// collapse into one cell. The viewport must pass `Viewport::try_new`.
pub fn random_preset<R: Rng + ?Sized>(viewport: &Viewport, rng: &mut R) -> Result<Preset, GolError> {
    let checked = Viewport::try_new(viewport.origin(), viewport.height, viewport.width)?;
    let area = checked.area().ok_or(GolError::InvalidViewport {
        height: viewport.height,
        width: viewport.width,
    })?;
    let count = rng.gen_range(4.min(area)..=area);

    let mut cells: Vec<Position> = (0..count)
        .map(|_| {
            let row = rng.gen_range(0..viewport.height) as i64;
            let col = rng.gen_range(0..viewport.width) as i64;
            viewport.origin().offset(row, col)
        })
        .collect();
    cells.sort_unstable();
    cells.dedup();

    Ok(Preset {
        id: random_preset_id(),
        name: "Random".to_string(),
        cells,
    })
}

/// Look up a preset by id; the random preset is generated on demand
pub fn preset_by_id<R: Rng + ?Sized>(
    id: usize,
    viewport: &Viewport,
    rng: &mut R,
) -> Result<Preset, GolError> {
    validate_preset_id(id)?;
    if id == random_preset_id() {
        return random_preset(viewport, rng);
    }
    presets()
        .into_iter()
        .nth(id)
        .ok_or(GolError::UnknownPreset(id))
}
