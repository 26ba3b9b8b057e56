//! Game of Life core functionality

pub mod grid;
pub mod rules;
pub mod universe;
pub mod presets;
pub mod io;

pub use grid::{Bounds, Grid, Position};
pub use rules::GameOfLifeRules;
pub use universe::{Snapshot, Universe};
pub use presets::{preset_by_id, presets, Preset};
pub use io::{create_example_patterns, load_pattern_from_file, save_pattern_to_file, save_snapshot_json};
