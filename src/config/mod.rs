//! Configuration management for the Game of Life runner

pub mod settings;

pub use settings::{
    Settings, SimulationConfig, DisplayConfig, OutputConfig, OutputFormat, CliOverrides,
    parse_preset_id, parse_refresh_rate, validate_refresh_rate,
};
