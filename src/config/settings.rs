//! Configuration settings for the Game of Life runner

use crate::error::GolError;
use crate::game_of_life::{presets, Position};
use crate::utils::{RenderStyle, Viewport};
use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Shortest allowed pause between frames, in seconds. Zero disables waiting.
pub const MIN_REFRESH_RATE: f64 = 0.0;
/// Longest allowed pause between frames, in seconds
pub const MAX_REFRESH_RATE: f64 = 10.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub display: DisplayConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub preset: usize,
    pub pattern_file: Option<PathBuf>,
    pub max_generations: Option<u64>,
    pub stop_when_extinct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Seconds per frame
    pub refresh_rate: f64,
    pub height: usize,
    pub width: usize,
    pub live_char: char,
    pub dead_char: char,
    /// Centre the viewport on the seed instead of anchoring it at the origin
    pub center: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub directory: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            preset: 4,
            pattern_file: None,
            max_generations: None,
            stop_when_extinct: false,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let viewport = Viewport::default();
        let style = RenderStyle::default();
        Self {
            refresh_rate: 0.5,
            height: viewport.height,
            width: viewport.width,
            live_char: style.live_char,
            dead_char: style.dead_char,
            center: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            directory: PathBuf::from("output"),
        }
    }
}

impl Settings {
    /// Load and validate settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let settings = Self::parse_file(path)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a YAML file without validating them, so that
    /// overrides can be merged first
    pub fn parse_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        info!("loaded configuration from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        validate_refresh_rate(self.display.refresh_rate)?;
        self.viewport()?;

        if self.simulation.pattern_file.is_none() {
            presets::validate_preset_id(self.simulation.preset)?;
        }

        if let Some(ref path) = self.simulation.pattern_file {
            if !path.exists() {
                anyhow::bail!("Pattern file does not exist: {}", path.display());
            }
        }

        Ok(())
    }

    /// Viewport anchored at the origin with the configured size
    pub fn viewport(&self) -> Result<Viewport, GolError> {
        Viewport::try_new(Position::new(0, 0), self.display.height, self.display.width)
    }

    pub fn render_style(&self) -> RenderStyle {
        RenderStyle {
            live_char: self.display.live_char,
            dead_char: self.display.dead_char,
        }
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(preset) = cli_overrides.preset {
            self.simulation.preset = preset;
            // An explicit preset wins over a configured pattern file
            self.simulation.pattern_file = None;
        }
        if let Some(ref pattern_file) = cli_overrides.pattern_file {
            self.simulation.pattern_file = Some(pattern_file.clone());
        }
        if let Some(generations) = cli_overrides.max_generations {
            self.simulation.max_generations = Some(generations);
        }
        if let Some(refresh_rate) = cli_overrides.refresh_rate {
            self.display.refresh_rate = refresh_rate;
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.directory = output_dir.clone();
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }
}

/// Check that a frame duration (seconds) is within the allowed range
pub fn validate_refresh_rate(value: f64) -> Result<f64, GolError> {
    if !(MIN_REFRESH_RATE..=MAX_REFRESH_RATE).contains(&value) {
        return Err(GolError::InvalidRefreshRate {
            value,
            min: MIN_REFRESH_RATE,
            max: MAX_REFRESH_RATE,
        });
    }
    Ok(value)
}

/// Parse and validate a refresh rate given on the command line
pub fn parse_refresh_rate(value: &str) -> Result<f64, String> {
    let rate: f64 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    validate_refresh_rate(rate).map_err(|e| e.to_string())
}

/// Parse and validate a preset id given on the command line
pub fn parse_preset_id(value: &str) -> Result<usize, String> {
    let id: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a valid preset ID", value))?;
    presets::validate_preset_id(id).map_err(|e| e.to_string())
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub preset: Option<usize>,
    pub pattern_file: Option<PathBuf>,
    pub max_generations: Option<u64>,
    pub refresh_rate: Option<f64>,
    pub output_dir: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.simulation.preset, 4);
        assert_eq!(settings.display.refresh_rate, 0.5);
        assert_eq!((settings.display.height, settings.display.width), (40, 80));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_refresh_rate_range() {
        for tenths in 0..=100i32 {
            let rate = f64::from(tenths) / 10.0;
            assert_eq!(validate_refresh_rate(rate).unwrap(), rate);
        }

        let err = validate_refresh_rate(-0.01).unwrap_err();
        assert!(err.to_string().contains("Refresh rate must be between"));
        assert!(validate_refresh_rate(10.01).is_err());
        assert!(validate_refresh_rate(f64::NAN).is_err());
    }

    #[test]
    fn test_cli_parsers() {
        assert_eq!(parse_refresh_rate("0.25"), Ok(0.25));
        assert!(parse_refresh_rate("not a number").unwrap_err().contains("not a number"));
        assert!(parse_refresh_rate("11").unwrap_err().contains("Refresh rate must be between"));

        assert_eq!(parse_preset_id("3"), Ok(3));
        assert!(parse_preset_id("-1").unwrap_err().contains("is not a valid preset ID"));
        assert!(parse_preset_id("99").unwrap_err().contains("is not a valid preset ID"));
        assert!(parse_preset_id("not_an_integer").unwrap_err().contains("not_an_integer"));
    }

    #[test]
    fn test_validate_rejects_bad_settings() {
        let mut settings = Settings::default();
        settings.display.width = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.preset = 100;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.pattern_file = Some(PathBuf::from("/definitely/not/here.txt"));
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_viewport() {
        let mut settings = Settings::default();
        settings.simulation.preset = presets::random_preset_id();
        settings.display.height = 1 << 32;
        settings.display.width = 1 << 32;
        assert!(settings.validate().is_err());
        assert!(crate::seed_universe(&settings).is_err());

        let mut settings = Settings::default();
        settings.display.height = crate::utils::display::MAX_VIEWPORT_SIDE + 1;
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("viewport sides must be between 1 and"));
    }

    #[test]
    fn test_parse_file_defers_validation() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("stale.yaml");
        std::fs::write(&path, "simulation:\n  pattern_file: /no/such/pattern.txt\n").unwrap();

        assert!(Settings::from_file(&path).is_err());

        let mut settings = Settings::parse_file(&path).unwrap();
        settings.merge_with_cli(&CliOverrides {
            preset: Some(0),
            ..Default::default()
        });
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/default.yaml");

        let mut settings = Settings::default();
        settings.simulation.max_generations = Some(12);
        settings.output.format = OutputFormat::Json;
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("partial.yaml");
        std::fs::write(&path, "simulation:\n  preset: 3\ndisplay:\n  refresh_rate: 0.1\n").unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.simulation.preset, 3);
        assert_eq!(loaded.display.refresh_rate, 0.1);
        assert_eq!(loaded.display.width, 80);
    }

    #[test]
    fn test_merge_with_cli() {
        let mut settings = Settings::default();
        settings.simulation.pattern_file = Some(PathBuf::from("pattern.txt"));

        settings.merge_with_cli(&CliOverrides {
            preset: Some(1),
            max_generations: Some(50),
            refresh_rate: Some(0.0),
            ..Default::default()
        });

        assert_eq!(settings.simulation.preset, 1);
        assert_eq!(settings.simulation.pattern_file, None);
        assert_eq!(settings.simulation.max_generations, Some(50));
        assert_eq!(settings.display.refresh_rate, 0.0);
    }
}
