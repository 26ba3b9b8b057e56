//! Command line runner for Conway's Game of Life

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life::{
    config::{parse_preset_id, parse_refresh_rate, CliOverrides, OutputFormat, Settings},
    game_of_life::{create_example_patterns, presets, save_pattern_to_file, save_snapshot_json},
    seed_universe,
    utils::{ColorOutput, GridFormatter, RenderStyle, Viewport},
    Universe,
};
use log::{debug, info, warn};
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "game_of_life")]
#[command(about = "Conway's Game of Life", after_help = "Ctrl + C to quit.")]
#[command(version = "0.1.0")]
struct Cli {
    /// Verbose logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate a pattern in the terminal
    Play {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Select preset by number (see `list`)
        #[arg(short, long, value_parser = parse_preset_id)]
        preset: Option<usize>,

        /// Seed from a pattern file instead of a preset
        #[arg(short = 'f', long)]
        pattern: Option<PathBuf>,

        /// Time per frame (seconds)
        #[arg(short, long, value_parser = parse_refresh_rate)]
        refresh_rate: Option<f64>,

        /// Stop after this many generations
        #[arg(short, long)]
        generations: Option<u64>,
    },

    /// Advance a pattern without animation and print the result
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Select preset by number (see `list`)
        #[arg(short, long, value_parser = parse_preset_id)]
        preset: Option<usize>,

        /// Seed from a pattern file instead of a preset
        #[arg(short = 'f', long)]
        pattern: Option<PathBuf>,

        /// Number of generations to advance
        #[arg(short, long, default_value_t = 100)]
        generations: u64,

        /// Output format (overrides config)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Save the result to the output directory
        #[arg(long)]
        save: bool,

        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the available presets
    List,

    /// Create a default configuration and example patterns
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Play { config, preset, pattern, refresh_rate, generations } => {
            let overrides = CliOverrides {
                preset,
                pattern_file: pattern,
                max_generations: generations,
                refresh_rate,
                ..Default::default()
            };
            play_command(config, overrides)
        }
        Commands::Run { config, preset, pattern, generations, format, save, output } => {
            let overrides = CliOverrides {
                preset,
                pattern_file: pattern,
                output_dir: output,
                format: format.map(OutputFormat::from),
                ..Default::default()
            };
            run_command(config, overrides, generations, save)
        }
        Commands::List => {
            print!("{}", menu_text());
            Ok(())
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// Load the config file if present, apply overrides and validate
fn load_settings(config_path: &PathBuf, overrides: &CliOverrides) -> Result<Settings> {
    let mut settings = if config_path.exists() {
        Settings::parse_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        warn!("config file {} not found, using defaults", config_path.display());
        Settings::default()
    };

    settings.merge_with_cli(overrides);
    settings.validate().context("Configuration validation failed")?;
    Ok(settings)
}

fn menu_text() -> String {
    presets::menu_entries()
        .into_iter()
        .map(|(id, name)| format!("{}. {}\n", id, name))
        .collect()
}

fn play_command(config_path: PathBuf, overrides: CliOverrides) -> Result<()> {
    let settings = load_settings(&config_path, &overrides)?;
    let mut universe = seed_universe(&settings)?;

    let mut viewport = settings.viewport()?;
    if settings.display.center {
        viewport = viewport.centered_on(universe.grid());
    }
    let style = settings.render_style();
    info!(
        "playing {} live cells at {:.2}s per frame",
        universe.population(),
        settings.display.refresh_rate
    );

    let stdout = std::io::stdout();
    let frames = play_loop(&mut universe, &settings, &viewport, &style, &mut stdout.lock())?;
    debug!("drew {} frames", frames);
    Ok(())
}

/// Draw, stop check, step, pace; returns the number of frames drawn.
/// Runs until a configured stop condition holds or the process is interrupted.
fn play_loop<W: Write>(
    universe: &mut Universe,
    settings: &Settings,
    viewport: &Viewport,
    style: &RenderStyle,
    out: &mut W,
) -> Result<u64> {
    let frame_time = Duration::from_secs_f64(settings.display.refresh_rate);
    let mut frames = 0;

    loop {
        let started = Instant::now();
        write!(out, "{}", GridFormatter::frame(universe, viewport, style))?;
        out.flush()?;
        frames += 1;

        if settings
            .simulation
            .max_generations
            .is_some_and(|max| universe.generation() >= max)
        {
            break;
        }
        if settings.simulation.stop_when_extinct && universe.is_extinct() {
            info!("extinct at generation {}", universe.generation());
            break;
        }

        universe.step();
        debug!(
            "generation {}: {} live cells",
            universe.generation(),
            universe.population()
        );

        if let Some(remaining) = frame_time.checked_sub(started.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    Ok(frames)
}

fn run_command(
    config_path: PathBuf,
    overrides: CliOverrides,
    generations: u64,
    save: bool,
) -> Result<()> {
    let settings = load_settings(&config_path, &overrides)?;
    let mut universe = seed_universe(&settings)?;

    let start_time = Instant::now();
    universe.advance(generations);
    info!(
        "advanced {} generations in {:.3}s",
        generations,
        start_time.elapsed().as_secs_f64()
    );

    match settings.output.format {
        OutputFormat::Text => {
            println!("{}", ColorOutput::info(&format!(
                "Generation {} (living: {})",
                universe.generation(),
                universe.population()
            )));
            print!("{}", GridFormatter::format_grid_compact(universe.grid()));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&universe.snapshot())?);
        }
    }

    if save {
        let dir = &settings.output.directory;
        let path = match settings.output.format {
            OutputFormat::Text => {
                let path = dir.join(format!("generation_{:06}.txt", universe.generation()));
                save_pattern_to_file(universe.grid(), &path)?;
                path
            }
            OutputFormat::Json => {
                let path = dir.join(format!("generation_{:06}.json", universe.generation()));
                save_snapshot_json(&universe.snapshot(), &path)?;
                path
            }
        };
        println!("{}", ColorOutput::success(&format!("Saved to {}", path.display())));
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("patterns");

    for dir in [&config_dir, &patterns_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_patterns(&patterns_dir)
        .context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    let mut glider_config = Settings::default();
    glider_config.simulation.pattern_file = Some(patterns_dir.join("glider.txt"));
    glider_config.simulation.max_generations = Some(200);
    glider_config.display.refresh_rate = 0.1;
    glider_config.to_file(&config_dir.join("glider.yaml"))?;

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: game_of_life play --config {}", config_path.display());

    Ok(())
}
