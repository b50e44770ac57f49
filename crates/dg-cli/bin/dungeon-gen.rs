//! Dungeon generator
//!
//! Generates one level and prints it as ASCII art or JSON.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

use dg_core::{generate_dungeon, GameRng, GeneratorConfig};

/// Room-addition dungeon generator
#[derive(Parser, Debug)]
#[command(name = "dungeon-gen")]
#[command(author, version, about = "Generate a connected dungeon level", long_about = None)]
struct Args {
    /// JSON file with generator tunables; missing fields use defaults
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Map width in cells
    #[arg(short = 'W', long = "width")]
    width: Option<usize>,

    /// Map height in cells
    #[arg(short = 'H', long = "height")]
    height: Option<usize>,

    /// RNG seed (random if omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Maximum number of rooms
    #[arg(long = "max-rooms")]
    max_rooms: Option<usize>,

    /// Skip the shortcut pass
    #[arg(long = "no-shortcuts")]
    no_shortcuts: bool,

    /// Print the level, its rooms and seed as JSON
    #[arg(long = "json")]
    json: bool,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Args {
    fn generator_config(&self) -> anyhow::Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => GeneratorConfig::default(),
        };
        if let Some(width) = self.width {
            config.map_width = width;
        }
        if let Some(height) = self.height {
            config.map_height = height;
        }
        if let Some(max_rooms) = self.max_rooms {
            config.max_num_rooms = max_rooms;
        }
        if self.no_shortcuts {
            config.include_shortcuts = false;
        }
        Ok(config)
    }
}

fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn log_config() -> simplelog::Config {
    simplelog::ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .build()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    simplelog::TermLogger::init(
        log_level(args.verbose),
        log_config(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let config = args.generator_config()?;
    let mut rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    log::info!("seed {}", rng.seed());

    let dungeon = generate_dungeon(&config, &mut rng).context("generating dungeon")?;
    log::info!(
        "{}x{} level with {} rooms and {} shortcuts",
        dungeon.width(),
        dungeon.height(),
        dungeon.rooms.len(),
        dungeon.shortcuts
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&dungeon)?);
    } else {
        print!("{dungeon}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use simplelog::SharedLogger;

    #[test]
    fn test_terminal_logger_follows_verbosity() {
        for (verbose, expected) in [(false, LevelFilter::Info), (true, LevelFilter::Debug)] {
            let logger = simplelog::TermLogger::new(
                log_level(verbose),
                log_config(),
                simplelog::TerminalMode::Stderr,
                simplelog::ColorChoice::Never,
            );
            assert_eq!(logger.level(), expected);
        }
    }

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from([
            "dungeon-gen",
            "--width",
            "60",
            "-H",
            "45",
            "--max-rooms",
            "3",
            "--no-shortcuts",
        ]);
        let config = args.generator_config().unwrap();
        assert_eq!((config.map_width, config.map_height), (60, 45));
        assert_eq!(config.max_num_rooms, 3);
        assert!(!config.include_shortcuts);
        assert_eq!(config.shortcut_length, GeneratorConfig::default().shortcut_length);
    }

    #[test]
    fn test_missing_config_file_is_reported() {
        let args = Args::parse_from(["dungeon-gen", "--config", "/definitely/not/here.json"]);
        let err = args.generator_config().unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
