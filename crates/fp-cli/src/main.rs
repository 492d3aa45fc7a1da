//! Floorplan viewer
//!
//! Generates one or more floors and prints them to the terminal.

mod render;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;
use thiserror::Error;

use fp_core::{generate_seeded, FloorRng, FloorplanError, GenerateOptions, OptionsError};
use render::{render_floor, summary, GlyphStyle, RenderOptions};

/// Generate and print 10x10 dungeon floorplans
#[derive(Parser, Debug)]
#[command(name = "floorplan")]
#[command(author, version, about = "Generate a 10x10 dungeon floorplan", long_about = None)]
struct Args {
    /// Seed of the first floor; floor N uses seed + N - 1 (random if omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Options file (OPTIONS=max_rooms:15,min_rooms:7)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Write the effective options to this file
    #[arg(long = "save-config")]
    save_config: Option<PathBuf>,

    /// Cap on total rooms
    #[arg(long = "max-rooms")]
    max_rooms: Option<usize>,

    /// Fewest rooms a floor may have
    #[arg(long = "min-rooms")]
    min_rooms: Option<usize>,

    /// Generation attempts before giving up
    #[arg(long = "max-attempts")]
    max_attempts: Option<usize>,

    /// Number of floors to generate
    #[arg(short = 'n', long = "count", default_value_t = 1)]
    count: usize,

    /// Show room-type codes instead of icons
    #[arg(long = "codes")]
    codes: bool,

    /// Use emoji icons
    #[arg(short = 'e', long = "emoji")]
    emoji: bool,

    /// Print each floor as a JSON array of room-type codes
    #[arg(long = "json")]
    json: bool,

    /// Disable colour output
    #[arg(long = "no-color")]
    no_color: bool,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Options(#[from] OptionsError),

    #[error(transparent)]
    Generation(#[from] FloorplanError),

    #[error("output error: {0}")]
    Io(#[from] io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Args {
    /// Defaults, then the config file, then command-line flags
    fn generate_options(&self) -> Result<GenerateOptions, CliError> {
        let mut options = match &self.config {
            Some(path) => GenerateOptions::load_from_file(path)?,
            None => GenerateOptions::default(),
        };
        if let Some(max_rooms) = self.max_rooms {
            options.max_rooms = max_rooms;
        }
        if let Some(min_rooms) = self.min_rooms {
            options.min_rooms = min_rooms;
        }
        if let Some(max_attempts) = self.max_attempts {
            options.max_attempts = max_attempts;
        }
        Ok(options)
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            glyphs: if self.emoji {
                GlyphStyle::Emoji
            } else {
                GlyphStyle::Ascii
            },
            show_codes: self.codes,
            color: !self.no_color,
        }
    }
}

/// Seed of each floor in a run starting at `base`
fn floor_seeds(base: u64, count: usize) -> impl Iterator<Item = u64> {
    (0..count as u64).map(move |n| base.wrapping_add(n))
}

fn run(args: &Args) -> Result<(), CliError> {
    let options = args.generate_options()?;
    options.validate()?;

    if let Some(path) = &args.save_config {
        options.save_to_file(path)?;
        info!("saved options to {}", path.display());
    }

    let base = args
        .seed
        .unwrap_or_else(|| FloorRng::from_entropy().seed());
    info!("generating {} floor(s) from seed {}", args.count, base);

    let render_options = args.render_options();
    let mut out = io::stdout().lock();
    for (n, seed) in floor_seeds(base, args.count).enumerate() {
        let floor = generate_seeded(&options, seed)?;

        if args.json {
            writeln!(out, "{}", serde_json::to_string(&floor)?)?;
            continue;
        }

        if n > 0 {
            writeln!(out)?;
        }
        writeln!(out, "floor {} (seed {})", n + 1, seed)?;
        writeln!(out, "{}", render_floor(&floor, &render_options))?;
        writeln!(out, "{}", summary(&floor))?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default = if args.verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp_secs()
        .try_init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
