//! # Fluted CLI
//!
//! Command-line interface for rendering fluted-glass normal maps.
//!
//! ## Usage
//!
//! ```bash
//! # List available patterns and ridge profiles
//! fluted list
//!
//! # Render the default reeded glass to a PNG
//! fluted render --png reeds.png
//!
//! # Hexagonal bezels at 1024x1024
//! fluted render --pattern hexagon --profile bezel --density 8 --size 1024 --png hex.png
//!
//! # Start from a JSON parameter file and override one value
//! fluted render --params glass.json --set fluidity=0.4 --png poured.png
//!
//! # Random parameters with a random warp seed
//! fluted render --random --seed random --png surprise.png
//! ```
//!
//! Set `RUST_LOG=debug` for per-render timing.

use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use fluted::{
    FlutedError, NoisePrimitive, NormalMapRasterizer, ParameterSet,
    pattern::{PATTERNS, PatternType},
    render::preview,
    ridge::{PROFILES, RidgeProfile},
    shader::DEFAULT_SEED,
};

/// Fluted - procedural fluted-glass normal maps
#[derive(Parser, Debug)]
#[command(name = "fluted")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List available patterns and ridge profiles
    List,

    /// Render a normal map to a PNG file
    Render {
        /// Output PNG path
        #[arg(long, value_name = "FILE")]
        png: PathBuf,

        /// Raster side length in texels
        #[arg(long, default_value = "512")]
        size: u32,

        /// Noise seed for fluidity warping (a number, or "random")
        #[arg(long)]
        seed: Option<String>,

        /// JSON parameter file to start from
        #[arg(long, value_name = "FILE")]
        params: Option<PathBuf>,

        /// Start from random parameters
        #[arg(long, conflicts_with = "params")]
        random: bool,

        /// Pattern type
        #[arg(long)]
        pattern: Option<PatternType>,

        /// Ridge profile
        #[arg(long)]
        profile: Option<RidgeProfile>,

        /// Flutes per raster width
        #[arg(long)]
        density: Option<f64>,

        /// Sway cycles per raster height
        #[arg(long)]
        wave_frequency: Option<f64>,

        /// Sway amplitude
        #[arg(long)]
        wave_amplitude: Option<f64>,

        /// Kaleidoscope wedge count
        #[arg(long)]
        segments: Option<i32>,

        /// Bow toward the middle row
        #[arg(long, allow_hyphen_values = true)]
        curvature: Option<f64>,

        /// Domain warp amount
        #[arg(long)]
        fluidity: Option<f64>,

        /// Extra overrides as name=value (repeatable)
        #[arg(long = "set", value_name = "NAME=VALUE")]
        overrides: Vec<String>,
    },
}

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Install the fmt subscriber, filtered by `RUST_LOG` (default `info`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);
    Registry::default().with(filter).with(fmt_layer).init();
}

fn run() -> Result<(), FlutedError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            println!("Available patterns:");
            for pattern in PATTERNS {
                println!("  {}", pattern);
            }
            println!("\nAvailable ridge profiles:");
            for profile in PROFILES {
                println!("  {}", profile);
            }
        }
        Commands::Render {
            png,
            size,
            seed,
            params,
            random,
            pattern,
            profile,
            density,
            wave_frequency,
            wave_amplitude,
            segments,
            curvature,
            fluidity,
            overrides,
        } => {
            let mut p = match params {
                Some(path) => load_params(&path)?,
                None if random => ParameterSet::random(),
                None => ParameterSet::default(),
            };

            if let Some(v) = pattern {
                p.pattern_type = v;
            }
            if let Some(v) = profile {
                p.ridge_profile = v;
            }
            if let Some(v) = density {
                p.density = v;
            }
            if let Some(v) = wave_frequency {
                p.wave_frequency = v;
            }
            if let Some(v) = wave_amplitude {
                p.wave_amplitude = v;
            }
            if let Some(v) = segments {
                p.segment_count = v;
            }
            if let Some(v) = curvature {
                p.curvature = v;
            }
            if let Some(v) = fluidity {
                p.fluidity = v;
            }
            for item in &overrides {
                apply_override(&mut p, item)?;
            }

            let noise = match seed.as_deref() {
                None => NoisePrimitive::new(DEFAULT_SEED),
                Some("random") => NoisePrimitive::from_entropy(),
                Some(s) => NoisePrimitive::new(s.parse().map_err(|e| {
                    FlutedError::Config(format!("Invalid seed '{}': {}", s, e))
                })?),
            };

            println!("Generating {} ({}x{}, seed {})...", p, size, size, noise.seed());

            let map = NormalMapRasterizer::new(&noise).generate(&p, size)?;
            preview::save_png(&png, &map)?;
            println!("Saved to {}", png.display());
        }
    }

    Ok(())
}

/// Read a JSON parameter file.
fn load_params(path: &Path) -> Result<ParameterSet, FlutedError> {
    let text = std::fs::read_to_string(path)?;
    serde_json::from_str(&text)
        .map_err(|e| FlutedError::Config(format!("{}: {}", path.display(), e)))
}

/// Apply one `name=value` override.
fn apply_override(params: &mut ParameterSet, item: &str) -> Result<(), FlutedError> {
    let (name, value) = item
        .split_once('=')
        .ok_or_else(|| FlutedError::Config(format!("Expected NAME=VALUE, got '{}'", item)))?;
    params
        .set_param(name.trim(), value)
        .map_err(FlutedError::Config)
}
