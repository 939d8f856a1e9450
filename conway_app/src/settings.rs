// settings.rs - Command-line configuration for the app

use std::time::Duration;

use clap::Parser;
use conway::color::{DEFAULT_HUE, DEFAULT_INTENSITY, HUE_RANGE, INTENSITY_RANGE};
use conway::{GridSize, Pattern, patterns};

const DEFAULT_INTERVAL_MS: u64 = 100;

#[derive(Parser, Debug)]
#[command(name = "conway_app", about = "Conway's Game of Life on a wrap-around grid")]
pub struct Args {
    /// Grid size as HEIGHTxWIDTH.
    #[arg(long, value_name = "HEIGHTxWIDTH", default_value_t = GridSize::default())]
    pub size: GridSize,

    /// Milliseconds between animation ticks.
    #[arg(
        long = "interval-ms",
        value_name = "MILLISECONDS",
        default_value_t = DEFAULT_INTERVAL_MS,
        value_parser = clap::value_parser!(u64).range(1..=10_000)
    )]
    pub interval_ms: u64,

    /// Initial hue of live cells, in radians.
    #[arg(long, default_value_t = DEFAULT_HUE, value_parser = parse_hue)]
    pub hue: f64,

    /// Initial intensity of live cells, 0 to 1.
    #[arg(long, default_value_t = DEFAULT_INTENSITY, value_parser = parse_intensity)]
    pub intensity: f64,

    /// Seed for the random grids; taken from the OS when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start from a named pattern instead of a random grid.
    #[arg(long, value_parser = parse_pattern)]
    pub pattern: Option<&'static Pattern>,
}

fn parse_in_range(value: &str, range: std::ops::RangeInclusive<f64>) -> Result<f64, String> {
    let v: f64 = value.parse().map_err(|e| format!("{e}"))?;
    if range.contains(&v) {
        Ok(v)
    } else {
        Err(format!("{v} is outside {}..={}", range.start(), range.end()))
    }
}

fn parse_hue(value: &str) -> Result<f64, String> {
    parse_in_range(value, HUE_RANGE)
}

fn parse_intensity(value: &str) -> Result<f64, String> {
    parse_in_range(value, INTENSITY_RANGE)
}

fn parse_pattern(value: &str) -> Result<&'static Pattern, conway::GridError> {
    patterns::find(value)
}

/// Resolved start-up settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub size: GridSize,
    pub interval: Duration,
    pub hue: f64,
    pub intensity: f64,
    pub seed: Option<u64>,
    pub pattern: Option<&'static Pattern>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size: GridSize::default(),
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            hue: DEFAULT_HUE,
            intensity: DEFAULT_INTENSITY,
            seed: None,
            pattern: None,
        }
    }
}

impl From<Args> for Settings {
    fn from(args: Args) -> Self {
        Self {
            size: args.size,
            interval: Duration::from_millis(args.interval_ms),
            hue: args.hue,
            intensity: args.intensity,
            seed: args.seed,
            pattern: args.pattern,
        }
    }
}
