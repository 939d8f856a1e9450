// color.rs - Rainbow hue mapping and grid rasterisation

use std::f64::consts::{PI, TAU};
use std::ops::RangeInclusive;

use crate::grid::Grid;

/// Initial hue slider position.
pub const DEFAULT_HUE: f64 = 1.5;
/// Initial intensity slider position. Zero renders live cells black.
pub const DEFAULT_INTENSITY: f64 = 0.0;

pub const HUE_RANGE: RangeInclusive<f64> = 0.0..=TAU;
pub const INTENSITY_RANGE: RangeInclusive<f64> = 0.0..=1.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

fn channel(intensity: f64, phase: f64) -> u8 {
    // `as` saturates, so intensities outside [0, 1] clamp to the u8 range
    (intensity * 255.0 * (1.0 + phase.sin()) / 2.0).round() as u8
}

/// Maps a hue in `[0, 2π]` and an intensity in `[0, 1]` to a color.
///
/// The three channels are the same sinusoid shifted by 2π/3 and 4π/3, so
/// sweeping the hue cycles through the rainbow.
pub fn rainbow_color(hue: f64, intensity: f64) -> Rgb {
    Rgb {
        r: channel(intensity, hue),
        g: channel(intensity, hue + 2.0 * PI / 3.0),
        b: channel(intensity, hue + 4.0 * PI / 3.0),
    }
}

/// Row-major frame for `grid`: live cells get `live`, dead cells are white.
pub fn raster(grid: &Grid, live: Rgb) -> Vec<Rgb> {
    grid.cells()
        .iter()
        .map(|c| if c.is_alive() { live } else { Rgb::WHITE })
        .collect()
}
