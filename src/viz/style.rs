//! Fixed brand colors, the series palette and per-series line styling.
//!
//! Colors are plain `Rgb8` values so they can be serialized and compared in tests;
//! `viz::adapter` turns them into plotters colors at draw time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ChartError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Parses `#RRGGBB` or `RRGGBB`.
impl FromStr for Rgb8 {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ChartError::InvalidParameter(format!(
                "expected a color like #RRGGBB, got {s:?}"
            )));
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        match (channel(0), channel(2), channel(4)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Rgb8 { r, g, b }),
            _ => Err(ChartError::InvalidParameter(format!("bad hex color {s:?}"))),
        }
    }
}

// ------------------------ Brand constants ------------------------

/// Header rule and tab.
pub const ACCENT_RED: Rgb8 = Rgb8::new(0xE3, 0x12, 0x0B);
/// Major gridlines.
pub const GRID_GRAY: Rgb8 = Rgb8::new(0x75, 0x8D, 0x99);
pub const GRID_ALPHA: f64 = 0.6;
pub const GRID_WIDTH_PT: f64 = 0.8;
/// Default bar fill.
pub const BAR_BLUE: Rgb8 = Rgb8::new(0x00, 0x6B, 0xA2);
pub const INK: Rgb8 = Rgb8::new(0, 0, 0);
pub const WHITE: Rgb8 = Rgb8::new(0xFF, 0xFF, 0xFF);

pub const SPINE_WIDTH_PT: f64 = 0.8;
/// The one spine a bar chart keeps is drawn slightly heavier.
pub const BAR_SPINE_WIDTH_PT: f64 = 1.1;
pub const ACCENT_RULE_WIDTH_PT: f64 = 0.6;

pub const TITLE_ALPHA: f64 = 0.8;
pub const SOURCE_ALPHA: f64 = 0.7;

/// Series palette, in the order lines are colored when the caller gives no color.
/// Order: blue, cyan, green, mustard, olive, mauve, sand, gray.
const SERIES_PALETTE: [Rgb8; 8] = [
    Rgb8::new(0x00, 0x6B, 0xA2), // blue      (#006BA2)
    Rgb8::new(0x3E, 0xBC, 0xD2), // cyan      (#3EBCD2)
    Rgb8::new(0x37, 0x9A, 0x8B), // green     (#379A8B)
    Rgb8::new(0xEB, 0xB4, 0x34), // mustard   (#EBB434)
    Rgb8::new(0xB4, 0xBA, 0x39), // olive     (#B4BA39)
    Rgb8::new(0x9A, 0x60, 0x7F), // mauve     (#9A607F)
    Rgb8::new(0xD1, 0xB0, 0x7C), // sand      (#D1B07C)
    Rgb8::new(0x75, 0x8D, 0x99), // gray      (#758D99)
];

/// Get a color from the series palette.
#[inline]
pub fn series_color(idx: usize) -> Rgb8 {
    SERIES_PALETTE[idx % SERIES_PALETTE.len()]
}

/// Stroke of a line series. Widths are in points so they scale with DPI.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: Option<Rgb8>,
    pub alpha: f64,
    pub width_pt: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: None,
            alpha: 1.0,
            width_pt: 1.5,
        }
    }
}

impl LineStyle {
    pub fn color(mut self, color: Rgb8) -> Self {
        self.color = Some(color);
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    pub fn width(mut self, width_pt: f64) -> Self {
        self.width_pt = width_pt;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parses_with_and_without_hash() {
        assert_eq!("#E3120B".parse::<Rgb8>().unwrap(), ACCENT_RED);
        assert_eq!("006ba2".parse::<Rgb8>().unwrap(), BAR_BLUE);
        assert!("#12345".parse::<Rgb8>().is_err());
        assert!("#GG0000".parse::<Rgb8>().is_err());
    }

    #[test]
    fn palette_wraps() {
        assert_eq!(series_color(0), series_color(8));
        assert_eq!(ACCENT_RED.to_hex(), "#E3120B");
    }
}
