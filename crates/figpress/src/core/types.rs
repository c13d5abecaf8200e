//! Shared drawing types: colors, text and shape styles

use std::fmt;

use serde::{Deserialize, Serialize};

/// 24-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const GREY: Rgb = Rgb(128, 128, 128);
    pub const LIGHT_GREY: Rgb = Rgb(211, 211, 211);
    pub const WHITE_SMOKE: Rgb = Rgb(245, 245, 245);
    pub const BEIGE: Rgb = Rgb(245, 245, 220);
    pub const NAVY_HEADER: Rgb = Rgb(0x40, 0x46, 0x6e);
    pub const SKY_BLUE: Rgb = Rgb(135, 206, 235);
    pub const LIGHT_BLUE: Rgb = Rgb(173, 216, 230);
    pub const LIGHT_GREEN: Rgb = Rgb(144, 238, 144);
    pub const LIGHT_CORAL: Rgb = Rgb(240, 128, 128);
    pub const LIGHT_GOLDENROD_YELLOW: Rgb = Rgb(250, 250, 210);
    pub const GOLD: Rgb = Rgb(255, 215, 0);
    pub const SALMON_PINK: Rgb = Rgb(0xff, 0x99, 0x99);
    pub const CORNFLOWER: Rgb = Rgb(0x66, 0xb3, 0xff);
    pub const SLATE: Rgb = Rgb(0x2c, 0x3e, 0x50);
    pub const SLATE_LIGHT: Rgb = Rgb(0x34, 0x49, 0x5e);
    pub const NAVY: Rgb = Rgb(0, 0, 128);
    pub const STEEL_BLUE: Rgb = Rgb(70, 130, 180);
    pub const DARK_SLATE_GREY: Rgb = Rgb(47, 79, 79);
    pub const PURPLE: Rgb = Rgb(128, 0, 128);
    pub const DARK_GREEN: Rgb = Rgb(0, 100, 0);
    pub const SIENNA: Rgb = Rgb(160, 82, 45);

    /// Parse `#rrggbb` or `rrggbb`
    pub fn from_hex(text: &str) -> Option<Rgb> {
        let hex = text.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// The ten-color categorical palette used for chart series
pub const TAB10: [Rgb; 10] = [
    Rgb(0x1f, 0x77, 0xb4),
    Rgb(0xff, 0x7f, 0x0e),
    Rgb(0x2c, 0xa0, 0x2c),
    Rgb(0xd6, 0x27, 0x28),
    Rgb(0x94, 0x67, 0xbd),
    Rgb(0x8c, 0x56, 0x4b),
    Rgb(0xe3, 0x77, 0xc2),
    Rgb(0x7f, 0x7f, 0x7f),
    Rgb(0xbc, 0xbd, 0x22),
    Rgb(0x17, 0xbe, 0xcf),
];

/// Palette color for series `index`, cycling after ten
pub fn tab10(index: usize) -> Rgb {
    TAB10[index % TAB10.len()]
}

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    Start,
    #[default]
    Middle,
    End,
}

impl Anchor {
    pub fn as_svg(&self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// Vertical placement of a text block relative to its anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Baseline {
    /// The block extends upward from the point
    Bottom,
    #[default]
    Center,
    /// The block extends downward from the point
    Top,
}

/// Text appearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
    pub color: Rgb,
    pub anchor: Anchor,
    pub baseline: Baseline,
    /// Clockwise rotation in degrees around the anchor point
    pub rotate: f64,
}

impl TextStyle {
    pub fn new(size: f64) -> Self {
        Self {
            size,
            bold: false,
            italic: false,
            color: Rgb::BLACK,
            anchor: Anchor::Middle,
            baseline: Baseline::Center,
            rotate: 0.0,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn baseline(mut self, baseline: Baseline) -> Self {
        self.baseline = baseline;
        self
    }

    pub fn rotate(mut self, degrees: f64) -> Self {
        self.rotate = degrees;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(10.0)
    }
}

/// Fill and outline of a closed shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub fill: Option<Rgb>,
    pub fill_opacity: f64,
    pub stroke: Option<Rgb>,
    pub stroke_width: f64,
    pub corner_radius: f64,
}

impl ShapeStyle {
    /// Filled shape with a thin black outline
    pub fn filled(fill: Rgb) -> Self {
        Self {
            fill: Some(fill),
            fill_opacity: 1.0,
            stroke: Some(Rgb::BLACK),
            stroke_width: 1.0,
            corner_radius: 0.0,
        }
    }

    /// Unfilled outline
    pub fn outline(stroke: Rgb) -> Self {
        Self {
            fill: None,
            fill_opacity: 1.0,
            stroke: Some(stroke),
            stroke_width: 1.0,
            corner_radius: 0.0,
        }
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = opacity;
        self
    }

    pub fn rounded(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn stroke(mut self, stroke: Option<Rgb>, width: f64) -> Self {
        self.stroke = stroke;
        self.stroke_width = width;
        self
    }
}

/// Stroke of an open line or arrow shaft
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: Rgb,
    pub width: f64,
    pub dashed: bool,
    pub opacity: f64,
}

impl LineStyle {
    pub fn solid(color: Rgb, width: f64) -> Self {
        Self {
            color,
            width,
            dashed: false,
            opacity: 1.0,
        }
    }

    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::solid(Rgb::BLACK, 1.0)
    }
}

/// Arrowhead placement for [`crate::core::SvgCanvas::arrow`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowHeads {
    End,
    Both,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_hex_round_trip() {
        assert_eq!(Rgb::NAVY_HEADER.to_string(), "#40466e");
        assert_eq!(Rgb::from_hex("#2C3E50"), Some(Rgb::SLATE));
        assert_eq!(Rgb::from_hex("2c3e50"), Some(Rgb::SLATE));
        assert_eq!(Rgb::from_hex("#2c3e5"), None);
        assert_eq!(Rgb::from_hex("zzzzzz"), None);
    }

    #[test]
    fn test_tab10_cycles() {
        assert_eq!(tab10(0), tab10(10));
        assert_ne!(tab10(0), tab10(1));
    }

    #[test]
    fn test_text_style_builder() {
        let style = TextStyle::new(14.0).bold().anchor(Anchor::Start).rotate(-90.0);
        assert!(style.bold);
        assert!(!style.italic);
        assert_eq!(style.anchor.as_svg(), "start");
        assert_eq!(style.rotate, -90.0);
    }
}
