//! Stroke styling for route polylines.

use crate::model::RouteStep;

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    /// Neutral fallback used whenever a line color is missing or unusable.
    pub const GRAY: Color = Color {
        r: 128,
        g: 128,
        b: 128,
    };

    /// Parse a `RRGGBB` hex string, with or without a leading `#`.
    /// Anything that is not exactly six hex digits falls back to gray so a
    /// bad line color never fails the whole render.
    pub fn parse_hex(input: &str) -> Color {
        let trimmed = input.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Color::GRAY;
        }
        u32::from_str_radix(hex, 16).map_or(Color::GRAY, |value| Color {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        })
    }

    /// CSS-style `#rrggbb` form for serialization.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Stroke width and color for one drawn path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub width: f32,
    pub color: Color,
}

impl StrokeStyle {
    /// Transit steps draw wide in the line's color (black when the line
    /// declares none); every other step draws narrow in gray.
    pub fn for_step(step: &RouteStep) -> StrokeStyle {
        match &step.transit {
            Some(details) => StrokeStyle {
                width: 10.0,
                color: details
                    .line_color
                    .as_deref()
                    .map_or(Color::BLACK, Color::parse_hex),
            },
            None => StrokeStyle {
                width: 5.0,
                color: Color::GRAY,
            },
        }
    }
}
