//! Color values as the editor stores them, and their RGBA form for painting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{ImprintError, ImprintResult};

/// RGBA color (0.0-1.0 range)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        match hex.len() {
            3 => Some(Self::rgba_u8(nibble(0)?, nibble(1)?, nibble(2)?, 255)),
            4 => Some(Self::rgba_u8(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
            6 => Some(Self::rgba_u8(byte(0)?, byte(2)?, byte(4)?, 255)),
            8 => Some(Self::rgba_u8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Format as `#rrggbb`, dropping alpha
    pub fn to_hex(&self) -> String {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
}

/// A CSS color value, kept exactly as entered.
///
/// Accepts hex notation, `rgb()`/`rgba()`/`hsl()`/`hsla()` and named colors.
/// The text is never normalized, so a solid background serializes back to the
/// very string it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CssColor(String);

const COLOR_FUNCTIONS: [&str; 4] = ["rgb(", "rgba(", "hsl(", "hsla("];

impl CssColor {
    pub fn parse(value: impl Into<String>) -> ImprintResult<Self> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(ImprintError::invalid_input("color value is empty"));
        }
        if trimmed.len() != value.len() {
            return Err(ImprintError::invalid_input(format!(
                "color value {:?} has surrounding whitespace",
                value
            )));
        }

        let valid = if trimmed.starts_with('#') {
            Color::from_hex(trimmed).is_some()
        } else if let Some(func) = COLOR_FUNCTIONS
            .iter()
            .find(|f| trimmed.to_ascii_lowercase().starts_with(*f))
        {
            trimmed.ends_with(')') && trimmed.len() > func.len() + 1
        } else {
            trimmed.chars().all(|c| c.is_ascii_alphabetic())
        };

        if !valid {
            return Err(ImprintError::invalid_input(format!(
                "unrecognized color value {:?}",
                value
            )));
        }

        Ok(Self(value))
    }

    /// Catalog entries are written by hand and covered by tests
    pub(crate) fn from_static(value: &'static str) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// RGBA value for painting, when the color is in hex notation or a basic named color
    pub fn to_rgba(&self) -> Option<Color> {
        if self.0.starts_with('#') {
            return Color::from_hex(&self.0);
        }

        match self.0.to_ascii_lowercase().as_str() {
            "white" => Some(Color::WHITE),
            "black" => Some(Color::BLACK),
            "transparent" => Some(Color::TRANSPARENT),
            "red" => Some(Color::rgba_u8(255, 0, 0, 255)),
            "green" => Some(Color::rgba_u8(0, 128, 0, 255)),
            "blue" => Some(Color::rgba_u8(0, 0, 255, 255)),
            "yellow" => Some(Color::rgba_u8(255, 255, 0, 255)),
            "gray" | "grey" => Some(Color::rgba_u8(128, 128, 128, 255)),
            _ => None,
        }
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CssColor {
    type Err = ImprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CssColor {
    type Error = ImprintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<CssColor> for String {
    fn from(color: CssColor) -> Self {
        color.0
    }
}
