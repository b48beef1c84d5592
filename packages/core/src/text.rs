//! Template text style: font family, weight, size and color

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::catalog;
use crate::color::CssColor;
use crate::{ImprintError, ImprintResult};

pub const MIN_FONT_SIZE: u32 = 1;
pub const MAX_FONT_SIZE: u32 = 1000;

/// CSS numeric font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum FontWeight {
    Thin,
    ExtraLight,
    Light,
    Normal,
    Medium,
    SemiBold,
    Bold,
    ExtraBold,
    Black,
}

impl FontWeight {
    pub const ALL: [FontWeight; 9] = [
        FontWeight::Thin,
        FontWeight::ExtraLight,
        FontWeight::Light,
        FontWeight::Normal,
        FontWeight::Medium,
        FontWeight::SemiBold,
        FontWeight::Bold,
        FontWeight::ExtraBold,
        FontWeight::Black,
    ];

    pub fn value(self) -> u16 {
        match self {
            FontWeight::Thin => 100,
            FontWeight::ExtraLight => 200,
            FontWeight::Light => 300,
            FontWeight::Normal => 400,
            FontWeight::Medium => 500,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
            FontWeight::ExtraBold => 800,
            FontWeight::Black => 900,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FontWeight::Thin => "Thin",
            FontWeight::ExtraLight => "Extra Light",
            FontWeight::Light => "Light",
            FontWeight::Normal => "Normal",
            FontWeight::Medium => "Medium",
            FontWeight::SemiBold => "Semi Bold",
            FontWeight::Bold => "Bold",
            FontWeight::ExtraBold => "Extra Bold",
            FontWeight::Black => "Black",
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u16> for FontWeight {
    type Error = ImprintError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        FontWeight::ALL
            .into_iter()
            .find(|w| w.value() == value)
            .ok_or_else(|| ImprintError::invalid_input(format!("unsupported font weight {}", value)))
    }
}

impl From<FontWeight> for u16 {
    fn from(weight: FontWeight) -> Self {
        weight.value()
    }
}

/// Fonts the renderer ships
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    #[default]
    Inter,
    Roboto,
    OpenSans,
    PlayfairDisplay,
    FiraCode,
}

impl FontFamily {
    pub const ALL: [FontFamily; 5] = [
        FontFamily::Inter,
        FontFamily::Roboto,
        FontFamily::OpenSans,
        FontFamily::PlayfairDisplay,
        FontFamily::FiraCode,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FontFamily::Inter => "Inter",
            FontFamily::Roboto => "Roboto",
            FontFamily::OpenSans => "Open Sans",
            FontFamily::PlayfairDisplay => "Playfair Display",
            FontFamily::FiraCode => "Fira Code",
        }
    }

    /// Generic family used when the font is not available
    pub fn fallback(self) -> &'static str {
        match self {
            FontFamily::PlayfairDisplay => "serif",
            FontFamily::FiraCode => "monospace",
            _ => "sans-serif",
        }
    }

    /// Ascending
    pub fn weights(self) -> &'static [FontWeight] {
        use FontWeight::*;
        match self {
            FontFamily::Inter => &FontWeight::ALL,
            FontFamily::Roboto => &[Thin, Light, Normal, Medium, Bold, Black],
            FontFamily::OpenSans => &[Light, Normal, Medium, SemiBold, Bold, ExtraBold],
            FontFamily::PlayfairDisplay => &[Normal, Medium, SemiBold, Bold, ExtraBold, Black],
            FontFamily::FiraCode => &[Light, Normal, Medium, SemiBold, Bold],
        }
    }

    pub fn supports(self, weight: FontWeight) -> bool {
        self.weights().contains(&weight)
    }

    /// Closest weight the family offers, preferring the heavier one on a tie
    pub fn nearest_weight(self, weight: FontWeight) -> FontWeight {
        let target = i32::from(weight.value());
        self.weights()
            .iter()
            .copied()
            .min_by_key(|w| ((i32::from(w.value()) - target).abs(), -i32::from(w.value())))
            .unwrap_or(weight)
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_family: FontFamily,
    pub font_weight: FontWeight,
    /// Pixels
    pub font_size: u32,
    pub color: CssColor,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: FontFamily::Inter,
            font_weight: FontWeight::Bold,
            font_size: 48,
            color: CssColor::from_static(catalog::TEXT_COLORS[0]),
        }
    }
}

impl TextStyle {
    /// CSS `font` shorthand, e.g. `700 48px "Inter", sans-serif`
    pub fn font_shorthand(&self) -> String {
        format!(
            "{} {}px \"{}\", {}",
            self.font_weight.value(),
            self.font_size,
            self.font_family.label(),
            self.font_family.fallback()
        )
    }

    /// Enforce the weight and size invariants
    pub fn sanitized(self) -> ImprintResult<Self> {
        if !self.font_family.supports(self.font_weight) {
            return Err(ImprintError::invalid_input(format!(
                "{} does not offer weight {}",
                self.font_family.label(),
                self.font_weight.value()
            )));
        }
        Ok(Self {
            font_size: self.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE),
            ..self
        })
    }
}

/// A single edit from the text settings controls
#[derive(Debug, Clone, PartialEq)]
pub enum TextPatch {
    SetFontFamily(FontFamily),
    SetFontWeight(FontWeight),
    SetFontSize(u32),
    SetColor(CssColor),
}

pub fn apply_text_patch(current: &TextStyle, patch: TextPatch) -> ImprintResult<TextStyle> {
    debug!("Applying text patch: {:?}", patch);

    let next = match patch {
        TextPatch::SetFontFamily(font_family) => TextStyle {
            font_family,
            font_weight: font_family.nearest_weight(current.font_weight),
            ..current.clone()
        },
        TextPatch::SetFontWeight(font_weight) => TextStyle {
            font_weight,
            ..current.clone()
        },
        TextPatch::SetFontSize(font_size) => TextStyle {
            font_size,
            ..current.clone()
        },
        TextPatch::SetColor(color) => TextStyle {
            color,
            ..current.clone()
        },
    };

    next.sanitized()
}

/// Parse the font size field. Only whole positive numbers are accepted.
pub fn parse_font_size(input: &str) -> ImprintResult<u32> {
    let size: u32 = input
        .trim()
        .parse()
        .map_err(|_| ImprintError::invalid_input(format!("font size {:?} is not a number", input)))?;
    Ok(size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE))
}
