//! Template background descriptions
//!
//! A background is either a linear gradient or a solid color. Both carry a
//! noise level; only gradients carry a direction, color stops and the optional
//! grid overlay. The variants hold only their own fields, so a description can
//! never mix the two.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog;
use crate::color::CssColor;
use crate::error::clamp_finite;
use crate::{ImprintError, ImprintResult};

pub mod patch;
pub mod shorthand;

pub use patch::{
    apply_patch, BackgroundPatch, GridOverlayDefaults, DEFAULT_LINEAR_GRADIENT_DIRECTION,
    GRID_OVERLAY_DEFAULT,
};
pub use shorthand::{to_background_shorthand, OverlayLayer, RenderedBackground};

/// Direction of a linear gradient, one of the eight compass keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GradientDirection {
    #[serde(rename = "to top")]
    ToTop,
    #[serde(rename = "to top right")]
    #[default]
    ToTopRight,
    #[serde(rename = "to right")]
    ToRight,
    #[serde(rename = "to bottom right")]
    ToBottomRight,
    #[serde(rename = "to bottom")]
    ToBottom,
    #[serde(rename = "to bottom left")]
    ToBottomLeft,
    #[serde(rename = "to left")]
    ToLeft,
    #[serde(rename = "to top left")]
    ToTopLeft,
}

impl GradientDirection {
    /// Clockwise from the top, matching the order of the direction picker
    pub const ALL: [GradientDirection; 8] = [
        GradientDirection::ToTop,
        GradientDirection::ToTopRight,
        GradientDirection::ToRight,
        GradientDirection::ToBottomRight,
        GradientDirection::ToBottom,
        GradientDirection::ToBottomLeft,
        GradientDirection::ToLeft,
        GradientDirection::ToTopLeft,
    ];

    /// CSS keyword form
    pub fn keyword(self) -> &'static str {
        match self {
            GradientDirection::ToTop => "to top",
            GradientDirection::ToTopRight => "to top right",
            GradientDirection::ToRight => "to right",
            GradientDirection::ToBottomRight => "to bottom right",
            GradientDirection::ToBottom => "to bottom",
            GradientDirection::ToBottomLeft => "to bottom left",
            GradientDirection::ToLeft => "to left",
            GradientDirection::ToTopLeft => "to top left",
        }
    }

    /// Arrow glyph shown on the direction buttons
    pub fn arrow(self) -> &'static str {
        match self {
            GradientDirection::ToTop => "↑",
            GradientDirection::ToTopRight => "↗",
            GradientDirection::ToRight => "→",
            GradientDirection::ToBottomRight => "↘",
            GradientDirection::ToBottom => "↓",
            GradientDirection::ToBottomLeft => "↙",
            GradientDirection::ToLeft => "←",
            GradientDirection::ToTopLeft => "↖",
        }
    }

    /// CSS angle in degrees (0 = towards the top, clockwise)
    pub fn angle_degrees(self) -> f32 {
        match self {
            GradientDirection::ToTop => 0.0,
            GradientDirection::ToTopRight => 45.0,
            GradientDirection::ToRight => 90.0,
            GradientDirection::ToBottomRight => 135.0,
            GradientDirection::ToBottom => 180.0,
            GradientDirection::ToBottomLeft => 225.0,
            GradientDirection::ToLeft => 270.0,
            GradientDirection::ToTopLeft => 315.0,
        }
    }
}

impl fmt::Display for GradientDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for GradientDirection {
    type Err = ImprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GradientDirection::ALL
            .into_iter()
            .find(|d| d.keyword() == s)
            .ok_or_else(|| ImprintError::invalid_input(format!("unknown gradient direction {:?}", s)))
    }
}

/// A color plus an optional position along the gradient axis (0.0 to 1.0)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorStop {
    pub color: CssColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<f32>,
}

impl ColorStop {
    /// Stop placed by the renderer (evenly spaced with its neighbours)
    pub fn new(color: CssColor) -> Self {
        Self {
            color,
            position: None,
        }
    }

    pub fn at(color: CssColor, position: f32) -> Self {
        Self {
            color,
            position: Some(position),
        }
    }

    fn sanitized(self) -> ImprintResult<Self> {
        let position = self
            .position
            .map(|p| clamp_finite(p, 0.0, 1.0, "color stop position"))
            .transpose()?;
        Ok(Self {
            color: self.color,
            position,
        })
    }
}

/// Decorative pattern drawn on top of a gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GridPattern {
    Grid,
    GraphPaper,
    Dots,
}

impl GridPattern {
    pub const ALL: [GridPattern; 3] = [GridPattern::Grid, GridPattern::GraphPaper, GridPattern::Dots];

    /// Identifier used in the stored description
    pub fn id(self) -> &'static str {
        match self {
            GridPattern::Grid => "grid",
            GridPattern::GraphPaper => "graph-paper",
            GridPattern::Dots => "dots",
        }
    }

    pub fn label(self) -> &'static str {
        catalog::pattern_label(self)
    }
}

impl fmt::Display for GridPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GridOverlay {
    pub pattern: GridPattern,
    pub color: CssColor,
    /// 0.0 to 1.0
    pub opacity: f32,
    /// Fade towards the edges, in percent (0 to 100)
    pub blur_radius: f32,
}

impl GridOverlay {
    /// Build an overlay, clamping opacity and blur radius into range
    pub fn new(
        pattern: GridPattern,
        color: CssColor,
        opacity: f32,
        blur_radius: f32,
    ) -> ImprintResult<Self> {
        Ok(Self {
            pattern,
            color,
            opacity: clamp_finite(opacity, 0.0, 1.0, "overlay opacity")?,
            blur_radius: clamp_finite(blur_radius, 0.0, 100.0, "overlay blur radius")?,
        })
    }

    fn sanitized(self) -> ImprintResult<Self> {
        Self::new(self.pattern, self.color, self.opacity, self.blur_radius)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LinearGradient {
    pub direction: GradientDirection,
    pub color_stops: Vec<ColorStop>,
    pub noise: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_overlay: Option<GridOverlay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolidColor {
    pub color: CssColor,
    pub noise: f32,
}

/// Discriminant of a [`Background`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackgroundKind {
    LinearGradient,
    SolidColor,
}

impl BackgroundKind {
    /// Value of the `type` tag
    pub fn tag(self) -> &'static str {
        match self {
            BackgroundKind::LinearGradient => "linear-gradient",
            BackgroundKind::SolidColor => "color",
        }
    }
}

/// How a template surface's background is painted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Background {
    #[serde(rename = "linear-gradient")]
    LinearGradient(LinearGradient),
    #[serde(rename = "color")]
    SolidColor(SolidColor),
}

impl Default for Background {
    fn default() -> Self {
        Background::LinearGradient(LinearGradient {
            direction: DEFAULT_LINEAR_GRADIENT_DIRECTION,
            color_stops: catalog::default_gradient().color_stops(),
            noise: DEFAULT_NOISE,
            grid_overlay: None,
        })
    }
}

/// Noise level of a freshly created template
pub const DEFAULT_NOISE: f32 = 0.15;

impl Background {
    pub fn linear_gradient(
        direction: GradientDirection,
        color_stops: Vec<ColorStop>,
        noise: f32,
    ) -> ImprintResult<Self> {
        Background::LinearGradient(LinearGradient {
            direction,
            color_stops,
            noise,
            grid_overlay: None,
        })
        .sanitized()
    }

    pub fn solid_color(color: CssColor, noise: f32) -> ImprintResult<Self> {
        Background::SolidColor(SolidColor { color, noise }).sanitized()
    }

    pub fn kind(&self) -> BackgroundKind {
        match self {
            Background::LinearGradient(_) => BackgroundKind::LinearGradient,
            Background::SolidColor(_) => BackgroundKind::SolidColor,
        }
    }

    pub fn noise(&self) -> f32 {
        match self {
            Background::LinearGradient(g) => g.noise,
            Background::SolidColor(s) => s.noise,
        }
    }

    pub fn grid_overlay(&self) -> Option<&GridOverlay> {
        match self {
            Background::LinearGradient(g) => g.grid_overlay.as_ref(),
            Background::SolidColor(_) => None,
        }
    }

    /// Enforce the value invariants: clamp every numeric field into range,
    /// reject NaN and an empty color stop list.
    pub fn sanitized(self) -> ImprintResult<Self> {
        match self {
            Background::LinearGradient(g) => {
                if g.color_stops.is_empty() {
                    return Err(ImprintError::invalid_input(
                        "linear gradient needs at least one color stop",
                    ));
                }
                let color_stops = g
                    .color_stops
                    .into_iter()
                    .map(ColorStop::sanitized)
                    .collect::<ImprintResult<Vec<_>>>()?;
                Ok(Background::LinearGradient(LinearGradient {
                    direction: g.direction,
                    color_stops,
                    noise: clamp_finite(g.noise, 0.0, 1.0, "noise")?,
                    grid_overlay: g.grid_overlay.map(GridOverlay::sanitized).transpose()?,
                }))
            }
            Background::SolidColor(s) => Ok(Background::SolidColor(SolidColor {
                color: s.color,
                noise: clamp_finite(s.noise, 0.0, 1.0, "noise")?,
            })),
        }
    }

    pub fn to_background_shorthand(&self) -> ImprintResult<String> {
        to_background_shorthand(self)
    }

    pub fn render(&self) -> ImprintResult<RenderedBackground> {
        shorthand::render(self)
    }
}
