//! Preset colors, gradients and labels offered by the editor controls

use crate::background::{ColorStop, GridPattern};
use crate::color::CssColor;

/// Named gradient preset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientPreset {
    pub name: &'static str,
    pub colors: &'static [&'static str],
}

impl GradientPreset {
    pub fn color_stops(&self) -> Vec<ColorStop> {
        self.colors
            .iter()
            .map(|c| ColorStop::new(CssColor::from_static(*c)))
            .collect()
    }
}

/// The first entry is the two-stop default of a new template
pub const LINEAR_GRADIENTS: &[GradientPreset] = &[
    GradientPreset {
        name: "Sunset",
        colors: &["#f97316", "#ec4899"],
    },
    GradientPreset {
        name: "Ocean",
        colors: &["#06b6d4", "#3b82f6"],
    },
    GradientPreset {
        name: "Forest",
        colors: &["#84cc16", "#059669"],
    },
    GradientPreset {
        name: "Lavender",
        colors: &["#c4b5fd", "#f0abfc"],
    },
    GradientPreset {
        name: "Midnight",
        colors: &["#0f172a", "#334155"],
    },
    GradientPreset {
        name: "Peach",
        colors: &["#fde68a", "#fca5a5", "#f9a8d4"],
    },
    GradientPreset {
        name: "Aurora",
        colors: &["#22d3ee", "#a78bfa", "#f472b6"],
    },
    GradientPreset {
        name: "Ember",
        colors: &["#facc15", "#f97316", "#dc2626"],
    },
];

pub const SOLID_COLORS: &[&str] = &[
    "#ffffff", "#f9fafb", "#e5e7eb", "#9ca3af", "#4b5563", "#1f2937", "#030712", "#fef3c7",
    "#fde68a", "#fecaca", "#fbcfe8", "#ddd6fe", "#bfdbfe", "#a7f3d0", "#d9f99d",
];

pub const TEXT_COLORS: &[&str] = &["#030712", "#374151", "#9ca3af", "#f9fafb", "#ffffff"];

pub const GRID_OVERLAY_COLORS: [&str; 3] = ["#030712", "#6b7280", "#f9fafb"];

pub fn default_gradient() -> &'static GradientPreset {
    &LINEAR_GRADIENTS[0]
}

pub fn find_gradient(name: &str) -> Option<&'static GradientPreset> {
    LINEAR_GRADIENTS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
}

pub fn solid_colors() -> Vec<CssColor> {
    SOLID_COLORS.iter().map(|c| CssColor::from_static(*c)).collect()
}

pub fn text_colors() -> Vec<CssColor> {
    TEXT_COLORS.iter().map(|c| CssColor::from_static(*c)).collect()
}

pub fn grid_overlay_colors() -> Vec<CssColor> {
    GRID_OVERLAY_COLORS
        .iter()
        .map(|c| CssColor::from_static(*c))
        .collect()
}

pub fn pattern_label(pattern: GridPattern) -> &'static str {
    match pattern {
        GridPattern::Grid => "Grid",
        GridPattern::GraphPaper => "Graph Paper",
        GridPattern::Dots => "Dots",
    }
}
