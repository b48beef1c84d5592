//! Edits produced by the background controls
//!
//! Each control interaction becomes one [`BackgroundPatch`]. [`apply_patch`]
//! turns the current description plus that patch into the next description
//! without touching the input, so the store only ever sees whole values.

use tracing::debug;

use crate::background::{
    Background, ColorStop, GradientDirection, GridOverlay, GridPattern, LinearGradient, SolidColor,
};
use crate::color::CssColor;
use crate::error::clamp_finite;
use crate::ImprintResult;

pub const DEFAULT_LINEAR_GRADIENT_DIRECTION: GradientDirection = GradientDirection::ToTopRight;

/// Seed values for an overlay created while none exists
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridOverlayDefaults {
    pub color: &'static str,
    pub opacity: f32,
    pub blur_radius: f32,
}

pub const GRID_OVERLAY_DEFAULT: GridOverlayDefaults = GridOverlayDefaults {
    color: crate::catalog::GRID_OVERLAY_COLORS[0],
    opacity: 0.5,
    blur_radius: 20.0,
};

/// A single user edit
#[derive(Debug, Clone, PartialEq)]
pub enum BackgroundPatch {
    /// Pick a gradient preset (switches to a gradient if needed)
    SelectGradient(Vec<ColorStop>),
    SetDirection(GradientDirection),
    /// Pick a solid color (switches to a solid color if needed)
    SelectColor(CssColor),
    /// `None` removes the overlay
    SetPattern(Option<GridPattern>),
    SetOverlayColor(CssColor),
    SetOverlayOpacity(f32),
    SetOverlayBlurRadius(f32),
    SetNoise(f32),
    /// Wholesale replacement
    Replace(Background),
}

/// Compute the description that results from applying `patch` to `current`.
///
/// Edits aimed at a field the current variant does not have return `current`
/// unchanged. The result is always sanitized.
pub fn apply_patch(current: &Background, patch: BackgroundPatch) -> ImprintResult<Background> {
    debug!("Applying background patch: {:?}", patch);

    let next = match patch {
        BackgroundPatch::SelectGradient(color_stops) => {
            let (direction, grid_overlay) = match current {
                Background::LinearGradient(g) => (g.direction, g.grid_overlay.clone()),
                Background::SolidColor(_) => (DEFAULT_LINEAR_GRADIENT_DIRECTION, None),
            };
            Background::LinearGradient(LinearGradient {
                direction,
                color_stops,
                noise: current.noise(),
                grid_overlay,
            })
        }
        BackgroundPatch::SetDirection(direction) => match current {
            Background::LinearGradient(g) => Background::LinearGradient(LinearGradient {
                direction,
                ..g.clone()
            }),
            Background::SolidColor(_) => return Ok(unchanged(current)),
        },
        BackgroundPatch::SelectColor(color) => Background::SolidColor(SolidColor {
            color,
            noise: current.noise(),
        }),
        BackgroundPatch::SetPattern(pattern) => match current {
            Background::LinearGradient(g) => {
                let grid_overlay = match pattern {
                    None => None,
                    Some(pattern) => Some(overlay_with_pattern(g.grid_overlay.as_ref(), pattern)?),
                };
                Background::LinearGradient(LinearGradient {
                    grid_overlay,
                    ..g.clone()
                })
            }
            Background::SolidColor(_) => return Ok(unchanged(current)),
        },
        BackgroundPatch::SetOverlayColor(color) => {
            return edit_overlay(current, |overlay| {
                overlay.color = color;
                Ok(())
            });
        }
        BackgroundPatch::SetOverlayOpacity(opacity) => {
            return edit_overlay(current, |overlay| {
                overlay.opacity = clamp_finite(opacity, 0.0, 1.0, "overlay opacity")?;
                Ok(())
            });
        }
        BackgroundPatch::SetOverlayBlurRadius(blur_radius) => {
            return edit_overlay(current, |overlay| {
                overlay.blur_radius = clamp_finite(blur_radius, 0.0, 100.0, "overlay blur radius")?;
                Ok(())
            });
        }
        BackgroundPatch::SetNoise(noise) => {
            let noise = clamp_finite(noise, 0.0, 1.0, "noise")?;
            match current {
                Background::LinearGradient(g) => Background::LinearGradient(LinearGradient {
                    noise,
                    ..g.clone()
                }),
                Background::SolidColor(s) => Background::SolidColor(SolidColor {
                    noise,
                    ..s.clone()
                }),
            }
        }
        BackgroundPatch::Replace(background) => background,
    };

    next.sanitized()
}

fn unchanged(current: &Background) -> Background {
    debug!(
        "Patch does not apply to a {} background, ignoring",
        current.kind().tag()
    );
    current.clone()
}

/// Previous overlay fields win over the defaults
fn overlay_with_pattern(
    previous: Option<&GridOverlay>,
    pattern: GridPattern,
) -> ImprintResult<GridOverlay> {
    match previous {
        Some(prev) => GridOverlay::new(pattern, prev.color.clone(), prev.opacity, prev.blur_radius),
        None => GridOverlay::new(
            pattern,
            CssColor::from_static(GRID_OVERLAY_DEFAULT.color),
            GRID_OVERLAY_DEFAULT.opacity,
            GRID_OVERLAY_DEFAULT.blur_radius,
        ),
    }
}

fn edit_overlay(
    current: &Background,
    edit: impl FnOnce(&mut GridOverlay) -> ImprintResult<()>,
) -> ImprintResult<Background> {
    let Background::LinearGradient(g) = current else {
        return Ok(unchanged(current));
    };
    let Some(overlay) = &g.grid_overlay else {
        debug!("No grid overlay to edit, ignoring");
        return Ok(current.clone());
    };

    let mut overlay = overlay.clone();
    edit(&mut overlay)?;
    Background::LinearGradient(LinearGradient {
        grid_overlay: Some(overlay),
        ..g.clone()
    })
    .sanitized()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(value: &str) -> CssColor {
        CssColor::parse(value).unwrap()
    }

    fn solid(value: &str, noise: f32) -> Background {
        Background::SolidColor(SolidColor {
            color: color(value),
            noise,
        })
    }

    fn stops(values: &[&str]) -> Vec<ColorStop> {
        values.iter().map(|v| ColorStop::new(color(v))).collect()
    }

    fn with_overlay(overlay: GridOverlay) -> Background {
        Background::LinearGradient(LinearGradient {
            direction: GradientDirection::ToLeft,
            color_stops: stops(&["#fff", "#000"]),
            noise: 0.1,
            grid_overlay: Some(overlay),
        })
    }

    #[test]
    fn test_switch_to_gradient_keeps_noise() {
        let next = apply_patch(
            &solid("#fff", 0.2),
            BackgroundPatch::SelectGradient(stops(&["#f97316", "#ec4899"])),
        )
        .unwrap();

        assert_eq!(next.noise(), 0.2);
        let Background::LinearGradient(g) = next else {
            panic!("expected a gradient");
        };
        assert_eq!(g.direction, DEFAULT_LINEAR_GRADIENT_DIRECTION);
        assert!(g.grid_overlay.is_none());
    }

    #[test]
    fn test_select_gradient_keeps_direction_and_overlay() {
        let current = apply_patch(
            &Background::default(),
            BackgroundPatch::SetDirection(GradientDirection::ToBottom),
        )
        .unwrap();
        let current = apply_patch(&current, BackgroundPatch::SetPattern(Some(GridPattern::Dots))).unwrap();

        let next = apply_patch(&current, BackgroundPatch::SelectGradient(stops(&["#111", "#222"]))).unwrap();
        let Background::LinearGradient(g) = next else {
            panic!("expected a gradient");
        };
        assert_eq!(g.direction, GradientDirection::ToBottom);
        assert_eq!(g.grid_overlay.map(|o| o.pattern), Some(GridPattern::Dots));
        assert_eq!(g.color_stops, stops(&["#111", "#222"]));
    }

    #[test]
    fn test_switch_to_color_drops_gradient_fields() {
        let current = apply_patch(
            &Background::default(),
            BackgroundPatch::SetPattern(Some(GridPattern::Grid)),
        )
        .unwrap();
        let next = apply_patch(&current, BackgroundPatch::SelectColor(color("#000000"))).unwrap();

        assert_eq!(next, solid("#000000", current.noise()));
        assert!(next.grid_overlay().is_none());
    }

    #[test]
    fn test_direction_edit_on_solid_color_is_noop() {
        let current = solid("#fff", 0.2);
        let next = apply_patch(&current, BackgroundPatch::SetDirection(GradientDirection::ToLeft)).unwrap();
        assert_eq!(next, current);
    }

    #[test]
    fn test_overlay_edits_on_solid_color_are_noops() {
        let current = solid("#fff", 0.2);
        for patch in [
            BackgroundPatch::SetPattern(Some(GridPattern::Grid)),
            BackgroundPatch::SetOverlayColor(color("#6b7280")),
            BackgroundPatch::SetOverlayOpacity(0.9),
            BackgroundPatch::SetOverlayBlurRadius(50.0),
        ] {
            assert_eq!(apply_patch(&current, patch).unwrap(), current);
        }
    }

    #[test]
    fn test_pattern_without_overlay_uses_defaults() {
        let next = apply_patch(
            &Background::default(),
            BackgroundPatch::SetPattern(Some(GridPattern::Grid)),
        )
        .unwrap();

        assert_eq!(
            next.grid_overlay(),
            Some(&GridOverlay {
                pattern: GridPattern::Grid,
                color: color("#030712"),
                opacity: 0.5,
                blur_radius: 20.0,
            })
        );
    }

    #[test]
    fn test_pattern_change_keeps_previous_overlay_fields() {
        let current = with_overlay(GridOverlay {
            pattern: GridPattern::Grid,
            color: color("#f9fafb"),
            opacity: 0.0,
            blur_radius: 65.0,
        });
        let next = apply_patch(&current, BackgroundPatch::SetPattern(Some(GridPattern::Dots))).unwrap();

        let overlay = next.grid_overlay().unwrap();
        assert_eq!(overlay.pattern, GridPattern::Dots);
        assert_eq!(overlay.color, color("#f9fafb"));
        assert_eq!(overlay.opacity, 0.0);
        assert_eq!(overlay.blur_radius, 65.0);
    }

    #[test]
    fn test_pattern_none_removes_overlay() {
        let current = with_overlay(GridOverlay {
            pattern: GridPattern::Grid,
            color: color("#030712"),
            opacity: 0.5,
            blur_radius: 20.0,
        });
        let next = apply_patch(&current, BackgroundPatch::SetPattern(None)).unwrap();
        assert!(next.grid_overlay().is_none());
        assert_eq!(next.noise(), 0.1);
    }

    #[test]
    fn test_overlay_field_edits() {
        let current = with_overlay(GridOverlay {
            pattern: GridPattern::GraphPaper,
            color: color("#030712"),
            opacity: 0.5,
            blur_radius: 20.0,
        });

        let next = apply_patch(&current, BackgroundPatch::SetOverlayColor(color("#6b7280"))).unwrap();
        let next = apply_patch(&next, BackgroundPatch::SetOverlayOpacity(1.7)).unwrap();
        let next = apply_patch(&next, BackgroundPatch::SetOverlayBlurRadius(45.0)).unwrap();

        let overlay = next.grid_overlay().unwrap();
        assert_eq!(overlay.pattern, GridPattern::GraphPaper);
        assert_eq!(overlay.color, color("#6b7280"));
        assert_eq!(overlay.opacity, 1.0);
        assert_eq!(overlay.blur_radius, 45.0);
    }

    #[test]
    fn test_overlay_edits_without_overlay_are_noops() {
        let current = Background::default();
        let next = apply_patch(&current, BackgroundPatch::SetOverlayOpacity(0.9)).unwrap();
        assert_eq!(next, current);
    }

    #[test]
    fn test_noise_bounds() {
        let max = apply_patch(&Background::default(), BackgroundPatch::SetNoise(1.0)).unwrap();
        assert_eq!(max.noise(), 1.0);

        let below = apply_patch(&solid("#fff", 0.5), BackgroundPatch::SetNoise(-0.1)).unwrap();
        assert_eq!(below.noise(), 0.0);

        let err = apply_patch(&Background::default(), BackgroundPatch::SetNoise(f32::NAN)).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_patches_are_idempotent() {
        let start = Background::default();
        let patches = [
            BackgroundPatch::SelectGradient(stops(&["#111", "#222", "#333"])),
            BackgroundPatch::SetDirection(GradientDirection::ToBottomLeft),
            BackgroundPatch::SetPattern(Some(GridPattern::GraphPaper)),
            BackgroundPatch::SetOverlayOpacity(0.35),
            BackgroundPatch::SetNoise(0.6),
            BackgroundPatch::SelectColor(color("#000000")),
        ];

        for patch in patches {
            let once = apply_patch(&start, patch.clone()).unwrap();
            let twice = apply_patch(&once, patch).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_replace_is_sanitized() {
        let err = apply_patch(
            &Background::default(),
            BackgroundPatch::Replace(Background::LinearGradient(LinearGradient {
                direction: GradientDirection::ToTop,
                color_stops: vec![],
                noise: 0.0,
                grid_overlay: None,
            })),
        )
        .unwrap_err();
        assert!(err.is_invalid_input());

        let next = apply_patch(&Background::default(), BackgroundPatch::Replace(solid("#000000", 3.0))).unwrap();
        assert_eq!(next, solid("#000000", 1.0));
    }
}
