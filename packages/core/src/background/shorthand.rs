//! CSS output for background descriptions

use crate::background::{Background, ColorStop, GridOverlay, GridPattern};
use crate::{ImprintError, ImprintResult};

/// Value for a surface's `background` property.
///
/// Gradients become `linear-gradient(<direction>, <stop>, ...)`; a solid
/// color is returned exactly as stored.
pub fn to_background_shorthand(background: &Background) -> ImprintResult<String> {
    match background {
        Background::LinearGradient(gradient) => {
            if gradient.color_stops.is_empty() {
                return Err(ImprintError::invalid_input(
                    "linear gradient needs at least one color stop",
                ));
            }

            let mut out = String::from("linear-gradient(");
            out.push_str(gradient.direction.keyword());
            for stop in &gradient.color_stops {
                out.push_str(", ");
                push_stop(&mut out, stop);
            }
            out.push(')');
            Ok(out)
        }
        Background::SolidColor(solid) => Ok(solid.color.as_str().to_string()),
    }
}

fn push_stop(out: &mut String, stop: &ColorStop) {
    out.push_str(stop.color.as_str());
    if let Some(position) = stop.position {
        out.push(' ');
        out.push_str(&percent(position));
    }
}

/// 0.5 -> "50%", one decimal at most
fn percent(fraction: f32) -> String {
    let value = (fraction * 1000.0).round() / 10.0;
    format!("{}%", value)
}

/// Style of the pattern layer drawn over the base background
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLayer {
    pub background_image: String,
    pub background_size: String,
    pub opacity: f32,
    /// Radial fade towards the edges
    pub mask_image: String,
}

impl From<&GridOverlay> for OverlayLayer {
    fn from(overlay: &GridOverlay) -> Self {
        let c = overlay.color.as_str();
        let (background_image, background_size) = match overlay.pattern {
            GridPattern::Grid => (
                format!(
                    "linear-gradient(to right, {c} 1px, transparent 1px), \
                     linear-gradient(to bottom, {c} 1px, transparent 1px)"
                ),
                "24px 24px".to_string(),
            ),
            GridPattern::GraphPaper => (
                format!(
                    "linear-gradient(to right, {c} 2px, transparent 2px), \
                     linear-gradient(to bottom, {c} 2px, transparent 2px), \
                     linear-gradient(to right, {c} 1px, transparent 1px), \
                     linear-gradient(to bottom, {c} 1px, transparent 1px)"
                ),
                "96px 96px, 96px 96px, 24px 24px, 24px 24px".to_string(),
            ),
            GridPattern::Dots => (
                format!("radial-gradient({c} 1px, transparent 1px)"),
                "16px 16px".to_string(),
            ),
        };

        let core = percent((100.0 - overlay.blur_radius) / 100.0);
        Self {
            background_image,
            background_size,
            opacity: overlay.opacity,
            mask_image: format!("radial-gradient(ellipse at center, black {core}, transparent 100%)"),
        }
    }
}

/// Every layer needed to paint a background
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedBackground {
    pub background: String,
    pub overlay: Option<OverlayLayer>,
    /// Opacity of the noise texture, absent when noise is zero
    pub noise_opacity: Option<f32>,
}

pub(crate) fn render(background: &Background) -> ImprintResult<RenderedBackground> {
    let noise = background.noise();
    Ok(RenderedBackground {
        background: to_background_shorthand(background)?,
        overlay: background.grid_overlay().map(OverlayLayer::from),
        noise_opacity: (noise > 0.0).then_some(noise),
    })
}
