//! Integration tests for the template store
//!
//! These tests drive the store the way the editor controls do:
//! - Default template creation
//! - Switching between gradient and solid backgrounds
//! - Grid overlay editing
//! - Wholesale replacement from a JSON description
//! - Loading a stored template

use imprint_core::background::GRID_OVERLAY_DEFAULT;
use imprint_core::{
    Background, BackgroundPatch, CssColor, EditorConfig, FontWeight, GradientDirection,
    GridPattern, Template, TemplateStore,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Default gradient replaced by a solid color serializes to the raw color
#[test]
fn test_default_gradient_then_solid_color() {
    init_tracing();
    let mut store = TemplateStore::new();

    let css = store.background().to_background_shorthand().unwrap();
    assert!(css.starts_with("linear-gradient(to top right, "));
    assert_eq!(css.matches(", ").count(), 2);

    let next: Background =
        serde_json::from_str(r##"{"type": "color", "color": "#000000", "noise": 0.3}"##).unwrap();
    store.set_background(next).unwrap();

    assert_eq!(store.background().to_background_shorthand().unwrap(), "#000000");
    assert_eq!(store.background().noise(), 0.3);
}

#[test]
fn test_editing_session() {
    init_tracing();
    let mut store = TemplateStore::new();

    store
        .apply(BackgroundPatch::SetDirection(GradientDirection::ToBottomLeft))
        .unwrap();
    store
        .apply(BackgroundPatch::SetPattern(Some(GridPattern::GraphPaper)))
        .unwrap();
    store.apply(BackgroundPatch::SetOverlayBlurRadius(60.0)).unwrap();
    store.apply(BackgroundPatch::SetNoise(0.45)).unwrap();

    let overlay = store.background().grid_overlay().unwrap().clone();
    assert_eq!(overlay.color.as_str(), GRID_OVERLAY_DEFAULT.color);
    assert_eq!(overlay.opacity, GRID_OVERLAY_DEFAULT.opacity);
    assert_eq!(overlay.blur_radius, 60.0);

    let rendered = store.background().render().unwrap();
    assert!(rendered.background.contains("to bottom left"));
    assert!(rendered.overlay.unwrap().mask_image.contains("black 40%"));
    assert_eq!(rendered.noise_opacity, Some(0.45));

    // Solid color drops the overlay but keeps the noise
    store
        .apply(BackgroundPatch::SelectColor(CssColor::parse("#fef3c7").unwrap()))
        .unwrap();
    assert!(store.background().grid_overlay().is_none());
    assert_eq!(store.background().noise(), 0.45);

    // Back to a gradient restarts from the default direction
    store
        .apply(BackgroundPatch::SelectGradient(
            imprint_core::catalog::LINEAR_GRADIENTS[1].color_stops(),
        ))
        .unwrap();
    assert_eq!(
        store.background().to_background_shorthand().unwrap(),
        "linear-gradient(to top right, #06b6d4, #3b82f6)"
    );
    assert_eq!(store.revision(), 6);
}

#[test]
fn test_store_from_config() {
    init_tracing();
    let config = EditorConfig {
        default_gradient: "Midnight".to_string(),
        default_direction: GradientDirection::ToRight,
        default_noise: 0.0,
        ..Default::default()
    };
    let store = TemplateStore::from_config(&config).unwrap();

    assert_eq!(
        store.background().to_background_shorthand().unwrap(),
        "linear-gradient(to right, #0f172a, #334155)"
    );
    assert!(store.background().render().unwrap().noise_opacity.is_none());

    let bad = EditorConfig {
        default_gradient: "Plaid".to_string(),
        ..Default::default()
    };
    assert!(TemplateStore::from_config(&bad).is_err());
}

#[test]
fn test_out_of_range_description_is_clamped_on_write() {
    init_tracing();
    let mut store = TemplateStore::new();
    let next: Background = serde_json::from_str(
        r##"{
            "type": "linear-gradient",
            "direction": "to top",
            "colorStops": [{"color": "#fff", "position": 0}, {"color": "#000", "position": 1.2}],
            "noise": -0.1,
            "gridOverlay": {"pattern": "dots", "color": "#f9fafb", "opacity": 3, "blurRadius": -5}
        }"##,
    )
    .unwrap();
    store.set_background(next).unwrap();

    assert_eq!(store.background().noise(), 0.0);
    let overlay = store.background().grid_overlay().unwrap();
    assert_eq!(overlay.opacity, 1.0);
    assert_eq!(overlay.blur_radius, 0.0);
    assert_eq!(
        store.background().to_background_shorthand().unwrap(),
        "linear-gradient(to top, #fff 0%, #000 100%)"
    );
}

fn template_json(color_stops: &str, noise: f32, font_family: &str, font_weight: u16, font_size: u32) -> String {
    format!(
        r##"{{
            "id": "3f2c1a9e-0000-4000-8000-000000000000",
            "updatedAt": "2024-01-01T00:00:00Z",
            "background": {{
                "type": "linear-gradient",
                "direction": "to top right",
                "colorStops": {color_stops},
                "noise": {noise}
            }},
            "text": {{
                "fontFamily": "{font_family}",
                "fontWeight": {font_weight},
                "fontSize": {font_size},
                "color": "#030712"
            }}
        }}"##
    )
}

#[test]
fn test_loaded_template_is_sanitized() {
    init_tracing();
    let stops = r##"[{"color": "#fff"}, {"color": "#000"}]"##;
    let template: Template =
        serde_json::from_str(&template_json(stops, 5.0, "inter", 700, 0)).unwrap();

    let store = TemplateStore::with_template(template).unwrap();
    assert_eq!(store.background().noise(), 1.0);
    assert_eq!(store.text().font_size, 1);
    assert_eq!(
        store.background().to_background_shorthand().unwrap(),
        "linear-gradient(to top right, #fff, #000)"
    );
}

#[test]
fn test_invalid_loaded_template_is_rejected() {
    init_tracing();
    let empty: Template =
        serde_json::from_str(&template_json("[]", 0.2, "inter", 700, 48)).unwrap();
    assert!(TemplateStore::with_template(empty).unwrap_err().is_invalid_input());

    let stops = r##"[{"color": "#fff"}, {"color": "#000"}]"##;
    let thin: Template =
        serde_json::from_str(&template_json(stops, 0.2, "playfair-display", 100, 48)).unwrap();
    assert_eq!(thin.text.font_weight, FontWeight::Thin);
    assert!(TemplateStore::with_template(thin).unwrap_err().is_invalid_input());
}
