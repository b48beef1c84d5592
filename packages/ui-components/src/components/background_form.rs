//! Background form
//!
//! Gradient and solid color pickers, gradient direction, grid overlay and
//! noise. The form keeps only view state (the active tab); every edit is
//! turned into a [`BackgroundPatch`] and written through the store.

use imprint_core::background::DEFAULT_LINEAR_GRADIENT_DIRECTION;
use imprint_core::catalog::{self, LINEAR_GRADIENTS};
use imprint_core::{
    Background, BackgroundKind, BackgroundPatch, CssColor, GradientDirection, GridPattern,
    ImprintError, ImprintResult, TemplateStore,
};
use iced::widget::{button, column, container, pick_list, row, slider, text, Space};
use iced::{Alignment, Element, Length};
use iced_aw::Card;
use tracing::debug;

use super::field::{field_label, hint, section_header};
use super::swatch::{gradient_fill, iced_color, swatch};

pub const NOISE_HINT: &str = "Control the level of background noise to add texture. \
A value between 0.1 to 0.25 is recommended.";

/// Messages from the background form
#[derive(Debug, Clone)]
pub enum BackgroundFormMessage {
    TabSelected(BackgroundTab),
    /// Index into the gradient presets
    GradientSelected(usize),
    DirectionSelected(GradientDirection),
    ColorSelected(CssColor),
    PatternSelected(PatternOption),
    OverlayColorSelected(CssColor),
    OverlayOpacityChanged(f32),
    OverlayBlurChanged(f32),
    NoiseChanged(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundTab {
    #[default]
    Gradient,
    Color,
}

impl BackgroundTab {
    pub const ALL: [BackgroundTab; 2] = [BackgroundTab::Gradient, BackgroundTab::Color];

    pub fn label(self) -> &'static str {
        match self {
            BackgroundTab::Gradient => "Gradient",
            BackgroundTab::Color => "Solid Color",
        }
    }
}

impl From<BackgroundKind> for BackgroundTab {
    fn from(kind: BackgroundKind) -> Self {
        match kind {
            BackgroundKind::LinearGradient => BackgroundTab::Gradient,
            BackgroundKind::SolidColor => BackgroundTab::Color,
        }
    }
}

/// Pattern options for pick list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternOption {
    None,
    Grid,
    GraphPaper,
    Dots,
}

impl PatternOption {
    pub const ALL: [PatternOption; 4] = [
        PatternOption::None,
        PatternOption::Grid,
        PatternOption::GraphPaper,
        PatternOption::Dots,
    ];
}

impl std::fmt::Display for PatternOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match Option::<GridPattern>::from(*self) {
            Some(pattern) => write!(f, "{}", pattern.label()),
            None => write!(f, "None"),
        }
    }
}

impl From<Option<GridPattern>> for PatternOption {
    fn from(pattern: Option<GridPattern>) -> Self {
        match pattern {
            None => PatternOption::None,
            Some(GridPattern::Grid) => PatternOption::Grid,
            Some(GridPattern::GraphPaper) => PatternOption::GraphPaper,
            Some(GridPattern::Dots) => PatternOption::Dots,
        }
    }
}

impl From<PatternOption> for Option<GridPattern> {
    fn from(option: PatternOption) -> Self {
        match option {
            PatternOption::None => None,
            PatternOption::Grid => Some(GridPattern::Grid),
            PatternOption::GraphPaper => Some(GridPattern::GraphPaper),
            PatternOption::Dots => Some(GridPattern::Dots),
        }
    }
}

/// Background form widget
#[derive(Debug, Default)]
pub struct BackgroundForm {
    tab: BackgroundTab,
}

impl BackgroundForm {
    /// Open on the tab matching the stored background
    pub fn new(background: &Background) -> Self {
        Self {
            tab: background.kind().into(),
        }
    }

    pub fn tab(&self) -> BackgroundTab {
        self.tab
    }

    /// Patch a message stands for; `None` for view-only messages
    pub fn to_patch(message: &BackgroundFormMessage) -> ImprintResult<Option<BackgroundPatch>> {
        let patch = match message {
            BackgroundFormMessage::TabSelected(_) => return Ok(None),
            BackgroundFormMessage::GradientSelected(index) => {
                let preset = LINEAR_GRADIENTS.get(*index).ok_or_else(|| {
                    ImprintError::invalid_input(format!("no gradient preset at index {}", index))
                })?;
                BackgroundPatch::SelectGradient(preset.color_stops())
            }
            BackgroundFormMessage::DirectionSelected(direction) => {
                BackgroundPatch::SetDirection(*direction)
            }
            BackgroundFormMessage::ColorSelected(color) => BackgroundPatch::SelectColor(color.clone()),
            BackgroundFormMessage::PatternSelected(option) => {
                BackgroundPatch::SetPattern((*option).into())
            }
            BackgroundFormMessage::OverlayColorSelected(color) => {
                BackgroundPatch::SetOverlayColor(color.clone())
            }
            BackgroundFormMessage::OverlayOpacityChanged(v) => BackgroundPatch::SetOverlayOpacity(*v),
            BackgroundFormMessage::OverlayBlurChanged(v) => BackgroundPatch::SetOverlayBlurRadius(*v),
            BackgroundFormMessage::NoiseChanged(v) => BackgroundPatch::SetNoise(*v),
        };
        Ok(Some(patch))
    }

    /// Handle a form message, writing any resulting edit to `store`
    pub fn update(
        &mut self,
        store: &mut TemplateStore,
        message: BackgroundFormMessage,
    ) -> ImprintResult<()> {
        if let BackgroundFormMessage::TabSelected(tab) = message {
            debug!("Background tab: {:?}", tab);
            self.tab = tab;
            return Ok(());
        }

        match Self::to_patch(&message)? {
            Some(patch) => store.apply(patch),
            None => Ok(()),
        }
    }

    /// Build the view
    pub fn view<'a>(&'a self, background: &'a Background) -> Element<'a, BackgroundFormMessage> {
        let head = column![
            text("Background").size(22),
            hint("Set a custom background for your image."),
        ]
        .spacing(4);

        let tab_content = match self.tab {
            BackgroundTab::Gradient => self.gradient_tab(background),
            BackgroundTab::Color => self.color_tab(background),
        };

        let body = column![
            self.tab_bar(),
            tab_content,
            Space::with_height(15),
            self.overlay_section(background),
            Space::with_height(15),
            self.noise_section(background),
        ]
        .spacing(10)
        .width(Length::Fill);

        Card::new(head, body).into()
    }

    fn tab_bar(&self) -> Element<'_, BackgroundFormMessage> {
        let tab_button = |tab: BackgroundTab| {
            button(text(tab.label()).size(14))
                .on_press(BackgroundFormMessage::TabSelected(tab))
                .style(if self.tab == tab {
                    iced::theme::Button::Primary
                } else {
                    iced::theme::Button::Secondary
                })
        };

        BackgroundTab::ALL
            .into_iter()
            .fold(row![].spacing(5), |tabs, tab| tabs.push(tab_button(tab)))
            .into()
    }

    fn gradient_tab(&self, background: &Background) -> Element<'_, BackgroundFormMessage> {
        let current = match background {
            Background::LinearGradient(g) => Some(g),
            Background::SolidColor(_) => None,
        };
        let direction = current.map(|g| g.direction);
        let preview_direction = preset_preview_direction(background);

        let mut presets = row![].spacing(5);
        for (index, preset) in LINEAR_GRADIENTS.iter().enumerate() {
            let stops = preset.color_stops();
            let is_selected = current.is_some_and(|g| g.color_stops == stops);
            presets = presets.push(swatch(
                gradient_fill(preview_direction.angle_degrees(), &stops),
                is_selected,
                BackgroundFormMessage::GradientSelected(index),
            ));
        }

        let mut directions = row![].spacing(5).align_items(Alignment::Center);
        for d in GradientDirection::ALL {
            let mut arrow = button(text(d.arrow()).size(14)).style(if direction == Some(d) {
                iced::theme::Button::Primary
            } else {
                iced::theme::Button::Secondary
            });
            // Direction only exists on gradients
            if current.is_some() {
                arrow = arrow.on_press(BackgroundFormMessage::DirectionSelected(d));
            }
            directions = directions.push(arrow);
        }

        column![
            section_header("Gradient"),
            presets,
            field_label("Direction"),
            directions,
        ]
        .spacing(8)
        .into()
    }

    fn color_tab(&self, background: &Background) -> Element<'_, BackgroundFormMessage> {
        let selected = match background {
            Background::SolidColor(s) => Some(&s.color),
            Background::LinearGradient(_) => None,
        };

        let mut colors = row![].spacing(5);
        for color in catalog::solid_colors() {
            let is_selected = selected == Some(&color);
            colors = colors.push(swatch(
                iced::Background::Color(iced_color(&color)),
                is_selected,
                BackgroundFormMessage::ColorSelected(color),
            ));
        }

        column![section_header("Solid color"), colors].spacing(8).into()
    }

    fn overlay_section(&self, background: &Background) -> Element<'_, BackgroundFormMessage> {
        let overlay = background.grid_overlay();

        let pattern = pick_list(
            PatternOption::ALL.to_vec(),
            overlay.map(|o| PatternOption::from(Some(o.pattern))),
            BackgroundFormMessage::PatternSelected,
        )
        .placeholder("Select a pattern");

        let mut section = column![section_header("Grid overlay")].spacing(8);

        if background.kind() == BackgroundKind::SolidColor {
            return section
                .push(hint("Grid overlays are available on gradient backgrounds."))
                .into();
        }
        section = section.push(pattern);

        // Color, opacity and blur are only editable on an existing overlay
        let Some(overlay) = overlay else {
            return section.into();
        };

        let mut colors = row![].spacing(5);
        for color in catalog::grid_overlay_colors() {
            let is_selected = overlay.color == color;
            colors = colors.push(swatch(
                iced::Background::Color(iced_color(&color)),
                is_selected,
                BackgroundFormMessage::OverlayColorSelected(color),
            ));
        }

        let opacity = slider(
            0.0..=1.0,
            overlay.opacity,
            BackgroundFormMessage::OverlayOpacityChanged,
        )
        .step(0.05_f32);

        let blur = slider(
            0.0..=100.0,
            overlay.blur_radius,
            BackgroundFormMessage::OverlayBlurChanged,
        )
        .step(5.0_f32);

        section
            .push(field_label("Color"))
            .push(colors)
            .push(field_label(format!("Opacity: {:.2}", overlay.opacity)))
            .push(opacity)
            .push(field_label(format!("Blur radius: {:.0}%", overlay.blur_radius)))
            .push(blur)
            .into()
    }

    fn noise_section(&self, background: &Background) -> Element<'_, BackgroundFormMessage> {
        let noise = background.noise();
        let noise_slider = slider(0.0..=1.0, noise, BackgroundFormMessage::NoiseChanged).step(0.05_f32);

        container(
            column![
                field_label(format!("Noise: {:.2}", noise)),
                noise_slider,
                hint(NOISE_HINT),
            ]
            .spacing(5),
        )
        .width(Length::Fill)
        .into()
    }
}

/// Direction preset swatches are painted in
fn preset_preview_direction(background: &Background) -> GradientDirection {
    match background {
        Background::LinearGradient(g) => g.direction,
        Background::SolidColor(_) => DEFAULT_LINEAR_GRADIENT_DIRECTION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_form_update() {
        let mut store = TemplateStore::new();
        let mut form = BackgroundForm::new(store.background());
        assert_eq!(form.tab(), BackgroundTab::Gradient);

        form.update(
            &mut store,
            BackgroundFormMessage::DirectionSelected(GradientDirection::ToBottom),
        )
        .unwrap();
        form.update(&mut store, BackgroundFormMessage::PatternSelected(PatternOption::Dots))
            .unwrap();
        form.update(&mut store, BackgroundFormMessage::OverlayOpacityChanged(0.25))
            .unwrap();
        form.update(&mut store, BackgroundFormMessage::NoiseChanged(0.5))
            .unwrap();

        let overlay = store.background().grid_overlay().unwrap();
        assert_eq!(overlay.pattern, GridPattern::Dots);
        assert_eq!(overlay.opacity, 0.25);
        assert_eq!(store.background().noise(), 0.5);
        assert!(store
            .background()
            .to_background_shorthand()
            .unwrap()
            .starts_with("linear-gradient(to bottom, "));
    }

    #[test]
    fn test_tab_switch_does_not_write() {
        let mut store = TemplateStore::new();
        let mut form = BackgroundForm::new(store.background());

        form.update(&mut store, BackgroundFormMessage::TabSelected(BackgroundTab::Color))
            .unwrap();
        assert_eq!(form.tab(), BackgroundTab::Color);
        assert_eq!(store.revision(), 0);

        let color = CssColor::parse("#fecaca").unwrap();
        form.update(&mut store, BackgroundFormMessage::ColorSelected(color))
            .unwrap();
        assert_eq!(store.background().to_background_shorthand().unwrap(), "#fecaca");
    }

    #[test]
    fn test_gradient_preset_selection() {
        let mut store = TemplateStore::new();
        let mut form = BackgroundForm::default();

        form.update(&mut store, BackgroundFormMessage::GradientSelected(2))
            .unwrap();
        assert_eq!(
            store.background().to_background_shorthand().unwrap(),
            "linear-gradient(to top right, #84cc16, #059669)"
        );

        let err = form
            .update(&mut store, BackgroundFormMessage::GradientSelected(99))
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_preset_swatches_follow_current_direction() {
        let mut store = TemplateStore::new();
        store
            .apply(BackgroundPatch::SetDirection(GradientDirection::ToLeft))
            .unwrap();
        assert_eq!(
            preset_preview_direction(store.background()),
            GradientDirection::ToLeft
        );

        store
            .apply(BackgroundPatch::SelectColor(CssColor::parse("#fff").unwrap()))
            .unwrap();
        assert_eq!(
            preset_preview_direction(store.background()),
            DEFAULT_LINEAR_GRADIENT_DIRECTION
        );
    }

    #[test]
    fn test_control_texts() {
        assert_eq!(BackgroundTab::Gradient.label(), "Gradient");
        assert_eq!(BackgroundTab::Color.label(), "Solid Color");
        assert!(NOISE_HINT.ends_with("A value between 0.1 to 0.25 is recommended."));
    }

    #[test]
    fn test_pattern_option_conversions() {
        for option in PatternOption::ALL {
            let pattern: Option<GridPattern> = option.into();
            assert_eq!(PatternOption::from(pattern), option);
        }
        assert_eq!(PatternOption::GraphPaper.to_string(), "Graph Paper");
        assert_eq!(PatternOption::None.to_string(), "None");
    }
}
