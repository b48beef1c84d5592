//! Color swatches and painted surfaces
//!
//! Converts core colors and backgrounds into iced paint, and provides the
//! button and container styles the forms use to show them.

use imprint_core::{Background, ColorStop, CssColor};
use iced::widget::{button, container, Space};
use iced::{Element, Length, Theme};

/// Used for colors iced cannot paint directly (hsl(), uncommon names)
pub const UNKNOWN_COLOR: iced::Color = iced::Color {
    r: 0.5,
    g: 0.5,
    b: 0.5,
    a: 1.0,
};

pub fn iced_color(color: &CssColor) -> iced::Color {
    color
        .to_rgba()
        .map(|c| iced::Color::from_rgba(c.r, c.g, c.b, c.a))
        .unwrap_or(UNKNOWN_COLOR)
}

/// Gradient from stops at the given CSS angle; unplaced stops are spread evenly
pub fn gradient_fill(angle_degrees: f32, stops: &[ColorStop]) -> iced::Background {
    let last = stops.len().saturating_sub(1).max(1) as f32;
    let linear = stops.iter().enumerate().fold(
        iced::gradient::Linear::new(iced::Degrees(angle_degrees)),
        |linear, (i, stop)| {
            let offset = stop.position.unwrap_or(i as f32 / last);
            linear.add_stop(offset, iced_color(&stop.color))
        },
    );
    iced::Background::Gradient(iced::Gradient::Linear(linear))
}

/// Base paint of a background description (overlay and noise are not drawn)
pub fn background_fill(background: &Background) -> iced::Background {
    match background {
        Background::LinearGradient(g) => gradient_fill(g.direction.angle_degrees(), &g.color_stops),
        Background::SolidColor(s) => iced::Background::Color(iced_color(&s.color)),
    }
}

/// Small square button painted with `fill`
pub fn swatch<'a, Message: Clone + 'a>(
    fill: iced::Background,
    is_selected: bool,
    on_press: Message,
) -> Element<'a, Message> {
    button(Space::new(Length::Fixed(24.0), Length::Fixed(24.0)))
        .padding(0)
        .on_press(on_press)
        .style(iced::theme::Button::Custom(Box::new(SwatchStyle {
            fill,
            is_selected,
        })))
        .into()
}

/// Custom button style for swatch buttons
struct SwatchStyle {
    fill: iced::Background,
    is_selected: bool,
}

impl button::StyleSheet for SwatchStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(self.fill),
            border: iced::Border {
                color: if self.is_selected {
                    iced::Color::from_rgb(0.5, 0.8, 1.0)
                } else {
                    iced::Color::from_rgb(0.3, 0.3, 0.3)
                },
                width: if self.is_selected { 3.0 } else { 1.0 },
                radius: 4.0.into(),
            },
            ..Default::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let mut active = self.active(style);
        active.border.width = active.border.width.max(2.0);
        if !self.is_selected {
            active.border.color = iced::Color::from_rgb(0.7, 0.7, 0.7);
        }
        active
    }
}

/// Container style that paints an arbitrary background
pub struct SurfaceStyle {
    pub fill: iced::Background,
    pub radius: f32,
}

impl container::StyleSheet for SurfaceStyle {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(self.fill),
            border: iced::Border {
                color: iced::Color::from_rgb(0.3, 0.3, 0.3),
                width: 1.0,
                radius: self.radius.into(),
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iced_color_from_hex() {
        let color = iced_color(&CssColor::parse("#ff0000").unwrap());
        assert_eq!(color, iced::Color::from_rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_unpaintable_color_falls_back() {
        let color = iced_color(&CssColor::parse("hsl(10 20% 30%)").unwrap());
        assert_eq!(color, UNKNOWN_COLOR);
    }

    #[test]
    fn test_solid_background_fill() {
        let bg = Background::solid_color(CssColor::parse("#000000").unwrap(), 0.0).unwrap();
        assert!(matches!(
            background_fill(&bg),
            iced::Background::Color(c) if c == iced::Color::BLACK
        ));
    }

    #[test]
    fn test_gradient_background_fill() {
        assert!(matches!(
            background_fill(&Background::default()),
            iced::Background::Gradient(_)
        ));
    }
}
