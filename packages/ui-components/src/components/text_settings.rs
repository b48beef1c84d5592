//! Text settings form: font family, weight, size and color

use imprint_core::catalog;
use imprint_core::text::parse_font_size;
use imprint_core::{
    CssColor, FontFamily, FontWeight, ImprintResult, TemplateStore, TextPatch, TextStyle,
};
use iced::widget::{column, container, pick_list, row, text, text_input, Space};
use iced::{Alignment, Element, Length};
use iced_aw::Card;
use tracing::debug;

use super::field::{field_label, hint};
use super::swatch::{iced_color, swatch, SurfaceStyle};

/// Messages from the text settings form
#[derive(Debug, Clone)]
pub enum TextSettingsMessage {
    FontFamilyChanged(FontFamily),
    FontWeightChanged(FontWeight),
    /// Raw contents of the font size field
    FontSizeInput(String),
    ColorSelected(CssColor),
    /// Raw contents of the custom color field
    CustomColorInput(String),
}

/// Text settings widget
///
/// Holds the in-progress contents of the two free-text fields, which only
/// reach the store once they parse.
#[derive(Debug, Clone, Default)]
pub struct TextSettings {
    font_size_input: String,
    custom_color_input: String,
}

impl TextSettings {
    pub fn new(style: &TextStyle) -> Self {
        let mut settings = Self::default();
        settings.sync(style);
        settings
    }

    /// Reset the text fields to the stored style
    pub fn sync(&mut self, style: &TextStyle) {
        self.font_size_input = style.font_size.to_string();
        self.custom_color_input = style.color.to_string();
    }

    pub fn font_size_input(&self) -> &str {
        &self.font_size_input
    }

    pub fn custom_color_input(&self) -> &str {
        &self.custom_color_input
    }

    /// Handle a settings message, writing any resulting edit to `store`
    pub fn update(
        &mut self,
        store: &mut TemplateStore,
        message: TextSettingsMessage,
    ) -> ImprintResult<()> {
        match message {
            TextSettingsMessage::FontFamilyChanged(family) => {
                store.apply_text(TextPatch::SetFontFamily(family))
            }
            TextSettingsMessage::FontWeightChanged(weight) => {
                store.apply_text(TextPatch::SetFontWeight(weight))
            }
            TextSettingsMessage::FontSizeInput(input) => {
                let parsed = parse_font_size(&input);
                self.font_size_input = input;
                match parsed {
                    Ok(size) => {
                        store.apply_text(TextPatch::SetFontSize(size))?;
                        // Show the clamped value the store holds
                        if size.to_string() != self.font_size_input.trim() {
                            self.font_size_input = store.text().font_size.to_string();
                        }
                        Ok(())
                    }
                    Err(e) => {
                        debug!("Ignoring font size input: {}", e);
                        Ok(())
                    }
                }
            }
            TextSettingsMessage::ColorSelected(color) => {
                self.custom_color_input = color.to_string();
                store.apply_text(TextPatch::SetColor(color))
            }
            TextSettingsMessage::CustomColorInput(input) => {
                let parsed = input
                    .starts_with('#')
                    .then(|| CssColor::parse(input.as_str()))
                    .and_then(Result::ok);
                self.custom_color_input = input;
                match parsed {
                    Some(color) => store.apply_text(TextPatch::SetColor(color)),
                    None => Ok(()),
                }
            }
        }
    }

    /// Build the view
    pub fn view<'a>(&'a self, style: &'a TextStyle) -> Element<'a, TextSettingsMessage> {
        let family = pick_list(
            FontFamily::ALL.to_vec(),
            Some(style.font_family),
            TextSettingsMessage::FontFamilyChanged,
        )
        .placeholder("Select a font")
        .width(Length::Fill);

        let weight = pick_list(
            style.font_family.weights().to_vec(),
            Some(style.font_weight),
            TextSettingsMessage::FontWeightChanged,
        )
        .placeholder("Select a weight")
        .width(Length::Fill);

        let size = text_input("Font size", &self.font_size_input)
            .on_input(TextSettingsMessage::FontSizeInput)
            .width(Length::Fixed(120.0));

        let mut colors = row![].spacing(5).align_items(Alignment::Center);
        for color in catalog::text_colors() {
            let is_selected = style.color == color;
            colors = colors.push(swatch(
                iced::Background::Color(iced_color(&color)),
                is_selected,
                TextSettingsMessage::ColorSelected(color),
            ));
        }

        let current = container(Space::new(Length::Fixed(24.0), Length::Fixed(24.0))).style(
            iced::theme::Container::Custom(Box::new(SurfaceStyle {
                fill: iced::Background::Color(iced_color(&style.color)),
                radius: 4.0,
            })),
        );
        let custom = row![
            current,
            text_input("#rrggbb", &self.custom_color_input)
                .on_input(TextSettingsMessage::CustomColorInput)
                .width(Length::Fixed(120.0)),
        ]
        .spacing(8)
        .align_items(Alignment::Center);

        let head = column![
            text("Text").size(22),
            hint("Font and color of the image text."),
        ]
        .spacing(4);

        let body = column![
            field_label("Font family"),
            family,
            field_label("Font weight"),
            weight,
            field_label("Font size"),
            size,
            field_label("Text color"),
            colors,
            field_label("Custom color"),
            custom,
        ]
        .spacing(8)
        .width(Length::Fill);

        Card::new(head, body).into()
    }
}
