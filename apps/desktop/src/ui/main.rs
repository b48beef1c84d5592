//! Editor layout: live preview beside the settings forms

use crate::app::{ImprintApp, Message};
use imprint_core::{FontWeight, TextStyle};
use imprint_ui::{background_fill, hint, iced_color, SurfaceStyle};
use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};

const PREVIEW_TEXT: &str = "Hello, Imprint";

pub fn main_view(app: &ImprintApp) -> Element<'_, Message> {
    let forms = column![
        app.background_form
            .view(app.store.background())
            .map(Message::Background),
        app.text_settings.view(app.store.text()).map(Message::Text),
    ]
    .spacing(20)
    .padding(10);

    let content = row![
        preview(app),
        container(scrollable(forms)).width(Length::Fixed(380.0)),
    ]
    .spacing(20);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(20)
        .into()
}

fn preview(app: &ImprintApp) -> Element<'_, Message> {
    let style = app.store.text();
    let surface = container(sample_text(style))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .style(iced::theme::Container::Custom(Box::new(SurfaceStyle {
            fill: background_fill(app.store.background()),
            radius: 12.0,
        })));

    let css = match app.store.background().to_background_shorthand() {
        Ok(css) => format!("background: {};", css),
        Err(e) => e.to_string(),
    };

    let mut footer = column![hint(css), hint(format!("font: {};", style.font_shorthand()))]
        .spacing(4);

    if let Some(error) = &app.last_error {
        footer = footer.push(
            row![
                text(error)
                    .size(14)
                    .style(iced::theme::Text::Color(iced::Color::from_rgb(1.0, 0.4, 0.4))),
                button(text("Dismiss").size(12))
                    .on_press(Message::DismissError)
                    .style(iced::theme::Button::Secondary),
            ]
            .spacing(10)
            .align_items(Alignment::Center),
        );
    }

    column![surface, footer]
        .spacing(12)
        .width(Length::Fill)
        .into()
}

fn sample_text(style: &TextStyle) -> Element<'static, Message> {
    text(PREVIEW_TEXT)
        .size(style.font_size as f32)
        .font(iced::Font {
            family: iced::font::Family::Name(style.font_family.label()),
            weight: iced_weight(style.font_weight),
            ..iced::Font::DEFAULT
        })
        .style(iced::theme::Text::Color(iced_color(&style.color)))
        .into()
}

fn iced_weight(weight: FontWeight) -> iced::font::Weight {
    use iced::font::Weight;

    match weight {
        FontWeight::Thin => Weight::Thin,
        FontWeight::ExtraLight => Weight::ExtraLight,
        FontWeight::Light => Weight::Light,
        FontWeight::Normal => Weight::Normal,
        FontWeight::Medium => Weight::Medium,
        FontWeight::SemiBold => Weight::Semibold,
        FontWeight::Bold => Weight::Bold,
        FontWeight::ExtraBold => Weight::ExtraBold,
        FontWeight::Black => Weight::Black,
    }
}
