use iced::widget::{text, Text};

pub fn section_header<'a>(label: impl ToString) -> Text<'a> {
    text(label)
        .size(18)
        .style(iced::theme::Text::Color(iced::Color::from_rgb(0.8, 0.8, 0.8)))
}

pub fn field_label<'a>(label: impl ToString) -> Text<'a> {
    text(label)
        .size(14)
        .style(iced::theme::Text::Color(iced::Color::from_rgb(0.7, 0.7, 0.7)))
}

pub fn hint<'a>(label: impl ToString) -> Text<'a> {
    text(label)
        .size(12)
        .style(iced::theme::Text::Color(iced::Color::from_rgb(0.55, 0.55, 0.55)))
}
