//! Reusable small widgets used across view modules.

use iced::widget::{column, container, image, row, text, text_input};
use iced::{Alignment, Element, Length};

use super::super::state::Message;
use super::constants::LABEL_W;

/// Square cover slot: the embedded picture, or a note that the file has none
/// (the "Replace cover" input below it adds one).
pub(crate) fn cover_thumb(
    handle: Option<&iced::widget::image::Handle>,
    size: f32,
) -> Element<'static, Message> {
    let content: Element<'static, Message> = match handle {
        Some(h) => image(h.clone()).into(),
        None => column![text("No embedded cover").size(14), text("APIC frame missing").size(11)]
            .spacing(4)
            .align_x(Alignment::Center)
            .into(),
    };

    container(content)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

/// "Label: [input]" row.
pub(crate) fn field_row<'a>(
    label: &'a str,
    value: &'a str,
    on_input: impl Fn(String) -> Message + 'a,
) -> iced::widget::Row<'a, Message> {
    row![
        text(format!("{label}: ")).width(Length::Fixed(LABEL_W)),
        text_input("", value).on_input(on_input).width(Length::Fill),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
}
