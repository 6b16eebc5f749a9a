//! Cover + metadata form for the loaded file.

use iced::Length;
use iced::widget::{Column, button, column, container, row, text, text_input};

use super::super::state::{Editor, Message};
use super::constants::{COVER_SIZE, EDITOR_W};
use super::widgets::{cover_thumb, field_row};

pub(crate) fn build_editor_panel(state: &Editor) -> iced::widget::Container<'_, Message> {
    if !state.is_loaded() {
        return container(text("Open an .mp3 file to edit its tags.")).padding(12);
    }

    let cover_input = text_input("Image file (.png, .jpg, .gif)", &state.cover_input)
        .on_input(Message::CoverInputChanged)
        .on_submit(Message::ReplaceCoverPressed)
        .width(Length::Fixed(COVER_SIZE));

    let cover_btn = if state.busy {
        button("Replace cover")
    } else {
        button("Replace cover").on_press(Message::ReplaceCoverPressed)
    };

    let cover_panel = column![
        cover_thumb(state.cover.as_ref(), COVER_SIZE),
        cover_input,
        cover_btn,
    ]
    .spacing(8);

    let mut fields = Column::new().spacing(8);
    for (i, r) in state.form.iter().enumerate() {
        fields = fields.push(field_row(r.label, &r.value, move |s| {
            Message::FieldChanged(i, s)
        }));
    }

    let save_btn = if state.busy {
        button("Save changes")
    } else {
        button("Save changes").on_press(Message::SavePressed)
    };

    let form = column![fields, save_btn]
        .spacing(12)
        .width(Length::Fixed(EDITOR_W));

    container(row![cover_panel, form].spacing(24)).padding(12)
}
