//! GUI renderer (reads state, produces widgets; no mutation).

pub(crate) mod constants;
mod editor;
mod widgets;

use iced::Length;
use iced::widget::{Column, button, column, row, text, text_input};

use super::state::{Editor, Message};

pub(crate) fn view(state: &Editor) -> Column<'_, Message> {
    let path_input = text_input("Path to an .mp3 file", &state.path_input)
        .on_input(Message::PathInputChanged)
        .on_submit(Message::OpenPressed)
        .width(Length::Fill);

    let open_btn = if state.busy {
        button("Open")
    } else {
        button("Open").on_press(Message::OpenPressed)
    };

    let header = column![
        text(state.status.as_str()).size(14),
        row![path_input, open_btn].spacing(8),
    ]
    .spacing(8);

    let editor = editor::build_editor_panel(state).width(Length::Fill);

    column![header, editor].spacing(12).padding(12)
}
