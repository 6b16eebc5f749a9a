//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{Editor, Message};

mod cover;
mod form;
mod open;
mod save;
mod util;

pub(crate) fn update(state: &mut Editor, message: Message) -> Task<Message> {
    match message {
        // Open
        Message::PathInputChanged(s) => open::path_input_changed(state, s),
        Message::OpenPressed => open::open_pressed(state),
        Message::OpenFinished(result) => open::open_finished(state, result),

        // Form
        Message::FieldChanged(i, value) => form::field_changed(state, i, value),
        Message::SavePressed => save::save_pressed(state),
        Message::SaveFinished(result) => save::save_finished(state, result),

        // Cover
        Message::CoverInputChanged(s) => cover::cover_input_changed(state, s),
        Message::ReplaceCoverPressed => cover::replace_cover_pressed(state),
        Message::CoverFinished(result) => cover::cover_finished(state, result),
    }
}
