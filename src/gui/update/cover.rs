use iced::Task;
use iced::widget::image::Handle;
use std::path::PathBuf;

use super::super::state::{Editor, Finished, Message};
use super::util::{restore_session, run_session, take_session};

pub(crate) fn cover_input_changed(state: &mut Editor, s: String) -> Task<Message> {
    state.cover_input = s;
    Task::none()
}

pub(crate) fn replace_cover_pressed(state: &mut Editor) -> Task<Message> {
    if !state.is_loaded() {
        state.status = "Open a file first.".to_string();
        return Task::none();
    }

    let input = state.cover_input.trim();
    if input.is_empty() {
        return Task::none();
    }
    let image = PathBuf::from(input);

    let Some(session) = take_session(state) else {
        return Task::none();
    };
    state.status = format!("Embedding {}...", image.display());

    Task::perform(
        run_session(session, move |s| {
            s.submit_cover_image(&image)
                .map(|_| ())
                .map_err(|e| e.to_string())
        }),
        Message::CoverFinished,
    )
}

pub(crate) fn cover_finished(state: &mut Editor, finished: Finished) -> Task<Message> {
    let result = restore_session(state, finished);

    // The in-memory cover may have changed even if saving failed.
    state.cover = state
        .session
        .as_ref()
        .and_then(|s| s.cover())
        .map(|c| Handle::from_bytes(c.data.clone()));

    match result {
        Ok(()) => {
            state.cover_input.clear();
            state.status = "Cover replaced.".to_string();
        }
        Err(e) => state.status = format!("Cover update failed: {e}"),
    }
    Task::none()
}
