use iced::Task;
use std::path::PathBuf;

use super::super::state::{Editor, Finished, Message};
use super::form::load_form_from_session;
use super::util::{restore_session, run_session, take_session};

pub(crate) fn path_input_changed(state: &mut Editor, s: String) -> Task<Message> {
    state.path_input = s;
    Task::none()
}

pub(crate) fn open_pressed(state: &mut Editor) -> Task<Message> {
    let input = state.path_input.trim();
    if input.is_empty() {
        return Task::none();
    }
    let path = PathBuf::from(input);

    let Some(session) = take_session(state) else {
        return Task::none();
    };
    state.status = format!("Opening {}...", path.display());

    Task::perform(
        run_session(session, move |s| {
            s.load_file(&path).map(|_| ()).map_err(|e| e.to_string())
        }),
        Message::OpenFinished,
    )
}

pub(crate) fn open_finished(state: &mut Editor, finished: Finished) -> Task<Message> {
    match restore_session(state, finished) {
        Ok(()) => {
            load_form_from_session(state);
            state.cover_input.clear();
            state.status = state
                .session
                .as_ref()
                .and_then(|s| s.path())
                .map(|p| p.display().to_string())
                .unwrap_or_default();
        }
        // Previous file (if any) stays loaded; keep its form as-is.
        Err(e) => state.status = format!("Open failed: {e}"),
    }
    Task::none()
}
