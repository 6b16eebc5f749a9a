use iced::Task;

use super::super::state::{Editor, Finished, Message};
use super::form::{form_to_batch, load_form_from_session};
use super::util::{restore_session, run_session, take_session};

pub(crate) fn save_pressed(state: &mut Editor) -> Task<Message> {
    if !state.is_loaded() {
        state.status = "Open a file first.".to_string();
        return Task::none();
    }

    let batch = form_to_batch(&state.form);

    let Some(session) = take_session(state) else {
        return Task::none();
    };
    state.status = "Writing tags to file...".to_string();

    Task::perform(
        run_session(session, move |s| s.submit_updates(&batch).map_err(|e| e.to_string())),
        Message::SaveFinished,
    )
}

pub(crate) fn save_finished(state: &mut Editor, finished: Finished) -> Task<Message> {
    match restore_session(state, finished) {
        Ok(()) => {
            load_form_from_session(state);
            state.status = "Tags written to file.".to_string();
        }
        // Keep what the user typed so they can fix it and retry.
        Err(e) => state.status = format!("Save failed: {e}"),
    }
    Task::none()
}
