//! gui/update/util.rs
//! The session does blocking file IO, so it leaves the UI state for the
//! duration of a call and comes back inside the `*Finished` message.

use iced::futures::channel::oneshot;

use mp3_editor::core::EditorSession;

use super::super::state::{Editor, Finished};

/// Run `op` against `session` on a worker thread. Resolves to the session
/// (handed back no matter what) plus the op's outcome.
pub(crate) async fn run_session<F>(mut session: EditorSession, op: F) -> Finished
where
    F: FnOnce(&mut EditorSession) -> Result<(), String> + Send + 'static,
{
    let (tx, rx) = oneshot::channel::<Finished>();

    std::thread::spawn(move || {
        let result = op(&mut session);
        let _ = tx.send((Box::new(session), result));
    });

    // Only a panic inside `op` drops the sender.
    rx.await.expect("session worker panicked")
}

/// Move the session out of the state for a background call.
/// `None` if another call is still running.
pub(crate) fn take_session(state: &mut Editor) -> Option<EditorSession> {
    if state.busy {
        return None;
    }
    let session = state.session.take()?;
    state.busy = true;
    Some(session)
}

/// Put the session back after a background call; returns the call's result.
pub(crate) fn restore_session(state: &mut Editor, finished: Finished) -> Result<(), String> {
    let (session, result) = finished;
    state.session = Some(*session);
    state.busy = false;
    result
}
