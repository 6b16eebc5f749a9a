//! GUI state + messages.
//! Pure data definitions used by update/ + view/.

use mp3_editor::core::EditorSession;

/// One row of the edit form (draft text, so the user can type anything).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FormRow {
    pub frame_id: &'static str,
    pub label: &'static str,
    pub value: String,
    /// The file already has this frame (vs. an empty row offered for a new one).
    pub present: bool,
}

/// App state
pub(crate) struct Editor {
    pub status: String,
    /// True while a load/save runs on the worker thread.
    pub busy: bool,

    pub path_input: String,
    pub cover_input: String,

    /// `None` only while a background task holds the session.
    pub session: Option<EditorSession>,

    // Rendered from the session
    pub form: Vec<FormRow>,
    pub cover: Option<iced::widget::image::Handle>,
}

impl Default for Editor {
    fn default() -> Self {
        Self {
            status: "No file selected".to_string(),
            busy: false,

            path_input: String::new(),
            cover_input: String::new(),

            session: Some(EditorSession::new()),

            form: Vec::new(),
            cover: None,
        }
    }
}

impl Editor {
    pub fn is_loaded(&self) -> bool {
        self.session.as_ref().is_some_and(EditorSession::is_loaded)
    }
}

/// Result of a background engine call: the session comes back with it.
pub(crate) type Finished = (Box<EditorSession>, Result<(), String>);

/// Message = “something happened”.
#[derive(Debug, Clone)]
pub(crate) enum Message {
    // Open
    PathInputChanged(String),
    OpenPressed,
    OpenFinished(Finished),

    // Form
    FieldChanged(usize, String),
    SavePressed,
    SaveFinished(Finished),

    // Cover
    CoverInputChanged(String),
    ReplaceCoverPressed,
    CoverFinished(Finished),
}
