//! gui/update/form.rs
//! Edit form: draft rows built from the session's model.
//!
//! - Fields the file has come first, in file order.
//! - Recognized fields the file lacks follow as empty rows (so an untagged file is editable).

use iced::Task;
use iced::widget::image::Handle;

use mp3_editor::core::schema::recognized_fields;
use mp3_editor::core::{FieldEdit, MetadataModel};

use super::super::state::{Editor, FormRow, Message};

pub(crate) fn field_changed(state: &mut Editor, i: usize, value: String) -> Task<Message> {
    if let Some(row) = state.form.get_mut(i) {
        row.value = value;
    }
    Task::none()
}

/// Re-render form + cover from the session (after a load or save).
pub(crate) fn load_form_from_session(state: &mut Editor) {
    let Some(session) = state.session.as_ref() else {
        return;
    };

    state.form = session.model().map(build_form).unwrap_or_default();
    state.cover = session
        .cover()
        .map(|c| Handle::from_bytes(c.data.clone()));
}

pub(crate) fn build_form(model: &MetadataModel) -> Vec<FormRow> {
    let mut rows: Vec<FormRow> = model
        .fields()
        .iter()
        .map(|f| FormRow {
            frame_id: f.frame_id(),
            label: f.display_name(),
            value: f.value.clone(),
            present: true,
        })
        .collect();

    for (frame_id, label) in recognized_fields() {
        if rows.iter().any(|r| r.frame_id == frame_id) {
            continue;
        }
        rows.push(FormRow {
            frame_id,
            label,
            value: String::new(),
            present: false,
        });
    }

    rows
}

/// Batch to submit: every existing field, plus new fields the user filled in.
pub(crate) fn form_to_batch(form: &[FormRow]) -> Vec<FieldEdit> {
    form.iter()
        .filter(|r| r.present || !r.value.is_empty())
        .map(|r| FieldEdit::new(r.frame_id, r.value.clone()))
        .collect()
}
