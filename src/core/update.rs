//! Apply a batch of field edits to a container.
//!
//! Order: fields already in the model go first, in model order; fields the
//! file doesn't have yet follow in the order they were submitted.
//!
//! Failure semantics depend on [`BatchPolicy`]:
//! - `PartialApply`: stop at the first invalid field. Fields before it are
//!   already written into the container and stay there (until the next load).
//! - `ValidateFirst`: nothing is written unless every field is valid.
//!
//! Nothing here touches the disk; the session persists after a clean batch.

use tracing::{debug, warn};

use super::config::BatchPolicy;
use super::error::ValidationError;
use super::schema::{FieldKind, FieldValue};
use super::tags::Container;
use super::types::{FieldEdit, MetadataModel};

/// Validate + write `batch` into `container`. Returns how many fields were written.
pub fn apply_updates(
    container: &mut Container,
    model: &MetadataModel,
    batch: &[FieldEdit],
    policy: BatchPolicy,
) -> Result<usize, ValidationError> {
    let edits = resolve(model, batch);

    match policy {
        BatchPolicy::PartialApply => {
            let mut applied = 0;
            for (kind, text) in edits {
                let value = kind.validate(text).inspect_err(|e| {
                    warn!(frame = kind.frame_id(), applied, "validation failed: {e}");
                })?;
                container.set_field(kind, &value);
                applied += 1;
            }
            Ok(applied)
        }
        BatchPolicy::ValidateFirst => {
            let values: Vec<(FieldKind, FieldValue)> = edits
                .into_iter()
                .map(|(kind, text)| kind.validate(text).map(|v| (kind, v)))
                .collect::<Result<_, _>>()
                .inspect_err(|e| warn!(frame = e.frame_id(), "validation failed: {e}"))?;

            for (kind, value) in &values {
                container.set_field(*kind, value);
            }
            Ok(values.len())
        }
    }
}

/// Drop unrecognized frame ids and put the rest in processing order.
fn resolve<'a>(model: &MetadataModel, batch: &'a [FieldEdit]) -> Vec<(FieldKind, &'a str)> {
    let mut edits: Vec<(FieldKind, &str)> = batch
        .iter()
        .filter_map(|edit| match FieldKind::from_frame_id(&edit.frame_id) {
            Some(kind) => Some((kind, edit.text.as_str())),
            None => {
                debug!(frame = %edit.frame_id, "skipping edit for unrecognized frame");
                None
            }
        })
        .collect();

    // Stable: new frames keep their submitted order after the known ones.
    edits.sort_by_key(|(kind, _)| model.position(*kind).unwrap_or(usize::MAX));
    edits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::TagField;

    fn model(kinds: &[FieldKind]) -> MetadataModel {
        MetadataModel::from_fields(kinds.iter().map(|k| TagField::new(*k, "x")).collect())
    }

    fn order(model: &MetadataModel, batch: &[FieldEdit]) -> Vec<FieldKind> {
        resolve(model, batch).into_iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn follows_model_order_not_batch_order() {
        let m = model(&[FieldKind::Artist, FieldKind::Title]);
        let batch = [FieldEdit::new("TIT2", "t"), FieldEdit::new("TPE1", "a")];

        assert_eq!(order(&m, &batch), vec![FieldKind::Artist, FieldKind::Title]);
    }

    #[test]
    fn new_frames_go_last_in_submitted_order() {
        let m = model(&[FieldKind::Album]);
        let batch = [
            FieldEdit::new("TDRC", "2020"),
            FieldEdit::new("TIT2", "t"),
            FieldEdit::new("TALB", "b"),
        ];

        assert_eq!(
            order(&m, &batch),
            vec![FieldKind::Album, FieldKind::ReleaseDate, FieldKind::Title]
        );
    }

    #[test]
    fn unrecognized_ids_are_dropped() {
        let m = MetadataModel::default();
        let batch = [FieldEdit::new("TCON", "Rock"), FieldEdit::new("TPE1", "a")];

        assert_eq!(order(&m, &batch), vec![FieldKind::Artist]);
    }
}
