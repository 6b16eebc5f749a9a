//! core/tags/read.rs
//! Turn a loaded container into the editable `MetadataModel`.
//!
//! - Frames are visited in tag order; that order is the model order.
//! - Only recognized frames make it in (see `schema`). Pictures go through `art`.
//! - A recognized field that shows up twice (same id, or TDRC + TYER): first one wins.
//! - A v2.3 TYER year picks up day and month from TDAT ("DDMM") when present.

use std::collections::HashSet;

use tracing::debug;

use super::super::schema::FieldKind;
use super::super::types::{MetadataModel, TagField};
use super::container::Container;
use super::util::frame_text;

pub fn build_model(container: &Container) -> MetadataModel {
    let mut seen: HashSet<FieldKind> = HashSet::with_capacity(FieldKind::ALL.len());
    let mut fields: Vec<TagField> = Vec::new();

    for frame in container.frames() {
        let Some(kind) = FieldKind::from_frame_id(frame.id()) else {
            debug!(frame = frame.id(), "skipping unrecognized frame");
            continue;
        };

        if !seen.insert(kind) {
            debug!(frame = frame.id(), "skipping duplicate frame");
            continue;
        }

        let text = match frame.id() {
            "TYER" => frame_text(frame).map(|year| with_tdat(container, year)),
            _ => frame_text(frame),
        };

        match text {
            Some(value) => fields.push(TagField::new(kind, value)),
            None => debug!(frame = frame.id(), "recognized frame has no text content"),
        }
    }

    MetadataModel::from_fields(fields)
}

fn with_tdat(container: &Container, year: String) -> String {
    match container.text("TDAT") {
        Some(ddmm) if ddmm.len() == 4 && ddmm.bytes().all(|b| b.is_ascii_digit()) => {
            format!("{year}-{}-{}", &ddmm[2..], &ddmm[..2])
        }
        _ => year,
    }
}
