//! Write validated field values into an in-memory ID3 tag.
//! (Saving to disk is `Container::persist`.)

use id3::{Tag, TagLike, Timestamp, Version};

use super::super::schema::{FieldKind, FieldValue};

/// Set the frame for `kind`, replacing any existing frame with that id.
///
/// Text is written as-is: an empty string is still a (empty) frame, not a removal.
/// Dates go into the frames of the version the tag will be saved as.
pub(crate) fn write_field(tag: &mut Tag, kind: FieldKind, value: &FieldValue, version: Version) {
    match value {
        FieldValue::Text(s) => tag.set_text(kind.frame_id(), s.clone()),
        FieldValue::Date(ts) => write_date(tag, ts, version),
    }
}

fn write_date(tag: &mut Tag, ts: &Timestamp, version: Version) {
    match version {
        // v2.3: TYER = "YYYY", TDAT = "DDMM". A month without a day has no home.
        Version::Id3v23 => {
            let _ = tag.remove("TDRC");
            tag.set_text("TYER", format!("{:04}", ts.year));
            match (ts.month, ts.day) {
                (Some(month), Some(day)) => tag.set_text("TDAT", format!("{day:02}{month:02}")),
                _ => {
                    let _ = tag.remove("TDAT");
                }
            }
        }
        // TDRC is a text frame holding an ID3 timestamp ("2023-05-17")
        _ => {
            let _ = tag.remove("TYER");
            let _ = tag.remove("TDAT");
            tag.set_text("TDRC", ts.to_string());
        }
    }
}
