//! core/tags/util.rs
//! Small helpers shared by tag reading/writing.

use std::path::Path;

use id3::Frame;
use id3::frame::Content;

/// True for `*.mp3` (any case).
pub(crate) fn is_mp3(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("mp3"))
        .unwrap_or(false)
}

/// Best-effort text value of a frame.
///
/// ID3v2.4 stores multiple values NUL-separated; show them joined with "/"
/// (the v2.3 convention) so the value stays editable as one line.
pub(crate) fn frame_text(frame: &Frame) -> Option<String> {
    match frame.content() {
        Content::Text(s) => Some(s.replace('\0', "/")),
        Content::Link(s) => Some(s.clone()),
        _ => None,
    }
}

/// Lowercased file extension, if any.
pub(crate) fn extension_lower(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase)
}
