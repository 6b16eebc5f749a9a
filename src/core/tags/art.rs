//! Cover art: pull the embedded picture out, put a new one in.
//!
//! Only the first picture frame is treated as "the" cover. Replacing drops
//! every picture frame and inserts a single front cover.

use std::fs;
use std::io;
use std::path::Path;

use id3::frame::{Content, Picture, PictureType};
use tracing::debug;

use super::super::types::CoverImage;
use super::container::Container;
use super::util::extension_lower;

/// Mime type used when the extension tells us nothing.
pub const DEFAULT_MIME: &str = "image/jpeg";

/// Returns the first embedded picture (APIC), if any.
pub fn extract(container: &Container) -> Option<CoverImage> {
    for f in container.frames() {
        if f.id() != "APIC" {
            continue;
        }
        if let Content::Picture(p) = f.content() {
            return Some(CoverImage {
                mime_type: p.mime_type.clone(),
                data: p.data.clone(),
            });
        }
    }
    None
}

/// Guess a mime type from the file extension. Not content sniffing:
/// a misnamed file just gets a wrong (but still embeddable) type.
pub fn mime_type_for(path: &Path) -> &'static str {
    match extension_lower(path).as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        _ => DEFAULT_MIME,
    }
}

/// Read a candidate image file into a `CoverImage`.
pub fn read_cover_file(path: &Path) -> io::Result<CoverImage> {
    let data = fs::read(path)?;
    Ok(CoverImage {
        mime_type: mime_type_for(path).to_string(),
        data,
    })
}

/// Drop every picture frame, then embed `cover` as the front cover.
pub fn replace(container: &mut Container, cover: &CoverImage) {
    let removed = container.remove_pictures();
    debug!(removed, mime = %cover.mime_type, bytes = cover.data.len(), "replacing cover art");

    container.add_picture(Picture {
        mime_type: cover.mime_type.clone(),
        picture_type: PictureType::CoverFront,
        description: String::new(),
        data: cover.data.clone(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_from_extension() {
        assert_eq!(mime_type_for(Path::new("cover.png")), "image/png");
        assert_eq!(mime_type_for(Path::new("photo.PNG")), "image/png");
        assert_eq!(mime_type_for(Path::new("a/b/cover.jpg")), "image/jpeg");
        assert_eq!(mime_type_for(Path::new("cover.JPEG")), "image/jpeg");
        assert_eq!(mime_type_for(Path::new("anim.gif")), "image/gif");
    }

    #[test]
    fn unknown_or_missing_extension_defaults_to_jpeg() {
        assert_eq!(mime_type_for(Path::new("photo.tiff")), DEFAULT_MIME);
        assert_eq!(mime_type_for(Path::new("photo.webp")), DEFAULT_MIME);
        assert_eq!(mime_type_for(Path::new("cover")), DEFAULT_MIME);
        assert_eq!(mime_type_for(Path::new(".png")), DEFAULT_MIME);
    }
}
