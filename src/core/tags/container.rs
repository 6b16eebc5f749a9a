//! core/tags/container.rs
//! One file's ID3 tag, held in memory between load and persist.
//!
//! The `id3` crate does all byte-level work; this is the thin mapping-like layer
//! the rest of the engine talks to.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use id3::frame::Picture;
use id3::{ErrorKind, Frame, Tag, TagLike, Version};
use tracing::{debug, info};

use super::super::config::WriteVersion;
use super::super::error::{LoadError, PersistError};
use super::super::schema::{FieldKind, FieldValue};
use super::util::is_mp3;
use super::write::write_field;

#[derive(Debug, Clone)]
pub struct Container {
    path: PathBuf,
    tag: Tag,
    /// Did the file have a tag when we read it?
    tagged: bool,
    /// Version the tag will be saved as.
    write_as: Version,
}

/// How far into an untagged file we look for the first MPEG frame.
const SYNC_SEARCH_LEN: u64 = 8 * 1024;

impl Container {
    /// Read the tag of an MP3.
    ///
    /// - `Ok(Some(_))`: file has a tag
    /// - `Ok(None)`: MPEG audio, no tag yet (see [`Container::create_empty`])
    /// - `Err(_)`: not something we can open
    pub fn open(path: &Path) -> Result<Option<Self>, LoadError> {
        check_audio_path(path)?;

        match Tag::read_from_path(path) {
            Ok(tag) => {
                debug!(path = %path.display(), version = ?tag.version(), "read tag");
                Ok(Some(Self {
                    path: path.to_path_buf(),
                    write_as: WriteVersion::default().resolve(tag.version()),
                    tag,
                    tagged: true,
                }))
            }
            Err(e) if matches!(e.kind, ErrorKind::NoTag) => {
                // Without a tag the extension is all we have; check the bytes too.
                if has_frame_sync(path)? {
                    Ok(None)
                } else {
                    Err(LoadError::NotAudio(path.to_path_buf()))
                }
            }
            Err(e) => Err(LoadError::Read {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    /// Start a fresh (zero-frame) tag for a file that has none.
    pub fn create_empty(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            tag: Tag::with_version(Version::Id3v24),
            tagged: false,
            write_as: Version::Id3v24,
        }
    }

    /// Pick the version [`persist`](Self::persist) and date writes use.
    pub fn with_write_version(mut self, write_version: WriteVersion) -> Self {
        self.write_as = write_version.resolve(self.tag.version());
        self
    }

    /// Open the tag, or start an empty one if the file is untagged.
    pub fn open_or_create(path: &Path) -> Result<Self, LoadError> {
        match Self::open(path)? {
            Some(c) => Ok(c),
            None => {
                info!(path = %path.display(), "no ID3 tag, starting an empty one");
                Ok(Self::create_empty(path))
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_tagged(&self) -> bool {
        self.tagged
    }

    /// All frames, in the order they appear in the tag.
    pub fn frames(&self) -> impl Iterator<Item = &Frame> + '_ {
        self.tag.frames()
    }

    /// Raw text of the first frame with this id (handy for checks and tests).
    pub fn text(&self, frame_id: &str) -> Option<&str> {
        self.tag.get(frame_id).and_then(|f| f.content().text())
    }

    /// Write a validated value into its frame, creating the frame if needed.
    pub fn set_field(&mut self, kind: FieldKind, value: &FieldValue) {
        write_field(&mut self.tag, kind, value, self.write_as);
    }

    /// Remove every embedded picture frame. Returns how many were removed.
    pub fn remove_pictures(&mut self) -> usize {
        let count = self.tag.pictures().count();
        self.tag.remove_all_pictures();
        count
    }

    pub fn add_picture(&mut self, picture: Picture) {
        let _ = self.tag.add_frame(picture); // pictures were cleared first; nothing to keep
    }

    /// Serialize the tag and write it back into the file (in place).
    pub fn persist(&self) -> Result<(), PersistError> {
        let version = self.write_as;

        self.tag
            .write_to_path(&self.path, version)
            .map_err(|source| PersistError {
                path: self.path.clone(),
                source,
            })?;

        info!(path = %self.path.display(), ?version, "tag written");
        Ok(())
    }
}

fn check_audio_path(path: &Path) -> Result<(), LoadError> {
    let meta = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(LoadError::Read {
                path: path.to_path_buf(),
                source: e.into(),
            });
        }
    };

    if !meta.is_file() {
        return Err(LoadError::NotAFile(path.to_path_buf()));
    }
    if !is_mp3(path) {
        return Err(LoadError::Unsupported(path.to_path_buf()));
    }
    Ok(())
}

/// Is there an MPEG audio frame header near the start of the file?
fn has_frame_sync(path: &Path) -> Result<bool, LoadError> {
    let mut head = Vec::new();
    File::open(path)
        .and_then(|f| f.take(SYNC_SEARCH_LEN).read_to_end(&mut head))
        .map_err(|e| LoadError::Read {
            path: path.to_path_buf(),
            source: e.into(),
        })?;

    Ok(head.windows(4).any(is_frame_header))
}

/// 11 sync bits, then no reserved version, layer, bitrate or sample rate.
fn is_frame_header(b: &[u8]) -> bool {
    b[0] == 0xFF
        && b[1] >> 5 == 0b111
        && (b[1] >> 3) & 0b11 != 0b01
        && (b[1] >> 1) & 0b11 != 0b00
        && b[2] >> 4 != 0b1111
        && (b[2] >> 2) & 0b11 != 0b11
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_header_check() {
        // MPEG-1 Layer III, 128 kbps, 44.1 kHz
        assert!(is_frame_header(&[0xFF, 0xFB, 0x90, 0x64]));
        // MPEG-2 Layer III
        assert!(is_frame_header(&[0xFF, 0xF3, 0x48, 0xC4]));

        // sync bits missing
        assert!(!is_frame_header(&[0xFF, 0x1B, 0x90, 0x64]));
        assert!(!is_frame_header(b"shop"));
        // reserved version
        assert!(!is_frame_header(&[0xFF, 0xEB, 0x90, 0x64]));
        // reserved layer
        assert!(!is_frame_header(&[0xFF, 0xF9, 0x90, 0x64]));
        // bad bitrate index
        assert!(!is_frame_header(&[0xFF, 0xFB, 0xF0, 0x64]));
        // reserved sample rate
        assert!(!is_frame_header(&[0xFF, 0xFB, 0x9C, 0x64]));
    }
}
