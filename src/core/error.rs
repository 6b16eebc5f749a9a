//! Error types returned by the engine.
//!
//! Split by "what went wrong" so the caller can tell
//! "your data was wrong" (ValidationError) from "we couldn't read/save it" (everything else).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::schema::FieldKind;

/// A proposed value failed its field rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: FieldKind,
    pub value: String,
    pub message: String,
}

impl ValidationError {
    pub fn frame_id(&self) -> &'static str {
        self.field.frame_id()
    }
}

/// The file could not be opened as a taggable audio file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{}: no such file", .0.display())]
    NotFound(PathBuf),

    #[error("{}: not a regular file", .0.display())]
    NotAFile(PathBuf),

    #[error("{}: unsupported file type (expected .mp3)", .0.display())]
    Unsupported(PathBuf),

    /// Named `.mp3`, but no tag and no MPEG audio frames either.
    #[error("{}: not an MP3 audio file", .0.display())]
    NotAudio(PathBuf),

    #[error("{}: failed to read tag: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: id3::Error,
    },
}

/// Writing the tag back to disk failed.
#[derive(Debug, Error)]
#[error("{}: failed to write tag: {source}", .path.display())]
pub struct PersistError {
    pub path: PathBuf,
    #[source]
    pub source: id3::Error,
}

/// Outcome of a failed `submit_updates`.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("no file loaded")]
    NoFileLoaded,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Outcome of a failed `submit_cover_image`.
#[derive(Debug, Error)]
pub enum CoverError {
    #[error("no file loaded")]
    NoFileLoaded,

    #[error("{}: failed to read image: {source}", .path.display())]
    ReadImage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The cover was replaced in memory, but saving the file failed.
    #[error(transparent)]
    Persist(#[from] PersistError),
}
