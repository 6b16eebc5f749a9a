//! mp3-editor
//!
//! Tag synchronization engine for a small MP3 metadata editor.
//!
//! The engine lives in [`core`]:
//! - load an MP3, read the fields we care about (title/artist/album/year)
//! - pull the embedded cover image, if there is one
//! - validate + apply edits, then write the tag back to disk
//!
//! The desktop front end (`src/main.rs`) only calls into [`core::session::EditorSession`].

pub mod core;
