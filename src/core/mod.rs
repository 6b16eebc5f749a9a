//! core/mod.rs
//!
//! The brain of the app:
//! - Map ID3 frames to the fields we edit (schema)
//! - Read/write tags through the `id3` crate (tags)
//! - Apply edit batches with defined failure semantics (update)
//! - Hold one loaded file as an editing session (session)
//!
//! Pipeline for one file:
//!   (A) open path -> Container (or an empty one if the file has no tag)
//!   (B) Container -> MetadataModel + Option<CoverImage>
//!   (C) edits -> validate -> write frames -> persist
//!
//! This keeps the GUI dumb: it renders what the session returns and sends edits back.

pub mod config;
pub mod error;
pub mod schema;
pub mod session;
pub mod tags;
pub mod types;
pub mod update;

pub use config::{BatchPolicy, EditorOptions, WriteVersion};
pub use error::{CoverError, LoadError, PersistError, UpdateError, ValidationError};
pub use schema::{FieldKind, FieldValue};
pub use session::EditorSession;
pub use types::{CoverImage, FieldEdit, MetadataModel, TagField};
