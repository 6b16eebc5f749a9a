//! core/tags/mod.rs
//!
//! ID3 tag utilities (everything that touches the `id3` crate lives under here).
//! Public API:
//! - [`Container`] opens/creates/persists one file's tag.
//! - [`build_model`] turns a container into the editable [`MetadataModel`](super::types::MetadataModel).
//! - [`art`] extracts and replaces the embedded cover image.

pub mod art;
mod container;
mod read;
mod util;
mod write;

pub use container::Container;
pub use read::build_model;
