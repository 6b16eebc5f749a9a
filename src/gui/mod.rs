//! gui/mod.rs
//!
//! This folder contains ONLY frontend concerns:
//! - app state ('Editor')
//! - messages ('Message')
//! - update logic ('update()')
//! - view layout ('view()')
//!
//! All tag work goes through `mp3_editor::core::EditorSession`.

pub(crate) mod state;
pub(crate) mod update;
pub(crate) mod view;

// Re-export the entry points main.rs needs.
pub(crate) use state::Editor;
pub(crate) use update::update;
pub(crate) use view::view;
