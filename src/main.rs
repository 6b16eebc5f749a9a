//! MP3 Editor GUI
//!
//! A small desktop app (built with `iced`) for editing the tags of one MP3 at a time:
//! - type a path, press Open
//! - see the embedded cover and the Title/Artist/Album/Year fields
//! - edit, press "Save changes" (written straight to the file)
//! - point at an image file to replace the cover
//!
//! # Architecture constraints (on purpose)
//! - All tag work goes through `mp3_editor::core::EditorSession`.
//! - The UI never touches the filesystem itself.
//!
//! # Concurrency model (aka “don’t freeze the app”)
//! - Engine calls block on file IO, so they run on a worker thread.
//! - The session is moved into the worker and comes back in the `*Finished` message.
//!
//! Logging: set `RUST_LOG` (default `info`), e.g. `RUST_LOG=mp3_editor=debug`.

mod gui;

use gui::view::constants::{WINDOW_H, WINDOW_W};
use gui::{Editor, update, view};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    iced::application(Editor::default, update, view)
        .title("MP3 Editor")
        .window_size((WINDOW_W, WINDOW_H))
        .run()
}
