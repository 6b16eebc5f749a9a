//! View constants (layout/sizing).

pub(crate) const LABEL_W: f32 = 80.0;
pub(crate) const COVER_SIZE: f32 = 256.0;
pub(crate) const EDITOR_W: f32 = 420.0;

pub(crate) const WINDOW_W: f32 = 1024.0;
pub(crate) const WINDOW_H: f32 = 768.0;
