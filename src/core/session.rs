//! One editing session = one loaded file.
//!
//! States:
//! - empty: nothing loaded yet
//! - loaded: container + model + cover, all owned here
//!
//! Every operation runs to completion before returning (blocking file IO).
//! The GUI is expected to call these off its render thread.
//!
//! Loading a new file replaces everything wholesale. A failed load leaves the
//! previous file's state untouched. A successful update batch is saved
//! immediately; there is no separate "save" step and no dirty flag.

use std::path::Path;

use tracing::{info, warn};

use super::config::EditorOptions;
use super::error::{CoverError, LoadError, UpdateError};
use super::tags::{Container, art, build_model};
use super::types::{CoverImage, FieldEdit, MetadataModel};
use super::update::apply_updates;

#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    options: EditorOptions,
    loaded: Option<Loaded>,
}

#[derive(Debug, Clone)]
struct Loaded {
    container: Container,
    model: MetadataModel,
    cover: Option<CoverImage>,
}

impl Loaded {
    fn from_container(container: Container) -> Self {
        let model = build_model(&container);
        let cover = art::extract(&container);
        Self {
            container,
            model,
            cover,
        }
    }
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            options,
            loaded: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    pub fn path(&self) -> Option<&Path> {
        self.loaded.as_ref().map(|l| l.container.path())
    }

    pub fn model(&self) -> Option<&MetadataModel> {
        self.loaded.as_ref().map(|l| &l.model)
    }

    pub fn cover(&self) -> Option<&CoverImage> {
        self.loaded.as_ref().and_then(|l| l.cover.as_ref())
    }

    /// Working container (including edits that were applied but not saved).
    pub fn container(&self) -> Option<&Container> {
        self.loaded.as_ref().map(|l| &l.container)
    }

    /// Open `path` and make it the current file.
    ///
    /// An MP3 without any tag loads as an empty model; edits create frames.
    pub fn load_file(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<(&MetadataModel, Option<&CoverImage>), LoadError> {
        let path = path.as_ref();

        let container = Container::open_or_create(path)
            .inspect_err(|e| warn!("load failed: {e}"))?
            .with_write_version(self.options.write_version);
        let loaded = Loaded::from_container(container);

        info!(
            path = %path.display(),
            fields = loaded.model.len(),
            cover = loaded.cover.is_some(),
            "file loaded"
        );

        let loaded = self.loaded.insert(loaded);
        Ok((&loaded.model, loaded.cover.as_ref()))
    }

    /// Validate + apply `batch`, then save the file.
    ///
    /// On a validation error nothing is saved. With the default
    /// [`BatchPolicy::PartialApply`](super::config::BatchPolicy::PartialApply),
    /// fields before the bad one stay applied in memory (visible through
    /// [`model`](Self::model)); reload the file for a clean slate.
    ///
    /// A save failure comes back as [`UpdateError::Persist`]; the in-memory
    /// edits are kept so the caller can retry.
    pub fn submit_updates(&mut self, batch: &[FieldEdit]) -> Result<(), UpdateError> {
        let policy = self.options.batch_policy;
        let loaded = self.loaded.as_mut().ok_or(UpdateError::NoFileLoaded)?;

        let result = apply_updates(&mut loaded.container, &loaded.model, batch, policy);
        loaded.model = build_model(&loaded.container);

        let applied = result?;
        loaded.container.persist()?;

        info!(applied, "updates saved");
        Ok(())
    }

    /// Embed the image at `path` as the cover (replacing all existing
    /// pictures) and save the file.
    ///
    /// If reading the image fails nothing changes. If saving fails the new
    /// cover is still in memory and [`CoverError::Persist`] is returned.
    pub fn submit_cover_image(&mut self, path: impl AsRef<Path>) -> Result<CoverImage, CoverError> {
        let path = path.as_ref();
        let loaded = self.loaded.as_mut().ok_or(CoverError::NoFileLoaded)?;

        let cover = art::read_cover_file(path).map_err(|source| CoverError::ReadImage {
            path: path.to_path_buf(),
            source,
        })?;

        art::replace(&mut loaded.container, &cover);
        loaded.cover = Some(cover.clone());

        loaded.container.persist()?;

        info!(image = %path.display(), mime = %cover.mime_type, "cover replaced");
        Ok(cover)
    }
}
