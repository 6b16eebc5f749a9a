//! Engine options.
//!
//! Defaults match how the editor behaves out of the box:
//! - apply fields one by one, stop at the first bad one (earlier fields stay applied)
//! - write the tag back in the ID3 version it was read with

use id3::Version;

/// What happens to earlier fields when a later one fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPolicy {
    /// Validate + apply field by field. On the first failure, stop;
    /// fields already applied stay applied in the working tag (nothing is saved).
    #[default]
    PartialApply,

    /// Validate the whole batch first. Any failure leaves the working tag untouched.
    ValidateFirst,
}

/// ID3 version used when writing the tag back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteVersion {
    /// Keep the version the file was read with.
    /// v2.2 can't be written, so it becomes v2.4. New tags are v2.4.
    #[default]
    Preserve,
    Id3v23,
    Id3v24,
}

impl WriteVersion {
    /// Version to write, given the version the tag was read with.
    pub fn resolve(self, read_as: Version) -> Version {
        match self {
            WriteVersion::Preserve => match read_as {
                Version::Id3v23 => Version::Id3v23,
                Version::Id3v22 | Version::Id3v24 => Version::Id3v24,
            },
            WriteVersion::Id3v23 => Version::Id3v23,
            WriteVersion::Id3v24 => Version::Id3v24,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditorOptions {
    pub batch_policy: BatchPolicy,
    pub write_version: WriteVersion,
}
