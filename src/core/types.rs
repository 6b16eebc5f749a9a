//! Core data types shared between core logic and the UI.
//!
//! Rule of thumb:
//! - These structs should be “boring bags of data”
//! - No GUI code
//! - No filesystem code
//! - No tag parsing code
//!
//! 'MetadataModel' is the editable view of ONE loaded file: the recognized fields, in file order.

use super::schema::FieldKind;

/// One editable field of the loaded tag.
///
/// `value` is always text, even when the frame stores something structured
/// (a release date is rendered as "2023-05").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagField {
    pub kind: FieldKind,
    pub value: String,
}

impl TagField {
    pub fn new(kind: FieldKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// ID3 frame id, e.g. "TIT2".
    pub fn frame_id(&self) -> &'static str {
        self.kind.frame_id()
    }

    /// Label shown next to the input box, e.g. "Title".
    pub fn display_name(&self) -> &'static str {
        self.kind.display_name()
    }
}

/// Ordered recognized fields of one file.
///
/// Order = order the frames appear in the tag. Rebuilt wholesale from the
/// container; never patched field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataModel {
    fields: Vec<TagField>,
}

impl MetadataModel {
    pub(crate) fn from_fields(fields: Vec<TagField>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[TagField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, kind: FieldKind) -> Option<&TagField> {
        self.fields.iter().find(|f| f.kind == kind)
    }

    /// Current text for `kind`, if the tag has that frame.
    pub fn value(&self, kind: FieldKind) -> Option<&str> {
        self.get(kind).map(|f| f.value.as_str())
    }

    /// Position of `kind` in the model (used to order edit batches).
    pub fn position(&self, kind: FieldKind) -> Option<usize> {
        self.fields.iter().position(|f| f.kind == kind)
    }
}

/// Embedded cover art.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverImage {
    /// e.g. "image/jpeg"
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// One proposed edit: "set frame `frame_id` to `text`".
///
/// Frame ids stay plain strings here because that's what the caller has
/// (a label property, a form row). The schema resolves them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEdit {
    pub frame_id: String,
    pub text: String,
}

impl FieldEdit {
    pub fn new(frame_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            frame_id: frame_id.into(),
            text: text.into(),
        }
    }
}
