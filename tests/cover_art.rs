mod common;

use std::fs;
use std::path::Path;

use id3::frame::{Picture, PictureType};
use id3::{Tag, TagLike};
use mp3_editor::core::tags::{Container, art};
use mp3_editor::core::{CoverError, CoverImage, EditorSession, FieldKind};
use tempfile::tempdir;

use common::{read_tag, tagged_mp3, untagged_mp3};

const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 1, 2, 3];

fn two_pictures(tag: &mut Tag) {
    tag.set_text("TIT2", "With Art");
    let _ = tag.add_frame(Picture {
        mime_type: "image/jpeg".to_string(),
        picture_type: PictureType::CoverFront,
        description: String::new(),
        data: vec![0xFF, 0xD8, 0xFF, 1],
    });
    let _ = tag.add_frame(Picture {
        mime_type: "image/png".to_string(),
        picture_type: PictureType::CoverBack,
        description: "back".to_string(),
        data: vec![9, 9, 9],
    });
}

#[test]
fn first_picture_is_the_cover() {
    let dir = tempdir().expect("temp dir");
    let path = tagged_mp3(dir.path(), "song.mp3", two_pictures);

    let mut session = EditorSession::new();
    let (model, cover) = session.load_file(&path).expect("load");

    assert_eq!(
        cover,
        Some(&CoverImage {
            mime_type: "image/jpeg".to_string(),
            data: vec![0xFF, 0xD8, 0xFF, 1],
        })
    );
    // Pictures never show up as editable fields.
    assert_eq!(model.len(), 1);
    assert_eq!(model.value(FieldKind::Title), Some("With Art"));
}

#[test]
fn replace_leaves_exactly_one_front_cover() {
    let dir = tempdir().expect("temp dir");
    let path = tagged_mp3(dir.path(), "song.mp3", two_pictures);

    let mut container = Container::open(&path).expect("open").expect("tagged");
    let cover = CoverImage {
        mime_type: art::mime_type_for(Path::new("photo.PNG")).to_string(),
        data: PNG_BYTES.to_vec(),
    };

    art::replace(&mut container, &cover);

    assert_eq!(art::extract(&container), Some(cover));
    let pictures = container
        .frames()
        .filter(|f| f.id() == "APIC")
        .count();
    assert_eq!(pictures, 1);
}

#[test]
fn submit_cover_image_embeds_and_saves() {
    let dir = tempdir().expect("temp dir");
    let path = tagged_mp3(dir.path(), "song.mp3", two_pictures);
    let image = dir.path().join("photo.PNG");
    fs::write(&image, PNG_BYTES).expect("write image");

    let mut session = EditorSession::new();
    session.load_file(&path).expect("load");
    let cover = session.submit_cover_image(&image).expect("replace cover");

    assert_eq!(cover.mime_type, "image/png");
    assert_eq!(cover.data, PNG_BYTES);
    assert_eq!(session.cover(), Some(&cover));

    let tag = read_tag(&path);
    let pictures: Vec<&Picture> = tag.pictures().collect();
    assert_eq!(pictures.len(), 1);
    assert_eq!(pictures[0].mime_type, "image/png");
    assert_eq!(pictures[0].picture_type, PictureType::CoverFront);
    assert_eq!(pictures[0].data, PNG_BYTES);
    // Other frames untouched.
    assert_eq!(tag.title(), Some("With Art"));
}

#[test]
fn unknown_image_extension_is_embedded_as_jpeg() {
    let dir = tempdir().expect("temp dir");
    let path = untagged_mp3(dir.path(), "raw.mp3");
    let image = dir.path().join("scan.tiff");
    fs::write(&image, b"II*\0not really a tiff").expect("write image");

    let mut session = EditorSession::new();
    session.load_file(&path).expect("load");
    let cover = session.submit_cover_image(&image).expect("replace cover");
    assert_eq!(cover.mime_type, "image/jpeg");

    let mut reloaded = EditorSession::new();
    let (model, loaded_cover) = reloaded.load_file(&path).expect("reload");
    assert!(model.is_empty());
    assert_eq!(loaded_cover, Some(&cover));
}

#[test]
fn unreadable_image_changes_nothing() {
    let dir = tempdir().expect("temp dir");
    let path = tagged_mp3(dir.path(), "song.mp3", two_pictures);

    let mut session = EditorSession::new();
    session.load_file(&path).expect("load");
    let before = session.cover().cloned();

    let err = session
        .submit_cover_image(dir.path().join("missing.png"))
        .unwrap_err();
    assert!(matches!(err, CoverError::ReadImage { .. }), "{err:?}");

    assert_eq!(session.cover().cloned(), before);
    assert_eq!(read_tag(&path).pictures().count(), 2);
}

#[test]
fn failed_cover_save_keeps_the_new_cover_in_memory() {
    let dir = tempdir().expect("temp dir");
    let path = tagged_mp3(dir.path(), "song.mp3", two_pictures);
    let image = dir.path().join("cover.png");
    fs::write(&image, PNG_BYTES).expect("write image");

    let mut session = EditorSession::new();
    session.load_file(&path).expect("load");

    // Swap the file for a directory so the write can't happen.
    fs::remove_file(&path).expect("remove");
    fs::create_dir(&path).expect("mkdir");

    let err = session.submit_cover_image(&image).unwrap_err();
    assert!(matches!(err, CoverError::Persist(_)), "{err:?}");

    let expected = CoverImage {
        mime_type: "image/png".to_string(),
        data: PNG_BYTES.to_vec(),
    };
    assert_eq!(session.cover(), Some(&expected));
    let container = session.container().expect("loaded");
    assert_eq!(art::extract(container), Some(expected));
}

#[test]
fn cover_without_a_file_fails() {
    let mut session = EditorSession::new();
    let err = session.submit_cover_image("cover.png").unwrap_err();
    assert!(matches!(err, CoverError::NoFileLoaded));
}
