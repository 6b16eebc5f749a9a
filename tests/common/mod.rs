#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use id3::{Tag, Version};

/// A few silent MPEG-1 Layer III frames (128 kbps, 44.1 kHz headers, zeroed payload).
fn audio_bytes() -> Vec<u8> {
    let mut frame = vec![0u8; 417];
    frame[..4].copy_from_slice(&[0xFF, 0xFB, 0x90, 0x64]);
    frame.repeat(4)
}

/// Untagged MP3 at `dir/name`.
pub fn untagged_mp3(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, audio_bytes()).expect("write audio");
    path
}

/// MP3 at `dir/name` carrying whatever `build` puts in the tag (written as ID3v2.4).
pub fn tagged_mp3(dir: &Path, name: &str, build: impl FnOnce(&mut Tag)) -> PathBuf {
    tagged_mp3_as(dir, name, Version::Id3v24, build)
}

/// Same as [`tagged_mp3`], written as `version`.
pub fn tagged_mp3_as(
    dir: &Path,
    name: &str,
    version: Version,
    build: impl FnOnce(&mut Tag),
) -> PathBuf {
    let path = untagged_mp3(dir, name);
    let mut tag = Tag::with_version(version);
    build(&mut tag);
    tag.write_to_path(&path, version).expect("write tag");
    path
}

pub fn read_tag(path: &Path) -> Tag {
    Tag::read_from_path(path).expect("read tag")
}
