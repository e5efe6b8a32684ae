//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Release names seen in the wild, paired with their clean form.
pub const MOVIE_CASES: &[(&str, &str)] = &[
    (
        "Puss_In_Boots_The_Last_Wish_1_(2022).mp4",
        "Puss_In_Boots_The_Last_Wish_(2022).mp4",
    ),
    ("The.Matrix.1.1999.mkv", "The_Matrix_(1999).mkv"),
    ("John_Wick_3_2019.mp4", "John_Wick_3_(2019).mp4"),
    ("Ready_Name_(2005).mp4", "Ready_Name_(2005).mp4"),
    ("Brackets_[EXTRA]_2017.mp4", "Brackets_(2017).mp4"),
    ("Only_(Extra).mp4", "Only.mp4"),
    (
        "Dawn.of.the.Planet.of.the.Apes.2014.1080p.BluRay.x264.YIFY.mp4",
        "Dawn_of_the_Planet_of_the_Apes_(2014).mp4",
    ),
    ("American.Psycho.2000.DTS.AAC5.mkv", "American_Psycho_(2000).mkv"),
];

/// Create an empty file (and its parents) inside `dir`.
pub fn touch(dir: &Path, relative: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    fs::write(&path, b"video").expect("Failed to write file");
    path
}

/// Create a temp directory populated with the given relative file names.
pub fn temp_with_files(names: &[&str]) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    for name in names {
        touch(temp.path(), name);
    }
    temp
}
