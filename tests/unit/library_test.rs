//! Unit tests for library scanning

use reeltidy::library::{list_movies, parse_movie_name};
use reeltidy::{Normalizer, VideoExtensions};

use crate::helpers::{temp_with_files, MOVIE_CASES};

#[test]
fn every_cleaned_name_with_a_year_is_listed() {
    let normalizer = Normalizer::default();
    for (input, _) in MOVIE_CASES {
        let cleaned = normalizer.build_clean_name(input);
        let parsed = parse_movie_name(&cleaned);
        if cleaned.contains("_(") {
            assert!(parsed.is_some(), "{cleaned} should parse");
        } else {
            assert!(parsed.is_none(), "{cleaned} has no year");
        }
    }
}

#[test]
fn scan_honors_configured_extensions() {
    let temp = temp_with_files(&["Heat_(1995).mkv", "Alien_(1979).m4v"]);

    let default_exts = list_movies(temp.path(), &VideoExtensions::default()).unwrap();
    assert_eq!(default_exts.len(), 1);
    assert_eq!(default_exts[0].title, "Heat");

    let custom = list_movies(temp.path(), &VideoExtensions::new([".m4v"])).unwrap();
    assert_eq!(custom.len(), 1);
    assert_eq!(custom[0].title, "Alien");
    assert_eq!(custom[0].year, 1979);
}

#[test]
fn scan_is_not_recursive() {
    let temp = temp_with_files(&["Heat_(1995).mkv", "nested/Alien_(1979).mkv"]);
    let movies = list_movies(temp.path(), &VideoExtensions::default()).unwrap();
    assert_eq!(movies.len(), 1);
}

#[test]
fn scan_of_missing_folder_fails() {
    let temp = temp_with_files(&[]);
    assert!(list_movies(&temp.path().join("nope"), &VideoExtensions::default()).is_err());
}
