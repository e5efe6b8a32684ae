//! Unit tests for config module

use reeltidy::normalize::ExtraYearPolicy;
use reeltidy::Config;
use tempfile::TempDir;

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert!(config.tags.unwanted.contains(&"1080p".to_string()));
    assert!(config.tags.unwanted.contains(&"bokutox".to_string()));
    assert_eq!(config.tags.counter_numbers, vec!["1".to_string()]);
    assert_eq!(config.tags.extra_years, ExtraYearPolicy::Keep);
    assert_eq!(config.scan.video_extensions, vec![".mp4", ".mkv", ".avi"]);
    assert_eq!(config.moves.duplicate_prefix, "[DUP] ");
    assert!(config.validate().is_ok());
}

#[test]
fn config_serialization_roundtrip() {
    let config = Config::default();
    let toml_str = toml::to_string(&config).unwrap();
    assert!(toml_str.contains("[move]"));
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed.tags.unwanted, config.tags.unwanted);
    assert_eq!(parsed.moves.duplicate_prefix, config.moves.duplicate_prefix);
}

#[test]
fn partial_toml_fills_missing_sections_with_defaults() {
    let toml_str = r#"
[tags]
extra_years = "drop"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.tags.extra_years, ExtraYearPolicy::Drop);
    assert!(config.tags.unwanted.contains(&"x264".to_string()));
    assert_eq!(config.moves.duplicate_prefix, "[DUP] ");
}

#[test]
fn custom_tags_drive_the_normalizer() {
    let toml_str = r#"
[tags]
unwanted = ["extended"]
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    let normalizer = config.normalizer();
    assert_eq!(
        normalizer.build_clean_name("Heat.Extended.1995.1080p.mkv"),
        "Heat_1080p_(1995).mkv"
    );
}

#[test]
fn validation_rejects_bad_values() {
    let mut config = Config::default();
    config.tags.counter_numbers = vec!["one".to_string()];
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.moves.duplicate_prefix = "dups/".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.scan.video_extensions.clear();
    assert!(config.validate().is_err());
}

#[test]
fn load_from_missing_file_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_with(Some(&temp.path().join("missing.toml"))).unwrap();
    assert_eq!(config.moves.duplicate_prefix, "[DUP] ");
}

#[test]
fn save_then_load_round_trips_through_disk() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("config.toml");
    let mut config = Config::default();
    config.moves.duplicate_prefix = "DUP-".to_string();
    config.save_to(&path).unwrap();

    let loaded = Config::load_with(Some(&path)).unwrap();
    assert_eq!(loaded.moves.duplicate_prefix, "DUP-");
}

#[test]
fn malformed_file_is_an_error_with_context() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[tags\nunwanted = ").unwrap();
    let err = Config::load_with(Some(&path)).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));
}

#[test]
fn invalid_values_on_disk_are_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[move]\nduplicate_prefix = \"\"\n").unwrap();
    let err = Config::load_with(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("Invalid config"));
}
