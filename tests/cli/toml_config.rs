//! TOML configuration tests

use appversion::app::cli::args::*;
use appversion::app::cli::config::{load_config, ConfigError};
use clap::Parser;
use std::path::PathBuf;
use tempfile::TempDir;
use toml::Table;

fn parse(text: &str) -> Table {
    text.parse::<Table>().unwrap()
}

#[test]
fn test_config_fills_unset_options() {
    let mut args = Args::try_parse_from(["appversion", "1.0.0"]).unwrap();
    let config = parse(
        r#"
manifest = "mobile/pubspec.yaml"
log-level = "warn"
log-format = "ext"
log-file = "none"
"#,
    );

    args.apply_toml_values(&config).unwrap();

    assert_eq!(args.manifest_path(), PathBuf::from("mobile/pubspec.yaml"));
    assert_eq!(args.log_level.as_deref(), Some("warn"));
    assert_eq!(args.log_format.as_deref(), Some("ext"));
    assert!(args.effective_log_file().is_none());
}

#[test]
fn test_cli_overrides_config() {
    let mut args = Args::try_parse_from([
        "appversion",
        "--manifest",
        "cli.yaml",
        "--log-level",
        "trace",
        "1.0.0",
    ])
    .unwrap();
    let config = parse("manifest = \"config.yaml\"\nlog-level = \"error\"\n");

    args.apply_toml_values(&config).unwrap();

    assert_eq!(args.manifest_path(), PathBuf::from("cli.yaml"));
    assert_eq!(args.log_level.as_deref(), Some("trace"));
}

#[test]
fn test_color_from_config() {
    let mut args = Args::try_parse_from(["appversion", "1.0.0"]).unwrap();
    args.apply_toml_values(&parse("color = true")).unwrap();
    assert!(args.use_color());

    let mut args = Args::try_parse_from(["appversion", "1.0.0"]).unwrap();
    args.apply_toml_values(&parse("color = true\nno-color = true")).unwrap();
    assert!(!args.use_color());

    // --no-color on the command line beats the config
    let mut args = Args::try_parse_from(["appversion", "--no-color", "1.0.0"]).unwrap();
    args.apply_toml_values(&parse("color = true")).unwrap();
    assert!(!args.use_color());
}

#[test]
fn test_invalid_config_values() {
    let mut args = Args::try_parse_from(["appversion", "1.0.0"]).unwrap();
    let result = args.apply_toml_values(&parse("log-level = \"loud\""));
    assert!(matches!(result, Err(ConfigError::InvalidValue { ref key, .. }) if key == "log-level"));

    let result = args.apply_toml_values(&parse("color = \"yes\""));
    assert!(matches!(result, Err(ConfigError::InvalidValue { ref key, .. }) if key == "color"));

    let result = args.apply_toml_values(&parse("manifest = 3"));
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
fn test_load_explicit_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("appversion.toml");
    std::fs::write(&path, "manifest = \"pubspec.yaml\"\n").unwrap();

    let table = load_config(Some(&path)).unwrap().expect("config table");
    assert_eq!(
        table.get("manifest").and_then(|v| v.as_str()),
        Some("pubspec.yaml")
    );
}

#[test]
fn test_missing_explicit_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    match load_config(Some(&path)) {
        Err(ConfigError::NotFound { path: reported }) => assert_eq!(reported, path),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_malformed_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "manifest = [unclosed").unwrap();

    assert!(matches!(
        load_config(Some(&path)),
        Err(ConfigError::Parse { .. })
    ));
}
