//! End-to-end bump runs through the CLI driver

use appversion::app::cli::args::Args;
use appversion::app::startup::run;
use appversion::bumper::api::BumpError;
use clap::Parser;
use tempfile::TempDir;

const PUBSPEC: &str = "name: qrcodekeeper\nversion: 1.3.2+26\nenvironment:\n  sdk: \">=2.12.0 <3.0.0\"\n";

fn setup() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pubspec.yaml");
    std::fs::write(&path, PUBSPEC).unwrap();
    (dir, path)
}

fn args_for(path: &std::path::Path, extra: &[&str]) -> Args {
    let mut argv = vec!["appversion", "--manifest", path.to_str().unwrap()];
    argv.extend_from_slice(extra);
    Args::try_parse_from(argv).unwrap()
}

#[test]
fn test_run_updates_manifest() {
    let (_dir, path) = setup();

    let outcome = run(&args_for(&path, &["1.4.0"])).unwrap();

    assert_eq!(outcome.previous.to_string(), "1.3.2+26");
    assert_eq!(outcome.current.to_string(), "1.4.0+27");
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        PUBSPEC.replace("1.3.2+26", "1.4.0+27")
    );
}

#[test]
fn test_run_dry_run() {
    let (_dir, path) = setup();

    let outcome = run(&args_for(&path, &["--dry-run", "1.4.0"])).unwrap();

    assert!(outcome.manifest.contains("version: 1.4.0+27"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), PUBSPEC);
}

#[test]
fn test_run_rejects_bad_target() {
    let (_dir, path) = setup();

    let result = run(&args_for(&path, &["next"]));

    assert!(matches!(result, Err(BumpError::InputFormat { .. })));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), PUBSPEC);
}

#[test]
fn test_run_repeated_same_version() {
    let (_dir, path) = setup();

    run(&args_for(&path, &["1.3.2"])).unwrap();
    let outcome = run(&args_for(&path, &["1.3.2"])).unwrap();

    assert!(outcome.unchanged_name);
    assert_eq!(outcome.current.to_string(), "1.3.2+28");
}
