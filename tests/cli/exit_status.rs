//! Exit status of the `appversion` driver

use appversion::app::cli::args::Args;
use appversion::app::startup::startup_with;
use clap::Parser;
use serial_test::serial;
use std::path::Path;
use std::process::ExitCode;
use tempfile::TempDir;

const PUBSPEC: &str = "name: qrcodekeeper\nversion: 1.3.2+26\n";

fn args_for(manifest: &Path, extra: &[&str]) -> Args {
    let mut argv = vec![
        "appversion",
        "--no-color",
        "--log-level",
        "error",
        "--manifest",
        manifest.to_str().unwrap(),
    ];
    argv.extend_from_slice(extra);
    Args::try_parse_from(argv).unwrap()
}

fn assert_exit(code: ExitCode, expected: ExitCode) {
    assert_eq!(format!("{:?}", code), format!("{:?}", expected));
}

fn write_manifest(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("pubspec.yaml");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
#[serial]
fn test_successful_bump_exits_zero() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(&dir, PUBSPEC);

    assert_exit(startup_with(args_for(&path, &["1.4.0"])), ExitCode::SUCCESS);
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "name: qrcodekeeper\nversion: 1.4.0+27\n"
    );
}

#[test]
#[serial]
fn test_dry_run_exits_zero() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(&dir, PUBSPEC);

    assert_exit(
        startup_with(args_for(&path, &["--dry-run", "1.4.0"])),
        ExitCode::SUCCESS,
    );
    assert_eq!(std::fs::read_to_string(&path).unwrap(), PUBSPEC);
}

#[test]
#[serial]
fn test_malformed_manifest_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(&dir, "name: qrcodekeeper\nversion: 1.3.2\n");

    assert_exit(startup_with(args_for(&path, &["1.4.0"])), ExitCode::FAILURE);
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "name: qrcodekeeper\nversion: 1.3.2\n"
    );
}

#[test]
#[serial]
fn test_bad_target_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(&dir, PUBSPEC);

    assert_exit(startup_with(args_for(&path, &["latest"])), ExitCode::FAILURE);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), PUBSPEC);
}

#[test]
#[serial]
fn test_missing_manifest_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pubspec.yaml");

    assert_exit(startup_with(args_for(&path, &["1.4.0"])), ExitCode::FAILURE);
    assert!(!path.exists());
}

#[test]
#[serial]
fn test_missing_config_file_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(&dir, PUBSPEC);
    let config = dir.path().join("absent.toml");

    assert_exit(
        startup_with(args_for(
            &path,
            &["--config-file", config.to_str().unwrap(), "1.4.0"],
        )),
        ExitCode::FAILURE,
    );
    assert_eq!(std::fs::read_to_string(&path).unwrap(), PUBSPEC);
}

#[test]
#[serial]
fn test_invalid_config_value_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(&dir, PUBSPEC);
    let config = dir.path().join("appversion.toml");
    std::fs::write(&config, "log-format = \"xml\"\n").unwrap();

    assert_exit(
        startup_with(args_for(
            &path,
            &["--config-file", config.to_str().unwrap(), "1.4.0"],
        )),
        ExitCode::FAILURE,
    );
    assert_eq!(std::fs::read_to_string(&path).unwrap(), PUBSPEC);
}
