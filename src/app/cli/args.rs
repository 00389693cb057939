//! Command line arguments for the `appversion` and `versions-bridge` binaries

use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};

/// Manifest rewritten when neither the CLI nor the config names one
pub const DEFAULT_MANIFEST: &str = "pubspec.yaml";

/// Arguments of the version bump driver.
///
/// Config file values are applied after parsing and only fill options the
/// command line left unset.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "appversion")]
#[command(about = "Set the version name and increment the build code of an application manifest")]
#[command(version, long_version = crate::core::version::long_version())]
pub struct Args {
    /// Target version name (MAJOR.MINOR.PATCH)
    #[arg(value_name = "VERSION")]
    pub target: String,

    /// Manifest file holding the `version: MAJOR.MINOR.PATCH+BUILD` line
    #[arg(short = 'm', long = "manifest", value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Print the updated manifest instead of writing it
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,

    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Force colored output (overrides TTY detection)
    #[arg(long = "color", action = ArgAction::SetTrue, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored output
    #[arg(long = "no-color", action = ArgAction::SetTrue)]
    pub no_color: bool,

    /// Color preference from the configuration file
    #[arg(skip)]
    pub config_color: Option<bool>,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = LOG_LEVELS)]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(short = 'o', long = "log-format", value_name = "FORMAT", value_parser = LOG_FORMATS)]
    pub log_format: Option<String>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];
pub const LOG_FORMATS: [&str; 3] = ["text", "ext", "json"];

impl Args {
    /// Manifest to operate on
    pub fn manifest_path(&self) -> PathBuf {
        self.manifest
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST))
    }

    /// Resolve color: --no-color, then --color, then config, then TTY detection
    pub fn use_color(&self) -> bool {
        if self.no_color {
            false
        } else if self.color {
            true
        } else {
            self.config_color
                .unwrap_or_else(|| std::io::IsTerminal::is_terminal(&std::io::stdout()))
        }
    }

    /// Log file, with the magic values "none" and "-" disabling file logging
    pub fn effective_log_file(&self) -> Option<&Path> {
        effective_log_file(self.log_file.as_deref())
    }
}

pub(crate) fn effective_log_file(log_file: Option<&Path>) -> Option<&Path> {
    log_file.filter(|path| {
        let text = path.to_string_lossy();
        !(text.eq_ignore_ascii_case("none") || text == "-")
    })
}

/// Arguments of the stdio bridge host
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "versions-bridge")]
#[command(about = "Answer one device info bridge call and print the JSON response")]
#[command(version, long_version = crate::core::version::long_version())]
pub struct BridgeArgs {
    /// Bridge method name, e.g. getVersionsInfo
    #[arg(value_name = "METHOD")]
    pub method: String,

    /// Pretty-print the JSON response
    #[arg(short = 'p', long = "pretty")]
    pub pretty: bool,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = LOG_LEVELS)]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(short = 'o', long = "log-format", value_name = "FORMAT", value_parser = LOG_FORMATS)]
    pub log_format: Option<String>,
}
