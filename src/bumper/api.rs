//! Public API for the version bumper

pub use super::bump::{bump, bump_file, parse_target};
pub use super::error::{BumpError, BumpResult};
pub use super::manifest::ManifestVersion;
pub use super::types::{BumpOutcome, VersionName, VersionRecord};
