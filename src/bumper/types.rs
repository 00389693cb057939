//! Version record types

use super::error::{BumpError, BumpResult};
use std::fmt;

/// Human-readable version name, `MAJOR.MINOR.PATCH`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionName {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl VersionName {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for VersionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Version name plus build code, `MAJOR.MINOR.PATCH+BUILD`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VersionRecord {
    pub name: VersionName,
    pub build_code: u32,
}

impl VersionRecord {
    pub fn new(name: VersionName, build_code: u32) -> Self {
        Self { name, build_code }
    }

    /// Record for `name` with the next build code.
    ///
    /// The build code always increases, even when `name` equals the current name.
    pub fn bump_to(&self, name: VersionName) -> BumpResult<VersionRecord> {
        let build_code = self
            .build_code
            .checked_add(1)
            .ok_or_else(|| BumpError::Overflow {
                build_code: self.build_code.to_string(),
            })?;
        Ok(VersionRecord { name, build_code })
    }
}

impl fmt::Display for VersionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.name, self.build_code)
    }
}

/// Result of a bump, before the caller persists `manifest`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    pub previous: VersionRecord,
    pub current: VersionRecord,
    /// Full manifest text with the new version substituted in
    pub manifest: String,
    /// Set when the target name equals the previous name
    pub unchanged_name: bool,
}
