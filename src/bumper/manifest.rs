//! Locating and re-emitting the version entry of a manifest

use super::error::{BumpError, BumpResult};
use super::types::{VersionName, VersionRecord};
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Top-level `version:` key followed by `MAJOR.MINOR.PATCH+BUILD`, ASCII digits only
static VERSION_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^version:[ \t]*([0-9]+)\.([0-9]+)\.([0-9]+)\+([0-9]+)")
        .expect("version entry pattern is valid")
});

/// The first version entry of a manifest, with the byte span of its value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestVersion<'a> {
    text: &'a str,
    span: Range<usize>,
    record: VersionRecord,
}

impl<'a> ManifestVersion<'a> {
    /// Find and parse the first `version: MAJOR.MINOR.PATCH+BUILD` entry
    pub fn locate(text: &'a str) -> BumpResult<Self> {
        let caps = VERSION_ENTRY
            .captures(text)
            .ok_or_else(|| BumpError::ManifestFormat {
                reason: "no 'version: MAJOR.MINOR.PATCH+BUILD' line found".to_string(),
            })?;

        let component = |index: usize| -> BumpResult<u32> {
            caps[index]
                .parse::<u32>()
                .map_err(|_| BumpError::ManifestFormat {
                    reason: format!("version component '{}' is out of range", &caps[index]),
                })
        };
        let name = VersionName::new(component(1)?, component(2)?, component(3)?);

        // The pattern guarantees digits, so a parse failure can only be overflow
        let build_code = caps[4]
            .parse::<u32>()
            .map_err(|_| BumpError::Overflow {
                build_code: caps[4].to_string(),
            })?;

        let start = caps.get(1).map_or(0, |m| m.start());
        let end = caps.get(4).map_or(start, |m| m.end());

        Ok(Self {
            text,
            span: start..end,
            record: VersionRecord::new(name, build_code),
        })
    }

    pub fn record(&self) -> VersionRecord {
        self.record
    }

    /// Byte range of `MAJOR.MINOR.PATCH+BUILD` within the manifest
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Manifest text with `record` in place of the located version.
    /// Every byte outside the span is copied unchanged.
    pub fn render(&self, record: &VersionRecord) -> String {
        let mut out = String::with_capacity(self.text.len() + 8);
        out.push_str(&self.text[..self.span.start]);
        out.push_str(&record.to_string());
        out.push_str(&self.text[self.span.end..]);
        out
    }
}
