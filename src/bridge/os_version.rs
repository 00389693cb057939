//! Best-effort OS version parsing

use regex::Regex;
use std::sync::LazyLock;

static VERSION_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(\.[0-9]+)?").expect("os version pattern is valid"));

/// Leading `MAJOR[.MINOR]` number of an OS release string.
///
/// Returns `None` when nothing matches or the match does not parse as a float.
/// An unknown version is never reported as `0`.
pub fn parse_os_version(release: &str) -> Option<f64> {
    let found = VERSION_PREFIX.find(release)?;
    found.as_str().parse::<f64>().ok()
}
