//! Bump operations

use super::error::{BumpError, BumpResult};
use super::manifest::ManifestVersion;
use super::types::{BumpOutcome, VersionName};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// First numeric dot-triplet anywhere in a target
static TARGET_TRIPLET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)\.([0-9]+)\.([0-9]+)").expect("target pattern is valid")
});

/// Extract the version name from a target such as `1.4.0`, `v1.4.0`,
/// `refs/tags/v1.4.0` or `1.4.0-rc.1`.
///
/// The first triplet wins; text around it is ignored.
pub fn parse_target(target: &str) -> BumpResult<VersionName> {
    let input_error = || BumpError::InputFormat {
        input: target.to_string(),
    };

    let caps = TARGET_TRIPLET
        .captures(target.trim())
        .ok_or_else(input_error)?;
    let component = |index: usize| caps[index].parse::<u32>().map_err(|_| input_error());

    Ok(VersionName::new(component(1)?, component(2)?, component(3)?))
}

/// Bump the manifest's version to `target` and increment its build code.
///
/// Returns the rewritten manifest text; persisting it is up to the caller.
pub fn bump(manifest_text: &str, target: &str) -> BumpResult<BumpOutcome> {
    let located = ManifestVersion::locate(manifest_text)?;
    let new_name = parse_target(target)?;
    let previous = located.record();

    let unchanged_name = new_name == previous.name;
    if unchanged_name {
        log::warn!(
            "Version name {} is unchanged, only the build code will be incremented",
            new_name
        );
    }

    let current = previous.bump_to(new_name)?;
    log::debug!("Bumping {} -> {}", previous, current);

    Ok(BumpOutcome {
        previous,
        current,
        manifest: located.render(&current),
        unchanged_name,
    })
}

/// Read a manifest file, bump it and write it back unless `dry_run` is set.
///
/// The file is only written after the bump succeeded in full.
pub fn bump_file(path: &Path, target: &str, dry_run: bool) -> BumpResult<BumpOutcome> {
    let io_error = |source| BumpError::Io {
        path: path.to_path_buf(),
        source,
    };

    let text = std::fs::read_to_string(path).map_err(io_error)?;
    let outcome = bump(&text, target)?;

    if dry_run {
        log::debug!("Dry run, leaving {} untouched", path.display());
    } else {
        std::fs::write(path, &outcome.manifest).map_err(io_error)?;
    }

    Ok(outcome)
}
