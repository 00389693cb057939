//! Build metadata generated by the build script.
//! This is the single source of truth for the compiled version name and build code.

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Version name of this build, taken from the package version
pub fn version_name() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Build code from `[package.metadata] version_code`.
/// The build script refuses to build without one.
pub fn version_code() -> u64 {
    VERSION_CODE
}

/// Build time string from the build script (UTC)
pub fn build_time() -> &'static str {
    BUILD_TIME
}

/// Short git hash captured by the build script
pub fn git_hash() -> &'static str {
    GIT_HASH
}

/// Version line shown by `--version`
pub fn long_version() -> &'static str {
    LONG_VERSION
}
