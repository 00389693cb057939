//! Host environment facts consumed by the bridge

use crate::core::version;
use os_info::Version;

/// Source of the facts the bridge reports.
///
/// Implementations must answer from memory or a cheap system call; the bridge
/// runs on the host's dispatch thread.
pub trait HostInfo: Send + Sync {
    /// Application version name from the compiled build metadata
    fn app_version_name(&self) -> String;

    /// Application build code from the compiled build metadata
    fn app_version_code(&self) -> u64;

    /// Raw OS release descriptor, e.g. `"14"` or `"12.4"`
    fn os_release(&self) -> String;
}

/// Host backed by this crate's build metadata and the running operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl HostInfo for SystemHost {
    fn app_version_name(&self) -> String {
        version::version_name().to_string()
    }

    fn app_version_code(&self) -> u64 {
        version::version_code()
    }

    fn os_release(&self) -> String {
        let info = os_info::get();
        log::debug!("Detected {} {}", info.os_type(), info.version());
        release_text(info.version())
    }
}

// Unknown maps to an empty release so no version gets reported
fn release_text(version: &Version) -> String {
    match version {
        Version::Unknown => String::new(),
        other => other.to_string(),
    }
}

/// Host with fixed values, for embedders that supply their own build metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticHost {
    pub version_name: String,
    pub version_code: u64,
    pub os_release: String,
}

impl StaticHost {
    pub fn new(
        version_name: impl Into<String>,
        version_code: u64,
        os_release: impl Into<String>,
    ) -> Self {
        Self {
            version_name: version_name.into(),
            version_code,
            os_release: os_release.into(),
        }
    }
}

impl HostInfo for StaticHost {
    fn app_version_name(&self) -> String {
        self.version_name.clone()
    }

    fn app_version_code(&self) -> u64 {
        self.version_code
    }

    fn os_release(&self) -> String {
        self.os_release.clone()
    }
}
