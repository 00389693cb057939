//! Public API for the device info bridge

pub use super::handler::DeviceInfoBridge;
pub use super::host::{HostInfo, StaticHost, SystemHost};
pub use super::method::{BridgeMethod, MethodCall, CHANNEL};
pub use super::os_version::parse_os_version;
pub use super::response::{BridgeResponse, BridgeResult, BridgeValue, VersionInfoResult};
