//! Bridge call handling

use super::host::{HostInfo, SystemHost};
use super::method::{BridgeMethod, MethodCall, CHANNEL};
use super::os_version::parse_os_version;
use super::response::{BridgeResponse, BridgeValue, VersionInfoResult};

/// Stateless handler for device info calls
#[derive(Debug, Clone)]
pub struct DeviceInfoBridge<H: HostInfo = SystemHost> {
    host: H,
}

impl Default for DeviceInfoBridge<SystemHost> {
    fn default() -> Self {
        Self::new(SystemHost)
    }
}

impl<H: HostInfo> DeviceInfoBridge<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn channel(&self) -> &'static str {
        CHANNEL
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Handle a call by name. Unknown names yield `NotImplemented`.
    pub fn handle(&self, call: &MethodCall) -> BridgeResponse {
        match call.resolve() {
            Some(method) => self.dispatch(method),
            None => {
                log::debug!(
                    "Method '{}' is not implemented on channel {}",
                    call.method,
                    CHANNEL
                );
                BridgeResponse::not_implemented(&call.method)
            }
        }
    }

    pub fn dispatch(&self, method: BridgeMethod) -> BridgeResponse {
        log::trace!("Dispatching {}", method.name());
        match method {
            BridgeMethod::GetVersionsInfo => BridgeResponse::map(self.versions_info().into_map()),
            BridgeMethod::GetOsVersion => {
                BridgeResponse::value(self.os_version().map(BridgeValue::Float))
            }
        }
    }

    pub fn versions_info(&self) -> VersionInfoResult {
        VersionInfoResult {
            app_version_name: self.host.app_version_name(),
            app_version_code: self.host.app_version_code(),
            os_version: self.os_version(),
        }
    }

    pub fn os_version(&self) -> Option<f64> {
        let release = self.host.os_release();
        let parsed = parse_os_version(&release);
        if parsed.is_none() {
            log::debug!("OS release '{}' has no parsable version", release);
        }
        parsed
    }
}
