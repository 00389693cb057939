//! Bridge method identifiers

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// Channel name the bridge is registered under
pub const CHANNEL: &str = "kt.qrcodekeeper";

/// Operations the bridge implements
#[derive(EnumIter, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BridgeMethod {
    /// App version name/code and OS version as a flat map
    GetVersionsInfo,
    /// OS version as a single float. Superseded by `GetVersionsInfo`.
    GetOsVersion,
}

impl BridgeMethod {
    /// Wire name of the method
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetVersionsInfo => "getVersionsInfo",
            Self::GetOsVersion => "getOsVersion",
        }
    }

    /// Resolve a wire name; names are case-sensitive
    pub fn from_name(name: &str) -> Option<Self> {
        Self::iter().find(|method| method.name() == name)
    }

    pub fn all_names() -> Vec<&'static str> {
        Self::iter().map(|method| method.name()).collect()
    }
}

/// An incoming bridge request. Calls carry no arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
}

impl MethodCall {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
        }
    }

    pub fn resolve(&self) -> Option<BridgeMethod> {
        BridgeMethod::from_name(&self.method)
    }
}

impl From<BridgeMethod> for MethodCall {
    fn from(method: BridgeMethod) -> Self {
        Self::new(method.name())
    }
}
