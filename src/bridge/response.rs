//! Bridge response types

use serde::Serialize;
use std::collections::BTreeMap;

/// Primitive value carried in a bridge response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BridgeValue {
    Str(String),
    Int(u64),
    Float(f64),
}

/// Version facts returned by `getVersionsInfo`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfoResult {
    pub app_version_name: String,
    pub app_version_code: u64,
    /// Absent when the OS release string has no parsable version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_version: Option<f64>,
}

impl VersionInfoResult {
    pub const APP_VERSION_NAME: &'static str = "appVersionName";
    pub const APP_VERSION_CODE: &'static str = "appVersionCode";
    pub const OS_VERSION: &'static str = "osVersion";

    /// Flatten into the key-value form sent over the bridge
    pub fn into_map(self) -> BTreeMap<String, BridgeValue> {
        let mut map = BTreeMap::new();
        map.insert(
            Self::APP_VERSION_NAME.to_string(),
            BridgeValue::Str(self.app_version_name),
        );
        map.insert(
            Self::APP_VERSION_CODE.to_string(),
            BridgeValue::Int(self.app_version_code),
        );
        if let Some(os_version) = self.os_version {
            map.insert(Self::OS_VERSION.to_string(), BridgeValue::Float(os_version));
        }
        map
    }
}

/// Payload of a successful call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BridgeResult {
    /// Multi-field result
    Map(BTreeMap<String, BridgeValue>),
    /// Single-value result; `None` serializes as `null`
    Value(Option<BridgeValue>),
}

/// Response to a bridge call
///
/// `NotImplemented` is distinct from a successful call with an empty result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum BridgeResponse {
    Success { result: BridgeResult },
    NotImplemented { method: String },
}

impl BridgeResponse {
    pub fn map(result: BTreeMap<String, BridgeValue>) -> Self {
        Self::Success {
            result: BridgeResult::Map(result),
        }
    }

    pub fn value(value: Option<BridgeValue>) -> Self {
        Self::Success {
            result: BridgeResult::Value(value),
        }
    }

    pub fn not_implemented(method: &str) -> Self {
        Self::NotImplemented {
            method: method.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented { .. })
    }

    /// Result map of a multi-field call
    pub fn as_map(&self) -> Option<&BTreeMap<String, BridgeValue>> {
        match self {
            Self::Success {
                result: BridgeResult::Map(map),
            } => Some(map),
            _ => None,
        }
    }
}
