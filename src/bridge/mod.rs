//! Device Info Bridge
//!
//! Request/response boundary between an embedding application's native layer and its
//! application logic. Calls arrive by method name on a fixed channel, are resolved to a
//! [`method::BridgeMethod`] and dispatched with an exhaustive match. Names that do not
//! resolve produce an explicit not-implemented response.
//!
//! Host facts (app version name/code, OS release) come from a [`host::HostInfo`]
//! implementation supplied by the embedder.

pub mod api;
pub mod handler;
pub mod host;
pub mod method;
pub mod os_version;
pub mod response;
