//! Version Bumper
//!
//! Rewrites the `version: MAJOR.MINOR.PATCH+BUILD` entry of an application manifest:
//! the version name is replaced by a target name and the build code is incremented.
//!
//! Work happens on a typed [`types::VersionRecord`] and the manifest is re-emitted by
//! substituting the new record into the span of the old one, so nothing else in the
//! file is touched. Any failure aborts before the manifest is written.

pub mod api;
pub mod bump;
pub mod error;
pub mod manifest;
pub mod types;
