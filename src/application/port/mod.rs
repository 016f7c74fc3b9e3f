// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines the platform capabilities the export engine consumes.
//! Infrastructure adapters implement these traits; tests substitute in-memory
//! fakes.
//!
//! # Available Ports
//!
//! - [`transport`]: Fetch a locator into bytes with a reported media type
//! - [`clipboard`]: Text and binary clipboard writes
//! - [`share`]: Native share sheet
//! - [`download`]: Transient object handles and save actions
//! - [`print`]: Secondary rendering surface for printing
//! - [`capability`]: Capability probing and the [`Platform`] bundle
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no reqwest types)
//! - Traits are `Send + Sync` so operations can run as `iced::Task`s
//! - Asynchronous methods use `async_trait` to stay object safe

pub mod capability;
pub mod clipboard;
pub mod download;
pub mod print;
pub mod share;
pub mod transport;

use std::fmt;

pub use capability::{CapabilityProbe, Platform};
pub use clipboard::Clipboard;
pub use download::{DownloadTarget, ObjectHandle, SaveSource, SavedDownload};
pub use print::{PrintSurface, SecondarySurface};
pub use share::{NativeShare, ShareContent, SharePayload};
pub use transport::{FetchedBody, Transport};

// =============================================================================
// PlatformError
// =============================================================================

/// Errors reported by platform capabilities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// The capability is not exposed by this platform.
    Unavailable,
    /// The user dismissed the platform dialog or share sheet.
    Cancelled,
    /// The platform call was made and failed.
    Failed(String),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Unavailable => write!(f, "capability unavailable"),
            PlatformError::Cancelled => write!(f, "cancelled by user"),
            PlatformError::Failed(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PlatformError {}

impl From<std::io::Error> for PlatformError {
    fn from(err: std::io::Error) -> Self {
        PlatformError::Failed(err.to_string())
    }
}
