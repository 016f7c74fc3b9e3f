// SPDX-License-Identifier: MPL-2.0
//! Export error taxonomy.
//!
//! None of these errors is fatal to a viewing session: every distribution
//! operation converts them into a user-visible notification.

use std::fmt;

/// Failure to turn a resource reference into a binary object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The inline payload could not be decoded.
    MalformedPayload(String),
    /// The transport could not reach the locator.
    Network(String),
    /// The transport answered with a non-success status.
    HttpStatus(u16),
    /// A local locator could not be read.
    Io(String),
    /// The content exceeds the configured size limit.
    TooLarge {
        /// Actual (or announced) size in bytes.
        size: u64,
        /// Maximum allowed size in bytes.
        max_size: u64,
    },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::MalformedPayload(msg) => write!(f, "malformed inline payload: {msg}"),
            ConversionError::Network(msg) => write!(f, "network error: {msg}"),
            ConversionError::HttpStatus(code) => write!(f, "HTTP status {code}"),
            ConversionError::Io(msg) => write!(f, "I/O error: {msg}"),
            ConversionError::TooLarge { size, max_size } => {
                write!(f, "content too large: {size} bytes exceeds {max_size} bytes")
            }
        }
    }
}

impl std::error::Error for ConversionError {}

/// Errors reported by the distribution operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// The resource could not be converted to a binary object.
    ConversionFailed(ConversionError),
    /// Saving the resource failed.
    DownloadFailed(String),
    /// Writing to the clipboard failed or no clipboard channel was available.
    CopyFailed(String),
    /// Native share and the link-copy fallback both failed.
    ShareFailed(String),
    /// No secondary rendering surface could be opened for printing.
    PrintUnavailable,
}

impl ExportError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ExportError::ConversionFailed(_) => "notification-conversion-failed",
            ExportError::DownloadFailed(_) => "notification-download-failed",
            ExportError::CopyFailed(_) => "notification-copy-failed",
            ExportError::ShareFailed(_) => "notification-share-failed",
            ExportError::PrintUnavailable => "notification-print-unavailable",
        }
    }

    /// Human-readable cause, used as a notification argument.
    #[must_use]
    pub fn cause(&self) -> String {
        match self {
            ExportError::ConversionFailed(err) => err.to_string(),
            ExportError::DownloadFailed(msg)
            | ExportError::CopyFailed(msg)
            | ExportError::ShareFailed(msg) => msg.clone(),
            ExportError::PrintUnavailable => "secondary surface unavailable".to_string(),
        }
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::ConversionFailed(err) => write!(f, "Conversion failed: {err}"),
            ExportError::DownloadFailed(msg) => write!(f, "Download failed: {msg}"),
            ExportError::CopyFailed(msg) => write!(f, "Copy failed: {msg}"),
            ExportError::ShareFailed(msg) => write!(f, "Share failed: {msg}"),
            ExportError::PrintUnavailable => write!(f, "Print unavailable"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::ConversionFailed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConversionError> for ExportError {
    fn from(err: ConversionError) -> Self {
        ExportError::ConversionFailed(err)
    }
}
