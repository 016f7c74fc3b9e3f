// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Downloads**: Target directory behaviour
//! - **Network**: Transport identity, timeout and size limits
//! - **Notifications**: Toast display durations

// ==========================================================================
// Download Defaults
// ==========================================================================

/// Ask for the target location with a native dialog before each download.
pub const DEFAULT_ASK_DOWNLOAD_LOCATION: bool = false;

/// Maximum numeric suffix tried when a download name is taken.
pub const MAX_DOWNLOAD_NAME_ATTEMPTS: u32 = 999;

// ==========================================================================
// Network Defaults
// ==========================================================================

/// User agent sent with remote fetches.
pub const DEFAULT_USER_AGENT: &str = concat!("LensShare/", env!("CARGO_PKG_VERSION"));

/// Timeout of a remote fetch, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Minimum accepted fetch timeout, in seconds.
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Maximum accepted fetch timeout, in seconds.
pub const MAX_TIMEOUT_SECS: u64 = 600;

/// Largest resource body accepted by the converter (64 MB).
pub const DEFAULT_MAX_BODY_BYTES: u64 = 64 * 1024 * 1024;

/// Maximum number of redirects followed by the transport.
pub const MAX_REDIRECTS: usize = 10;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Auto-dismiss delay for success and info toasts (milliseconds).
pub const NOTIFICATION_SUCCESS_MS: u64 = 3_000;

/// Auto-dismiss delay for warning toasts (milliseconds).
pub const NOTIFICATION_WARNING_MS: u64 = 5_000;

/// Maximum number of toasts shown at once.
pub const MAX_VISIBLE_NOTIFICATIONS: usize = 3;
