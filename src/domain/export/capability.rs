// SPDX-License-Identifier: MPL-2.0
//! Platform capability snapshot.

/// Distribution channels the platform exposes at one point in time.
///
/// A snapshot is taken at the start of each distribution action and dropped
/// when the action completes; capabilities may change between actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapabilitySnapshot {
    pub has_native_share: bool,
    pub has_clipboard_write: bool,
    pub has_clipboard_binary_write: bool,
}

impl CapabilitySnapshot {
    /// Snapshot of a platform exposing no channel at all.
    pub const NONE: Self = Self {
        has_native_share: false,
        has_clipboard_write: false,
        has_clipboard_binary_write: false,
    };

    /// Returns true if at least one clipboard or share channel is exposed.
    #[must_use]
    pub fn any(&self) -> bool {
        self.has_native_share || self.has_clipboard_write || self.has_clipboard_binary_write
    }
}
