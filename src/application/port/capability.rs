// SPDX-License-Identifier: MPL-2.0
//! Capability probing and the platform bundle.

use super::{Clipboard, DownloadTarget, NativeShare, PrintSurface, Transport};
use crate::domain::export::CapabilitySnapshot;
use std::fmt;
use std::sync::Arc;

/// Reports which distribution channels are currently exposed.
pub trait CapabilityProbe {
    /// Reads the capabilities now. Implementations must not cache.
    fn snapshot(&self) -> CapabilitySnapshot;
}

/// Every platform capability the export engine consumes.
///
/// Cloning is cheap; clones share the same adapters.
#[derive(Clone)]
pub struct Platform {
    pub transport: Arc<dyn Transport>,
    pub clipboard: Arc<dyn Clipboard>,
    pub share: Arc<dyn NativeShare>,
    pub downloads: Arc<dyn DownloadTarget>,
    pub print: Arc<dyn PrintSurface>,
}

impl CapabilityProbe for Platform {
    fn snapshot(&self) -> CapabilitySnapshot {
        CapabilitySnapshot {
            has_native_share: self.share.is_available(),
            has_clipboard_write: self.clipboard.can_write_text(),
            has_clipboard_binary_write: self.clipboard.can_write_binary(),
        }
    }
}

impl fmt::Debug for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Platform")
            .field("capabilities", &self.snapshot())
            .finish_non_exhaustive()
    }
}
