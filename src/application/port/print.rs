// SPDX-License-Identifier: MPL-2.0
//! Print surface port.

use super::PlatformError;

/// Opens secondary rendering surfaces.
pub trait PrintSurface: Send + Sync {
    /// Opens a blank secondary surface, or `None` if the platform refused
    /// (blocked popup, no display, ...).
    fn open(&self) -> Option<Box<dyn SecondarySurface>>;
}

/// A blank secondary surface hosting a single document.
pub trait SecondarySurface: Send {
    /// Injects the document markup.
    fn write_document(&mut self, markup: &str) -> Result<(), PlatformError>;

    /// Finishes the document so the surface starts rendering it.
    fn close_document(self: Box<Self>) -> Result<(), PlatformError>;
}
