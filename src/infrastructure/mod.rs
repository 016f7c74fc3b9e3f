// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like
//! `reqwest`, `arboard`, `rfd` and the system browser.
//!
//! # Available Adapters
//!
//! - [`http`]: HTTP and local file transport (implements [`Transport`])
//! - [`clipboard`]: System clipboard (implements [`Clipboard`])
//! - [`downloads`]: Download directory and save dialog (implements [`DownloadTarget`])
//! - [`print`]: Browser print documents (implements [`PrintSurface`])
//! - [`share`]: Absent desktop share sheet (implements [`NativeShare`])
//!
//! [`Transport`]: crate::application::port::Transport
//! [`Clipboard`]: crate::application::port::Clipboard
//! [`DownloadTarget`]: crate::application::port::DownloadTarget
//! [`PrintSurface`]: crate::application::port::PrintSurface
//! [`NativeShare`]: crate::application::port::NativeShare

pub mod clipboard;
pub mod downloads;
pub mod http;
pub mod print;
pub mod share;

pub use clipboard::SystemClipboard;
pub use downloads::FileDownloads;
pub use http::DesktopTransport;
pub use print::BrowserPrintSurface;
pub use share::NoShareSheet;

use crate::application::blob::BlobConverter;
use crate::application::distribution::Distributor;
use crate::application::port::{Platform, Transport};
use crate::config::Config;
use std::sync::Arc;

/// Wires the desktop adapters into a [`Platform`].
#[must_use]
pub fn desktop_platform(config: &Config) -> Platform {
    let transport: Arc<dyn Transport> = Arc::new(DesktopTransport::new(&config.network));
    Platform {
        clipboard: Arc::new(SystemClipboard::new()),
        share: Arc::new(NoShareSheet),
        downloads: Arc::new(FileDownloads::new(&config.downloads, Arc::clone(&transport))),
        print: Arc::new(BrowserPrintSurface::new()),
        transport,
    }
}

/// Builds a distributor over the desktop platform, honouring the configured
/// body size limit.
#[must_use]
pub fn desktop_distributor(config: &Config) -> Distributor {
    let platform = desktop_platform(config);
    let converter = BlobConverter::new(Arc::clone(&platform.transport))
        .with_max_bytes(config.network.max_body_bytes);
    Distributor::with_converter(platform, converter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::CapabilityProbe;

    #[test]
    fn desktop_platform_has_no_share_sheet() {
        let platform = desktop_platform(&Config::default());
        assert!(!platform.snapshot().has_native_share);
    }
}
