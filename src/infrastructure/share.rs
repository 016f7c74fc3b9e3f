// SPDX-License-Identifier: MPL-2.0
//! Native share adapter for desktop targets.
//!
//! Desktop platforms supported by the viewer expose no share sheet, so the
//! adapter always reports the capability as absent and share operations go
//! straight to their link-copy fallback.

use crate::application::port::{NativeShare, PlatformError, SharePayload};
use async_trait::async_trait;

#[derive(Debug, Default, Clone, Copy)]
pub struct NoShareSheet;

#[async_trait]
impl NativeShare for NoShareSheet {
    fn is_available(&self) -> bool {
        false
    }

    async fn share(&self, payload: SharePayload) -> Result<(), PlatformError> {
        tracing::debug!(title = %payload.title, "native share requested without a share sheet");
        Err(PlatformError::Unavailable)
    }
}
