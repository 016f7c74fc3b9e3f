// SPDX-License-Identifier: MPL-2.0
//! Native share port.

use super::PlatformError;
use crate::domain::resource::BinaryObject;
use async_trait::async_trait;

/// What is being shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareContent {
    /// A file built from a binary object.
    File { name: String, object: BinaryObject },
    /// A locator shared as-is.
    Locator(String),
}

/// Payload handed to the platform share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub content: ShareContent,
}

#[async_trait]
pub trait NativeShare: Send + Sync {
    /// Whether a native share sheet is currently exposed.
    fn is_available(&self) -> bool;

    /// Opens the share sheet.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Cancelled` when the user dismisses the sheet.
    async fn share(&self, payload: SharePayload) -> Result<(), PlatformError>;
}
