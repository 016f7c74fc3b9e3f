// SPDX-License-Identifier: MPL-2.0
//! Transport port: fetches a locator into bytes.

use crate::domain::export::ConversionError;
use async_trait::async_trait;

/// Body returned by a transport fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedBody {
    pub bytes: Vec<u8>,
    /// Media type reported by the transport (e.g. `Content-Type`), if any.
    pub media_type: Option<String>,
}

/// Fetches remote references.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetches the content behind `locator`.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::Network` when the locator cannot be reached,
    /// `ConversionError::HttpStatus` for non-2xx responses and
    /// `ConversionError::Io` when a local locator cannot be read.
    async fn fetch(&self, locator: &str) -> Result<FetchedBody, ConversionError>;
}
