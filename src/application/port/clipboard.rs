// SPDX-License-Identifier: MPL-2.0
//! Clipboard port.
//!
//! Text and binary writes are independent capabilities: a platform may
//! expose either, both or neither.

use super::PlatformError;
use crate::domain::resource::BinaryObject;
use async_trait::async_trait;

#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Whether text entries can currently be written.
    fn can_write_text(&self) -> bool;

    /// Whether binary entries tagged with a media type can currently be written.
    fn can_write_binary(&self) -> bool;

    /// Writes a text entry.
    async fn write_text(&self, text: &str) -> Result<(), PlatformError>;

    /// Writes a binary entry tagged with the object's media type.
    async fn write_binary(&self, object: &BinaryObject) -> Result<(), PlatformError>;
}
