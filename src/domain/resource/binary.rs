// SPDX-License-Identifier: MPL-2.0
//! Transferable binary objects.

use super::media_type;
use std::fmt;
use std::sync::Arc;

/// In-memory binary content tagged with a media type.
///
/// The buffer is shared, so clones are cheap and can be moved into
/// platform calls without copying the content.
#[derive(Clone, PartialEq, Eq)]
pub struct BinaryObject {
    bytes: Arc<Vec<u8>>,
    media_type: String,
}

impl BinaryObject {
    pub fn new(bytes: Vec<u8>, media_type: impl Into<String>) -> Self {
        Self {
            bytes: Arc::new(bytes),
            media_type: media_type.into(),
        }
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the shared buffer.
    #[must_use]
    pub fn shared_bytes(&self) -> Arc<Vec<u8>> {
        Arc::clone(&self.bytes)
    }

    #[must_use]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// File extension derived from the media subtype, if any.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        media_type::subtype(&self.media_type)
    }

    /// Returns true for `image/*` content.
    #[must_use]
    pub fn is_image(&self) -> bool {
        media_type::essence(&self.media_type).starts_with("image/")
    }

    #[must_use]
    pub fn is_text(&self) -> bool {
        media_type::essence(&self.media_type).starts_with("text/")
    }
}

impl fmt::Debug for BinaryObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryObject")
            .field("media_type", &self.media_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
