// SPDX-License-Identifier: MPL-2.0
//! Resource to binary object conversion.
//!
//! Inline payloads are decoded locally; remote references are fetched
//! through the [`Transport`] port. Both paths end in the same
//! normalization step so media type defaults and size limits are applied
//! uniformly.

pub mod inline;

use crate::application::port::{FetchedBody, Transport};
use crate::domain::export::ConversionError;
use crate::domain::resource::media_type::{DEFAULT_INLINE_MEDIA_TYPE, FALLBACK_MEDIA_TYPE};
use crate::domain::resource::{BinaryObject, Classification, Encoding, ResourceReference};
use std::fmt;
use std::sync::Arc;

/// Converts resource references into [`BinaryObject`]s.
#[derive(Clone)]
pub struct BlobConverter {
    transport: Arc<dyn Transport>,
    max_bytes: Option<u64>,
}

impl BlobConverter {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            max_bytes: None,
        }
    }

    /// Rejects content larger than `max_bytes`.
    #[must_use]
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = Some(max_bytes);
        self
    }

    /// Produces the binary form of `reference`.
    ///
    /// The media type is the declared one for inline payloads (defaulting to
    /// `image/png`) and the transport-reported one for remote content.
    ///
    /// # Errors
    ///
    /// Returns a [`ConversionError`] when the inline payload is malformed,
    /// the fetch fails, or the content exceeds the size limit.
    pub async fn to_binary_object(
        &self,
        reference: &ResourceReference,
    ) -> Result<BinaryObject, ConversionError> {
        let classification = reference.classify();
        let body = match classification.encoding {
            Encoding::InlinePayload => inline::decode(reference.raw())?,
            Encoding::RemoteReference => self.transport.fetch(reference.raw()).await?,
        };
        self.normalize(body, &classification)
    }

    fn normalize(
        &self,
        body: FetchedBody,
        classification: &Classification,
    ) -> Result<BinaryObject, ConversionError> {
        let size = body.bytes.len() as u64;
        if let Some(max_size) = self.max_bytes.filter(|max| size > *max) {
            return Err(ConversionError::TooLarge { size, max_size });
        }

        let media_type = match classification.encoding {
            Encoding::InlinePayload => classification
                .declared_media_type
                .clone()
                .unwrap_or_else(|| DEFAULT_INLINE_MEDIA_TYPE.to_string()),
            Encoding::RemoteReference => body
                .media_type
                .filter(|media_type| !media_type.trim().is_empty())
                .unwrap_or_else(|| FALLBACK_MEDIA_TYPE.to_string()),
        };

        Ok(BinaryObject::new(body.bytes, media_type))
    }
}

impl fmt::Debug for BlobConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlobConverter")
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StaticTransport {
        body: Result<FetchedBody, ConversionError>,
        fetches: AtomicUsize,
    }

    impl StaticTransport {
        fn ok(bytes: &[u8], media_type: Option<&str>) -> Arc<Self> {
            Arc::new(Self {
                body: Ok(FetchedBody {
                    bytes: bytes.to_vec(),
                    media_type: media_type.map(str::to_string),
                }),
                fetches: AtomicUsize::new(0),
            })
        }

        fn failing(err: ConversionError) -> Arc<Self> {
            Arc::new(Self {
                body: Err(err),
                fetches: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl Transport for StaticTransport {
        async fn fetch(&self, _locator: &str) -> Result<FetchedBody, ConversionError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.body.clone()
        }
    }

    #[tokio::test]
    async fn inline_payload_is_decoded_without_fetching() {
        let transport = StaticTransport::ok(b"unused", None);
        let converter = BlobConverter::new(transport.clone());

        let object = converter
            .to_binary_object(&ResourceReference::new("data:image/gif;base64,R0lG"))
            .await
            .expect("inline payload converts");

        assert_eq!(object.media_type(), "image/gif");
        assert_eq!(object.bytes(), b"GIF");
        assert_eq!(transport.fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn inline_payload_without_type_defaults_to_png() {
        let converter = BlobConverter::new(StaticTransport::ok(b"", None));
        let object = converter
            .to_binary_object(&ResourceReference::new("data:;base64,AQID"))
            .await
            .expect("inline payload converts");
        assert_eq!(object.media_type(), DEFAULT_INLINE_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn remote_reference_uses_reported_type() {
        let transport = StaticTransport::ok(&[0xFF, 0xD8], Some("image/jpeg"));
        let converter = BlobConverter::new(transport.clone());

        let object = converter
            .to_binary_object(&ResourceReference::new("https://example.com/a"))
            .await
            .expect("remote content converts");

        assert_eq!(object.media_type(), "image/jpeg");
        assert_eq!(object.len(), 2);
        assert_eq!(transport.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn remote_reference_without_type_falls_back() {
        let converter = BlobConverter::new(StaticTransport::ok(b"x", Some("  ")));
        let object = converter
            .to_binary_object(&ResourceReference::new("https://example.com/a"))
            .await
            .expect("remote content converts");
        assert_eq!(object.media_type(), FALLBACK_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn transport_error_is_propagated() {
        let converter =
            BlobConverter::new(StaticTransport::failing(ConversionError::HttpStatus(404)));
        let err = converter
            .to_binary_object(&ResourceReference::new("https://example.com/missing.png"))
            .await
            .unwrap_err();
        assert_eq!(err, ConversionError::HttpStatus(404));
    }

    #[tokio::test]
    async fn oversized_content_is_rejected() {
        let converter =
            BlobConverter::new(StaticTransport::ok(&[0; 16], None)).with_max_bytes(8);
        let err = converter
            .to_binary_object(&ResourceReference::new("https://example.com/big"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ConversionError::TooLarge {
                size: 16,
                max_size: 8
            }
        );
    }

    #[tokio::test]
    async fn malformed_inline_payload_is_rejected() {
        let converter = BlobConverter::new(StaticTransport::ok(b"", None));
        let err = converter
            .to_binary_object(&ResourceReference::new("data:image/png;base64,***"))
            .await
            .unwrap_err();
        assert!(matches!(err, ConversionError::MalformedPayload(_)));
    }
}
