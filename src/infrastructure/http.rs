// SPDX-License-Identifier: MPL-2.0
//! Transport for remote references.
//!
//! `http(s)` locators are fetched with `reqwest`; `file://` locators and
//! plain paths are read from disk. The reported media type comes from the
//! `Content-Type` header, then the locator's extension, then the content's
//! magic bytes.

use crate::application::port::{FetchedBody, Transport};
use crate::config::{NetworkConfig, MAX_REDIRECTS};
use crate::domain::export::ConversionError;
use crate::domain::resource::media_type;
use async_trait::async_trait;
use futures_util::StreamExt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Fetches remote references over HTTP or from the local filesystem.
#[derive(Debug, Clone)]
pub struct DesktopTransport {
    user_agent: String,
    timeout: Duration,
    max_body_bytes: u64,
}

impl DesktopTransport {
    #[must_use]
    pub fn new(config: &NetworkConfig) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            timeout: config.timeout(),
            max_body_bytes: config.max_body_bytes,
        }
    }

    async fn fetch_http(&self, url: &str) -> Result<FetchedBody, ConversionError> {
        // Build client with explicit redirect policy and user agent
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(self.user_agent.as_str())
            .timeout(self.timeout)
            .build()
            .map_err(|e| ConversionError::Network(e.to_string()))?;

        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| ConversionError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConversionError::HttpStatus(status.as_u16()));
        }

        if let Some(size) = response
            .content_length()
            .filter(|len| *len > self.max_body_bytes)
        {
            return Err(ConversionError::TooLarge {
                size,
                max_size: self.max_body_bytes,
            });
        }

        let header_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(media_type::essence)
            .filter(|essence| !essence.is_empty());

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| ConversionError::Network(e.to_string()))?;
            let size = (bytes.len() + chunk.len()) as u64;
            if size > self.max_body_bytes {
                return Err(ConversionError::TooLarge {
                    size,
                    max_size: self.max_body_bytes,
                });
            }
            bytes.extend_from_slice(&chunk);
        }

        let media_type = header_type.or_else(|| sniff_media_type(url, &bytes));
        Ok(FetchedBody { bytes, media_type })
    }

    async fn fetch_file(&self, path: &Path) -> Result<FetchedBody, ConversionError> {
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| ConversionError::Io(format!("{}: {e}", path.display())))?;
        if metadata.len() > self.max_body_bytes {
            return Err(ConversionError::TooLarge {
                size: metadata.len(),
                max_size: self.max_body_bytes,
            });
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ConversionError::Io(format!("{}: {e}", path.display())))?;
        let media_type = sniff_media_type(&path.to_string_lossy(), &bytes);
        Ok(FetchedBody { bytes, media_type })
    }
}

#[async_trait]
impl Transport for DesktopTransport {
    async fn fetch(&self, locator: &str) -> Result<FetchedBody, ConversionError> {
        tracing::debug!(%locator, "fetching remote reference");
        match classify_locator(locator) {
            Locator::Http => self.fetch_http(locator).await,
            Locator::File(path) => self.fetch_file(&path).await,
        }
    }
}

/// How a remote locator is reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    Http,
    File(PathBuf),
}

/// Decides whether `locator` is fetched over HTTP or read from disk.
#[must_use]
pub fn classify_locator(locator: &str) -> Locator {
    let lower = locator.get(..8).unwrap_or(locator).to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Locator::Http
    } else if lower.starts_with("file://") {
        Locator::File(PathBuf::from(&locator["file://".len()..]))
    } else {
        Locator::File(PathBuf::from(locator))
    }
}

/// Guesses the media type from the locator's extension, then the content.
fn sniff_media_type(locator: &str, bytes: &[u8]) -> Option<String> {
    let path = locator.split(['?', '#']).next().unwrap_or_default();
    let from_extension = path
        .rsplit('/')
        .next()
        .and_then(|segment| segment.rsplit_once('.'))
        .and_then(|(_, extension)| media_type::from_extension(extension));

    from_extension
        .map(str::to_string)
        .or_else(|| {
            image_rs::guess_format(bytes)
                .ok()
                .map(|format| format.to_mime_type().to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn transport(max_body_bytes: u64) -> DesktopTransport {
        DesktopTransport::new(&NetworkConfig {
            max_body_bytes,
            ..NetworkConfig::default()
        })
    }

    #[test]
    fn classify_locator_recognizes_schemes() {
        assert_eq!(classify_locator("https://example.com/a.jpg"), Locator::Http);
        assert_eq!(classify_locator("HTTP://example.com/a.jpg"), Locator::Http);
        assert_eq!(
            classify_locator("file:///tmp/a.png"),
            Locator::File(PathBuf::from("/tmp/a.png"))
        );
        assert_eq!(
            classify_locator("photos/a.png"),
            Locator::File(PathBuf::from("photos/a.png"))
        );
    }

    #[test]
    fn sniff_prefers_extension_and_ignores_query() {
        assert_eq!(
            sniff_media_type("https://cdn.example.com/x/poster.webp?v=3", b""),
            Some("image/webp".to_string())
        );
    }

    #[test]
    fn sniff_falls_back_to_magic_bytes() {
        let png_magic = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        assert_eq!(
            sniff_media_type("https://example.com/image", &png_magic),
            Some("image/png".to_string())
        );
        assert_eq!(sniff_media_type("https://example.com/blob", b"plain"), None);
    }

    #[tokio::test]
    async fn local_file_is_read_with_extension_type() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("photo.jpg");
        std::fs::write(&path, [0xFF, 0xD8, 0xFF]).expect("write file");

        let body = transport(1024)
            .fetch(&path.to_string_lossy())
            .await
            .expect("file fetch succeeds");

        assert_eq!(body.bytes, vec![0xFF, 0xD8, 0xFF]);
        assert_eq!(body.media_type.as_deref(), Some("image/jpeg"));
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("missing.png");
        let err = transport(1024)
            .fetch(&path.to_string_lossy())
            .await
            .unwrap_err();
        assert!(matches!(err, ConversionError::Io(_)));
    }

    #[tokio::test]
    async fn oversized_file_is_rejected() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("big.png");
        std::fs::write(&path, vec![0u8; 32]).expect("write file");

        let err = transport(16)
            .fetch(&path.to_string_lossy())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ConversionError::TooLarge {
                size: 32,
                max_size: 16
            }
        );
    }
}
