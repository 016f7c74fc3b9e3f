// SPDX-License-Identifier: MPL-2.0
//! System clipboard adapter backed by `arboard`.
//!
//! Every call opens its own clipboard connection on the blocking pool, so
//! the async runtime never waits on the display server.
//!
//! `arboard` only carries text and images, so a binary entry is written as
//! an image for `image/*` objects and as text for `text/*` objects. Other
//! media types are rejected with a cause naming the type.

use crate::application::port::{Clipboard, PlatformError};
use crate::domain::resource::BinaryObject;
use async_trait::async_trait;
use std::borrow::Cow;
use tokio::task::spawn_blocking;

/// Largest decoded image (RGBA bytes) pushed to the clipboard (256 MB).
pub const MAX_CLIPBOARD_IMAGE_BYTES: usize = 256 * 1024 * 1024;

/// Clipboard of the desktop session.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn is_reachable() -> bool {
        arboard::Clipboard::new().is_ok()
    }
}

#[async_trait]
impl Clipboard for SystemClipboard {
    fn can_write_text(&self) -> bool {
        Self::is_reachable()
    }

    fn can_write_binary(&self) -> bool {
        Self::is_reachable()
    }

    async fn write_text(&self, text: &str) -> Result<(), PlatformError> {
        let text = text.to_string();
        spawn_blocking(move || {
            let mut clipboard = open()?;
            clipboard
                .set_text(text)
                .map_err(|e| PlatformError::Failed(e.to_string()))
        })
        .await
        .map_err(|e| PlatformError::Failed(format!("clipboard task failed: {e}")))?
    }

    async fn write_binary(&self, object: &BinaryObject) -> Result<(), PlatformError> {
        if !object.is_image() && !object.is_text() {
            return Err(unsupported(object));
        }

        let object = object.clone();
        spawn_blocking(move || {
            let entry = ClipboardEntry::from_object(&object)?;
            let mut clipboard = open()?;
            match entry {
                ClipboardEntry::Text(text) => clipboard.set_text(text),
                ClipboardEntry::Image(image) => clipboard.set_image(image),
            }
            .map_err(|e| PlatformError::Failed(e.to_string()))
        })
        .await
        .map_err(|e| PlatformError::Failed(format!("clipboard task failed: {e}")))?
    }
}

/// Content of one clipboard write.
#[derive(Debug)]
enum ClipboardEntry {
    Text(String),
    Image(arboard::ImageData<'static>),
}

impl ClipboardEntry {
    fn from_object(object: &BinaryObject) -> Result<Self, PlatformError> {
        if object.is_image() {
            return decode_rgba(object).map(Self::Image);
        }
        if object.is_text() {
            return String::from_utf8(object.bytes().to_vec())
                .map(Self::Text)
                .map_err(|e| PlatformError::Failed(format!("text payload is not UTF-8: {e}")));
        }
        Err(unsupported(object))
    }
}

fn unsupported(object: &BinaryObject) -> PlatformError {
    PlatformError::Failed(format!(
        "clipboard only accepts image/* and text/* payloads, got {}",
        object.media_type()
    ))
}

fn open() -> Result<arboard::Clipboard, PlatformError> {
    arboard::Clipboard::new().map_err(|e| {
        tracing::debug!(error = %e, "clipboard unavailable");
        PlatformError::Unavailable
    })
}

/// Decodes an encoded image into the RGBA layout the clipboard expects.
fn decode_rgba(object: &BinaryObject) -> Result<arboard::ImageData<'static>, PlatformError> {
    let decoded = image_rs::load_from_memory(object.bytes())
        .map_err(|e| PlatformError::Failed(format!("cannot decode image: {e}")))?
        .to_rgba8();

    let (width, height) = decoded.dimensions();
    let bytes = decoded.into_raw();
    if bytes.len() > MAX_CLIPBOARD_IMAGE_BYTES {
        return Err(PlatformError::Failed(format!(
            "image too large for clipboard: {} bytes",
            bytes.len()
        )));
    }

    Ok(arboard::ImageData {
        width: width as usize,
        height: height as usize,
        bytes: Cow::Owned(bytes),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageBuffer, ImageFormat, Rgba};
    use std::io::Cursor;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let buffer: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_pixel(width, height, Rgba([255, 0, 0, 255]));
        let mut out = Cursor::new(Vec::new());
        buffer
            .write_to(&mut out, ImageFormat::Png)
            .expect("encode png");
        out.into_inner()
    }

    #[test]
    fn decode_rgba_produces_four_bytes_per_pixel() {
        let object = BinaryObject::new(png(3, 2), "image/png");
        let image = decode_rgba(&object).expect("decodes");
        assert_eq!((image.width, image.height), (3, 2));
        assert_eq!(image.bytes.len(), 3 * 2 * 4);
    }

    #[test]
    fn decode_rgba_rejects_garbage() {
        let object = BinaryObject::new(vec![1, 2, 3], "image/png");
        assert!(matches!(decode_rgba(&object), Err(PlatformError::Failed(_))));
    }

    #[test]
    fn text_payload_becomes_text_entry() {
        let object = BinaryObject::new(b"hello world".to_vec(), "text/plain");
        let entry = ClipboardEntry::from_object(&object).expect("text entry");
        assert!(matches!(entry, ClipboardEntry::Text(ref text) if text == "hello world"));
    }

    #[test]
    fn image_payload_becomes_image_entry() {
        let object = BinaryObject::new(png(2, 2), "image/png");
        let entry = ClipboardEntry::from_object(&object).expect("image entry");
        assert!(matches!(entry, ClipboardEntry::Image(ref image) if image.width == 2));
    }

    #[test]
    fn invalid_utf8_text_payload_is_rejected() {
        let object = BinaryObject::new(vec![0xFF, 0xFE], "text/plain");
        let err = ClipboardEntry::from_object(&object).unwrap_err();
        assert!(matches!(err, PlatformError::Failed(msg) if msg.contains("UTF-8")));
    }

    #[tokio::test]
    async fn non_image_binary_is_rejected_before_touching_clipboard() {
        let object = BinaryObject::new(b"%PDF".to_vec(), "application/pdf");
        let err = SystemClipboard::new().write_binary(&object).await.unwrap_err();
        assert!(matches!(err, PlatformError::Failed(msg) if msg.contains("application/pdf")));
    }
}
