// SPDX-License-Identifier: MPL-2.0
//! Decoded preview of the viewed resource.
//!
//! The preview keeps its RGBA pixels so rotated variants can be produced
//! without decoding the source again. Rotated variants are cached per
//! angle by the viewer session.

use crate::application::blob::BlobConverter;
use crate::domain::export::ConversionError;
use crate::domain::resource::ResourceReference;
use crate::domain::ui::RotationAngle;
use iced::widget::image;
use image_rs::GenericImageView;
use std::fmt;
use std::sync::Arc;

/// Why a preview could not be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewError {
    /// The resource could not be fetched or decoded into bytes.
    Conversion(ConversionError),
    /// The bytes are not a supported raster image.
    Decode(String),
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewError::Conversion(err) => write!(f, "{err}"),
            PreviewError::Decode(msg) => write!(f, "Decode error: {msg}"),
        }
    }
}

impl std::error::Error for PreviewError {}

/// RGBA pixels ready to be drawn.
#[derive(Debug, Clone)]
pub struct Preview {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    rgba_bytes: Arc<Vec<u8>>,
}

impl Preview {
    /// Wraps raw RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let rgba_bytes = Arc::new(pixels);
        let handle = image::Handle::from_rgba(width, height, rgba_bytes.to_vec());
        Self {
            handle,
            width,
            height,
            rgba_bytes,
        }
    }

    /// Decodes encoded image bytes (PNG, JPEG, WebP, ...).
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::Decode`] when the format is unknown or the
    /// data is corrupt.
    pub fn decode(bytes: &[u8]) -> Result<Self, PreviewError> {
        let decoded =
            image_rs::load_from_memory(bytes).map_err(|e| PreviewError::Decode(e.to_string()))?;
        let (width, height) = decoded.dimensions();
        Ok(Self::from_rgba(width, height, decoded.to_rgba8().into_vec()))
    }

    /// Returns a copy rotated clockwise by `angle`.
    #[must_use]
    pub fn rotated(&self, angle: RotationAngle) -> Self {
        if !angle.is_rotated() {
            return self.clone();
        }

        let Some(img) =
            image_rs::RgbaImage::from_raw(self.width, self.height, self.rgba_bytes.to_vec())
        else {
            tracing::warn!(
                width = self.width,
                height = self.height,
                "preview buffer does not match its dimensions"
            );
            return self.clone();
        };
        let dynamic = image_rs::DynamicImage::ImageRgba8(img);

        let rotated = match angle.degrees() {
            90 => dynamic.rotate90(),
            180 => dynamic.rotate180(),
            270 => dynamic.rotate270(),
            _ => dynamic,
        };

        let (width, height) = rotated.dimensions();
        Self::from_rgba(width, height, rotated.to_rgba8().into_vec())
    }
}

/// Fetches and decodes the preview of `reference`.
///
/// Decoding runs on the blocking pool, large images take a while.
pub async fn load(
    converter: BlobConverter,
    reference: ResourceReference,
) -> Result<Preview, PreviewError> {
    let object = converter
        .to_binary_object(&reference)
        .await
        .map_err(PreviewError::Conversion)?;

    tokio::task::spawn_blocking(move || Preview::decode(object.bytes()))
        .await
        .map_err(|e| PreviewError::Decode(e.to_string()))?
}
