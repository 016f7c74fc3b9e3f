// SPDX-License-Identifier: MPL-2.0
//! Download target port.
//!
//! Binary objects are saved through a transient local handle: the caller
//! creates the handle, triggers the save, and releases the handle right
//! after, whatever the outcome.

use super::PlatformError;
use crate::domain::resource::BinaryObject;
use async_trait::async_trait;
use std::path::PathBuf;

/// Transient local reference to a binary object.
#[derive(Debug, PartialEq, Eq)]
pub struct ObjectHandle {
    id: u64,
    location: PathBuf,
}

impl ObjectHandle {
    pub fn new(id: u64, location: impl Into<PathBuf>) -> Self {
        Self {
            id,
            location: location.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Where the platform keeps the object while the handle is alive.
    #[must_use]
    pub fn location(&self) -> &std::path::Path {
        &self.location
    }
}

/// What a save action reads from.
#[derive(Debug)]
pub enum SaveSource<'a> {
    /// A transient handle created by [`DownloadTarget::create_handle`].
    Handle(&'a ObjectHandle),
    /// A locator fetched directly by the download target.
    Locator(&'a str),
}

/// Where a download ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedDownload {
    pub file_name: String,
    pub path: Option<PathBuf>,
}

#[async_trait]
pub trait DownloadTarget: Send + Sync {
    /// Creates a transient local handle for `object`.
    fn create_handle(&self, object: &BinaryObject) -> Result<ObjectHandle, PlatformError>;

    /// Triggers the save action for `source` under `file_name`.
    async fn save(
        &self,
        source: SaveSource<'_>,
        file_name: &str,
    ) -> Result<SavedDownload, PlatformError>;

    /// Releases a handle created by [`DownloadTarget::create_handle`].
    fn release(&self, handle: ObjectHandle);
}
