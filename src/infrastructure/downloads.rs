// SPDX-License-Identifier: MPL-2.0
//! Download target writing into a local directory.
//!
//! Transient handles are staging files under the temp directory. Saves
//! copy into the download directory (or a path picked in a native save
//! dialog) through a per-save temp file and a rename, so a partial write
//! never leaves a truncated download behind. Existing files are never
//! overwritten: `photo.png` becomes `photo-1.png`, `photo-2.png`, ...
//!
//! The target name is reserved by creating it with `create_new` before any
//! content is written, so concurrent saves of the same name cannot pick the
//! same file.

use crate::application::port::{
    DownloadTarget, ObjectHandle, PlatformError, SaveSource, SavedDownload, Transport,
};
use crate::config::{DownloadsConfig, MAX_DOWNLOAD_NAME_ATTEMPTS};
use crate::domain::resource::BinaryObject;
use async_trait::async_trait;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

const STAGING_DIR: &str = "lens-share-staging";

/// Saves downloads to the filesystem.
pub struct FileDownloads {
    directory: PathBuf,
    ask_location: bool,
    staging: PathBuf,
    transport: Arc<dyn Transport>,
    next_id: AtomicU64,
}

impl FileDownloads {
    pub fn new(config: &DownloadsConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            directory: config.resolved_directory(),
            ask_location: config.ask_location,
            staging: std::env::temp_dir().join(STAGING_DIR),
            transport,
            next_id: AtomicU64::new(1),
        }
    }

    /// Uses `staging` for transient handles instead of the temp directory.
    #[must_use]
    pub fn with_staging_dir(mut self, staging: impl Into<PathBuf>) -> Self {
        self.staging = staging.into();
        self
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Picks the target path, asking the user when configured to.
    ///
    /// In the download directory the returned path already exists as an
    /// empty placeholder owned by this save.
    async fn target_path(&self, file_name: &str) -> Result<PathBuf, PlatformError> {
        if self.ask_location {
            return rfd::AsyncFileDialog::new()
                .set_directory(&self.directory)
                .set_file_name(file_name)
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf())
                .ok_or(PlatformError::Cancelled);
        }

        tokio::fs::create_dir_all(&self.directory).await?;
        reserve_path(&self.directory, file_name).await
    }

    async fn write_target(
        &self,
        source: SaveSource<'_>,
        target: &Path,
        save_id: u64,
    ) -> Result<(), PlatformError> {
        let bytes = match source {
            SaveSource::Handle(handle) => tokio::fs::read(handle.location()).await?,
            SaveSource::Locator(locator) => {
                self.transport
                    .fetch(locator)
                    .await
                    .map_err(|e| PlatformError::Failed(e.to_string()))?
                    .bytes
            }
        };
        write_atomic(target, &bytes, save_id).await?;
        Ok(())
    }
}

impl std::fmt::Debug for FileDownloads {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileDownloads")
            .field("directory", &self.directory)
            .field("ask_location", &self.ask_location)
            .field("staging", &self.staging)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl DownloadTarget for FileDownloads {
    fn create_handle(&self, object: &BinaryObject) -> Result<ObjectHandle, PlatformError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        fs::create_dir_all(&self.staging)?;
        let location = self
            .staging
            .join(format!("{}-{id}.part", std::process::id()));
        fs::write(&location, object.bytes())?;
        tracing::debug!(id, path = %location.display(), "created transient handle");
        Ok(ObjectHandle::new(id, location))
    }

    async fn save(
        &self,
        source: SaveSource<'_>,
        file_name: &str,
    ) -> Result<SavedDownload, PlatformError> {
        let target = self.target_path(file_name).await?;
        let save_id = self.next_id.fetch_add(1, Ordering::Relaxed);

        if let Err(err) = self.write_target(source, &target, save_id).await {
            if !self.ask_location {
                let _ = tokio::fs::remove_file(&target).await;
            }
            return Err(err);
        }

        tracing::info!(path = %target.display(), "download saved");
        Ok(SavedDownload {
            file_name: target
                .file_name()
                .map_or_else(|| file_name.to_string(), |name| name.to_string_lossy().into_owned()),
            path: Some(target),
        })
    }

    fn release(&self, handle: ObjectHandle) {
        match fs::remove_file(handle.location()) {
            Ok(()) => tracing::debug!(id = handle.id(), "released transient handle"),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => {
                tracing::warn!(id = handle.id(), error = %err, "failed to release transient handle");
            }
        }
    }
}

/// `directory/file_name` followed by its `stem-N.ext` variants.
fn candidate_paths<'a>(directory: &'a Path, file_name: &'a str) -> impl Iterator<Item = PathBuf> + 'a {
    let (stem, extension) = match file_name.rsplit_once('.') {
        Some((stem, extension)) if !stem.is_empty() => (stem, Some(extension)),
        _ => (file_name, None),
    };

    std::iter::once(directory.join(file_name)).chain((1..=MAX_DOWNLOAD_NAME_ATTEMPTS).map(
        move |n| match extension {
            Some(extension) => directory.join(format!("{stem}-{n}.{extension}")),
            None => directory.join(format!("{stem}-{n}")),
        },
    ))
}

/// Creates the first free candidate as an empty file and returns its path.
async fn reserve_path(directory: &Path, file_name: &str) -> Result<PathBuf, PlatformError> {
    for candidate in candidate_paths(directory, file_name) {
        match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&candidate)
            .await
        {
            Ok(_) => return Ok(candidate),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {}
            Err(err) => return Err(err.into()),
        }
    }
    Err(PlatformError::Failed(format!("no free file name for {file_name}")))
}

/// Writes content atomically using a temp file unique to `save_id` and a rename.
async fn write_atomic(path: &Path, content: &[u8], save_id: u64) -> io::Result<()> {
    let temp_path = path.with_extension(format!("{}-{save_id}.part", std::process::id()));

    tokio::fs::write(&temp_path, content).await?;

    if let Err(e) = tokio::fs::rename(&temp_path, path).await {
        // Clean up temp file on failure
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(e);
    }

    Ok(())
}
