// SPDX-License-Identifier: MPL-2.0
//! Download.
//!
//! Inline payloads are converted, exposed through a transient handle and
//! saved; the handle is released right after the save, whatever its outcome.
//! Remote references are saved by locator without conversion.

use super::Distributor;
use crate::application::port::{PlatformError, SaveSource, SavedDownload};
use crate::domain::export::filename::download_file_name;
use crate::domain::export::{ExportAction, ExportChannel, ExportError, ExportResult};
use crate::domain::resource::ResourceReference;

const DOWNLOADED: &str = "notification-download-success";
const DOWNLOAD_STARTED: &str = "notification-download-started";

impl Distributor {
    /// Saves the resource under a name derived from `suggested_name`.
    pub async fn download(&self, reference: &ResourceReference, suggested_name: &str) -> ExportResult {
        let file_name = download_file_name(suggested_name, reference);
        tracing::debug!(%file_name, inline = reference.is_inline(), "starting download");

        let saved = if reference.is_inline() {
            self.save_inline(reference, &file_name).await
        } else {
            self.platform()
                .downloads
                .save(SaveSource::Locator(reference.raw()), &file_name)
                .await
                .map_err(download_error)
        };

        match saved {
            Ok(saved) => {
                let key = if reference.is_inline() {
                    DOWNLOADED
                } else {
                    DOWNLOAD_STARTED
                };
                ExportResult::succeeded(ExportAction::Download, ExportChannel::Download, key)
                    .with_detail(saved.file_name)
            }
            Err(err) => ExportResult::failed(
                ExportAction::Download,
                ExportChannel::Download,
                ExportError::DownloadFailed(err.cause()),
            ),
        }
    }

    async fn save_inline(
        &self,
        reference: &ResourceReference,
        file_name: &str,
    ) -> Result<SavedDownload, ExportError> {
        let object = self.converter().to_binary_object(reference).await?;
        let downloads = &self.platform().downloads;

        let handle = downloads.create_handle(&object).map_err(download_error)?;
        let saved = downloads.save(SaveSource::Handle(&handle), file_name).await;
        downloads.release(handle);

        saved.map_err(download_error)
    }
}

fn download_error(err: PlatformError) -> ExportError {
    ExportError::DownloadFailed(err.to_string())
}
