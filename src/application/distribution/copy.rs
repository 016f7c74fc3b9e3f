// SPDX-License-Identifier: MPL-2.0
//! Copy to clipboard.
//!
//! 1. Inline payload with a binary clipboard: write the decoded object.
//! 2. Otherwise, with a text clipboard: write the raw reference.
//!
//! A failed binary write does not fall back to text.

use super::chain::{run_chain, Attempt, OnFailure};
use super::Distributor;
use crate::domain::export::{ExportAction, ExportChannel, ExportError, ExportResult};
use crate::domain::resource::ResourceReference;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;

const IMAGE_COPIED: &str = "notification-copy-image-success";
const LINK_COPIED: &str = "notification-copy-link-success";

impl Distributor {
    /// Copies the resource to the clipboard.
    pub async fn copy_to_clipboard(&self, reference: &ResourceReference) -> ExportResult {
        let capabilities = self.capabilities();
        let inline = reference.is_inline();
        let binary = inline && capabilities.has_clipboard_binary_write;

        let attempts = vec![
            Attempt::new(
                ExportChannel::ClipboardBinary,
                binary,
                OnFailure::Stop,
                async move {
                    let object = self.converter().to_binary_object(reference).await?;
                    self.platform()
                        .clipboard
                        .write_binary(&object)
                        .await
                        .map_err(|e| ExportError::CopyFailed(e.to_string()))?;
                    Ok(IMAGE_COPIED)
                }
                .boxed(),
            ),
            Attempt::new(
                ExportChannel::ClipboardText,
                !binary && capabilities.has_clipboard_write,
                OnFailure::Stop,
                self.copy_link(reference, LINK_COPIED),
            ),
        ];

        match run_chain(ExportAction::Copy, attempts).await {
            Ok(success) => {
                ExportResult::succeeded(ExportAction::Copy, success.channel, success.message_key)
            }
            Err(failure) => ExportResult::failed(
                ExportAction::Copy,
                failure.channel,
                ExportError::CopyFailed(failure.cause_or("no clipboard available")),
            ),
        }
    }

    /// Writes the raw reference as a text clipboard entry, resolving to
    /// `message_key` on success.
    pub(super) fn copy_link<'a>(
        &'a self,
        reference: &'a ResourceReference,
        message_key: &'static str,
    ) -> BoxFuture<'a, Result<&'static str, ExportError>> {
        async move {
            self.platform()
                .clipboard
                .write_text(reference.raw())
                .await
                .map_err(|e| ExportError::CopyFailed(e.to_string()))?;
            Ok(message_key)
        }
        .boxed()
    }
}
