// SPDX-License-Identifier: MPL-2.0
//! Native share with link-copy fallback.
//!
//! Order is strict: native share sheet first, then a text copy of the raw
//! reference, then a hard failure. A cancelled share sheet counts as a
//! failure and also falls back to the copy.

use super::chain::{run_chain, Attempt, OnFailure};
use super::Distributor;
use crate::application::port::{ShareContent, SharePayload};
use crate::domain::export::filename;
use crate::domain::export::{ExportAction, ExportChannel, ExportError, ExportResult};
use crate::domain::resource::ResourceReference;
use futures_util::FutureExt;

const SHARED: &str = "notification-share-success";
const LINK_COPIED: &str = "notification-share-link-copied";

/// Text accompanying a shared resource.
#[must_use]
pub fn share_text(title: &str) -> String {
    format!("Sharing {title}")
}

impl Distributor {
    /// Shares the resource through the platform share sheet.
    pub async fn share_native(&self, reference: &ResourceReference, title: &str) -> ExportResult {
        let capabilities = self.capabilities();

        let attempts = vec![
            Attempt::new(
                ExportChannel::NativeShare,
                capabilities.has_native_share,
                OnFailure::FallThrough,
                async move {
                    let content = if reference.is_inline() {
                        let object = self.converter().to_binary_object(reference).await?;
                        let extension = object
                            .extension()
                            .map_or_else(|| filename::extension_for(reference), str::to_string);
                        ShareContent::File {
                            name: format!("{}.{extension}", filename::sanitize(title)),
                            object,
                        }
                    } else {
                        ShareContent::Locator(reference.raw().to_string())
                    };

                    self.platform()
                        .share
                        .share(SharePayload {
                            title: title.to_string(),
                            text: share_text(title),
                            content,
                        })
                        .await
                        .map_err(|e| ExportError::ShareFailed(e.to_string()))?;
                    Ok(SHARED)
                }
                .boxed(),
            ),
            Attempt::new(
                ExportChannel::ClipboardText,
                capabilities.has_clipboard_write,
                OnFailure::Stop,
                self.copy_link(reference, LINK_COPIED),
            ),
        ];

        match run_chain(ExportAction::Share, attempts).await {
            Ok(success) => {
                ExportResult::succeeded(ExportAction::Share, success.channel, success.message_key)
            }
            Err(failure) => ExportResult::failed(
                ExportAction::Share,
                failure.channel,
                ExportError::ShareFailed(failure.cause_or("no share channel available")),
            ),
        }
    }
}
