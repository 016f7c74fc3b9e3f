// SPDX-License-Identifier: MPL-2.0
//! Distribution operations.
//!
//! Four operations export the viewed resource: [`Distributor::download`],
//! [`Distributor::copy_to_clipboard`], [`Distributor::share_native`] and
//! [`Distributor::print`]. Each one reads a fresh [`CapabilitySnapshot`],
//! walks its fallback chain and returns an [`ExportResult`]. No error
//! escapes an operation: every failure is caught and reported in the result
//! so the caller can surface it as a notification.

mod chain;
mod copy;
mod download;
mod print;
mod share;

pub use chain::{Attempt, ChainFailure, ChainSuccess, OnFailure};
pub use print::print_document;

use crate::application::blob::BlobConverter;
use crate::application::port::{CapabilityProbe, Platform};
use crate::domain::export::{CapabilitySnapshot, ExportAction, ExportResult};
use crate::domain::resource::ResourceReference;

/// Runs export operations against a [`Platform`].
#[derive(Debug, Clone)]
pub struct Distributor {
    platform: Platform,
    converter: BlobConverter,
}

impl Distributor {
    /// Creates a distributor converting resources through the platform
    /// transport, without a size limit.
    pub fn new(platform: Platform) -> Self {
        let converter = BlobConverter::new(platform.transport.clone());
        Self {
            platform,
            converter,
        }
    }

    /// Creates a distributor with a preconfigured converter.
    pub fn with_converter(platform: Platform, converter: BlobConverter) -> Self {
        Self {
            platform,
            converter,
        }
    }

    /// Reads the current capabilities of the platform.
    #[must_use]
    pub fn capabilities(&self) -> CapabilitySnapshot {
        self.platform.snapshot()
    }

    /// Runs the operation matching `action`.
    ///
    /// `name` is the suggested download name or the share/print title.
    pub async fn run(
        &self,
        action: ExportAction,
        reference: &ResourceReference,
        name: &str,
    ) -> ExportResult {
        let result = match action {
            ExportAction::Download => self.download(reference, name).await,
            ExportAction::Copy => self.copy_to_clipboard(reference).await,
            ExportAction::Share => self.share_native(reference, name).await,
            ExportAction::Print => self.print(reference, name).await,
        };

        if result.is_success() {
            tracing::info!(?action, channel = ?result.channel_used(), "export completed");
        } else {
            tracing::warn!(
                ?action,
                channel = ?result.channel_used(),
                error = ?result.error(),
                "export failed"
            );
        }
        result
    }

    pub(crate) fn platform(&self) -> &Platform {
        &self.platform
    }

    pub(crate) fn converter(&self) -> &BlobConverter {
        &self.converter
    }
}
