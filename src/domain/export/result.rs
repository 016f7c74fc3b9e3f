// SPDX-License-Identifier: MPL-2.0
//! Outcome of a distribution operation.

use super::error::ExportError;

/// User-facing export action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportAction {
    Download,
    Copy,
    Share,
    Print,
}

/// Channel through which an export was delivered (or last attempted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportChannel {
    /// File saved through the download target.
    Download,
    /// Binary clipboard entry tagged with the media type.
    ClipboardBinary,
    /// Text clipboard entry holding the raw reference.
    ClipboardText,
    /// Platform share sheet.
    NativeShare,
    /// Secondary rendering surface with a print trigger.
    PrintSurface,
    /// No channel was available or attempted.
    None,
}

/// Success or failure of an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Success,
    Failure(ExportError),
}

/// Result of one distribution operation.
///
/// Every result carries the i18n key of the notification that must be shown
/// to the user, whether the export succeeded or failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    action: ExportAction,
    channel_used: ExportChannel,
    outcome: ExportOutcome,
    message_key: &'static str,
    detail: Option<String>,
}

impl ExportResult {
    /// Creates a successful result.
    #[must_use]
    pub fn succeeded(
        action: ExportAction,
        channel_used: ExportChannel,
        message_key: &'static str,
    ) -> Self {
        Self {
            action,
            channel_used,
            outcome: ExportOutcome::Success,
            message_key,
            detail: None,
        }
    }

    /// Creates a failed result. The message key comes from the error.
    #[must_use]
    pub fn failed(action: ExportAction, channel_used: ExportChannel, error: ExportError) -> Self {
        Self {
            action,
            channel_used,
            message_key: error.i18n_key(),
            outcome: ExportOutcome::Failure(error),
            detail: None,
        }
    }

    /// Attaches a detail shown alongside the notification (e.g. a file name).
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    #[must_use]
    pub fn action(&self) -> ExportAction {
        self.action
    }

    #[must_use]
    pub fn channel_used(&self) -> ExportChannel {
        self.channel_used
    }

    #[must_use]
    pub fn outcome(&self) -> &ExportOutcome {
        &self.outcome
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome == ExportOutcome::Success
    }

    /// Returns the error of a failed export.
    #[must_use]
    pub fn error(&self) -> Option<&ExportError> {
        match &self.outcome {
            ExportOutcome::Success => None,
            ExportOutcome::Failure(err) => Some(err),
        }
    }

    #[must_use]
    pub fn message_key(&self) -> &'static str {
        self.message_key
    }

    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}
