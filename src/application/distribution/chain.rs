// SPDX-License-Identifier: MPL-2.0
//! Ordered fallback chains.
//!
//! A chain is a list of [`Attempt`]s evaluated in order. Disabled attempts
//! are skipped without running, the first success short-circuits, and a
//! failed attempt either ends the chain ([`OnFailure::Stop`]) or hands over
//! to the next one ([`OnFailure::FallThrough`]).

use crate::domain::export::{ExportAction, ExportChannel, ExportError};
use futures_util::future::BoxFuture;

/// What a failed attempt does to the rest of the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnFailure {
    Stop,
    FallThrough,
}

/// One step of a fallback chain.
///
/// The future is only polled when the attempt is enabled, so building a
/// chain never performs any platform call.
pub struct Attempt<'a> {
    channel: ExportChannel,
    enabled: bool,
    on_failure: OnFailure,
    run: BoxFuture<'a, Result<&'static str, ExportError>>,
}

impl<'a> Attempt<'a> {
    /// Creates an attempt resolving to the success message key.
    pub fn new(
        channel: ExportChannel,
        enabled: bool,
        on_failure: OnFailure,
        run: BoxFuture<'a, Result<&'static str, ExportError>>,
    ) -> Self {
        Self {
            channel,
            enabled,
            on_failure,
            run,
        }
    }
}

/// Channel that delivered the export and its success message key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainSuccess {
    pub channel: ExportChannel,
    pub message_key: &'static str,
}

/// Why a chain ended without success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainFailure {
    /// Last channel attempted, or [`ExportChannel::None`] if none was enabled.
    pub channel: ExportChannel,
    /// Error of the last attempt; `None` when no attempt was enabled.
    pub error: Option<ExportError>,
}

impl ChainFailure {
    /// Cause of the failure, or `fallback` when no channel was available.
    #[must_use]
    pub fn cause_or(&self, fallback: &str) -> String {
        self.error
            .as_ref()
            .map_or_else(|| fallback.to_string(), ExportError::cause)
    }
}

/// Runs `attempts` in order.
pub async fn run_chain(
    action: ExportAction,
    attempts: Vec<Attempt<'_>>,
) -> Result<ChainSuccess, ChainFailure> {
    let mut failure = ChainFailure {
        channel: ExportChannel::None,
        error: None,
    };

    for attempt in attempts {
        if !attempt.enabled {
            tracing::debug!(?action, channel = ?attempt.channel, "channel unavailable, skipped");
            continue;
        }

        tracing::debug!(?action, channel = ?attempt.channel, "attempting channel");
        match attempt.run.await {
            Ok(message_key) => {
                return Ok(ChainSuccess {
                    channel: attempt.channel,
                    message_key,
                });
            }
            Err(err) => {
                tracing::warn!(?action, channel = ?attempt.channel, error = %err, "channel failed");
                failure = ChainFailure {
                    channel: attempt.channel,
                    error: Some(err),
                };
                if attempt.on_failure == OnFailure::Stop {
                    break;
                }
            }
        }
    }

    Err(failure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::FutureExt;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn ok<'a>(
        key: &'static str,
        calls: &'a AtomicUsize,
    ) -> BoxFuture<'a, Result<&'static str, ExportError>> {
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(key)
        }
        .boxed()
    }

    fn fail(calls: &AtomicUsize) -> BoxFuture<'_, Result<&'static str, ExportError>> {
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(ExportError::CopyFailed("denied".into()))
        }
        .boxed()
    }

    #[tokio::test]
    async fn first_success_short_circuits() {
        let first = AtomicUsize::new(0);
        let second = AtomicUsize::new(0);
        let attempts = vec![
            Attempt::new(ExportChannel::NativeShare, true, OnFailure::FallThrough, ok("a", &first)),
            Attempt::new(ExportChannel::ClipboardText, true, OnFailure::Stop, ok("b", &second)),
        ];

        let success = run_chain(ExportAction::Share, attempts).await.expect("success");

        assert_eq!(success.channel, ExportChannel::NativeShare);
        assert_eq!(success.message_key, "a");
        assert_eq!(second.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn disabled_attempt_is_never_run() {
        let skipped = AtomicUsize::new(0);
        let used = AtomicUsize::new(0);
        let attempts = vec![
            Attempt::new(ExportChannel::ClipboardBinary, false, OnFailure::Stop, ok("a", &skipped)),
            Attempt::new(ExportChannel::ClipboardText, true, OnFailure::Stop, ok("b", &used)),
        ];

        let success = run_chain(ExportAction::Copy, attempts).await.expect("success");

        assert_eq!(success.channel, ExportChannel::ClipboardText);
        assert_eq!(skipped.load(Ordering::SeqCst), 0);
        assert_eq!(used.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn stop_ends_chain_on_failure() {
        let failing = AtomicUsize::new(0);
        let next = AtomicUsize::new(0);
        let attempts = vec![
            Attempt::new(ExportChannel::ClipboardBinary, true, OnFailure::Stop, fail(&failing)),
            Attempt::new(ExportChannel::ClipboardText, true, OnFailure::Stop, ok("b", &next)),
        ];

        let failure = run_chain(ExportAction::Copy, attempts).await.unwrap_err();

        assert_eq!(failure.channel, ExportChannel::ClipboardBinary);
        assert_eq!(failure.cause_or("none"), "denied");
        assert_eq!(next.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn fall_through_tries_next_attempt() {
        let failing = AtomicUsize::new(0);
        let next = AtomicUsize::new(0);
        let attempts = vec![
            Attempt::new(ExportChannel::NativeShare, true, OnFailure::FallThrough, fail(&failing)),
            Attempt::new(ExportChannel::ClipboardText, true, OnFailure::Stop, ok("b", &next)),
        ];

        let success = run_chain(ExportAction::Share, attempts).await.expect("success");

        assert_eq!(success.channel, ExportChannel::ClipboardText);
        assert_eq!(failing.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn no_enabled_attempt_reports_no_channel() {
        let calls = AtomicUsize::new(0);
        let attempts = vec![Attempt::new(
            ExportChannel::ClipboardText,
            false,
            OnFailure::Stop,
            ok("a", &calls),
        )];

        let failure = run_chain(ExportAction::Copy, attempts).await.unwrap_err();

        assert_eq!(failure.channel, ExportChannel::None);
        assert_eq!(failure.error, None);
        assert_eq!(failure.cause_or("no channel"), "no channel");
    }
}
