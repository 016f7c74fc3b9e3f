// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! Every export produces exactly one notification, built from its
//! [`ExportResult`]. Failures carry the human-readable cause as the
//! `cause` argument, successes carry their detail (saved file name) as
//! `detail`.

use crate::config::{NOTIFICATION_SUCCESS_MS, NOTIFICATION_WARNING_MS};
use crate::domain::export::{ExportError, ExportResult};
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Info,
    Warning,
    /// Stays until dismissed.
    Error,
}

impl Severity {
    /// Accent color of the toast.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => Color::from_rgb8(0x2E, 0x9E, 0x5B),
            Severity::Info => Color::from_rgb8(0x2F, 0x7F, 0xD1),
            Severity::Warning => Color::from_rgb8(0xE0, 0x8A, 0x1E),
            Severity::Error => Color::from_rgb8(0xD6, 0x3C, 0x3C),
        }
    }

    /// Returns the auto-dismiss duration, or `None` for errors.
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => {
                Some(Duration::from_millis(NOTIFICATION_SUCCESS_MS))
            }
            Severity::Warning => Some(Duration::from_millis(NOTIFICATION_WARNING_MS)),
            Severity::Error => None,
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// i18n key resolved at render time.
    message_key: String,
    message_args: Vec<(String, String)>,
    created_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    #[must_use]
    pub fn should_auto_dismiss(&self) -> bool {
        self.severity
            .auto_dismiss_duration()
            .is_some_and(|duration| self.age() >= duration)
    }
}

impl From<&ExportResult> for Notification {
    fn from(result: &ExportResult) -> Self {
        let notification = match result.error() {
            None => Notification::success(result.message_key()),
            // A missing print surface is usually a blocked popup, not a fault.
            Some(ExportError::PrintUnavailable) => Notification::warning(result.message_key()),
            Some(_) => Notification::error(result.message_key()),
        };

        let notification = match result.detail() {
            Some(detail) => notification.with_arg("detail", detail),
            None => notification,
        };

        match result.error() {
            Some(err) => notification.with_arg("cause", err.cause()),
            None => notification,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::export::{ExportAction, ExportChannel};

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Info.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn error_severity_has_no_auto_dismiss() {
        assert!(Severity::Error.auto_dismiss_duration().is_none());
        assert!(!Notification::error("x").should_auto_dismiss());
    }

    #[test]
    fn warning_duration_is_longer_than_success() {
        let success = Severity::Success.auto_dismiss_duration().unwrap();
        let warning = Severity::Warning.auto_dismiss_duration().unwrap();
        assert!(warning > success);
    }

    #[test]
    fn successful_download_carries_saved_name() {
        let result = ExportResult::succeeded(
            ExportAction::Download,
            ExportChannel::Download,
            "notification-download-success",
        )
        .with_detail("photo.png");

        let notification = Notification::from(&result);
        assert_eq!(notification.severity(), Severity::Success);
        assert_eq!(notification.message_key(), "notification-download-success");
        assert_eq!(
            notification.message_args(),
            &[("detail".to_string(), "photo.png".to_string())]
        );
    }

    #[test]
    fn failed_copy_is_an_error_with_cause() {
        let result = ExportResult::failed(
            ExportAction::Copy,
            ExportChannel::ClipboardBinary,
            ExportError::CopyFailed("denied".into()),
        );

        let notification = Notification::from(&result);
        assert_eq!(notification.severity(), Severity::Error);
        assert_eq!(notification.message_key(), "notification-copy-failed");
        assert_eq!(
            notification.message_args(),
            &[("cause".to_string(), "denied".to_string())]
        );
    }

    #[test]
    fn blocked_print_is_a_warning() {
        let result = ExportResult::failed(
            ExportAction::Print,
            ExportChannel::None,
            ExportError::PrintUnavailable,
        );
        assert_eq!(Notification::from(&result).severity(), Severity::Warning);
    }
}
