// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for export feedback.
//!
//! Every distribution operation ends in exactly one notification. Toasts
//! appear temporarily without blocking interaction with the viewer.
//!
//! # Components
//!
//! - [`notification`] - `Notification` with severity levels, built from export results
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget for rendering notifications
//!
//! Success and info toasts last about 3s, warnings 5s, errors stay until
//! dismissed. At most three toasts are visible; the rest are queued.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
