// SPDX-License-Identifier: MPL-2.0
//! `lens_share` is a resource viewer with export channels, built with the
//! Iced GUI framework.
//!
//! A viewed resource (an inline `data:` URL or a remote locator) can be
//! downloaded, copied to the clipboard, shared or printed. Each export walks
//! a fallback chain driven by the capabilities the platform exposes, and
//! always ends in a user-facing notification.
//!
//! # Layers
//!
//! - [`domain`]: pure types (view transform, resource references, export results)
//! - [`application`]: blob conversion, distribution operations and port traits
//! - [`infrastructure`]: desktop adapters for the ports
//! - [`ui`] and [`app`]: the Iced viewer overlay and application shell

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
