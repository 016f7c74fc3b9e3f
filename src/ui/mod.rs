// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one owns its state, handles its own messages and reports side effects to
//! the application through an `Effect` value.
//!
//! - [`viewer`] - Resource viewer overlay with zoom, rotation and export menu
//! - [`notifications`] - Toast notification system for export feedback

pub mod notifications;
pub mod viewer;
