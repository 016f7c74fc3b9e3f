// SPDX-License-Identifier: MPL-2.0
//! Resource viewer overlay.
//!
//! - [`controller`]: the `Open` / `MenuOpen` / `Closed` state machine and export dispatch
//! - [`preview`]: decoded pixels of the viewed resource with rotation support
//! - [`view`]: iced rendering of the overlay

pub mod controller;
pub mod preview;
pub mod view;

pub use controller::{
    Controller, Effect, Message, OpenRequest, Phase, PreviewState, Region, Session, SessionId,
    ViewerState,
};
pub use preview::{Preview, PreviewError};
