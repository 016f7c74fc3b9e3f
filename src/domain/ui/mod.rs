// SPDX-License-Identifier: MPL-2.0
//! UI domain types.
//!
//! This module contains view-related value objects that are independent
//! of any presentation framework.

pub mod newtypes;
pub mod transform;

// Re-export commonly used types
pub use newtypes::{zoom_bounds, RotationAngle, ZoomPercent};
pub use transform::ViewTransform;
