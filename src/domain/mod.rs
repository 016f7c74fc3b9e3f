// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`export`]: Export types ([`ExportResult`](export::ExportResult),
//!   [`ExportError`](export::ExportError), [`CapabilitySnapshot`](export::CapabilitySnapshot))
//! - [`resource`]: Resource types ([`ResourceReference`](resource::ResourceReference),
//!   [`BinaryObject`](resource::BinaryObject))
//! - [`ui`]: View value objects ([`ZoomPercent`](ui::ZoomPercent),
//!   [`RotationAngle`](ui::RotationAngle), [`ViewTransform`](ui::ViewTransform))

pub mod export;
pub mod resource;
pub mod ui;
