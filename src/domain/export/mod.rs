// SPDX-License-Identifier: MPL-2.0
//! Export domain types.
//!
//! - [`capability`]: snapshot of the distribution channels a platform exposes
//! - [`error`]: export error taxonomy
//! - [`filename`]: download file naming rules
//! - [`result`]: channel and outcome of a distribution operation

pub mod capability;
pub mod error;
pub mod filename;
pub mod result;

pub use capability::CapabilitySnapshot;
pub use error::{ConversionError, ExportError};
pub use result::{ExportAction, ExportChannel, ExportOutcome, ExportResult};
