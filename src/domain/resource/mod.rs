// SPDX-License-Identifier: MPL-2.0
//! Resource domain types.
//!
//! - [`reference`]: the viewed resource and its classification
//! - [`binary`]: transferable binary objects produced from a resource
//! - [`media_type`]: media type parsing helpers

pub mod binary;
pub mod media_type;
pub mod reference;

pub use binary::BinaryObject;
pub use reference::{classify, Classification, Encoding, ResourceReference, INLINE_SCHEME_PREFIX};
