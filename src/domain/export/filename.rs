// SPDX-License-Identifier: MPL-2.0
//! Download file naming.
//!
//! The suggested name is reduced to an identifier-safe string by replacing
//! every character outside `[A-Za-z0-9]` with `_`, one for one:
//!
//! - `Annual Report #2024!` → `Annual_Report__2024_`
//! - `Café` → `Caf_`

use crate::domain::resource::{media_type, ResourceReference};

/// Extension used for inline payloads without a usable media subtype.
pub const DEFAULT_INLINE_EXTENSION: &str = "png";

/// Extension used for remote references.
///
/// The true type of a remote resource is only known after a transport
/// round-trip, which downloads by locator do not make.
pub const DEFAULT_REMOTE_EXTENSION: &str = "jpg";

/// Replaces every character outside `[A-Za-z0-9]` with `_`.
#[must_use]
pub fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Returns the download extension for a reference.
#[must_use]
pub fn extension_for(reference: &ResourceReference) -> String {
    if !reference.is_inline() {
        return DEFAULT_REMOTE_EXTENSION.to_string();
    }
    reference
        .declared_media_type()
        .as_deref()
        .and_then(media_type::subtype)
        .map_or_else(|| DEFAULT_INLINE_EXTENSION.to_string(), str::to_string)
}

/// Builds the target file name of a download: sanitized name plus extension.
#[must_use]
pub fn download_file_name(suggested_name: &str, reference: &ResourceReference) -> String {
    format!("{}.{}", sanitize(suggested_name), extension_for(reference))
}
