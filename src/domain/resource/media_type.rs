// SPDX-License-Identifier: MPL-2.0
//! Media type helpers.

/// Media type assumed for inline payloads that do not declare one.
pub const DEFAULT_INLINE_MEDIA_TYPE: &str = "image/png";

/// Media type assumed when a transport does not report one.
pub const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Returns the subtype of a media type (`image/svg+xml` → `svg+xml`).
///
/// Parameters (`;charset=...`) are ignored. Returns `None` when there is no
/// non-empty subtype.
#[must_use]
pub fn subtype(media_type: &str) -> Option<&str> {
    let essence = media_type.split(';').next().unwrap_or_default();
    essence
        .split('/')
        .nth(1)
        .map(str::trim)
        .filter(|sub| !sub.is_empty())
}

/// Returns the essence of a media type: lowercase, without parameters.
#[must_use]
pub fn essence(media_type: &str) -> String {
    media_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Guesses a media type from a file extension.
#[must_use]
pub fn from_extension(extension: &str) -> Option<&'static str> {
    let media_type = match extension.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "ico" => "image/x-icon",
        "svg" => "image/svg+xml",
        "pdf" => "application/pdf",
        _ => return None,
    };
    Some(media_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtype_takes_part_after_slash() {
        assert_eq!(subtype("image/png"), Some("png"));
        assert_eq!(subtype("image/svg+xml"), Some("svg+xml"));
    }

    #[test]
    fn subtype_ignores_parameters() {
        assert_eq!(subtype("image/jpeg;charset=binary"), Some("jpeg"));
    }

    #[test]
    fn subtype_missing_returns_none() {
        assert_eq!(subtype("image"), None);
        assert_eq!(subtype("image/"), None);
        assert_eq!(subtype(""), None);
    }

    #[test]
    fn essence_strips_parameters_and_case() {
        assert_eq!(essence("Image/PNG; q=1"), "image/png");
    }

    #[test]
    fn extension_lookup_is_case_insensitive() {
        assert_eq!(from_extension("JPG"), Some("image/jpeg"));
        assert_eq!(from_extension("unknown"), None);
    }
}
