// SPDX-License-Identifier: MPL-2.0
//! Resource references and their classification.
//!
//! A reference is either an inline payload that embeds the whole content
//! (`data:<mediaType>;<params>,<data>`) or a locator that must be fetched.
//! The encoding is never stored: it is recomputed from the raw string each
//! time it is needed, so it can never disagree with the reference.

use std::fmt;
use std::sync::Arc;

/// Scheme prefix of inline payloads, including the scheme delimiter.
pub const INLINE_SCHEME_PREFIX: &str = "data:";

/// How a resource reference carries its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// The content is embedded in the reference string.
    InlinePayload,
    /// The reference is a locator; the content needs a transport fetch.
    RemoteReference,
}

/// Result of classifying a raw reference string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub encoding: Encoding,
    /// Media type declared by an inline payload, `None` for remote references.
    pub declared_media_type: Option<String>,
}

/// Classifies a raw reference string.
///
/// Inline payloads are recognised by their `data:` prefix (ASCII
/// case-insensitive). The declared media type is the text between the scheme
/// delimiter and the first parameter delimiter (`;`), or the data delimiter
/// (`,`) when no parameters are present. An empty media type is reported as
/// absent.
#[must_use]
pub fn classify(raw: &str) -> Classification {
    if !has_inline_prefix(raw) {
        return Classification {
            encoding: Encoding::RemoteReference,
            declared_media_type: None,
        };
    }

    let rest = &raw[INLINE_SCHEME_PREFIX.len()..];
    let end = rest.find([';', ',']).unwrap_or(rest.len());
    let media_type = rest[..end].trim();

    Classification {
        encoding: Encoding::InlinePayload,
        declared_media_type: (!media_type.is_empty()).then(|| media_type.to_ascii_lowercase()),
    }
}

fn has_inline_prefix(raw: &str) -> bool {
    raw.get(..INLINE_SCHEME_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(INLINE_SCHEME_PREFIX))
}

/// The resource being viewed.
///
/// The raw string is immutable for the lifetime of a viewing session; opening
/// a new resource creates a new reference. Cloning is cheap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceReference {
    raw: Arc<str>,
}

impl ResourceReference {
    pub fn new(raw: impl Into<Arc<str>>) -> Self {
        Self { raw: raw.into() }
    }

    /// Returns the raw reference string (payload or locator).
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn classify(&self) -> Classification {
        classify(&self.raw)
    }

    #[must_use]
    pub fn encoding(&self) -> Encoding {
        if has_inline_prefix(&self.raw) {
            Encoding::InlinePayload
        } else {
            Encoding::RemoteReference
        }
    }

    #[must_use]
    pub fn is_inline(&self) -> bool {
        self.encoding() == Encoding::InlinePayload
    }

    #[must_use]
    pub fn declared_media_type(&self) -> Option<String> {
        self.classify().declared_media_type
    }
}

impl fmt::Display for ResourceReference {
    /// Inline payloads can be megabytes long; only their header is shown.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.encoding() {
            Encoding::RemoteReference => f.write_str(&self.raw),
            Encoding::InlinePayload => {
                let header_end = self.raw.find(',').unwrap_or(self.raw.len());
                write!(f, "{},<{} bytes>", &self.raw[..header_end], self.raw.len())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_png_payload_is_classified_with_media_type() {
        let result = classify("data:image/png;base64,iVBORw0KGgo=");
        assert_eq!(result.encoding, Encoding::InlinePayload);
        assert_eq!(result.declared_media_type.as_deref(), Some("image/png"));
    }

    #[test]
    fn https_url_is_remote_without_media_type() {
        let result = classify("https://example.com/a.jpg");
        assert_eq!(result.encoding, Encoding::RemoteReference);
        assert_eq!(result.declared_media_type, None);
    }

    #[test]
    fn scheme_match_is_case_insensitive() {
        let result = classify("DATA:image/JPEG;base64,AAAA");
        assert_eq!(result.encoding, Encoding::InlinePayload);
        assert_eq!(result.declared_media_type.as_deref(), Some("image/jpeg"));
    }

    #[test]
    fn media_type_without_parameters_stops_at_data_delimiter() {
        let result = classify("data:text/plain,hello");
        assert_eq!(result.declared_media_type.as_deref(), Some("text/plain"));
    }

    #[test]
    fn missing_media_type_is_absent() {
        assert_eq!(classify("data:;base64,AAAA").declared_media_type, None);
        assert_eq!(classify("data:,hello").declared_media_type, None);
    }

    #[test]
    fn short_and_non_ascii_strings_are_remote() {
        assert_eq!(classify("dat").encoding, Encoding::RemoteReference);
        assert_eq!(classify("").encoding, Encoding::RemoteReference);
        assert_eq!(classify("dä:xyz").encoding, Encoding::RemoteReference);
    }

    #[test]
    fn relative_path_is_remote() {
        let reference = ResourceReference::new("photos/data:weird.png");
        assert!(!reference.is_inline());
    }

    #[test]
    fn display_truncates_inline_payload() {
        let reference = ResourceReference::new("data:image/png;base64,AAAAAAAA");
        let shown = reference.to_string();
        assert!(shown.starts_with("data:image/png;base64,<"));
        assert!(!shown.contains("AAAAAAAA"));
    }
}
