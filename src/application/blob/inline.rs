// SPDX-License-Identifier: MPL-2.0
//! Inline payload decoding.
//!
//! Syntax: `data:[<mediaType>][;<param>]*[;base64],<data>`. The data part is
//! percent-decoded first (invalid escapes are kept verbatim, as browsers do);
//! when the `base64` parameter is present the result is then base64-decoded
//! (whitespace ignored, padding optional).

use crate::application::port::FetchedBody;
use crate::domain::export::ConversionError;
use crate::domain::resource::{classify, INLINE_SCHEME_PREFIX};
use base64::engine::{general_purpose, DecodePaddingMode, GeneralPurpose};
use base64::{alphabet, Engine as _};

const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    general_purpose::PAD.with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decodes an inline payload into its bytes and declared media type.
///
/// # Errors
///
/// Returns `ConversionError::MalformedPayload` when the scheme or the data
/// delimiter is missing, or when a base64 payload is not valid base64.
pub fn decode(raw: &str) -> Result<FetchedBody, ConversionError> {
    let rest = raw
        .get(..INLINE_SCHEME_PREFIX.len())
        .filter(|prefix| prefix.eq_ignore_ascii_case(INLINE_SCHEME_PREFIX))
        .map(|_| &raw[INLINE_SCHEME_PREFIX.len()..])
        .ok_or_else(|| ConversionError::MalformedPayload("missing data: scheme".to_string()))?;

    let (header, data) = rest.split_once(',').ok_or_else(|| {
        ConversionError::MalformedPayload("missing data delimiter ','".to_string())
    })?;

    let is_base64 = header
        .split(';')
        .skip(1)
        .any(|param| param.trim().eq_ignore_ascii_case("base64"));

    let unescaped = urlencoding::decode_binary(data.as_bytes());
    let bytes = if is_base64 {
        let compact: Vec<u8> = unescaped
            .iter()
            .copied()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        PAYLOAD_ENGINE
            .decode(compact)
            .map_err(|e| ConversionError::MalformedPayload(e.to_string()))?
    } else {
        unescaped.into_owned()
    };

    Ok(FetchedBody {
        bytes,
        media_type: classify(raw).declared_media_type,
    })
}
