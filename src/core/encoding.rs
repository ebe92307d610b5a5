//! Base64 text codec and data URI handling.
//!
//! Decoding follows the browser `atob` rules: ASCII whitespace is skipped,
//! padding is optional but must be complete when present, and non-zero
//! trailing bits are tolerated.

use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::STANDARD;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::config::{BASE64_MARKER, DATA_URI_SCHEME, DEFAULT_MIME_TYPE};
use crate::core::error::{Base64Error, DataUriError};
use crate::models::{DataUri, DecodedFile};
use crate::utils::log;

const UNPADDED: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

// =============================================================================
// Text Codec
// =============================================================================

/// Base64-encode the UTF-8 bytes of `s` (standard alphabet, padded).
pub fn base64_encode(s: &str) -> String {
    STANDARD.encode(s.as_bytes())
}

/// Decode base64 into raw bytes.
pub fn base64_decode_bytes(s: &str) -> Result<Vec<u8>, Base64Error> {
    let compact: String = s.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    // Padding is only dropped from complete quads; any other '=' fails the decode.
    let mut payload = compact.as_str();
    if payload.len() % 4 == 0 {
        payload = payload.strip_suffix('=').unwrap_or(payload);
        payload = payload.strip_suffix('=').unwrap_or(payload);
    }

    Ok(UNPADDED.decode(payload)?)
}

/// Decode base64 into UTF-8 text.
pub fn base64_decode(s: &str) -> Result<String, Base64Error> {
    Ok(String::from_utf8(base64_decode_bytes(s)?)?)
}

// =============================================================================
// Data URIs
// =============================================================================

/// Build a base64 data URI (`data:<mime>;base64,<payload>`).
///
/// An empty MIME type is written as `application/octet-stream`.
pub fn to_data_uri(mime_type: &str, bytes: &[u8]) -> String {
    let mime_type = if mime_type.is_empty() {
        DEFAULT_MIME_TYPE
    } else {
        mime_type
    };
    format!(
        "{}{};{},{}",
        DATA_URI_SCHEME,
        mime_type,
        BASE64_MARKER,
        STANDARD.encode(bytes)
    )
}

/// Split a `data:<mime>;<params>` header into the MIME type and base64 flag.
fn parse_header(header: &str) -> Result<(&str, bool), DataUriError> {
    let params = header
        .strip_prefix(DATA_URI_SCHEME)
        .ok_or(DataUriError::MissingPrefix)?;
    let (mime_type, rest) = params
        .split_once(';')
        .ok_or(DataUriError::MissingMimeType)?;
    let is_base64 = rest
        .split(';')
        .any(|param| param.trim().eq_ignore_ascii_case(BASE64_MARKER));
    Ok((mime_type, is_base64))
}

/// Parse a `data:<mime>;<params>,<payload>` URI.
pub fn parse_data_uri(s: &str) -> Result<DataUri<'_>, DataUriError> {
    let (header, payload) = s.split_once(',').ok_or(DataUriError::MissingComma)?;
    let (mime_type, is_base64) = parse_header(header)?;
    Ok(DataUri {
        mime_type,
        is_base64,
        payload,
    })
}

/// Extract the MIME type from a data URI header.
pub fn get_base64_mime_type(s: &str) -> Result<&str, DataUriError> {
    parse_data_uri(s).map(|uri| uri.mime_type)
}

/// Decode a base64 payload that may carry a data URI header.
///
/// Everything before the first `,` is treated as the header; input without a
/// comma is all payload. A header that does not parse never fails the decode:
/// the MIME type is left empty and the parse error is kept in
/// [`DecodedFile::header_error`].
pub fn decode_base64_file(s: &str) -> Result<DecodedFile, Base64Error> {
    let (header, payload) = match s.split_once(',') {
        Some((header, payload)) => (Some(header), payload),
        None => (None, s),
    };

    let bytes = base64_decode_bytes(payload)?;

    let mut file = DecodedFile {
        bytes,
        ..DecodedFile::default()
    };

    if let Some(header) = header {
        match parse_header(header) {
            Ok((mime_type, _)) if !mime_type.is_empty() => {
                file.mime_type = Some(mime_type.to_string());
            }
            Ok(_) => {}
            Err(e) => {
                log::warn(&format!("ignoring data URI header '{}': {}", header, e));
                file.header_error = Some(e);
            }
        }
    }

    Ok(file)
}
