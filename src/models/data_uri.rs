use crate::core::error::DataUriError;

/// Borrowed view of a parsed `data:` URI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DataUri<'a> {
    /// MIME type from the header (e.g., "image/png")
    pub mime_type: &'a str,
    /// Whether the header carries the `base64` parameter
    pub is_base64: bool,
    /// Everything after the first `,`
    pub payload: &'a str,
}

/// Bytes decoded from a base64 payload, ready to be saved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodedFile {
    /// Raw file contents
    pub bytes: Vec<u8>,
    /// MIME type from the data URI header, if one was present and parsed
    pub mime_type: Option<String>,
    /// Why the header in front of the payload did not parse, if it didn't
    pub header_error: Option<DataUriError>,
}
