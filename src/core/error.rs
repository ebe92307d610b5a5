//! Error types for the text and encoding helpers.
//!
//! Each failure domain gets its own enum:
//!
//! - [`Base64Error`] - base64 payloads that do not decode
//! - [`DataUriError`] - malformed `data:` URI headers
//! - [`TemplateError`] - unresolved `${key}` placeholders in strict mode
//! - [`FileReadError`] - byte sources that could not be read as a data URI
//! - [`DownloadError`] - failures while handing a decoded file to a sink

use std::string::FromUtf8Error;

use thiserror::Error;

/// Base64 decoding errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base64Error {
    /// Input is not valid base64
    #[error("invalid base64: {0}")]
    Decode(#[from] base64::DecodeError),
    /// Decoded bytes are not valid UTF-8 text
    #[error("decoded base64 is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
}

/// Data URI header parsing errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DataUriError {
    /// No `,` separating the header from the payload
    #[error("data URI has no ',' before the payload")]
    MissingComma,
    /// Header does not start with `data:`
    #[error("data URI header does not start with 'data:'")]
    MissingPrefix,
    /// No `;` terminating the MIME type
    #[error("data URI header has no ';' after the MIME type")]
    MissingMimeType,
}

/// Template substitution errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// Placeholder key has no value
    #[error("no value for template key '{0}'")]
    MissingKey(String),
}

/// Errors reading a byte source as a data URI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileReadError {
    /// `FileReader` could not be constructed
    #[error("FileReader not available")]
    ReaderUnavailable,
    /// The read was started but failed
    #[error("failed to read file: {0}")]
    ReadFailed(String),
    /// The reader finished without producing a string
    #[error("file reader returned no data URI")]
    InvalidResult,
}

/// Errors saving a base64 payload through a [`crate::DownloadSink`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DownloadError {
    /// Payload did not decode
    #[error(transparent)]
    Decode(#[from] Base64Error),
    /// Browser document not available
    #[error("browser document not available")]
    NoDocument,
    /// Failed to build the Blob holding the bytes
    #[error("failed to create blob")]
    BlobCreationFailed,
    /// Failed to create an object URL for the Blob
    #[error("failed to create object URL")]
    ObjectUrlFailed,
    /// Failed to create or trigger the download link
    #[error("failed to create download link")]
    ElementCreationFailed,
}
