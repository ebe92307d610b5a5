//! Reading byte sources as data URIs.
//!
//! Provides the [`DataUrlSource`] capability, a browser implementation over
//! `Blob`/`File` using `FileReader`, and an in-memory implementation.

use std::future::Future;

use js_sys::Promise;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, File, FileReader};

use crate::core::encoding::to_data_uri;
use crate::core::error::FileReadError;

/// A byte source that can be read whole as a `data:<mime>;base64,<data>` URI.
pub trait DataUrlSource {
    /// Read the full contents as a data URI.
    fn read_as_data_url(&self) -> impl Future<Output = Result<String, FileReadError>>;
}

/// Read a byte source and return its base64 data URI.
pub async fn file_to_base64<S: DataUrlSource + ?Sized>(source: &S) -> Result<String, FileReadError> {
    source.read_as_data_url().await
}

// =============================================================================
// In-memory Source
// =============================================================================

/// File contents held in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InMemoryFile {
    /// MIME type (empty for untyped data)
    pub mime_type: String,
    /// File contents
    pub bytes: Vec<u8>,
}

impl InMemoryFile {
    /// Create an in-memory file from its MIME type and contents.
    pub fn new(mime_type: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }
}

impl DataUrlSource for InMemoryFile {
    async fn read_as_data_url(&self) -> Result<String, FileReadError> {
        Ok(to_data_uri(&self.mime_type, &self.bytes))
    }
}

// =============================================================================
// Browser Source
// =============================================================================

impl DataUrlSource for Blob {
    /// Read the blob with `FileReader.readAsDataURL`, resolving on `load` and
    /// rejecting on `error` or `abort`.
    async fn read_as_data_url(&self) -> Result<String, FileReadError> {
        let reader = FileReader::new().map_err(|_| FileReadError::ReaderUnavailable)?;

        let done = Promise::new(&mut |resolve, reject| {
            reader.set_onload(Some(&resolve));
            reader.set_onerror(Some(&reject));
            reader.set_onabort(Some(&reject));
        });

        reader
            .read_as_data_url(self)
            .map_err(|e| FileReadError::ReadFailed(js_error_message(&e)))?;

        let outcome = JsFuture::from(done).await;

        reader.set_onload(None);
        reader.set_onerror(None);
        reader.set_onabort(None);

        if outcome.is_err() {
            let message = reader
                .error()
                .map(|e| e.message())
                .unwrap_or_else(|| "read aborted".to_string());
            return Err(FileReadError::ReadFailed(message));
        }

        reader
            .result()
            .ok()
            .and_then(|result| result.as_string())
            .ok_or(FileReadError::InvalidResult)
    }
}

impl DataUrlSource for File {
    async fn read_as_data_url(&self) -> Result<String, FileReadError> {
        let blob: &Blob = self;
        blob.read_as_data_url().await
    }
}

fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &"message".into())
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| "Unknown error".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_file_to_base64() {
        let file = InMemoryFile::new("text/plain", "12");
        assert_eq!(
            file_to_base64(&file).await,
            Ok("data:text/plain;base64,MTI=".to_string())
        );
    }

    #[tokio::test]
    async fn test_untyped_file_to_base64() {
        let file = InMemoryFile::new("", vec![0xFF, 0xFE]);
        assert_eq!(
            file_to_base64(&file).await.as_deref(),
            Ok("data:application/octet-stream;base64,//4=")
        );
    }
}
