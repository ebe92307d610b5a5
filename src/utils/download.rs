//! Saving decoded base64 payloads as downloaded files.

use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, Url};

use crate::core::encoding::decode_base64_file;
use crate::core::error::DownloadError;
use crate::utils::{dom, log};

/// Destination for decoded file bytes.
pub trait DownloadSink {
    /// Save `bytes` under `file_name`.
    fn save(
        &self,
        bytes: &[u8],
        file_name: &str,
        mime_type: Option<&str>,
    ) -> Result<(), DownloadError>;
}

/// Decode a base64 payload (optionally a full data URI) and hand it to `sink`.
///
/// The MIME type comes from the data URI header when it parses; otherwise the
/// sink receives `None`.
pub fn save_base64_to_file<S: DownloadSink + ?Sized>(
    base64_data: &str,
    file_name: &str,
    sink: &S,
) -> Result<(), DownloadError> {
    let file = decode_base64_file(base64_data)?;
    sink.save(&file.bytes, file_name, file.mime_type.as_deref())
}

/// Triggers a browser download through a temporary `<a download>` link.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDownload;

impl DownloadSink for BrowserDownload {
    fn save(
        &self,
        bytes: &[u8],
        file_name: &str,
        mime_type: Option<&str>,
    ) -> Result<(), DownloadError> {
        let document = dom::document().ok_or(DownloadError::NoDocument)?;

        let parts = Array::new();
        parts.push(&Uint8Array::from(bytes));

        let options = BlobPropertyBag::new();
        if let Some(mime_type) = mime_type {
            options.set_type(mime_type);
        }

        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|_| DownloadError::BlobCreationFailed)?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| DownloadError::ObjectUrlFailed)?;

        let clicked = click_link(&document, &url, file_name);

        if Url::revoke_object_url(&url).is_err() {
            log::warn(&format!("failed to revoke object URL for '{}'", file_name));
        }

        clicked
    }
}

fn click_link(document: &Document, url: &str, file_name: &str) -> Result<(), DownloadError> {
    let anchor = document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok())
        .ok_or(DownloadError::ElementCreationFailed)?;

    anchor.set_href(url);
    anchor.set_download(file_name);
    let _ = anchor.style().set_property("display", "none");

    let body = document.body().ok_or(DownloadError::NoDocument)?;
    body.append_child(&anchor)
        .map_err(|_| DownloadError::ElementCreationFailed)?;
    anchor.click();
    let _ = body.remove_child(&anchor);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::core::error::Base64Error;

    #[derive(Default)]
    struct RecordingSink {
        saved: RefCell<Vec<(Vec<u8>, String, Option<String>)>>,
    }

    impl DownloadSink for RecordingSink {
        fn save(
            &self,
            bytes: &[u8],
            file_name: &str,
            mime_type: Option<&str>,
        ) -> Result<(), DownloadError> {
            self.saved.borrow_mut().push((
                bytes.to_vec(),
                file_name.to_string(),
                mime_type.map(str::to_string),
            ));
            Ok(())
        }
    }

    #[test]
    fn test_save_data_uri() {
        let sink = RecordingSink::default();
        save_base64_to_file("data:image/png;base64,AAAA", "pixel.png", &sink).unwrap();

        let saved = sink.saved.borrow();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].0, vec![0, 0, 0]);
        assert_eq!(saved[0].1, "pixel.png");
        assert_eq!(saved[0].2.as_deref(), Some("image/png"));
    }

    #[test]
    fn test_save_bare_payload() {
        let sink = RecordingSink::default();
        save_base64_to_file("MTI=", "numbers.txt", &sink).unwrap();

        let saved = sink.saved.borrow();
        assert_eq!(saved[0].0, b"12");
        assert_eq!(saved[0].2, None);
    }

    #[test]
    fn test_save_malformed_payload() {
        let sink = RecordingSink::default();
        let result = save_base64_to_file("data:text/plain;base64,@@@", "bad.txt", &sink);

        assert!(matches!(
            result,
            Err(DownloadError::Decode(Base64Error::Decode(_)))
        ));
        assert!(sink.saved.borrow().is_empty());
    }

    #[test]
    fn test_sink_error_propagates() {
        struct FailingSink;

        impl DownloadSink for FailingSink {
            fn save(&self, _: &[u8], _: &str, _: Option<&str>) -> Result<(), DownloadError> {
                Err(DownloadError::NoDocument)
            }
        }

        assert_eq!(
            save_base64_to_file("MTI=", "x.txt", &FailingSink),
            Err(DownloadError::NoDocument)
        );
    }
}
