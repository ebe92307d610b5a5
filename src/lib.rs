//! String case conversion, template substitution and base64 file helpers.
//!
//! Every helper is an independent transform of one input into one output.
//! The browser pieces (reading a `File`, triggering a download) sit behind
//! the [`DataUrlSource`] and [`DownloadSink`] traits so the decoding logic
//! runs anywhere.
//!
//! ```
//! use textkit::{get_i18n_key, kebab_to_camel, path_to_file_type};
//!
//! assert_eq!(kebab_to_camel("background-color"), "backgroundColor");
//! assert_eq!(get_i18n_key("$t('menu.home')"), Some("menu.home"));
//! assert_eq!(path_to_file_type("docs/guide.pdf").full_name, "guide.pdf");
//! ```

pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::core::error::{
    Base64Error, DataUriError, DownloadError, FileReadError, TemplateError,
};
pub use crate::core::{
    TemplateValues, base64_decode, base64_decode_bytes, base64_encode, camel_to_kebab,
    decode_base64_file, first_uppercase, get_base64_mime_type, get_i18n_key, kebab_to_camel,
    parse_data_uri, remove_spaces, replace_keys, replace_keys_strict, to_camel_case,
    to_data_uri, to_pascal_case, to_snake_case, uppercase_words,
};
pub use models::{DataUri, DecodedFile, FileType, path_to_file_type};
pub use utils::{
    BrowserDownload, DataUrlSource, DownloadSink, InMemoryFile, file_to_base64,
    save_base64_to_file,
};
