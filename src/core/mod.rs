//! Pure text and encoding transforms.
//!
//! This module provides:
//! - [`case`] conversions between camel, Pascal, kebab and snake case
//! - [`text`] whitespace removal, `${key}` templates and i18n key extraction
//! - [`encoding`] base64 text codec and data URI parsing

pub mod case;
pub mod encoding;
pub mod error;
pub mod template;
pub mod text;

pub use case::{
    camel_to_kebab, first_uppercase, kebab_to_camel, to_camel_case, to_pascal_case,
    to_snake_case, uppercase_words,
};
pub use encoding::{
    base64_decode, base64_decode_bytes, base64_encode, decode_base64_file, get_base64_mime_type,
    parse_data_uri, to_data_uri,
};
pub use template::TemplateValues;
pub use text::{get_i18n_key, remove_spaces, replace_keys, replace_keys_strict};
