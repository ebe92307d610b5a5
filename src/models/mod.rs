//! Data models returned by the helpers.
//!
//! Contains value types for:
//! - [`FileType`] - File name and extension parsed from a path
//! - [`DataUri`], [`DecodedFile`] - Parsed data URIs and decoded payloads

mod data_uri;
mod file_type;

pub use data_uri::{DataUri, DecodedFile};
pub use file_type::{FileType, path_to_file_type};
