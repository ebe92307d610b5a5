//! Browser-facing utilities.
//!
//! Provides:
//! - [`DataUrlSource`], [`file_to_base64`] - Reading files as data URIs
//! - [`DownloadSink`], [`save_base64_to_file`] - Saving decoded payloads
//! - [`dom`] accessors and console [`log`]ging

pub mod dom;
mod download;
mod file;
pub mod log;

pub use download::{BrowserDownload, DownloadSink, save_base64_to_file};
pub use file::{DataUrlSource, InMemoryFile, file_to_base64};
