//! Library configuration.
//!
//! Centralizes the constants shared by the text and encoding helpers.

// =============================================================================
// Data URI
// =============================================================================

/// Scheme prefix of every data URI.
pub const DATA_URI_SCHEME: &str = "data:";

/// Parameter marking a base64-encoded data URI payload.
pub const BASE64_MARKER: &str = "base64";

/// MIME type used when a byte source does not declare one.
///
/// Matches what a browser `FileReader` writes for untyped blobs.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

// =============================================================================
// Templates
// =============================================================================

/// Text substituted for template keys with no value.
pub const UNDEFINED_PLACEHOLDER: &str = "undefined";

/// Text substituted for JSON objects in templates.
pub const OBJECT_PLACEHOLDER: &str = "[object Object]";

// =============================================================================
// Internationalization
// =============================================================================

/// Translation call prefixes recognized by [`crate::get_i18n_key`].
pub const I18N_CALL_PREFIXES: &[&str] = &["$t(", "t("];

/// Quote characters stripped around an i18n key.
pub const I18N_QUOTES: &[char] = &['\'', '"'];
