//! Console logging.
//!
//! Writes to the browser console on wasm32. Native builds have no console
//! binding, so messages are dropped there.

/// Log a warning.
#[cfg(target_arch = "wasm32")]
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

/// Log a warning.
#[cfg(not(target_arch = "wasm32"))]
pub fn warn(message: &str) {
    let _ = message;
}
