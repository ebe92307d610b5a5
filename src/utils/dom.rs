//! DOM and Web API accessors.

use web_sys::{Document, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document of the browser window.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}
