//! Browser plumbing shared by the tracking components.
//!
//! Everything here holds a browser resource for a bounded time: listener
//! registrations and the suppressed body cursor. Each resource is a guard
//! whose `Drop` gives it back, so tearing down a component releases it on
//! every exit path.

mod cursor;
mod error;
mod listener;

pub use cursor::*;
pub use error::*;
pub use listener::*;

pub fn window() -> Result<web_sys::Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<web_sys::Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn body() -> Result<web_sys::HtmlElement, DomError> {
    document()?.body().ok_or(DomError::NoBody)
}
