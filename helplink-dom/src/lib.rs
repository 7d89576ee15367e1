//! helplink: turn raw URLs in form help text into links
//!
//! This is the *DOM binding* module.
//!
//! ### Quick Start
//!
//! Observe the container that form elements are rendered into.
//! Whenever an element with a class starting with `form-` is inserted under it,
//! the URLs in its `help-block` become `<a target="_blank">` anchors.
//!
//! ```rust,no_run
//! use wasm_bindgen::prelude::*;
//! use helplink_dom::prelude::*;
//!
//! #[wasm_bindgen(start)]
//! pub fn wasm_main() {
//!     let observer = HelpLinkObserver::new_with_element_id("settings", Annotator::default())
//!         .unwrap();
//!
//!     // keep observing for the lifetime of the page
//!     std::mem::forget(observer);
//! }
//! ```
//!
//! When the code that builds an element is under control,
//! calling `annotate_element` right after building it avoids the observer entirely.

#![warn(missing_docs)]

use helplink::{error::Error, Annotation, Annotator};
use wasm_bindgen::{JsCast, JsValue};

pub mod base_element;
use base_element::DomElement;
pub mod observer;
pub mod js;

/// The types that should usually be imported.
pub mod prelude {
    pub use crate::base_element::DomElement;
    pub use crate::observer::HelpLinkObserver;
    pub use crate::{annotate_element, annotate_element_with};
    pub use helplink::{Annotation, Annotator, Config};
}

thread_local! {
    pub(crate) static DOCUMENT: Option<web_sys::Document> = {
        web_sys::window().and_then(|window| window.document())
    };
}

pub(crate) fn document() -> Result<web_sys::Document, Error> {
    DOCUMENT.with(|document| {
        document
            .clone()
            .ok_or_else(|| Error::backend("Cannot use the DOM outside web page environment"))
    })
}

pub(crate) fn js_error_message(err: &JsValue) -> String {
    if let Some(err) = err.dyn_ref::<js_sys::Error>() {
        err.message().into()
    } else if let Some(s) = err.as_string() {
        s
    } else {
        "(JavaScript Error)".into()
    }
}

pub(crate) fn js_backend_error(msg: &str, err: &JsValue) -> Error {
    Error::backend(format!("{}: {}", msg, js_error_message(err)))
}

/// Annotate an element with the default configuration.
///
/// Call this right after an element is built to link its help text without observing.
pub fn annotate_element(elem: &web_sys::Element) -> Result<Annotation, Error> {
    helplink::annotate(&DomElement::new(elem.clone()))
}

/// Annotate an element with the specified annotator.
pub fn annotate_element_with(
    annotator: &Annotator,
    elem: &web_sys::Element,
) -> Result<Annotation, Error> {
    annotator.annotate(&DomElement::new(elem.clone()))
}
