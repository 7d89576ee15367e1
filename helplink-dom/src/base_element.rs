//! The DOM element seen by the annotator.

use helplink::{
    error::Error,
    host::{HelpBlock, HostElement},
};

/// A DOM element seen by the annotator.
#[derive(Clone)]
pub struct DomElement {
    pub(crate) elem: web_sys::Element,
}

impl std::fmt::Debug for DomElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", self.elem.tag_name())
    }
}

impl DomElement {
    /// Wrap a DOM element.
    pub fn new(elem: web_sys::Element) -> Self {
        Self { elem }
    }

    /// Get the DOM element.
    pub fn dom(&self) -> &web_sys::Element {
        &self.elem
    }
}

impl From<web_sys::Element> for DomElement {
    fn from(elem: web_sys::Element) -> Self {
        Self::new(elem)
    }
}

impl HostElement for DomElement {
    type HelpBlock = DomElement;

    // `className` is not a string for SVG elements, so read the attribute instead
    fn class_attr(&self) -> Option<String> {
        self.elem.get_attribute("class")
    }

    fn find_descendant_by_class(&self, class: &str) -> Result<Option<Self::HelpBlock>, Error> {
        let selector = format!(".{}", web_sys::css::escape(class));
        self.elem
            .query_selector(&selector)
            .map(|x| x.map(DomElement::new))
            .map_err(|err| crate::js_backend_error(&format!("Cannot query {:?}", selector), &err))
    }
}

impl HelpBlock for DomElement {
    fn inner_html(&self) -> String {
        self.elem.inner_html()
    }

    fn set_inner_html(&mut self, markup: &str) {
        self.elem.set_inner_html(markup);
    }
}
