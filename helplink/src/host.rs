//! The host-related interface.
//!
//! A host is the environment that owns the elements, e.g. the browser DOM.
//! The annotator only needs to read the class attribute of an inserted element,
//! find its help block, and read and write the help block markup.

use crate::error::Error;

pub mod mem;

/// An element reported as inserted.
pub trait HostElement {
    /// The help block type found under this element.
    type HelpBlock: HelpBlock;

    /// Get the raw class attribute, or `None` if the element has no class attribute.
    fn class_attr(&self) -> Option<String>;

    /// Find the first descendant (in document order) with `class` in its class list.
    ///
    /// The element itself is not a candidate.
    fn find_descendant_by_class(&self, class: &str) -> Result<Option<Self::HelpBlock>, Error>;
}

/// The element that holds the help text.
pub trait HelpBlock {
    /// Get the inner markup.
    fn inner_html(&self) -> String;

    /// Replace the inner markup.
    fn set_inner_html(&mut self, markup: &str);
}

pub(crate) fn class_list_contains(class_attr: &str, class: &str) -> bool {
    class_attr.split_ascii_whitespace().any(|x| x == class)
}
