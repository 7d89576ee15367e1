//! An in-memory host.
//!
//! Elements are shared handles, so a help block found by the annotator
//! writes back into the same tree the caller holds.
//! Markup is kept as raw text and never parsed;
//! setting the inner markup replaces all children of an element.

use std::{cell::RefCell, fmt, rc::Rc};

use super::{class_list_contains, HelpBlock, HostElement};
use crate::error::Error;

enum MemContent {
    Markup(String),
    Element(MemElement),
}

struct MemNode {
    tag_name: String,
    class_attr: Option<String>,
    content: Vec<MemContent>,
}

/// An element in an in-memory tree.
#[derive(Clone)]
pub struct MemElement {
    inner: Rc<RefCell<MemNode>>,
}

impl fmt::Debug for MemElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.outer_html())
    }
}

impl MemElement {
    /// Create an element without class attribute.
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemNode {
                tag_name: tag_name.into(),
                class_attr: None,
                content: Vec::new(),
            })),
        }
    }

    /// Create an element with a class attribute.
    pub fn with_class(tag_name: impl Into<String>, class_attr: impl Into<String>) -> Self {
        let ret = Self::new(tag_name);
        ret.set_class_attr(Some(class_attr.into()));
        ret
    }

    /// Set or remove the class attribute.
    pub fn set_class_attr(&self, class_attr: Option<String>) {
        self.inner.borrow_mut().class_attr = class_attr;
    }

    /// Append a child element.
    pub fn append(&self, child: &MemElement) -> &Self {
        self.inner
            .borrow_mut()
            .content
            .push(MemContent::Element(child.clone()));
        self
    }

    /// Append raw markup.
    pub fn append_markup(&self, markup: impl Into<String>) -> &Self {
        self.inner
            .borrow_mut()
            .content
            .push(MemContent::Markup(markup.into()));
        self
    }

    /// Check if two handles refer to the same element.
    pub fn ptr_eq(&self, rhs: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &rhs.inner)
    }

    /// Get the tag name.
    pub fn tag_name(&self) -> String {
        self.inner.borrow().tag_name.clone()
    }

    fn write_inner_html(&self, w: &mut String) {
        for c in self.inner.borrow().content.iter() {
            match c {
                MemContent::Markup(x) => w.push_str(x),
                MemContent::Element(x) => x.write_outer_html(w),
            }
        }
    }

    fn write_outer_html(&self, w: &mut String) {
        {
            let node = self.inner.borrow();
            w.push('<');
            w.push_str(&node.tag_name);
            if let Some(class_attr) = &node.class_attr {
                w.push_str(" class=\"");
                w.push_str(class_attr);
                w.push('"');
            }
            w.push('>');
        }
        self.write_inner_html(w);
        w.push_str("</");
        w.push_str(&self.inner.borrow().tag_name);
        w.push('>');
    }

    /// Get the outer markup.
    pub fn outer_html(&self) -> String {
        let mut ret = String::new();
        self.write_outer_html(&mut ret);
        ret
    }

    fn find_in_children(&self, class: &str) -> Option<MemElement> {
        for c in self.inner.borrow().content.iter() {
            if let MemContent::Element(x) = c {
                let hit = x
                    .inner
                    .borrow()
                    .class_attr
                    .as_deref()
                    .map(|attr| class_list_contains(attr, class))
                    .unwrap_or(false);
                if hit {
                    return Some(x.clone());
                }
                if let Some(found) = x.find_in_children(class) {
                    return Some(found);
                }
            }
        }
        None
    }
}

impl HostElement for MemElement {
    type HelpBlock = MemElement;

    fn class_attr(&self) -> Option<String> {
        self.inner.borrow().class_attr.clone()
    }

    fn find_descendant_by_class(&self, class: &str) -> Result<Option<Self::HelpBlock>, Error> {
        Ok(self.find_in_children(class))
    }
}

impl HelpBlock for MemElement {
    fn inner_html(&self) -> String {
        let mut ret = String::new();
        self.write_inner_html(&mut ret);
        ret
    }

    fn set_inner_html(&mut self, markup: &str) {
        let mut node = self.inner.borrow_mut();
        node.content.clear();
        node.content.push(MemContent::Markup(markup.to_string()));
    }
}
