//! helplink: turn raw URLs in form help text into links
//!
//! This is the *host independent* part.
//! It contains the URL rewrite and the annotator,
//! while the DOM binding lives in `helplink-dom` .
//!
//! ### Quick Start
//!
//! An annotator looks at an inserted element.
//! If its class attribute starts with `form-` ,
//! the URLs in its first `help-block` descendant are replaced with anchors.
//!
//! ```rust
//! use helplink::host::{mem::MemElement, HelpBlock};
//!
//! let group = MemElement::with_class("div", "form-group");
//! let help = MemElement::with_class("p", "help-block");
//! help.append_markup("Visit http://example.com/page for details");
//! group.append(&help);
//!
//! helplink::annotate(&group).unwrap();
//! assert_eq!(
//!     help.inner_html(),
//!     r#"Visit <a href="http://example.com/page" target="_blank">here</a> for details"#,
//! );
//! ```

#![warn(missing_docs)]

pub mod annotator;
pub mod config;
pub mod error;
pub mod host;
pub mod linkify;

pub use annotator::{annotate, Annotation, Annotator, SkipReason};
pub use config::Config;
pub use error::Error;
pub use linkify::{linkify, Linkifier};
