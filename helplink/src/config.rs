//! Annotator configuration.
//!
//! The defaults reproduce the classic behavior:
//! elements with a class starting with `form-` get the URLs in their `help-block` linked,
//! and each link reads `here` and opens in a new browsing context.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The default class prefix of the inserted elements.
pub const DEFAULT_CLASS_PREFIX: &str = "form-";
/// The default marker class of the help block.
pub const DEFAULT_HELP_CLASS: &str = "help-block";
/// The default text of the generated anchors.
pub const DEFAULT_ANCHOR_TEXT: &str = "here";
/// The default `target` of the generated anchors.
pub const DEFAULT_TARGET: &str = "_blank";

/// The annotator configuration.
///
/// Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The prefix the whole class attribute must start with.
    pub class_prefix: String,
    /// The class token that marks the help block.
    pub help_class: String,
    /// The text placed inside each generated anchor.
    pub anchor_text: String,
    /// The `target` attribute of each generated anchor.
    pub target: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            class_prefix: DEFAULT_CLASS_PREFIX.into(),
            help_class: DEFAULT_HELP_CLASS.into(),
            anchor_text: DEFAULT_ANCHOR_TEXT.into(),
            target: DEFAULT_TARGET.into(),
        }
    }
}

impl Config {
    /// Set the class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Set the help block marker class.
    pub fn with_help_class(mut self, class: impl Into<String>) -> Self {
        self.help_class = class.into();
        self
    }

    /// Set the anchor text.
    pub fn with_anchor_text(mut self, text: impl Into<String>) -> Self {
        self.anchor_text = text.into();
        self
    }

    /// Set the anchor target.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Check that the configuration can be used by an annotator.
    pub fn validate(&self) -> Result<(), Error> {
        if self.class_prefix.is_empty() {
            return Err(Error::InvalidConfig("the class prefix is empty".into()));
        }
        if self.help_class.is_empty() {
            return Err(Error::InvalidConfig("the help class is empty".into()));
        }
        if self.help_class.contains(|c: char| c.is_ascii_whitespace() || c == '.') {
            return Err(Error::InvalidConfig(format!(
                "the help class {:?} is not a single class name",
                self.help_class
            )));
        }
        if self.target.contains('"') {
            return Err(Error::InvalidConfig(format!(
                "the target {:?} cannot be placed in an attribute",
                self.target
            )));
        }
        Ok(())
    }
}
