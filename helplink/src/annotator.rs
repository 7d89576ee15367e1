//! The link annotator.

use once_cell::sync::Lazy;

use crate::config::Config;
use crate::error::Error;
use crate::host::{HelpBlock, HostElement};
use crate::linkify::Linkifier;

static DEFAULT_ANNOTATOR: Lazy<Annotator> = Lazy::new(Annotator::default);

/// Why an inserted element was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The element has no class attribute, or it is empty.
    NoClass,
    /// The class attribute does not start with the class prefix.
    PrefixMismatch,
    /// No descendant carries the help class.
    NoHelpBlock,
}

/// The result of annotating an inserted element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Annotation {
    /// Nothing was looked at beyond the filter or lookup step.
    Skipped(SkipReason),
    /// The help block was found but contains no URL.
    Unchanged,
    /// The help block markup was rewritten.
    Linkified {
        /// The number of anchors written.
        links: usize,
    },
}

impl Annotation {
    /// Whether the help block markup has been rewritten.
    pub fn is_linkified(&self) -> bool {
        matches!(self, Self::Linkified { .. })
    }
}

/// Annotate an inserted element with the default configuration.
pub fn annotate<E: HostElement>(elem: &E) -> Result<Annotation, Error> {
    DEFAULT_ANNOTATOR.annotate(elem)
}

/// Links the URLs in the help block of inserted elements.
#[derive(Debug, Clone)]
pub struct Annotator {
    config: Config,
    linkifier: Linkifier,
}

impl Default for Annotator {
    fn default() -> Self {
        Self {
            config: Config::default(),
            linkifier: Linkifier::default(),
        }
    }
}

impl Annotator {
    /// Create with a config.
    pub fn new(config: Config) -> Result<Self, Error> {
        let linkifier = Linkifier::new(&config)?;
        Ok(Self { config, linkifier })
    }

    /// Get the config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the linkifier.
    pub fn linkifier(&self) -> &Linkifier {
        &self.linkifier
    }

    /// Check whether a class attribute passes the filter step.
    pub fn filter(&self, class_attr: Option<&str>) -> Result<(), SkipReason> {
        match class_attr {
            None | Some("") => Err(SkipReason::NoClass),
            Some(x) if x.starts_with(self.config.class_prefix.as_str()) => Ok(()),
            Some(_) => Err(SkipReason::PrefixMismatch),
        }
    }

    /// Annotate an inserted element.
    ///
    /// If the element passes the filter and has a help block,
    /// every URL in the help block markup is rewritten into an anchor.
    /// The markup is not written back when there is no URL.
    pub fn annotate<E: HostElement>(&self, elem: &E) -> Result<Annotation, Error> {
        let class_attr = elem.class_attr();
        if let Err(reason) = self.filter(class_attr.as_deref()) {
            log::trace!("Skipped inserted element ({:?})", reason);
            return Ok(Annotation::Skipped(reason));
        }
        let mut help = match elem.find_descendant_by_class(&self.config.help_class)? {
            None => {
                log::trace!(
                    "No {:?} under inserted element {:?}",
                    self.config.help_class,
                    class_attr.unwrap_or_default()
                );
                return Ok(Annotation::Skipped(SkipReason::NoHelpBlock));
            }
            Some(x) => x,
        };
        let markup = help.inner_html();
        let (rewritten, links) = self.linkifier.rewrite_counted(&markup);
        if links == 0 {
            return Ok(Annotation::Unchanged);
        }
        help.set_inner_html(&rewritten);
        log::debug!("Linked {} URL(s) in a help block", links);
        Ok(Annotation::Linkified { links })
    }
}
