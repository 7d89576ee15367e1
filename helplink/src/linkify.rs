//! The URL pattern and the markup rewrite.
//!
//! A URL is `http://` or `https://` (ASCII case-insensitive) followed by
//! characters of `[-A-Z0-9+&@#/%?=~_|!:,.;]`, and it must end with one of `[-A-Z0-9+&@#/%=~_|]` ,
//! so trailing punctuation such as `.` or `?` is left out of the link.
//! A URL only starts at a word boundary, e.g. `xhttp://a.com` is not a URL.
//!
//! The rewrite is not idempotent:
//! running it again on its own output links the URL inside the generated `href` a second time.

use once_cell::sync::Lazy;
use regex::{Match, Regex};
use std::borrow::Cow;

use crate::config::{Config, DEFAULT_ANCHOR_TEXT, DEFAULT_TARGET};
use crate::error::Error;

/// The URL pattern without the leading word boundary.
///
/// The flags are scoped to ASCII so that no non-ASCII letter folds into the classes.
pub const URL_PATTERN: &str = r"(?i-u:https?://[-A-Z0-9+&@#/%?=~_|!:,.;]*[-A-Z0-9+&@#/%=~_|])";

static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(URL_PATTERN).expect("the URL pattern should compile"));

static DEFAULT_LINKIFIER: Lazy<Linkifier> = Lazy::new(Linkifier::default);

#[inline]
fn is_ascii_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Rewrite every URL in `markup` into `<a href="URL" target="_blank">here</a>` .
///
/// The markup is returned borrowed when there is no URL in it.
pub fn linkify(markup: &str) -> Cow<'_, str> {
    DEFAULT_LINKIFIER.rewrite(markup)
}

/// An iterator over the URLs in a piece of markup.
///
/// Created by `Linkifier::find_urls` .
pub struct UrlMatches<'h> {
    haystack: &'h str,
    pos: usize,
}

impl<'h> UrlMatches<'h> {
    fn next_match(&mut self) -> Option<Match<'h>> {
        loop {
            if self.pos > self.haystack.len() {
                return None;
            }
            let m = URL_REGEX.find_at(self.haystack, self.pos)?;
            let start = m.start();
            if start > 0 && is_ascii_word(self.haystack.as_bytes()[start - 1]) {
                // the match starts with an ASCII `h` so the next byte is a char boundary
                self.pos = start + 1;
                continue;
            }
            self.pos = m.end();
            return Some(m);
        }
    }
}

impl<'h> Iterator for UrlMatches<'h> {
    type Item = &'h str;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_match().map(|m| m.as_str())
    }
}

/// Rewrites URLs into anchors.
#[derive(Debug, Clone)]
pub struct Linkifier {
    anchor_text: String,
    target: String,
}

impl Default for Linkifier {
    fn default() -> Self {
        Self {
            anchor_text: DEFAULT_ANCHOR_TEXT.into(),
            target: DEFAULT_TARGET.into(),
        }
    }
}

impl Linkifier {
    /// Create with the anchor text and target in `config` .
    ///
    /// Fails if `config` does not pass `Config::validate` .
    pub fn new(config: &Config) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            anchor_text: config.anchor_text.clone(),
            target: config.target.clone(),
        })
    }

    /// Iterate over the URLs in `markup` .
    pub fn find_urls<'h>(&self, markup: &'h str) -> UrlMatches<'h> {
        UrlMatches {
            haystack: markup,
            pos: 0,
        }
    }

    /// Count the URLs in `markup` .
    pub fn count(&self, markup: &str) -> usize {
        self.find_urls(markup).count()
    }

    /// Rewrite every URL in `markup` into an anchor.
    pub fn rewrite<'h>(&self, markup: &'h str) -> Cow<'h, str> {
        self.rewrite_counted(markup).0
    }

    pub(crate) fn rewrite_counted<'h>(&self, markup: &'h str) -> (Cow<'h, str>, usize) {
        let mut matches = self.find_urls(markup);
        let first = match matches.next_match() {
            None => return (Cow::Borrowed(markup), 0),
            Some(m) => m,
        };
        let mut ret = String::with_capacity(markup.len() + 64);
        let mut last = 0;
        let mut count = 0;
        let mut cur = Some(first);
        while let Some(m) = cur {
            ret.push_str(&markup[last..m.start()]);
            self.write_anchor(&mut ret, m.as_str());
            last = m.end();
            count += 1;
            cur = matches.next_match();
        }
        ret.push_str(&markup[last..]);
        (Cow::Owned(ret), count)
    }

    fn write_anchor(&self, w: &mut String, url: &str) {
        w.push_str(r#"<a href=""#);
        w.push_str(url);
        w.push_str(r#"" target=""#);
        w.push_str(&self.target);
        w.push_str(r#"">"#);
        w.push_str(&self.anchor_text);
        w.push_str("</a>");
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn urls(s: &str) -> Vec<&str> {
        Linkifier::default().find_urls(s).collect()
    }

    #[test]
    fn single_url() {
        assert_eq!(
            linkify("Visit http://example.com/page for details"),
            r#"Visit <a href="http://example.com/page" target="_blank">here</a> for details"#,
        );
    }

    #[test]
    fn no_url_is_borrowed() {
        let s = "Nothing to see, not even www.example.com";
        assert!(matches!(linkify(s), Cow::Borrowed(x) if x == s));
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(urls("go HTTPS://EXAMPLE.COM/X now"), ["HTTPS://EXAMPLE.COM/X"]);
        assert_eq!(urls("HtTp://a.B/c"), ["HtTp://a.B/c"]);
    }

    #[test]
    fn trailing_punctuation() {
        assert_eq!(urls("see http://a.com/x."), ["http://a.com/x"]);
        assert_eq!(urls("(http://a.com/x?)"), ["http://a.com/x"]);
        assert_eq!(urls("http://a.com/?q=1;"), ["http://a.com/?q=1"]);
        assert_eq!(urls("http://a.com/p,http://b.com/q"), ["http://a.com/p,http://b.com/q"]);
        assert_eq!(urls("http://a.com/x/"), ["http://a.com/x/"]);
    }

    #[test]
    fn word_boundary() {
        assert!(urls("xhttp://a.com").is_empty());
        assert!(urls("_https://a.com").is_empty());
        assert_eq!(urls("xhttp://a.com http://b.com"), ["http://b.com"]);
        assert_eq!(urls("\"http://a.com\""), ["http://a.com"]);
        assert_eq!(urls("é http://a.com"), ["http://a.com"]);
        assert_eq!(urls("éhttp://a.com"), ["http://a.com"]);
    }

    #[test]
    fn not_urls() {
        assert!(urls("ftp://a.com").is_empty());
        assert!(urls("http://").is_empty());
        assert!(urls("http:/a.com").is_empty());
        assert!(urls("https//a.com").is_empty());
    }

    #[test]
    fn ascii_only_classes() {
        // U+017F folds to `s` under Unicode case folding
        assert!(urls("http\u{17F}://a.com").is_empty());
        assert_eq!(urls("http://a.com/\u{212A}"), ["http://a.com/"]);
    }

    #[test]
    fn escaped_ampersand() {
        assert_eq!(
            linkify("http://a.com/?x=1&amp;y=2"),
            r#"<a href="http://a.com/?x=1&amp;y=2" target="_blank">here</a>"#,
        );
    }

    #[test]
    fn multiple_urls() {
        let (s, count) = Linkifier::default()
            .rewrite_counted("a http://a.com b\nhttps://b.org/c?d=e c");
        assert_eq!(count, 2);
        assert_eq!(Linkifier::default().count("http://a.com http://b.com."), 2);
        assert_eq!(
            s,
            "a <a href=\"http://a.com\" target=\"_blank\">here</a> b\n<a href=\"https://b.org/c?d=e\" target=\"_blank\">here</a> c",
        );
    }

    #[test]
    fn not_idempotent() {
        let once = linkify("http://a.com").into_owned();
        let twice = linkify(&once);
        assert_eq!(
            twice,
            r#"<a href="<a href="http://a.com" target="_blank">here</a>" target="_blank">here</a>"#,
        );
    }

    #[test]
    fn custom_anchor() {
        let config = Config::default()
            .with_anchor_text("link")
            .with_target("_self");
        assert_eq!(
            Linkifier::new(&config).unwrap().rewrite("http://a.com"),
            r#"<a href="http://a.com" target="_self">link</a>"#,
        );
    }

    #[test]
    fn quoted_target_rejected() {
        let config = Config::default().with_target(r#"_blank" onclick="x"#);
        assert!(matches!(Linkifier::new(&config), Err(Error::InvalidConfig(_))));
    }
}
