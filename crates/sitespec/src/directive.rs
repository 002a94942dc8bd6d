//! Line tokenizer converting spec file text into `label: content` directives.
//!
//! A line matches `label: content # comment`. The label runs up to the first
//! `:`, the content runs from there to the first `#`, and both are trimmed.
//! Lines that do not match are skipped without error. Lines break on `\n`,
//! `\r\n`, a lone `\r` and the Unicode line and paragraph separators.

use std::iter::{Enumerate, FusedIterator};
use std::sync::LazyLock;

use regex::Regex;

use crate::kind::DirectiveKind;

/// Characters that end a line, matching Python's `str.splitlines`.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}',
    '\u{2029}',
];

static DIRECTIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<label>[^#:]+):(?P<content>[^#]+)").unwrap_or_else(|_| unreachable!())
});

/// One `(label, content)` pair taken from a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'a> {
    /// 1-based line number in the source text.
    pub line: usize,
    /// Trimmed text before the first `:`.
    pub label: &'a str,
    /// Trimmed text between the first `:` and the first `#`.
    pub content: &'a str,
}

impl<'a> Directive<'a> {
    /// Parse a single line, returning `None` when it holds no directive.
    ///
    /// # Examples
    ///
    /// ```
    /// use sitespec::Directive;
    ///
    /// let directive = Directive::parse("  strip_id_or_class  :  decoration  # remove", 1)
    ///     .unwrap();
    /// assert_eq!(directive.as_pair(), ("strip_id_or_class", "decoration"));
    /// assert!(Directive::parse("# just a comment", 2).is_none());
    /// ```
    #[must_use]
    pub fn parse(text: &'a str, line: usize) -> Option<Self> {
        let captures = DIRECTIVE_RE.captures(text)?;
        let label = captures.name("label")?.as_str().trim();
        let content = captures.name("content")?.as_str().trim();
        if label.is_empty() || content.is_empty() {
            return None;
        }
        Some(Self {
            line,
            label,
            content,
        })
    }

    /// Return the directive as a bare `(label, content)` pair.
    #[must_use]
    pub const fn as_pair(&self) -> (&'a str, &'a str) {
        (self.label, self.content)
    }

    /// Classify the directive by its label.
    #[must_use]
    pub fn kind(&self) -> DirectiveKind {
        DirectiveKind::classify(self.label)
    }
}

/// Line splitter treating `\r\n` as one break.
///
/// A trailing break does not produce a final empty line.
#[derive(Debug, Clone)]
struct SourceLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for SourceLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let Some((at, brk)) = self
            .rest
            .char_indices()
            .find(|(_, c)| LINE_BREAKS.contains(c))
        else {
            return Some(std::mem::take(&mut self.rest));
        };
        let (line, tail) = self.rest.split_at(at);
        self.rest = tail
            .strip_prefix("\r\n")
            .or_else(|| tail.get(brk.len_utf8()..))
            .unwrap_or_default();
        Some(line)
    }
}

/// Lazy iterator over the directives of a spec file.
///
/// A clone is an independent cursor over the remaining lines. Calling
/// [`directives`] again restarts from the first line.
#[derive(Debug, Clone)]
pub struct Directives<'a> {
    lines: Enumerate<SourceLines<'a>>,
}

impl<'a> Iterator for Directives<'a> {
    type Item = Directive<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, text) in self.lines.by_ref() {
            let line = index + 1;
            if let Some(directive) = Directive::parse(text, line) {
                return Some(directive);
            }
            if !text.trim().is_empty() {
                log::trace!("line {line} holds no directive; skipping");
            }
        }
        None
    }
}

impl FusedIterator for Directives<'_> {}

/// Tokenize spec file text into directives, in file order.
///
/// # Examples
///
/// ```
/// let pairs: Vec<_> = sitespec::directives("title: //h1\n\nbody: //article # main")
///     .map(|d| d.as_pair())
///     .collect();
/// assert_eq!(pairs, vec![("title", "//h1"), ("body", "//article")]);
/// ```
#[must_use]
pub fn directives(source: &str) -> Directives<'_> {
    Directives {
        lines: SourceLines { rest: source }.enumerate(),
    }
}
