//! Classification of a located tag into its kind and name.

use std::borrow::Cow;

use crate::types::options::Options;
use crate::types::span::Span;

/// The characters that select a tag's kind.
const SIGILS: &[char] = &['&', '#', '^', '/', '!'];

/// The kind of a tag, determined by the first sigil in its interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `{{name}}`
    Variable,
    /// `{{&name}}`, interpolated without HTML escaping.
    Escaped,
    /// `{{#name}}`
    Section,
    /// `{{^name}}`
    InvertedSection,
    /// `{{/name}}`
    EndSection,
    /// `{{!comment}}`
    Comment,
}

/// A tag located in the template source.
#[derive(Debug)]
pub struct Tag<'source> {
    /// The full tag including both delimiters.
    pub span: Span,
    pub kind: TagKind,
    /// The interior with sigils and braces removed. Whitespace is kept, so
    /// `{{ name }}` looks up ` name `.
    pub name: Cow<'source, str>,
    /// Whether this is a `{{{name}}}` tag.
    pub triple: bool,
}

impl TagKind {
    fn from_sigil(c: char) -> Option<Self> {
        match c {
            '&' => Some(Self::Escaped),
            '#' => Some(Self::Section),
            '^' => Some(Self::InvertedSection),
            '/' => Some(Self::EndSection),
            '!' => Some(Self::Comment),
            _ => None,
        }
    }

    /// Returns a human readable description of the tag kind.
    #[cfg_attr(not(any(test, feature = "tracing")), allow(dead_code))]
    pub fn human(&self) -> &'static str {
        match self {
            Self::Variable => "variable",
            Self::Escaped => "unescaped variable",
            Self::Section => "section",
            Self::InvertedSection => "inverted section",
            Self::EndSection => "closing",
            Self::Comment => "comment",
        }
    }
}

impl<'source> Tag<'source> {
    /// Classify the tag at `span`, which must cover both delimiters.
    pub fn classify(source: &'source str, span: Span, options: &Options) -> Self {
        let inner = interior(source, span, options);
        let name = name(inner);

        let kind = inner
            .chars()
            .find_map(TagKind::from_sigil)
            .unwrap_or(TagKind::Variable);

        let raw = &source[span];
        let triple = options.is_default()
            && raw.len() >= 6
            && raw.starts_with("{{{")
            && raw.ends_with("}}}");

        Self {
            span,
            kind,
            name,
            triple,
        }
    }

    /// Whether the interpolated value of this tag should be HTML escaped.
    pub fn should_escape(&self) -> bool {
        self.kind != TagKind::Escaped && !self.triple
    }

    /// Whether this tag is the implicit iterator, `{{.}}` or `{{}}`.
    pub fn is_implicit(&self) -> bool {
        self.name.is_empty() || self.name == "."
    }
}

/// Returns the text between the delimiters of the tag at `span`.
fn interior<'a>(source: &'a str, span: Span, options: &Options) -> &'a str {
    let m = span.m + options.open().len();
    let n = span.n - options.close().len();
    &source[m..n]
}

fn name(inner: &str) -> Cow<'_, str> {
    let is_noise = |c: char| SIGILS.contains(&c) || c == '{' || c == '}';
    if inner.contains(is_noise) {
        Cow::Owned(inner.chars().filter(|c| !is_noise(*c)).collect())
    } else {
        Cow::Borrowed(inner)
    }
}
