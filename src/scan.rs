//! Locates delimiter-bounded tags in the template source.
//!
//! The scanner is purely lexical: it knows nothing about tag kinds or the
//! render context. All searches are restricted to a [`Span`] of the source so
//! that a section interior can be scanned without looking past its closing
//! tag.

use crate::types::options::Options;
use crate::types::span::Span;

/// The result of scanning a range for the next tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    /// A complete tag, the span covers both delimiters.
    Tag(Span),
    /// An opening delimiter without a closing delimiter before the end of
    /// the range. The span covers the opening delimiter.
    Unclosed(Span),
    /// There are no more tags in the range.
    Done,
}

/// Find the next tag in `range`.
pub fn find_next_tag(source: &str, range: Span, options: &Options) -> Scan {
    // xxxxxxx{{xxxxxxx}}xxx
    //        ^ ^         ^
    //        j k         n
    let j = match source[range].find(options.open()) {
        Some(d) => range.m + d,
        None => return Scan::Done,
    };
    let k = j + options.open().len();

    // `{{{name}}}` is closed by a triple brace, but only with the default
    // delimiters.
    let close = if options.is_default() && source[j..range.n].starts_with("{{{") {
        "}}}"
    } else {
        options.close()
    };

    match source[k..range.n].find(close) {
        Some(d) => Scan::Tag(Span::new(j, k + d + close.len())),
        None => Scan::Unclosed(Span::new(j, k)),
    }
}

/// Find the first closing tag for the section `name` in `range`.
///
/// This is a plain text search, nested sections with the same name are not
/// counted. The returned span covers the whole closing tag.
pub fn find_closing_tag(source: &str, range: Span, options: &Options, name: &str) -> Option<Span> {
    let closing = closing_tag(options, name);
    source[range]
        .find(&closing)
        .map(|d| Span::new(range.m + d, range.m + d + closing.len()))
}

/// Returns the literal closing tag for the section `name`.
pub fn closing_tag(options: &Options, name: &str) -> String {
    let cap = options.open().len() + name.len() + options.close().len() + 1;
    let mut s = String::with_capacity(cap);
    s.push_str(options.open());
    s.push('/');
    s.push_str(name);
    s.push_str(options.close());
    s
}
