use std::cmp::max;
use std::fmt;
use std::io;
use std::ops::Range;

#[cfg(feature = "unicode")]
use unicode_width::UnicodeWidthStr;

use crate::types::span::Span;

/// A convenient type alias for results in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An error that can occur during rendering.
#[derive(Clone)]
pub struct Error {
    kind: ErrorKind,
    msg: String,
    span: Option<(String, Span)>,
}

/// The category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A section was opened but its closing tag could not be found.
    UnterminatedSection,
    /// A tag was not closed, or was a closing tag without a matching
    /// section.
    MalformedTag,
    /// The render context could not be converted to a [`Value`][crate::Value].
    Serialize,
    /// Writing the rendered output failed.
    Io,
    /// A formatter failed to write a value.
    Format,
}

impl Error {
    fn new(kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self {
            kind,
            msg: msg.into(),
            span: None,
        }
    }

    fn spanned(kind: ErrorKind, msg: impl Into<String>, source: &str, span: Span) -> Self {
        Self {
            kind,
            msg: msg.into(),
            span: Some((source.to_owned(), span)),
        }
    }

    pub(crate) fn unterminated_section(source: &str, span: Span, closing: &str) -> Self {
        Self::spanned(
            ErrorKind::UnterminatedSection,
            format!("could not find closing tag `{closing}`"),
            source,
            span,
        )
    }

    pub(crate) fn unclosed_tag(source: &str, span: Span, close: &str) -> Self {
        Self::spanned(
            ErrorKind::MalformedTag,
            format!("unclosed tag, expected `{close}`"),
            source,
            span,
        )
    }

    pub(crate) fn unknown_tag(source: &str, span: Span) -> Self {
        Self::spanned(
            ErrorKind::MalformedTag,
            format!("unknown tag `{}`", &source[span]),
            source,
            span,
        )
    }

    pub(crate) fn serialize(err: serde_json::Error) -> Self {
        Self::new(ErrorKind::Serialize, err.to_string())
    }

    /// Returns the category of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the byte range of the template source this error refers to,
    /// if any.
    #[inline]
    pub fn range(&self) -> Option<Range<usize>> {
        self.span.as_ref().map(|(_, span)| span.m..span.n)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::new(ErrorKind::Io, err.to_string())
    }
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Self::new(ErrorKind::Format, "failed to format value")
    }
}

impl std::error::Error for Error {}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.span {
            Some((source, span)) => fmt_pretty(&self.msg, source, *span, f),
            None => write!(f, "{}", self.msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.span {
            Some((source, span)) => {
                if f.alternate() {
                    fmt_pretty(&self.msg, source, *span, f)
                } else {
                    write!(f, "{} between bytes {} and {}", self.msg, span.m, span.n)
                }
            }
            None => write!(f, "{}", self.msg),
        }
    }
}

fn fmt_pretty(msg: &str, source: &str, span: Span, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let lines: Vec<_> = source.split_terminator('\n').collect();
    let (line, col) = to_line_col(&lines, span.m);
    let width = max(1, width(&source[span]));
    let code = lines
        .get(line)
        .or_else(|| lines.last())
        .copied()
        .unwrap_or_default();

    let num = (line + 1).to_string();
    let pad = num.len();
    let pipe = "|";
    let underline = "^".repeat(width);

    write!(
        f,
        "\n \
        {0:pad$} {pipe}\n \
        {num:>} {pipe} {code}\n \
        {0:pad$} {pipe} {underline:>width$} {msg}\n",
        "",
        pad = pad,
        pipe = pipe,
        num = num,
        code = code,
        underline = underline,
        width = col + width,
        msg = msg
    )
}

fn to_line_col(lines: &[&str], offset: usize) -> (usize, usize) {
    let mut n = 0;
    for (i, line) in lines.iter().enumerate() {
        let len = line.len() + 1;
        if n + len > offset {
            return (i, width(&line[..offset - n]));
        }
        n += len;
    }
    (lines.len(), lines.last().map(|l| width(l)).unwrap_or(0))
}

#[cfg(feature = "unicode")]
fn width(s: &str) -> usize {
    s.width()
}

#[cfg(not(feature = "unicode"))]
fn width(s: &str) -> usize {
    s.chars().count()
}
