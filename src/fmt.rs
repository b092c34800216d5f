//! Formatting of context values into template output.
//!
//! Every interpolated value is converted to text according to its
//! [`Kind`]:
//!
//! | Kind                        | Output                                  |
//! |-----------------------------|-----------------------------------------|
//! | `None` or a missing section | `null`                                  |
//! | `Bool`                      | `true` or `false`                       |
//! | `Integer`, `Unsigned`       | decimal digits                          |
//! | `Float`                     | decimal with six fractional digits      |
//! | `String`                    | the string, unmodified                  |
//! | `List`, `Map`               | compact JSON text of the whole subtree  |
//!
//! The result is then passed through [`escape_html`] unless the tag opted
//! out with `{{&name}}` or `{{{name}}}`.

use std::fmt;
use std::fmt::Write;
use std::io;

use crate::value::{Context, Kind};

/// A [`std::fmt::Write`] façade over the render output.
pub(crate) struct Formatter<'a> {
    buf: &'a mut (dyn fmt::Write + 'a),
}

/// Adapts an [`io::Write`] so that it can be used as a [`fmt::Write`],
/// holding on to the underlying IO error.
pub(crate) struct Writer<W> {
    writer: W,
    err: Option<io::Error>,
}

/// Escapes HTML special characters in everything written through it.
struct EscapeHtml<'a> {
    buf: &'a mut (dyn fmt::Write + 'a),
}

impl<'a> Formatter<'a> {
    pub(crate) fn with_string(buf: &'a mut String) -> Self {
        Self { buf }
    }

    pub(crate) fn with_writer<W>(buf: &'a mut Writer<W>) -> Self
    where
        W: io::Write,
    {
        Self { buf }
    }
}

impl fmt::Write for Formatter<'_> {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        fmt::Write::write_str(self.buf, s)
    }

    #[inline]
    fn write_char(&mut self, c: char) -> fmt::Result {
        fmt::Write::write_char(self.buf, c)
    }

    #[inline]
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        fmt::Write::write_fmt(self.buf, args)
    }
}

impl<W> Writer<W>
where
    W: io::Write,
{
    pub fn new(writer: W) -> Self {
        Self { writer, err: None }
    }

    pub fn take_err(&mut self) -> Option<io::Error> {
        self.err.take()
    }
}

impl<W> fmt::Write for Writer<W>
where
    W: io::Write,
{
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.writer.write_all(s.as_bytes()).map_err(|e| {
            self.err = Some(e);
            fmt::Error
        })
    }

    #[inline]
    fn write_char(&mut self, c: char) -> fmt::Result {
        self.writer
            .write_all(c.encode_utf8(&mut [0; 4]).as_bytes())
            .map_err(|e| {
                self.err = Some(e);
                fmt::Error
            })
    }
}

impl fmt::Write for EscapeHtml<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        // Copy runs of unescaped characters in one go.
        let mut last = 0;
        for (i, c) in s.char_indices() {
            let escaped = match c {
                '&' => "&amp;",
                '<' => "&lt;",
                '>' => "&gt;",
                '"' => "&quot;",
                '\'' => "&#39;",
                '/' => "&#x2F;",
                _ => continue,
            };
            self.buf.write_str(&s[last..i])?;
            self.buf.write_str(escaped)?;
            last = i + c.len_utf8();
        }
        self.buf.write_str(&s[last..])
    }
}

/// Format a value as it would be interpolated by a `{{{name}}}` tag.
///
/// # Errors
///
/// If the value is a list or a map and its
/// [`write_serialized`][Context::write_serialized] fails.
///
/// # Examples
///
/// ```
/// use serde_json::json;
///
/// assert_eq!(whisker::fmt::format(&json!(1.5))?, "1.500000");
/// assert_eq!(whisker::fmt::format(&json!(null))?, "null");
/// assert_eq!(whisker::fmt::format(&json!({ "a": [true] }))?, r#"{"a":[true]}"#);
/// # Ok::<(), whisker::Error>(())
/// ```
pub fn format<C>(value: &C) -> crate::Result<String>
where
    C: Context + ?Sized,
{
    let mut s = String::new();
    write_value(&mut s, Some(value))?;
    Ok(s)
}

/// Escape the HTML special characters `&`, `<`, `>`, `"`, `'` and `/`.
///
/// # Examples
///
/// ```
/// assert_eq!(
///     whisker::fmt::escape_html("<a href='/'>"),
///     "&lt;a href=&#39;&#x2F;&#39;&gt;"
/// );
/// ```
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    let _ = EscapeHtml { buf: &mut escaped }.write_str(s);
    escaped
}

/// Write the formatted value, HTML escaped if `escape` is set.
///
/// A `value` of `None` is an absent member, formatted the same as a null.
pub(crate) fn write_escaped<C>(
    f: &mut dyn fmt::Write,
    value: Option<&C>,
    escape: bool,
) -> fmt::Result
where
    C: Context + ?Sized,
{
    if escape {
        write_value(&mut EscapeHtml { buf: f }, value)
    } else {
        write_value(f, value)
    }
}

fn write_value<C>(f: &mut dyn fmt::Write, value: Option<&C>) -> fmt::Result
where
    C: Context + ?Sized,
{
    let value = match value {
        Some(value) => value,
        None => return f.write_str("null"),
    };
    match value.kind() {
        Kind::None => f.write_str("null"),
        Kind::Bool => match value.as_bool() {
            Some(true) => f.write_str("true"),
            _ => f.write_str("false"),
        },
        Kind::Integer => write_some(f, value.as_i64()),
        Kind::Unsigned => write_some(f, value.as_u64()),
        Kind::Float => match value.as_f64() {
            Some(n) => write!(f, "{n:.6}"),
            None => Ok(()),
        },
        Kind::String => f.write_str(value.as_str().unwrap_or_default()),
        Kind::List | Kind::Map => value.write_serialized(f),
    }
}

fn write_some<T: fmt::Display>(f: &mut dyn fmt::Write, n: Option<T>) -> fmt::Result {
    match n {
        Some(n) => write!(f, "{n}"),
        None => Ok(()),
    }
}
