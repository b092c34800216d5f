use std::fmt::Write;

use crate::fmt::{self, Formatter};
use crate::macros::{debug, trace};
use crate::scan::{self, Scan};
use crate::types::options::Options;
use crate::types::span::Span;
use crate::types::tag::{Tag, TagKind};
use crate::value::{Context, Kind};
use crate::{Error, Result};

/// Renders a template source directly, without a compile step.
///
/// Each render pass walks a range of the source, copying raw text and
/// dispatching on every tag it finds. Sections recurse into their interior
/// range and resume after the closing tag.
pub(crate) struct RendererImpl<'render> {
    pub(crate) source: &'render str,
    pub(crate) options: &'render Options,
}

impl<'render> RendererImpl<'render> {
    pub(crate) fn render<C>(&self, f: &mut Formatter<'_>, ctx: &C) -> Result<()>
    where
        C: Context + ?Sized,
    {
        let range = Span::new(0, self.source.len());
        self.render_range(f, range, Some(ctx)).map_err(|err| {
            debug!(error = %err, "render failed");
            err
        })
    }

    /// Render `range` once, or once per element if the context is a list.
    ///
    /// A context of `None` is an absent section member.
    fn render_range<C>(&self, f: &mut Formatter<'_>, range: Span, ctx: Option<&C>) -> Result<()>
    where
        C: Context + ?Sized,
    {
        match ctx {
            Some(list) if list.kind() == Kind::List => {
                for i in 0..list.len() {
                    self.render_pass(f, range, list.element(i))?;
                }
                Ok(())
            }
            _ => self.render_pass(f, range, ctx),
        }
    }

    fn render_pass<C>(&self, f: &mut Formatter<'_>, range: Span, ctx: Option<&C>) -> Result<()>
    where
        C: Context + ?Sized,
    {
        let mut cursor = range.m;

        loop {
            let span = match scan::find_next_tag(self.source, range.tail(cursor), self.options) {
                Scan::Tag(span) => span,
                Scan::Unclosed(span) => {
                    return Err(Error::unclosed_tag(
                        self.source,
                        span,
                        self.options.close(),
                    ));
                }
                Scan::Done => break,
            };

            f.write_str(&self.source[cursor..span.m])?;

            let tag = Tag::classify(self.source, span, self.options);
            trace!(kind = tag.kind.human(), name = %tag.name, m = span.m, "tag");

            cursor = match tag.kind {
                TagKind::Variable | TagKind::Escaped => {
                    self.render_variable(f, &tag, ctx)?;
                    span.n
                }
                TagKind::Section => self.render_section(f, &tag, range, ctx, false)?,
                TagKind::InvertedSection => self.render_section(f, &tag, range, ctx, true)?,
                // Comments are echoed as is.
                TagKind::Comment => {
                    f.write_str(&self.source[span])?;
                    span.n
                }
                TagKind::EndSection => {
                    return Err(Error::unknown_tag(self.source, span));
                }
            };
        }

        f.write_str(&self.source[cursor..range.n])?;
        Ok(())
    }

    fn render_variable<C>(
        &self,
        f: &mut Formatter<'_>,
        tag: &Tag<'_>,
        ctx: Option<&C>,
    ) -> Result<()>
    where
        C: Context + ?Sized,
    {
        let value = match ctx.and_then(|c| c.member(&tag.name)) {
            Some(value) => Some(value),
            // `{{.}}` and `{{}}` refer to the current context itself.
            None if tag.is_implicit() => ctx,
            // Missing members render as nothing.
            None => return Ok(()),
        };
        fmt::write_escaped(f, value, tag.should_escape())?;
        Ok(())
    }

    /// Render a section and return the offset just after its closing tag.
    fn render_section<C>(
        &self,
        f: &mut Formatter<'_>,
        tag: &Tag<'_>,
        range: Span,
        ctx: Option<&C>,
        inverted: bool,
    ) -> Result<usize>
    where
        C: Context + ?Sized,
    {
        let rest = range.tail(tag.span.n);
        let closing = scan::find_closing_tag(self.source, rest, self.options, &tag.name)
            .ok_or_else(|| {
                let closing = scan::closing_tag(self.options, &tag.name);
                Error::unterminated_section(self.source, tag.span, &closing)
            })?;

        let value = ctx.and_then(|c| c.member(&tag.name));
        let render = is_truthy(value) != inverted;
        debug!(
            name = %tag.name,
            kind = value.map_or("absent", |v| v.kind().human()),
            inverted,
            render,
            "section"
        );

        if render {
            self.render_range(f, Span::new(tag.span.n, closing.m), value)?;
        }
        Ok(closing.n)
    }
}

/// Lists and maps are truthy, bools are their value, anything else
/// including an absent value is falsy.
fn is_truthy<C>(value: Option<&C>) -> bool
where
    C: Context + ?Sized,
{
    value.map_or(false, |v| match v.kind() {
        Kind::List | Kind::Map => true,
        Kind::Bool => v.as_bool().unwrap_or(false),
        Kind::None | Kind::Integer | Kind::Unsigned | Kind::Float | Kind::String => false,
    })
}
