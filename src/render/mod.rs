#![allow(clippy::wrong_self_convention)]

mod core;

use std::io;

use crate::fmt::{Formatter, Writer};
use crate::render::core::RendererImpl;
use crate::types::options::Options;
use crate::value::Context;
use crate::{Error, Result, Value};

pub(crate) fn to_string<C>(source: &str, options: &Options, ctx: &C) -> Result<String>
where
    C: Context + ?Sized,
{
    let mut s = String::with_capacity(source.len());
    let mut f = Formatter::with_string(&mut s);
    RendererImpl { source, options }.render(&mut f, ctx)?;
    Ok(s)
}

pub(crate) fn to_writer<W, C>(source: &str, options: &Options, writer: W, ctx: &C) -> Result<()>
where
    W: io::Write,
    C: Context + ?Sized,
{
    let mut w = Writer::new(writer);
    let mut f = Formatter::with_writer(&mut w);
    RendererImpl { source, options }
        .render(&mut f, ctx)
        .map_err(|err| w.take_err().map(Error::from).unwrap_or(err))
}

/// A renderer for a template source and its context.
///
/// This struct is created by one of the following functions:
/// - [`Engine::render`][crate::Engine::render]
/// - [`Engine::render_from`][crate::Engine::render_from]
#[must_use = "must call `.to_string()` or `.to_writer(..)` on the renderer"]
pub struct Renderer<'render, C: ?Sized = Value> {
    source: &'render str,
    options: &'render Options,
    globals: Globals<'render, C>,
}

enum Globals<'render, C: ?Sized> {
    Owned(Result<Value>),
    Borrowed(&'render C),
}

impl<'render> Renderer<'render, Value> {
    pub(crate) fn with_serde<S>(source: &'render str, options: &'render Options, globals: S) -> Self
    where
        S: ::serde::Serialize,
    {
        Self {
            source,
            options,
            globals: Globals::Owned(crate::to_value(globals)),
        }
    }
}

impl<'render, C> Renderer<'render, C>
where
    C: Context + ?Sized,
{
    pub(crate) fn with_context(
        source: &'render str,
        options: &'render Options,
        globals: &'render C,
    ) -> Self {
        Self {
            source,
            options,
            globals: Globals::Borrowed(globals),
        }
    }

    /// Render the template to a string.
    pub fn to_string(self) -> Result<String> {
        match self.globals {
            Globals::Owned(result) => to_string(self.source, self.options, &result?),
            Globals::Borrowed(ctx) => to_string(self.source, self.options, ctx),
        }
    }

    /// Render the template to the given writer.
    pub fn to_writer<W>(self, w: W) -> Result<()>
    where
        W: io::Write,
    {
        match self.globals {
            Globals::Owned(result) => to_writer(self.source, self.options, w, &result?),
            Globals::Borrowed(ctx) => to_writer(self.source, self.options, w, ctx),
        }
    }
}
