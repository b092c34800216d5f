//! A small mustache-style template renderer.
//!
//! # Features
//!
//! ### Syntax
//!
//! - Variables: `{{name}}`, HTML escaped
//! - Unescaped variables: `{{&name}}` or `{{{name}}}`
//! - Sections: `{{#list}} ... {{/list}}`
//! - Inverted sections: `{{^enabled}} ... {{/enabled}}`
//! - The implicit iterator: `{{.}}`
//! - Comments: `{{! note }}`, echoed to the output as is
//! - Configurable delimiters: `<%name%>`
//!
//! ### Engine
//!
//! - No compile step, the template source is rendered directly
//! - Render any data implementing [`Context`], including
//!   [`serde_json::Value`] and this crate's own [`Value`]
//! - Render using any [`serde`] serializable values
//! - Render to a [`String`] or any [`std::io::Write`] implementor
//! - Optional [`tracing`](https://docs.rs/tracing) events with the `tracing`
//!   feature
//!
//! # Getting started
//!
//! The simplest entry point is the [`render`] function which renders a
//! template against any [`Context`].
//!
//! ```
//! use serde_json::json;
//!
//! let ctx = json!({ "user": { "name": "John Smith" } });
//! let result = whisker::render(
//!     "{{#user}}Hello {{name}}!{{/user}}",
//!     &ctx,
//!     &whisker::Options::default(),
//! )?;
//! assert_eq!(result, "Hello John Smith!");
//! # Ok::<(), whisker::Error>(())
//! ```
//!
//! The [`Engine`] struct stores the render [`Options`] and can render
//! anything implementing [`serde::Serialize`].
//!
//! ```
//! #[derive(serde::Serialize)]
//! struct Context { users: Vec<User> }
//!
//! #[derive(serde::Serialize)]
//! struct User { name: String }
//!
//! let ctx = Context {
//!     users: vec![User { name: "John".into() }, User { name: "<i>Jane</i>".into() }],
//! };
//!
//! let result = whisker::Engine::new()
//!     .render("{{#users}}<b>{{name}}</b> {{/users}}", &ctx)
//!     .to_string()?;
//!
//! assert_eq!(result, "<b>John</b> <b>&lt;i&gt;Jane&lt;&#x2F;i&gt;</b> ");
//! # Ok::<(), whisker::Error>(())
//! ```
//!
//! # Semantics
//!
//! Names are looked up as members of the current context only, there is no
//! dotted path lookup and no walking up to enclosing contexts. A variable
//! whose member is missing renders nothing.
//!
//! A section renders its interior if the member is a list, a map or `true`.
//! Lists render the interior once per element with the element as the
//! context. Inverted sections render their interior exactly when a regular
//! section would not.
//!
//! A section ends at the *first* matching closing tag, so a section nested
//! inside another section with the same name closes the outer one.
//!
//! Names are the tag interior without sigils and braces, whitespace included.
//! `{{ name }}` therefore looks up ` name `, and a section opened with
//! `{{# a }}` is closed by exactly `{{/ a }}`. An unnamed section `{{#}}` is
//! closed by `{{/}}`.
//!
//! ### Render a template using custom delimiters
//!
//! ```
//! let options = whisker::Options::builder().delimiters("<%", "%>").build();
//!
//! let result = whisker::Engine::with_options(options)
//!     .render("<%greeting%> {{untouched}}", serde_json::json!({ "greeting": "Hello" }))
//!     .to_string()?;
//!
//! assert_eq!(result, "Hello {{untouched}}");
//! # Ok::<(), whisker::Error>(())
//! ```
//!
//! ### Render a template to an `impl io::Write`
//!
//! ```
//! use std::io;
//!
//! let stdout = io::BufWriter::new(io::stdout());
//!
//! whisker::Engine::new()
//!     .render("Hello {{name}}", serde_json::json!({ "name": "John Smith" }))
//!     .to_writer(stdout)?;
//! # Ok::<(), whisker::Error>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub mod fmt;
mod macros;
mod render;
mod scan;
mod types;
mod value;

use std::io;

pub use crate::error::{Error, ErrorKind, Result};
pub use crate::render::Renderer;
pub use crate::types::options::{Options, OptionsBuilder};
pub use crate::value::{to_value, Context, Kind, List, Map, Value};

/// Render a template to a string using the provided context.
///
/// # Errors
///
/// If a section has no closing tag, a tag is not closed, or a closing tag
/// appears without a matching section.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use whisker::Options;
///
/// let ctx = json!({ "list": [1, 2, 3] });
/// let result = whisker::render("{{#list}}{{.}}-{{/list}}", &ctx, &Options::default())?;
/// assert_eq!(result, "1-2-3-");
/// # Ok::<(), whisker::Error>(())
/// ```
#[inline]
pub fn render<C>(template: &str, context: &C, options: &Options) -> Result<String>
where
    C: Context + ?Sized,
{
    render::to_string(template, options, context)
}

/// Render a template to a writer using the provided context.
///
/// Output that was written before an error occurred is not rolled back.
#[inline]
pub fn render_to_writer<W, C>(
    writer: W,
    template: &str,
    context: &C,
    options: &Options,
) -> Result<()>
where
    W: io::Write,
    C: Context + ?Sized,
{
    render::to_writer(template, options, writer, context)
}

/// The rendering engine.
///
/// The engine stores the render configuration. Rendering does not mutate the
/// engine, so a single engine can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    options: Options,
}

impl Engine {
    /// Construct a new engine with the default `{{` and `}}` delimiters.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a new engine with custom options.
    ///
    /// # Examples
    ///
    /// ```
    /// use whisker::{Engine, Options};
    ///
    /// let engine = Engine::with_options(Options::new("<%", "%>"));
    /// assert_eq!(engine.options().close(), "%>");
    /// ```
    #[inline]
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Returns the options this engine renders with.
    #[inline]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Render a template using the provided serializable context.
    ///
    /// The context is converted to a [`Value`] using [`to_value`], a failed
    /// conversion is reported when the renderer is run.
    #[inline]
    pub fn render<'render, S>(&'render self, source: &'render str, ctx: S) -> Renderer<'render>
    where
        S: serde::Serialize,
    {
        Renderer::with_serde(source, &self.options, ctx)
    }

    /// Render a template using the provided context without converting it.
    #[inline]
    pub fn render_from<'render, C>(
        &'render self,
        source: &'render str,
        ctx: &'render C,
    ) -> Renderer<'render, C>
    where
        C: Context + ?Sized,
    {
        Renderer::with_context(source, &self.options, ctx)
    }
}
