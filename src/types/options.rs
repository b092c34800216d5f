/// The default opening delimiter.
pub const DEFAULT_OPEN: &str = "{{";

/// The default closing delimiter.
pub const DEFAULT_CLOSE: &str = "}}";

/// The render configuration.
///
/// Use [`Options::default()`] to get the default configuration and
/// [`Options::builder()`] or [`Options::new()`] to configure custom
/// delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    open: String,
    close: String,
}

/// A builder for the render configuration.
///
/// This struct is typically created using [`Options::builder()`].
#[derive(Debug, Clone)]
pub struct OptionsBuilder<'a> {
    delimiters: Option<(&'a str, &'a str)>,
}

impl Default for Options {
    /// Returns the default configuration.
    ///
    /// This is equivalent to the following.
    /// ```
    /// use whisker::Options;
    ///
    /// let options = Options::builder().delimiters("{{", "}}").build();
    /// assert_eq!(options, Options::default());
    /// ```
    #[inline]
    fn default() -> Self {
        Self {
            open: String::from(DEFAULT_OPEN),
            close: String::from(DEFAULT_CLOSE),
        }
    }
}

impl Options {
    /// Construct options with custom delimiters.
    ///
    /// # Panics
    ///
    /// If either of the strings are empty.
    #[inline]
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        let open = open.into();
        let close = close.into();
        assert!(
            !open.is_empty() && !close.is_empty(),
            "delimiters must not be empty"
        );
        Self { open, close }
    }

    /// Create a new options builder.
    ///
    /// # Examples
    ///
    /// ```
    /// let options = whisker::Options::builder()
    ///     .delimiters("<%", "%>")
    ///     .build();
    /// assert_eq!(options.open(), "<%");
    /// ```
    #[inline]
    pub fn builder<'a>() -> OptionsBuilder<'a> {
        OptionsBuilder::new()
    }

    /// The opening delimiter, `{{` by default.
    #[inline]
    pub fn open(&self) -> &str {
        &self.open
    }

    /// The closing delimiter, `}}` by default.
    #[inline]
    pub fn close(&self) -> &str {
        &self.close
    }

    /// Whether these options use the canonical `{{` and `}}` delimiters.
    ///
    /// Triple mustache tags like `{{{name}}}` are only recognized when this
    /// returns `true`.
    #[inline]
    pub fn is_default(&self) -> bool {
        self.open == DEFAULT_OPEN && self.close == DEFAULT_CLOSE
    }
}

impl<'a> OptionsBuilder<'a> {
    /// Creates a new options builder.
    #[inline]
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self { delimiters: None }
    }

    /// Set the tag delimiters.
    ///
    /// If not set then `{{` and `}}` are used.
    ///
    /// # Panics
    ///
    /// If either of the strings are empty.
    #[inline]
    pub fn delimiters(&mut self, open: &'a str, close: &'a str) -> &mut Self {
        assert!(!open.is_empty() && !close.is_empty());
        self.delimiters = Some((open, close));
        self
    }

    /// Builds the options.
    #[inline]
    pub fn build(&self) -> Options {
        match self.delimiters {
            Some((open, close)) => Options::new(open, close),
            None => Options::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_is_default() {
        assert!(Options::default().is_default());
        assert!(Options::new("{{", "}}").is_default());
        assert!(!Options::new("<%", "%>").is_default());
        assert!(!Options::new("{{", "%>").is_default());
    }

    #[test]
    fn options_builder_without_delimiters() {
        assert_eq!(Options::builder().build(), Options::default());
    }

    #[test]
    #[should_panic]
    fn options_empty_delimiter_panics() {
        Options::new("", "}}");
    }
}
