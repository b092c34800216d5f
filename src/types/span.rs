//! Defines a [`Span`] which is used to represent a half-open byte range in
//! the template source.

use std::ops::Index;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub m: usize,
    pub n: usize,
}

impl Span {
    pub fn new(m: usize, n: usize) -> Self {
        debug_assert!(m <= n, "span start must not exceed its end");
        Self { m, n }
    }

    /// Returns the remainder of this span starting at byte `at`.
    pub fn tail(self, at: usize) -> Self {
        Self::new(at, self.n)
    }
}

impl Index<Span> for str {
    type Output = str;

    fn index(&self, span: Span) -> &Self::Output {
        let Span { m, n } = span;
        &self[m..n]
    }
}
