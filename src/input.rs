//! The input cursor consumed by parsers.
//!
//! A [`Snippet`] never owns or copies its text. It is a borrowed source plus an `offset` and a
//! `length`, both counted in UTF-8 bytes. Parsers take snippets by value and hand back new ones,
//! so any number of snippets can point into the same source at once.
//!
//! Reading past the end of the source is not an error: the [`Snippet::fragment`] is simply cut
//! short. A boundary that falls inside a multi-byte character is moved forward to the end of that
//! character, so the character belongs to the snippet that starts there. Adjacent snippets
//! therefore still tile the source without gaps or overlap.

use ::std::fmt;

/// An immutable cursor into a source string.
///
/// ## Examples
///
/// ```
/// use snipcomb::prelude::*;
///
/// let start = Snippet::input("hello world");
/// assert_eq!(start.fragment(), "");
///
/// let hello = start.slice(5);
/// assert_eq!(hello.fragment(), "hello");
/// assert_eq!(hello.slice(6).fragment(), " world");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Snippet<'a> {
    source: &'a str,
    offset: usize,
    length: usize,
}

impl<'a> Snippet<'a> {
    /// An empty cursor at the start of `source`.
    pub fn input(source: &'a str) -> Self {
        Snippet { source, offset: 0, length: 0 }
    }

    /// The snippet that begins right after this one's fragment and spans `length` bytes.
    ///
    /// There is no bounds check. A slice running past the end of the source has a shorter
    /// fragment than requested.
    ///
    /// ```
    /// use snipcomb::prelude::*;
    ///
    /// let tail = Snippet::input("abc").slice(2).slice(10);
    /// assert_eq!(tail.offset(), 2);
    /// assert_eq!(tail.length(), 10);
    /// assert_eq!(tail.fragment(), "c");
    /// ```
    pub fn slice(&self, length: usize) -> Self {
        Snippet { source: self.source, offset: self.end(), length }
    }

    /// The text this snippet denotes.
    pub fn fragment(&self) -> &'a str {
        let start = ceil_boundary(self.source, self.offset);
        let end = ceil_boundary(self.source, self.end());
        &self.source[start..end]
    }

    /// The whole backing source.
    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Position right after the fragment, where the next [`Snippet::slice`] starts.
    pub fn end(&self) -> usize {
        self.offset.saturating_add(self.length)
    }

    /// Everything after the fragment.
    pub fn rest(&self) -> &'a str {
        &self.source[ceil_boundary(self.source, self.end())..]
    }

    /// Whether nothing is left after the fragment.
    pub fn is_eoi(&self) -> bool {
        self.rest().is_empty()
    }
}

impl fmt::Display for Snippet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fragment())
    }
}

/// Clamp `index` into `source` and move it forward onto a `char` boundary.
fn ceil_boundary(source: &str, index: usize) -> usize {
    let mut index = index.min(source.len());
    while !source.is_char_boundary(index) {
        index += 1;
    }
    index
}
