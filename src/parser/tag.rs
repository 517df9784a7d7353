//! Tag parser (exact string matching).

use crate::{
    error::{Failure, PResult, Reason},
    input::Snippet,
    parser::Parser,
};

/// Match an exact string right after the input snippet.
///
/// - On success: returns the snippet covering the matched text.
/// - On failure: returns [`Reason::Tag`] with the input snippet unchanged.
///
/// Comparison is byte-exact and case-sensitive. An empty tag always matches and advances by zero.
///
/// ## Examples
///
/// ```
/// use snipcomb::prelude::*;
///
/// let input = Snippet::input("hello world");
/// let out = tag("hello").run(input).unwrap();
/// assert_eq!(out.fragment(), "hello");
///
/// let err = tag("holla").run(input).unwrap_err();
/// assert_eq!(err.snippet(), input);
/// assert_eq!(err.reason().as_str(), "tag");
/// ```
pub fn tag(expected: &str) -> Tag<'_> {
    Tag(expected)
}

/// Parser that matches a fixed string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tag<'t>(&'t str);

impl<'t> Tag<'t> {
    pub fn expected(&self) -> &'t str {
        self.0
    }
}

impl<'a, 't> Parser<'a> for Tag<'t> {
    type Out = Snippet<'a>;

    fn run(&self, input: Snippet<'a>) -> PResult<'a> {
        let next = input.slice(self.0.len());
        if next.fragment() == self.0 {
            Ok(next)
        } else {
            Err(Failure::new(input, Reason::Tag))
        }
    }
}
