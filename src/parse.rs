//! High-level entry points to run parsers.

use crate::{error::PResult, input::Snippet, parser::Parser};

/// Run a parser from the start of `source`.
///
/// ## Examples
///
/// ```
/// use snipcomb::prelude::*;
///
/// let out = parse_with("hello world", tag("hello")).unwrap();
/// assert_eq!(out.rest(), " world");
/// ```
pub fn parse_with<'a, P>(source: &'a str, parser: P) -> PResult<'a, P::Out>
where
    P: Parser<'a>,
{
    parser.run(Snippet::input(source))
}

/// A parsed template.
///
/// The template grammar does not exist yet, so this carries nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct Template {}

/// Parse a template.
///
/// Placeholder: `source` is ignored and the result is always an empty [`Template`].
pub fn parse(_source: &str) -> Template {
    Template::default()
}
