pub mod tag;

use crate::{error::PResult, input::Snippet};

/// A single parsing step from a [`Snippet`] to a [`PResult`].
///
/// Parsers are pure: the input is taken by value and the same input always gives the same
/// outcome. On success the output usually carries the advanced snippet; on failure the
/// [`crate::error::Failure`] keeps the snippet the parser started from.
///
/// Sequencing is plain `?`: feed the value of one success into the next parser, and let the
/// first failure propagate unchanged.
///
/// ## Examples
///
/// ```
/// use snipcomb::prelude::*;
///
/// fn greeting(input: Snippet<'_>) -> PResult<'_> {
///     let input = tag("hello").run(input)?;
///     tag(" world").run(input)
/// }
///
/// let out = greeting.run(Snippet::input("hello world!")).unwrap();
/// assert_eq!(out.offset(), 5);
/// assert_eq!(out.fragment(), " world");
/// ```
pub trait Parser<'a> {
    type Out;
    fn run(&self, input: Snippet<'a>) -> PResult<'a, Self::Out>;
}

impl<'a, F, O> Parser<'a> for F
where
    F: Fn(Snippet<'a>) -> PResult<'a, O>,
{
    type Out = O;
    #[inline]
    fn run(&self, input: Snippet<'a>) -> PResult<'a, O> {
        self(input)
    }
}
