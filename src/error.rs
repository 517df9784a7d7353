//! Parser outcomes.
//!
//! Every parser returns a [`PResult`]. Failures are plain values: the [`Snippet`] at which the
//! match was attempted and a symbolic [`Reason`] naming the parser that gave up. The input is
//! never consumed by a failure, so a caller holding the snippet can try something else from the
//! same place.

use ::std::fmt;

use thiserror::Error;

use crate::input::Snippet;

/// Outcome of running a parser. Most parsers return the advanced [`Snippet`].
pub type PResult<'a, T = Snippet<'a>> = Result<T, Failure<'a>>;

/// A failed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[error("{reason} did not match at byte {}", .snippet.end())]
pub struct Failure<'a> {
    snippet: Snippet<'a>,
    reason: Reason,
}

impl<'a> Failure<'a> {
    pub fn new(snippet: Snippet<'a>, reason: Reason) -> Self {
        Failure { snippet, reason }
    }

    /// Where the match was attempted. Nothing after this snippet was consumed.
    pub fn snippet(&self) -> Snippet<'a> {
        self.snippet
    }

    pub fn reason(&self) -> Reason {
        self.reason
    }
}

/// Which parser failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Reason {
    /// A literal given to [`crate::parser::tag::tag`] was not found.
    Tag,
}

impl Reason {
    /// The symbolic code, e.g. `"tag"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::Tag => "tag",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
