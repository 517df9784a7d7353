//! A convenience prelude for `snipcomb`.

pub use crate::{
    error::{Failure, PResult, Reason},
    input::Snippet,
    parse::{Template, parse, parse_with},
    parser::{
        Parser,
        tag::{Tag, tag},
    },
};
