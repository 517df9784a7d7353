#![doc = include_str!("../README.md")]

pub mod error;
pub mod input;
pub mod parse;
pub mod parser;
pub mod prelude;

pub use error::{Failure, PResult, Reason};
pub use input::Snippet;
