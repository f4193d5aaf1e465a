//! Engine module for `humanist`.
//! See the `humanist` crate root for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;

pub use api::*;
pub use constant::{CATCH_ALL, SENTINEL};
pub use model::*;
pub use parser::{ConfigError, Input, ParseError, Record, Value};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
