//! Traits which, typically, may be imported without concern: `use humanist::prelude::*`.

use crate::parser::Record;

/// Behaviour to claim tokens before the option table sees them.
///
/// The parser offers every cursor position to the custom parser first.
/// Returning `None` falls through to the built-in matching.
/// Returning `Some((next, record))` replaces the record and moves the cursor to `next`, without further checks.
/// A `next` at or past the end of the tokens finishes the parse; a `next` that does not move forward is the implementor's responsibility.
// Needs to be imported in order to implement a custom parser on your own type.
pub trait CustomParser {
    /// Inspect `tokens[index]` (given as `token`) along with the record built so far.
    fn intercept(
        &self,
        token: &str,
        index: usize,
        tokens: &[String],
        record: &Record,
    ) -> Option<(usize, Record)>;
}

impl<F> CustomParser for F
where
    F: Fn(&str, usize, &[String], &Record) -> Option<(usize, Record)>,
{
    fn intercept(
        &self,
        token: &str,
        index: usize,
        tokens: &[String],
        record: &Record,
    ) -> Option<(usize, Record)> {
        self(token, index, tokens, record)
    }
}
