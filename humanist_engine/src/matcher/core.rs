#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::constant::{MARKER, SENTINEL, SENTINEL_LETTER};
use crate::matcher::model::{strip_marker, OptionConfig};
use crate::model::Arity;
use crate::parser::{ParseError, Value};

/// The value consumed for one option occurrence, and the cursor just past it.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Consumed {
    pub next: usize,
    pub value: Value,
}

impl Consumed {
    fn new(next: usize, value: impl Into<Value>) -> Self {
        Self {
            next,
            value: value.into(),
        }
    }
}

/// Consume the arguments of the option at `tokens[index]`.
///
/// `marked` is whether the option token itself carried a trailing marker.
/// For single and variadic options, a marked option token switches to a literal run (see [`literal_run`]).
pub(crate) fn dispatch(
    config: &OptionConfig,
    marked: bool,
    tokens: &[String],
    index: usize,
) -> Result<Consumed, ParseError> {
    let start = index + 1;

    match config.arity() {
        Arity::Flag => Ok(Consumed::new(start, true)),
        Arity::Single => match tokens.get(start) {
            None => Err(ParseError::MissingArgument {
                option: config.name().to_string(),
            }),
            Some(_) if marked => {
                let (next, text) = literal_run(tokens, start);
                Ok(Consumed::new(next, text))
            }
            Some(token) => {
                let (value, _) = strip_marker(token);
                Ok(Consumed::new(start + 1, value))
            }
        },
        Arity::Fixed(n) => fixed(config.name(), n, tokens, start),
        Arity::Variadic => {
            if marked {
                let (next, text) = literal_run(tokens, start);
                Ok(Consumed::new(next, text))
            } else {
                let (next, values) = variadic(tokens, start);

                if config.settings().join {
                    Ok(Consumed::new(next, values.join(" ")))
                } else {
                    Ok(Consumed::new(next, values))
                }
            }
        }
    }
}

fn fixed(option: &str, n: usize, tokens: &[String], start: usize) -> Result<Consumed, ParseError> {
    let found = tokens.len().saturating_sub(start);

    if found < n {
        return Err(ParseError::InsufficientArguments {
            option: option.to_string(),
            required: n,
            found,
        });
    }

    let group = &tokens[start..start + n];
    let (head, last) = group.split_at(n - 1);

    // The marker may only close the group.
    if head.iter().any(|token| token.ends_with(MARKER)) {
        return Err(ParseError::PrematureTermination {
            option: option.to_string(),
            required: n,
        });
    }

    let mut values: Vec<String> = head.to_vec();
    values.extend(last.iter().map(|token| strip_marker(token).0.to_string()));
    Ok(Consumed::new(start + n, values))
}

fn variadic(tokens: &[String], start: usize) -> (usize, Vec<String>) {
    let mut values = Vec::default();
    let mut cursor = start;

    while cursor < tokens.len() {
        let token = &tokens[cursor];
        cursor += 1;

        if cursor == tokens.len() {
            // The final token of the input is taken verbatim.
            values.push(token.clone());
            break;
        }

        match token.strip_suffix(MARKER) {
            Some(stripped) => {
                values.push(stripped.to_string());
                break;
            }
            None => values.push(token.clone()),
        }
    }

    (cursor, values)
}

/// Collect a literal run starting at `start`, up to and excluding the sentinel.
///
/// Returns the cursor just past the sentinel (or the end of the input, if the run is never closed) and the run joined with spaces.
pub(crate) fn literal_run(tokens: &[String], start: usize) -> (usize, String) {
    let mut parts: Vec<&str> = Vec::default();
    let mut cursor = start;

    while cursor < tokens.len() {
        let token = &tokens[cursor];
        cursor += 1;

        if token.eq_ignore_ascii_case(SENTINEL) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Literal run [{start}, {cursor}) closed by '{token}'.");
            }

            return (cursor, parts.join(" "));
        }

        parts.push(unescape(token));
    }

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Literal run [{start}, {cursor}) reached the end of the input.");
    }

    (cursor, parts.join(" "))
}

// Undo one level of sentinel escaping: "kk." -> "k.", "kkk." -> "kk.".
fn unescape(token: &str) -> &str {
    match token.strip_suffix(MARKER) {
        Some(letters)
            if letters.len() >= 2
                && letters
                    .chars()
                    .all(|c| c.eq_ignore_ascii_case(&SENTINEL_LETTER)) =>
        {
            &token[1..]
        }
        _ => token,
    }
}
