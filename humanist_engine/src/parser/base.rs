use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::matcher::*;
use crate::parser::Record;
use crate::prelude::CustomParser;

/// An invalid option table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// Why a command could not be parsed.
/// A failed parse never produces a partial [`Record`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The option table is invalid.
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// A single argument option was the final token.
    #[error("Cannot read command line option {option} which takes 1 argument.")]
    MissingArgument {
        /// The option's declared name.
        option: String,
    },

    /// A fixed arity option ran out of tokens.
    #[error("Option {option} needs {required} arguments, found {found}.")]
    InsufficientArguments {
        /// The option's declared name.
        option: String,
        /// The declared argument count.
        required: usize,
        /// The number of tokens remaining after the option.
        found: usize,
    },

    /// A fixed arity option saw a terminating period before its final argument.
    #[error(
        "Option {option} needs {required} arguments, but was terminated prematurely with a period."
    )]
    PrematureTermination {
        /// The option's declared name.
        option: String,
        /// The declared argument count.
        required: usize,
    },
}

pub(crate) struct Parser<'a> {
    table: OptionTable,
    custom: Option<Box<dyn CustomParser + 'a>>,
}

impl<'a> std::fmt::Debug for Parser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("table", &self.table)
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

impl<'a> Parser<'a> {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self {
            table: OptionTable::empty(),
            custom: None,
        }
    }

    pub(crate) fn new(
        options: Vec<OptionConfig>,
        custom: Option<Box<dyn CustomParser + 'a>>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            table: OptionTable::new(options)?,
            custom,
        })
    }

    pub(crate) fn consume(&self, tokens: &[String]) -> Result<Record, ParseError> {
        walk(&self.table, self.custom.as_deref(), tokens)
    }
}

/// Walk the tokens with a single forward cursor.
///
/// At each position the custom parser (if any) gets the first refusal.
/// Otherwise the token is matched against the table and dispatched by arity, or else collected into the catch-all.
pub(crate) fn walk(
    table: &OptionTable,
    custom: Option<&dyn CustomParser>,
    tokens: &[String],
) -> Result<Record, ParseError> {
    let mut record = Record::new();
    let mut cursor = 0;

    while cursor < tokens.len() {
        let token = &tokens[cursor];

        if let Some(custom) = custom {
            if let Some((next, replacement)) = custom.intercept(token, cursor, tokens, &record) {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Custom parser took '{token}' at {cursor}, resuming at {next}.");
                }

                cursor = next;
                record = replacement;
                continue;
            }
        }

        match table.find(token) {
            Some(config) => {
                let (_, marked) = strip_marker(token);
                let Consumed { next, value } = dispatch(config, marked, tokens, cursor)?;

                #[cfg(feature = "tracing_debug")]
                {
                    debug!(
                        "Option '{name}' ({arity}) consumed [{cursor}, {next}): {value:?}.",
                        name = config.name(),
                        arity = config.arity(),
                    );
                }

                record.assign(config.name(), value);
                cursor = next;
            }
            None => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Unmatched '{token}' at {cursor}.");
                }

                record.push_rest(token.as_str());
                cursor += 1;
            }
        }
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::CATCH_ALL;
    use crate::model::{Arity, Settings};
    use crate::parser::Value;
    use rstest::rstest;

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(|t| t.to_string()).collect()
    }

    fn parser<'a>(options: Vec<(&str, Arity)>) -> Parser<'a> {
        Parser::new(
            options
                .into_iter()
                .map(|(name, arity)| OptionConfig::new(name, arity, Settings::default()))
                .collect(),
            None,
        )
        .unwrap()
    }

    #[test]
    fn consume_empty() {
        let record = Parser::empty().consume(&[]).unwrap();
        assert_eq!(record, Record::new());
    }

    #[rstest]
    #[case(vec!["lorem"], vec!["lorem"])]
    #[case(vec!["lorem", "ipsum."], vec!["lorem", "ipsum."])]
    #[case(vec!["k.", "kk."], vec!["k.", "kk."])]
    fn consume_unmatched(#[case] input: Vec<&str>, #[case] expected: Vec<&str>) {
        let record = Parser::empty().consume(&tokens(&input)).unwrap();
        assert_eq!(record.rest(), expected.as_slice());
        assert_eq!(record.len(), 1);
    }

    #[rstest]
    #[case(vec!["save"])]
    #[case(vec!["save", "save", "save"])]
    #[case(vec!["Save.", "SAVE"])]
    fn consume_flag(#[case] input: Vec<&str>) {
        let record = parser(vec![("save", Arity::Flag)])
            .consume(&tokens(&input))
            .unwrap();
        assert_eq!(record.get("save"), Some(&Value::Bool(true)));
        assert!(record.rest().is_empty());
    }

    #[test]
    fn consume_mixed() {
        let parser = parser(vec![
            ("save", Arity::Flag),
            ("comments", Arity::Single),
            ("send", Arity::Fixed(3)),
            ("title", Arity::Variadic),
        ]);
        let input = tokens(&[
            "lorem", "comments", "off", "title", "Hello", "world.", "save", "ipsum", "send",
            "alice", "bob", "carol.", "dolor",
        ]);

        let record = parser.consume(&input).unwrap();

        assert!(record.flag("save"));
        assert_eq!(record.text("comments"), Some("off"));
        assert_eq!(record.get("title"), Some(&Value::from(vec!["Hello", "world"])));
        assert_eq!(
            record.get("send"),
            Some(&Value::from(vec!["alice", "bob", "carol"]))
        );
        assert_eq!(
            record.get(CATCH_ALL),
            Some(&Value::from(vec!["lorem", "ipsum", "dolor"]))
        );
        assert_eq!(record.len(), 5);
    }

    #[test]
    fn consume_declared_name() {
        let record = parser(vec![("Comments", Arity::Single)])
            .consume(&tokens(&["COMMENTS", "off"]))
            .unwrap();
        assert_eq!(record.text("Comments"), Some("off"));
        assert!(!record.contains("COMMENTS"));
    }

    #[test]
    fn consume_shadowed() {
        let parser = Parser::new(
            vec![
                OptionConfig::new("send", Arity::Single, Settings::default()),
                OptionConfig::new("send", Arity::Variadic, Settings { join: true }),
            ],
            None,
        )
        .unwrap();

        let record = parser.consume(&tokens(&["send", "alice", "bob"])).unwrap();

        assert_eq!(record.text("send"), Some("alice"));
        assert_eq!(record.rest(), &["bob".to_string()]);
    }

    #[test]
    fn consume_error() {
        let parser = parser(vec![("save", Arity::Flag), ("send", Arity::Fixed(2))]);
        let error = parser
            .consume(&tokens(&["save", "send", "alice"]))
            .unwrap_err();
        assert_matches!(error, ParseError::InsufficientArguments { found: 1, .. });
    }

    #[test]
    fn consume_custom() {
        let custom = |token: &str, index: usize, _: &[String], record: &Record| {
            if token == "skip" {
                let mut record = record.clone();
                record.insert("skipped", index.to_string());
                Some((index + 2, record))
            } else {
                None
            }
        };
        let parser = Parser::new(vec![], Some(Box::new(custom))).unwrap();

        let record = parser
            .consume(&tokens(&["lorem", "skip", "ipsum", "dolor"]))
            .unwrap();

        assert_eq!(record.text("skipped"), Some("1"));
        assert_eq!(record.rest(), &["lorem".to_string(), "dolor".to_string()]);
    }

    #[rstest]
    #[case(ParseError::MissingArgument { option: "comments".to_string() }, "Cannot read command line option comments which takes 1 argument.")]
    #[case(ParseError::InsufficientArguments { option: "send".to_string(), required: 3, found: 2 }, "Option send needs 3 arguments, found 2.")]
    #[case(ParseError::PrematureTermination { option: "send".to_string(), required: 3 }, "Option send needs 3 arguments, but was terminated prematurely with a period.")]
    #[case(ParseError::from(ConfigError("abc".to_string())), "Config error: abc")]
    fn parse_error_message(#[case] error: ParseError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }
}
