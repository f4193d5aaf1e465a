use crate::api::OptionSpec;
use crate::matcher::{OptionConfig, OptionTable};
use crate::parser::{walk, ConfigError, Input, ParseError, Parser, Record};
use crate::prelude::CustomParser;

/// The command parser builder.
///
/// ### Example
/// ```
/// # use humanist_engine as humanist;
/// use humanist::CommandParser;
///
/// let parser = CommandParser::new()
///     // Configure with CommandParser::add and CommandParser::custom.
///     .build()
///     .unwrap();
/// let record = parser.parse("lorem ipsum").unwrap();
/// assert_eq!(record.rest(), &["lorem".to_string(), "ipsum".to_string()]);
/// ```
#[derive(Default)]
pub struct CommandParser<'a> {
    options: Vec<OptionSpec>,
    custom: Option<Box<dyn CustomParser + 'a>>,
}

impl<'a> std::fmt::Debug for CommandParser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandParser")
            .field("options", &self.options)
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

impl<'a> CommandParser<'a> {
    /// Create a command parser with no options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option to the table.
    ///
    /// The order matters only when names repeat (ignoring case): the first option added wins, and later ones are never matched.
    ///
    /// ### Example
    /// ```
    /// # use humanist_engine as humanist;
    /// use humanist::{CommandParser, OptionSpec};
    ///
    /// let parser = CommandParser::new()
    ///     .add(OptionSpec::flag("save"))
    ///     .add(OptionSpec::single("comments"))
    ///     .add(("send", 3))
    ///     .build()
    ///     .unwrap();
    ///
    /// let record = parser.parse("comments off. Save send alice bob carol").unwrap();
    ///
    /// assert!(record.flag("save"));
    /// assert_eq!(record.text("comments"), Some("off"));
    /// assert_eq!(record.list("send").unwrap(), &["alice", "bob", "carol"]);
    /// ```
    pub fn add(mut self, option: impl Into<OptionSpec>) -> Self {
        self.options.push(option.into());
        self
    }

    /// Consult `custom` at every token, before the option table.
    /// If repeated, only the final custom parser will apply.
    ///
    /// ### Example
    /// ```
    /// # use humanist_engine as humanist;
    /// use humanist::{CommandParser, OptionSpec};
    ///
    /// let parser = CommandParser::new()
    ///     .add(OptionSpec::variadic("send"))
    ///     .custom(|token, index, _tokens, record| {
    ///         let handle = token.strip_prefix('@')?;
    ///         let mut record = record.clone();
    ///         record.assign("mentions", handle);
    ///         Some((index + 1, record))
    ///     })
    ///     .build()
    ///     .unwrap();
    ///
    /// let record = parser.parse("@alice send bob @carol").unwrap();
    ///
    /// // The variadic run claims "@carol" before the custom parser sees it.
    /// assert_eq!(record.text("mentions"), Some("alice"));
    /// assert_eq!(record.list("send").unwrap(), &["bob", "@carol"]);
    /// ```
    pub fn custom<F>(self, custom: F) -> Self
    where
        F: Fn(&str, usize, &[String], &Record) -> Option<(usize, Record)> + 'a,
    {
        self.custom_parser(custom)
    }

    /// Like [`CommandParser::custom`], for types implementing [`CustomParser`].
    pub fn custom_parser(mut self, custom: impl CustomParser + 'a) -> Self {
        self.custom.replace(Box::new(custom));
        self
    }

    /// Build the command parser.
    /// This finalizes the option table and checks for errors (ex: a `Fixed` arity below 2).
    pub fn build(self) -> Result<HumanParser<'a>, ConfigError> {
        let configs = self.options.iter().map(OptionConfig::from).collect();
        Ok(HumanParser {
            parser: Parser::new(configs, self.custom)?,
        })
    }
}

/// The configured command parser.
/// Built via [`CommandParser::build`].
///
/// Parsing never mutates the parser, so one instance may serve any number of inputs.
#[derive(Debug)]
pub struct HumanParser<'a> {
    parser: Parser<'a>,
}

impl<'a> HumanParser<'a> {
    /// Parse a command, given as text or as tokens.
    pub fn parse(&self, input: impl Into<Input>) -> Result<Record, ParseError> {
        self.parser.consume(&input.into().tokenize())
    }

    /// Parse a command which is already tokenized.
    pub fn parse_tokens(&self, tokens: &[&str]) -> Result<Record, ParseError> {
        self.parse(tokens)
    }
}

/// Parse `input` against the option table `options`, in a single call.
///
/// The table is checked on every call; a bad table is reported as [`ParseError::Configuration`].
/// Prefer [`CommandParser`] to check the table once and reuse it.
///
/// ### Example
/// ```
/// # use humanist_engine as humanist;
/// use humanist::{parse, OptionSpec};
///
/// let options = [OptionSpec::variadic("title"), OptionSpec::variadic("send")];
/// let record = parse(&options, None, "title Hello world. lorem send alice bob").unwrap();
///
/// assert_eq!(record.list("title").unwrap(), &["Hello", "world"]);
/// assert_eq!(record.list("send").unwrap(), &["alice", "bob"]);
/// assert_eq!(record.rest(), &["lorem"]);
/// ```
pub fn parse(
    options: &[OptionSpec],
    custom: Option<&dyn CustomParser>,
    input: impl Into<Input>,
) -> Result<Record, ParseError> {
    let table = OptionTable::new(options.iter().map(OptionConfig::from).collect())?;
    walk(&table, custom, &input.into().tokenize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Arity;
    use crate::parser::Value;
    use crate::test::assert_contains;
    use rstest::rstest;

    #[test]
    fn empty_build() {
        // Setup
        let parser = CommandParser::new().build().unwrap();

        // Execute
        let record = parser.parse_tokens(&[]).unwrap();

        // Verify
        assert_eq!(record, Record::new());
    }

    #[rstest]
    #[case(OptionSpec::fixed("send", 1), "'send'")]
    #[case(OptionSpec::flag(""), "cannot be empty")]
    #[case(OptionSpec::flag("_"), "catch-all")]
    fn build_invalid(#[case] option: OptionSpec, #[case] message: &str) {
        let error = CommandParser::new()
            .add(OptionSpec::flag("save"))
            .add(option)
            .build()
            .unwrap_err();
        assert_contains!(error.to_string(), message);
    }

    #[rstest]
    #[case("comments off", "off")]
    #[case("comments off.", "off")]
    #[case("Comments off...", "off..")]
    #[case("comments. hello. world k.", "hello. world")]
    fn parse_single(#[case] input: &str, #[case] expected: &str) {
        let parser = CommandParser::new()
            .add(OptionSpec::single("comments"))
            .build()
            .unwrap();
        let record = parser.parse(input).unwrap();
        assert_eq!(record.text("comments"), Some(expected));
    }

    #[rstest]
    #[case(vec!["send", "alice bob"], vec!["alice bob"])]
    #[case(vec!["send", "alice", "bob"], vec!["alice", "bob"])]
    fn parse_tokens(#[case] tokens: Vec<&str>, #[case] expected: Vec<&str>) {
        let parser = CommandParser::new()
            .add(OptionSpec::variadic("send"))
            .build()
            .unwrap();
        let record = parser.parse_tokens(&tokens).unwrap();
        assert_eq!(record.get("send"), Some(&Value::from(expected)));
    }

    #[test]
    fn parse_reuse() {
        let parser = CommandParser::new()
            .add(OptionSpec::single("comments"))
            .build()
            .unwrap();

        assert_eq!(parser.parse("comments on").unwrap().text("comments"), Some("on"));
        assert_eq!(parser.parse("comments off").unwrap().text("comments"), Some("off"));
        assert_matches!(
            parser.parse("comments"),
            Err(ParseError::MissingArgument { option }) if option == "comments"
        );
    }

    #[test]
    fn custom_last_wins() {
        let parser = CommandParser::new()
            .custom(|_, _, _, _| None)
            .custom(|_, _, tokens, record| Some((tokens.len(), record.clone())))
            .build()
            .unwrap();

        let record = parser.parse("lorem ipsum").unwrap();
        assert_eq!(record, Record::new());
    }

    #[test]
    fn custom_borrows() {
        let prefix = String::from("#");
        let parser = CommandParser::new()
            .custom(|token, index, _, record| {
                let tag = token.strip_prefix(prefix.as_str())?;
                let mut record = record.clone();
                record.assign("tags", vec![tag]);
                Some((index + 1, record))
            })
            .build()
            .unwrap();

        let record = parser.parse("#a lorem #b").unwrap();
        assert_eq!(record.list("tags").unwrap(), &["a", "b"]);
        assert_eq!(record.rest(), &["lorem"]);
    }

    #[test]
    fn parse_function() {
        let options = [
            OptionSpec::new("save", Arity::Flag),
            OptionSpec::from(("send", 2)),
        ];
        let custom = |token: &str, _: usize, _: &[String], record: &Record| {
            (token == "stop").then(|| (usize::MAX, record.clone()))
        };

        let record = parse(&options, Some(&custom), "save send a b. stop save lorem").unwrap();

        assert!(record.flag("save"));
        assert_eq!(record.list("send").unwrap(), &["a", "b"]);
        assert!(record.rest().is_empty());
    }

    #[test]
    fn parse_function_invalid() {
        let options = [OptionSpec::fixed("send", 0)];
        assert_matches!(
            parse(&options, None, "send"),
            Err(ParseError::Configuration(_))
        );
    }
}
