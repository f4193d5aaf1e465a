use crate::parser::ConfigError;

/// The number of tokens an option consumes after its own name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// `0`: Presence alone sets the field to `true`.
    Flag,
    /// `1`: Precisely one following token.
    Single,
    /// `N`: Precisely `N` following tokens, where `N >= 2`.
    Fixed(usize),
    /// `∞`: A run of tokens, closed by a trailing period or the end of the input.
    Variadic,
}

impl Arity {
    pub(crate) fn validate(&self, name: &str) -> Result<(), ConfigError> {
        match self {
            Arity::Fixed(n) if *n < 2 => Err(ConfigError(format!(
                "option '{name}' declares Fixed({n}); fixed arities must take at least 2 arguments."
            ))),
            _ => Ok(()),
        }
    }
}

/// Convert a plain argument count into an arity.
/// There is no count for [`Arity::Variadic`]; use the variant directly.
impl From<usize> for Arity {
    fn from(value: usize) -> Self {
        match value {
            0 => Arity::Flag,
            1 => Arity::Single,
            n => Arity::Fixed(n),
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Per-option behaviour switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Settings {
    /// Join a [`Arity::Variadic`] run into a single space separated string.
    pub join: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, Arity::Flag)]
    #[case(1, Arity::Single)]
    #[case(2, Arity::Fixed(2))]
    #[case(7, Arity::Fixed(7))]
    fn from_count(#[case] count: usize, #[case] expected: Arity) {
        assert_eq!(Arity::from(count), expected);
    }

    #[rstest]
    #[case(Arity::Flag, true)]
    #[case(Arity::Single, true)]
    #[case(Arity::Fixed(0), false)]
    #[case(Arity::Fixed(1), false)]
    #[case(Arity::Fixed(2), true)]
    #[case(Arity::Variadic, true)]
    fn validate(#[case] arity: Arity, #[case] expected_ok: bool) {
        let result = arity.validate("send");

        if expected_ok {
            result.unwrap();
        } else {
            assert_matches!(result, Err(ConfigError(message)) => {
                crate::test::assert_contains!(message, "'send'");
            });
        }
    }

    #[test]
    fn display() {
        assert_eq!(Arity::Fixed(3).to_string(), "Fixed(3)");
        assert_eq!(Arity::Variadic.to_string(), "Variadic");
    }
}
