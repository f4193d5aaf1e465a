/// Command input: either a line of text, or tokens which are already split.
///
/// Only strings and sequences of strings convert into an `Input`, so there is no way to hand the parser anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Split on single spaces, dropping empty and whitespace-only segments.
    Text(String),
    /// Used as-is, apart from dropping empty and whitespace-only tokens.
    Tokens(Vec<String>),
}

impl Input {
    pub(crate) fn tokenize(self) -> Vec<String> {
        match self {
            Input::Text(text) => text
                .split(' ')
                .filter(|segment| !segment.trim().is_empty())
                .map(str::to_string)
                .collect(),
            Input::Tokens(tokens) => tokens
                .into_iter()
                .filter(|token| !token.trim().is_empty())
                .collect(),
        }
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Input::Text(value.to_string())
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Input::Text(value)
    }
}

impl From<&String> for Input {
    fn from(value: &String) -> Self {
        Input::Text(value.clone())
    }
}

impl From<Vec<String>> for Input {
    fn from(value: Vec<String>) -> Self {
        Input::Tokens(value)
    }
}

impl From<Vec<&str>> for Input {
    fn from(value: Vec<&str>) -> Self {
        Input::Tokens(value.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Input {
    fn from(value: &[&str]) -> Self {
        Input::Tokens(value.iter().map(|t| t.to_string()).collect())
    }
}

impl From<&[String]> for Input {
    fn from(value: &[String]) -> Self {
        Input::Tokens(value.to_vec())
    }
}
