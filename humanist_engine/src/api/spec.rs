use crate::matcher::OptionConfig;
use crate::model::{Arity, Settings};

/// One entry of the option table: a name, how many tokens it consumes, and its settings.
///
/// Names are matched case-insensitively, but results are keyed by the name exactly as declared here.
///
/// ### Example
/// ```
/// # use humanist_engine as humanist;
/// use humanist::{Arity, OptionSpec};
///
/// let save = OptionSpec::flag("save");
/// let send = OptionSpec::fixed("send", 3);
/// let title = OptionSpec::variadic("title").join();
///
/// assert_eq!(save.arity(), Arity::Flag);
/// assert_eq!(send.arity(), Arity::Fixed(3));
/// assert!(title.get_settings().join);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OptionSpec {
    name: String,
    arity: Arity,
    settings: Settings,
}

impl OptionSpec {
    /// Create an option with the given arity and default settings.
    pub fn new(name: impl Into<String>, arity: Arity) -> Self {
        Self {
            name: name.into(),
            arity,
            settings: Settings::default(),
        }
    }

    /// Create an [`Arity::Flag`] option.
    pub fn flag(name: impl Into<String>) -> Self {
        Self::new(name, Arity::Flag)
    }

    /// Create an [`Arity::Single`] option.
    pub fn single(name: impl Into<String>) -> Self {
        Self::new(name, Arity::Single)
    }

    /// Create an [`Arity::Fixed`] option.
    /// `n` must be at least 2, which is checked when the parser is built.
    pub fn fixed(name: impl Into<String>, n: usize) -> Self {
        Self::new(name, Arity::Fixed(n))
    }

    /// Create an [`Arity::Variadic`] option.
    pub fn variadic(name: impl Into<String>) -> Self {
        Self::new(name, Arity::Variadic)
    }

    /// Join the tokens of a variadic run into one space separated string.
    pub fn join(mut self) -> Self {
        self.settings.join = true;
        self
    }

    /// Replace the settings wholesale.
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// The declared name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared arity.
    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// The declared settings.
    pub fn get_settings(&self) -> Settings {
        self.settings
    }
}

impl<N: Into<String>> From<(N, Arity)> for OptionSpec {
    fn from((name, arity): (N, Arity)) -> Self {
        OptionSpec::new(name, arity)
    }
}

impl<N: Into<String>> From<(N, Arity, Settings)> for OptionSpec {
    fn from((name, arity, settings): (N, Arity, Settings)) -> Self {
        OptionSpec::new(name, arity).settings(settings)
    }
}

/// Counts follow [`Arity`]'s `From<usize>`: `0` is a flag, `1` a single argument, anything else a fixed group.
impl<N: Into<String>> From<(N, usize)> for OptionSpec {
    fn from((name, count): (N, usize)) -> Self {
        OptionSpec::new(name, Arity::from(count))
    }
}

impl From<&OptionSpec> for OptionConfig {
    fn from(value: &OptionSpec) -> Self {
        OptionConfig::new(value.name.clone(), value.arity, value.settings)
    }
}
