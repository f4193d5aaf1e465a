use std::collections::HashMap;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::constant::{CATCH_ALL, MARKER};
use crate::model::{Arity, Settings};
use crate::parser::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct OptionConfig {
    name: String,
    arity: Arity,
    settings: Settings,
}

impl OptionConfig {
    pub(crate) fn new(name: impl Into<String>, arity: Arity, settings: Settings) -> Self {
        Self {
            name: name.into(),
            arity,
            settings,
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn arity(&self) -> Arity {
        self.arity
    }

    pub(crate) fn settings(&self) -> Settings {
        self.settings
    }
}

/// The option configs, with a case-folded index over their names.
/// When names repeat, the first config wins and later ones are never matched.
#[derive(Debug, Clone)]
pub(crate) struct OptionTable {
    configs: Vec<OptionConfig>,
    lookup: HashMap<String, usize>,
}

impl OptionTable {
    pub(crate) fn new(configs: Vec<OptionConfig>) -> Result<Self, ConfigError> {
        let mut lookup = HashMap::default();

        for (index, config) in configs.iter().enumerate() {
            let name = config.name();

            if name.trim().is_empty() {
                return Err(ConfigError(format!(
                    "option names cannot be empty (found '{name}')."
                )));
            }

            if name.contains(' ') {
                return Err(ConfigError(format!(
                    "option '{name}' cannot contain a space; it would never match a token."
                )));
            }

            if name.eq_ignore_ascii_case(CATCH_ALL) {
                return Err(ConfigError(format!(
                    "option '{name}' collides with the reserved catch-all key '{CATCH_ALL}'."
                )));
            }

            config.arity().validate(name)?;

            let folded = name.to_lowercase();
            if lookup.contains_key(&folded) {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Option '{name}' (#{index}) is shadowed by an earlier option of the same name.");
                }
            } else {
                lookup.insert(folded, index);
            }
        }

        Ok(Self { configs, lookup })
    }

    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self {
            configs: Vec::default(),
            lookup: HashMap::default(),
        }
    }

    /// Find the option named by `token`, ignoring case and one trailing marker.
    pub(crate) fn find(&self, token: &str) -> Option<&OptionConfig> {
        let (name, _) = strip_marker(token);
        self.lookup
            .get(&name.to_lowercase())
            .map(|index| &self.configs[*index])
    }
}

/// Split off exactly one trailing marker, reporting whether it was there.
pub(crate) fn strip_marker(token: &str) -> (&str, bool) {
    match token.strip_suffix(MARKER) {
        Some(stripped) => (stripped, true),
        None => (token, false),
    }
}
