mod base;
mod record;
mod tokens;

pub use base::{ConfigError, ParseError};
pub(crate) use base::{walk, Parser};
pub use record::{Record, Value};
pub use tokens::Input;
