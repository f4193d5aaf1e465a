/// The reserved record key collecting tokens no option or custom parser claimed.
pub const CATCH_ALL: &str = "_";

/// The token closing a literal run, compared case-insensitively.
pub const SENTINEL: &str = "k.";

pub(crate) const MARKER: char = '.';
pub(crate) const SENTINEL_LETTER: char = 'k';
