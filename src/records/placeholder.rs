use std::fmt;
use std::str::FromStr;

use super::{is_line_break, RecordError};

/// Token written for slot 0 of a serialized layout.
///
/// Defaults to `0`, the value lookup tables built from grapheme-break data
/// expect at index 0. A record equal to the token would be indistinguishable
/// from the placeholder, so callers must reject such input (see
/// [`Placeholder::matches`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placeholder(String);

impl Placeholder {
    /// Token used when none is configured
    pub const DEFAULT_TOKEN: &'static str = "0";

    /// Create a placeholder from `token`.
    ///
    /// The token must fit on a single line.
    pub fn new(token: impl Into<String>) -> Result<Self, RecordError> {
        let token = token.into();
        if token.contains(is_line_break) {
            return Err(RecordError::InvalidPlaceholder(token));
        }
        Ok(Self(token))
    }

    /// Serialized form
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `record` would serialize identically to this placeholder
    pub fn matches(&self, record: &str) -> bool {
        self.0 == record
    }

    /// Owned token, ready to occupy slot 0 of a `String` layout
    pub fn into_token(self) -> String {
        self.0
    }
}

impl Default for Placeholder {
    fn default() -> Self {
        Self(Self::DEFAULT_TOKEN.to_string())
    }
}

impl FromStr for Placeholder {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
