//! Symbol tokens

use std::fmt;

use serde::{Deserialize, Serialize};

/// Token reserved for the wild symbol
pub const WILD_SYMBOL: &str = "X";

/// An opaque slot symbol (e.g., "A", "K", "10", "X")
///
/// Symbols carry no behavior of their own. The wild is an ordinary token
/// that the pay table treats as "matches anything".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol from any token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The conventional wild symbol
    pub fn wild() -> Self {
        Self(WILD_SYMBOL.to_string())
    }

    /// Token text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Empty token, used by blank grids
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<String> for Symbol {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Symbol {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Symbol {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Build a symbol list from string tokens
pub fn symbols(tokens: &[&str]) -> Vec<Symbol> {
    tokens.iter().map(|&t| Symbol::from(t)).collect()
}
