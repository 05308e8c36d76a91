//! Whitespace-token search over product names.

use serde::{Deserialize, Serialize};

/// A parsed search query.
///
/// The text is split on whitespace; a name matches when it contains every
/// token as a case-insensitive substring, in any order. Tokens are literal,
/// so `.` or `(` match only themselves. A blank query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    tokens: Vec<String>,
}

impl Query {
    /// Parses search text into lowercase tokens.
    pub fn parse(text: &str) -> Self {
        Self {
            tokens: text.split_whitespace().map(str::to_lowercase).collect(),
        }
    }

    /// The lowercase tokens, in input order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Returns true when the query has no tokens.
    pub fn is_blank(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Checks whether `text` contains every token.
    pub fn matches(&self, text: &str) -> bool {
        if self.is_blank() {
            return true;
        }
        let haystack = text.to_lowercase();
        self.tokens.iter().all(|token| haystack.contains(token.as_str()))
    }
}

impl From<&str> for Query {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}
