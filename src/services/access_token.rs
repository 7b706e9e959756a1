//! Static API tokens for the get-all-items route
//!
//! Plain membership check against a list loaded once at startup. Not a
//! cryptographic scheme; it only keeps casual scrapers off the full listing.

use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct TokenSet {
    tokens: HashSet<String>,
}

impl TokenSet {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
