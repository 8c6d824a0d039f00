//! Exclusion filter implementation.
//!
//! This module provides a filter built from a caller-supplied word list,
//! typically words a user typed into an "exclude these" form field. The list
//! is case-folded once at construction time; the resulting set is immutable.
//!
//! # Examples
//!
//! ```
//! use textlens::analysis::token_filter::Filter;
//! use textlens::analysis::token_filter::exclusion::ExclusionFilter;
//! use textlens::analysis::token::Token;
//!
//! let filter = ExclusionFilter::from_words(vec!["b", "c"]);
//! let tokens = vec![
//!     Token::new("a", 0),
//!     Token::new("b", 1),
//!     Token::new("c", 2),
//!     Token::new("d", 3),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "a");
//! assert_eq!(result[1].text, "d");
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes tokens matching a caller-supplied exclusion set.
///
/// Matching is case-insensitive: the set is lowercased at construction and
/// tokens are lowercased before lookup. An empty word list yields a filter
/// that passes every token through, not an error.
#[derive(Clone, Debug)]
pub struct ExclusionFilter {
    /// The case-folded set of words to exclude
    excluded: Arc<HashSet<String>>,
}

impl ExclusionFilter {
    /// Create a new exclusion filter from a list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let excluded = words
            .into_iter()
            .map(|w| w.into().to_lowercase())
            .collect();
        ExclusionFilter {
            excluded: Arc::new(excluded),
        }
    }

    /// Check if a word is excluded (case-insensitive).
    pub fn is_excluded(&self, word: &str) -> bool {
        self.excluded.contains(&word.to_lowercase())
    }

    /// Get the number of excluded words.
    pub fn len(&self) -> usize {
        self.excluded.len()
    }

    /// Check if the exclusion set is empty.
    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty()
    }
}

impl Filter for ExclusionFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        // An empty set matches nothing, so this degenerates to identity.
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !self.is_excluded(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "exclusion"
    }
}
