//! Stop filter implementation.
//!
//! This module provides a filter that removes common words (stop words) that
//! typically carry little descriptive value. Matching is case-insensitive
//! whether or not the tokens were lowercased earlier in the pipeline.
//!
//! # Examples
//!
//! ```
//! use textlens::analysis::token_filter::Filter;
//! use textlens::analysis::token_filter::stop::StopFilter;
//! use textlens::analysis::token::Token;
//!
//! let filter = StopFilter::new(); // Uses the default stop word set
//! let tokens = vec![
//!     Token::new("The", 0),
//!     Token::new("quick", 1),
//!     Token::new("brown", 2),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! // "The" is removed as a stop word despite its casing
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "quick");
//! assert_eq!(result[1].text, "brown");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default stop words list.
///
/// Common English words that are filtered out when stop-word removal is
/// enabled.
const DEFAULT_STOP_WORDS: &[&str] = &["the", "is", "at", "which", "on", "a", "an", "and", "it"];

/// Default stop words as a HashSet.
pub static DEFAULT_STOP_WORDS_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| DEFAULT_STOP_WORDS.iter().map(|&s| s.to_string()).collect());

/// A filter that removes stop words from the token stream.
///
/// The stop word set is stored lowercased and tokens are lowercased before
/// lookup, so removal does not depend on whether a
/// [`LowercaseFilter`](super::lowercase::LowercaseFilter) ran earlier.
///
/// Applying this filter twice yields the same result as applying it once.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove, case-folded
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the default stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use textlens::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::new();
    /// assert!(filter.is_stop_word("the"));
    /// assert!(filter.is_stop_word("WHICH"));
    /// assert!(!filter.is_stop_word("hello"));
    /// ```
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stop words.
    ///
    /// The words are case-folded on the way in.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        let stop_words = stop_words.into_iter().map(|w| w.to_lowercase()).collect();
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use textlens::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["foo", "bar", "baz"]);
    /// assert_eq!(filter.len(), 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Check if a word is a stop word (case-insensitive).
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_stop_filter() {
        let filter = StopFilter::new();
        let tokens = vec![
            Token::new("cat", 0),
            Token::new("and", 1),
            Token::new("dog", 2),
            Token::new("on", 3),
            Token::new("mat", 4),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "cat");
        assert_eq!(result[1].text, "dog");
        assert_eq!(result[2].text, "mat");
    }

    #[test]
    fn test_case_insensitive_matching() {
        let filter = StopFilter::new();
        let tokens = vec![
            Token::new("The", 0),
            Token::new("Cat", 1),
            Token::new("AND", 2),
        ];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "Cat");
    }

    #[test]
    fn test_idempotent() {
        let filter = StopFilter::new();
        let tokens = vec![
            Token::new("the", 0),
            Token::new("cat", 1),
            Token::new("sat", 2),
        ];

        let once: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();
        let twice: Vec<Token> = filter
            .filter(Box::new(once.clone().into_iter()))
            .unwrap()
            .collect();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_custom_words_case_folded() {
        let filter = StopFilter::from_words(vec!["Foo", "BAR"]);
        assert!(filter.is_stop_word("foo"));
        assert!(filter.is_stop_word("Bar"));
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopFilter::new().name(), "stop");
    }
}
