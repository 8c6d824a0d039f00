//! Alpha filter implementation.
//!
//! This module provides a filter that strips every character that is not an
//! ASCII letter or apostrophe from each token. Tokens that become empty are
//! removed from the stream, so punctuation-only tokens vanish entirely.
//!
//! # Examples
//!
//! ```
//! use textlens::analysis::token_filter::Filter;
//! use textlens::analysis::token_filter::alpha::AlphaFilter;
//! use textlens::analysis::token::Token;
//!
//! let filter = AlphaFilter::new().unwrap();
//! let tokens = vec![
//!     Token::new("sat.", 0),
//!     Token::new("don't", 1),
//!     Token::new("--", 2),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "sat");
//! assert_eq!(result[1].text, "don't");
//! ```

use regex::Regex;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::{Result, TextLensError};

/// A filter that keeps only ASCII letters and apostrophes in each token.
///
/// Tokens reduced to the empty string are dropped, so the output stream may
/// be shorter than the input stream.
#[derive(Clone, Debug)]
pub struct AlphaFilter {
    pattern: Regex,
}

impl AlphaFilter {
    /// Create a new alpha filter.
    pub fn new() -> Result<Self> {
        Ok(AlphaFilter {
            pattern: Regex::new(r"[^A-Za-z']")
                .map_err(|e| TextLensError::analysis(e.to_string()))?,
        })
    }
}

impl Filter for AlphaFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter_map(|token| {
                let cleaned = self.pattern.replace_all(&token.text, "");
                if cleaned.is_empty() {
                    None
                } else {
                    Some(token.with_text(cleaned))
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "alpha"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_alpha_filter() {
        let filter = AlphaFilter::new().unwrap();
        let tokens = vec![
            Token::new("The", 0),
            Token::new("cat", 1),
            Token::new("sat.", 2),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "The");
        assert_eq!(result[1].text, "cat");
        assert_eq!(result[2].text, "sat");
    }

    #[test]
    fn test_keeps_apostrophes() {
        let filter = AlphaFilter::new().unwrap();
        let tokens = vec![Token::new("don't!", 0)];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result[0].text, "don't");
    }

    #[test]
    fn test_drops_emptied_tokens() {
        let filter = AlphaFilter::new().unwrap();
        let tokens = vec![
            Token::new("hello", 0),
            Token::new("123", 1),
            Token::new("...", 2),
            Token::new("world", 3),
        ];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(AlphaFilter::new().unwrap().name(), "alpha");
    }
}
