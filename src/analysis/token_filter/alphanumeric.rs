//! Alphanumeric filter implementation.

use regex::Regex;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::{Result, TextLensError};

/// A filter that keeps only ASCII letters, digits, and apostrophes in each
/// token.
///
/// Same contract as [`AlphaFilter`](super::alpha::AlphaFilter) except digits
/// survive. Tokens reduced to the empty string are dropped.
#[derive(Clone, Debug)]
pub struct AlphanumericFilter {
    pattern: Regex,
}

impl AlphanumericFilter {
    /// Create a new alphanumeric filter.
    pub fn new() -> Result<Self> {
        Ok(AlphanumericFilter {
            pattern: Regex::new(r"[^A-Za-z0-9']")
                .map_err(|e| TextLensError::analysis(e.to_string()))?,
        })
    }
}

impl Filter for AlphanumericFilter {
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
        "alphanumeric"
    }
}
