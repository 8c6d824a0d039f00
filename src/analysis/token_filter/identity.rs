//! Identity filter implementation.

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// A filter that passes tokens through unchanged.
///
/// Useful as a labeled placeholder in a pipeline to force a snapshot at a
/// given position without transforming anything.
#[derive(Clone, Debug, Default)]
pub struct IdentityFilter;

impl IdentityFilter {
    /// Create a new identity filter.
    pub fn new() -> Self {
        IdentityFilter
    }
}

impl Filter for IdentityFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_identity_filter() {
        let filter = IdentityFilter::new();
        let tokens = vec![Token::new("hello", 0), Token::new("world", 1)];
        let token_stream = Box::new(tokens.clone().into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result, tokens);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(IdentityFilter::new().name(), "identity");
    }
}
