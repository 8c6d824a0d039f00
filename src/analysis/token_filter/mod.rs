//! Token filter implementations for token transformation.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// Filters are pure with respect to anything outside their input and output
/// streams: they hold no mutable state and may be shared across threads.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod alpha;
pub mod alphanumeric;
pub mod exclusion;
pub mod identity;
pub mod lowercase;
pub mod stop;

// Re-export all filters for convenient access
pub use alpha::AlphaFilter;
pub use alphanumeric::AlphanumericFilter;
pub use exclusion::ExclusionFilter;
pub use identity::IdentityFilter;
pub use lowercase::LowercaseFilter;
pub use stop::StopFilter;
