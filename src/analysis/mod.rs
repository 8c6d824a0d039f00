//! Text analysis module for textlens.
//!
//! This module provides the core text analysis functionality: tokenization
//! and the token filter library that pipeline steps are built from.

pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
