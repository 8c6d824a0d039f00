//! # textlens
//!
//! A small text-analysis library: tokenize raw text, run it through a
//! configurable chain of cleaning filters, and compute descriptive
//! statistics (word counts, frequency tables, Zipf rank-frequency data).
//!
//! ## Features
//!
//! - Whitespace tokenization with byte offsets into the source text
//! - Composable token filters (lowercase, character stripping, stop words,
//!   caller-supplied exclusion sets)
//! - A pipeline runner that records labeled snapshots of the token list
//!   after each step, for before/after comparison
//! - Frequency and Zipf statistics in a chart-ready shape

pub mod analysis;
pub mod error;
pub mod metrics;
pub mod pipeline;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
