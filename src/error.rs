//! Error types for the textlens library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`TextLensError`] enum.
//!
//! # Examples
//!
//! ```
//! use textlens::error::{Result, TextLensError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TextLensError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for textlens operations.
#[derive(Error, Debug)]
pub enum TextLensError {
    /// I/O errors (surfaced by callers that read corpus files, never by the core)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Pipeline construction or execution errors
    #[error("Pipeline error: {0}")]
    Pipeline(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with TextLensError.
pub type Result<T> = std::result::Result<T, TextLensError>;

impl TextLensError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TextLensError::Analysis(msg.into())
    }

    /// Create a new pipeline error.
    pub fn pipeline<S: Into<String>>(msg: S) -> Self {
        TextLensError::Pipeline(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TextLensError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TextLensError::Other(msg.into())
    }
}
