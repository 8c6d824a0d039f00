//! Toggle-driven pipeline construction.
//!
//! A request handler typically receives a set of boolean toggles from a form
//! and needs a pipeline whose steps appear in a fixed relative order:
//! tokenize, strip punctuation, case-normalize, mark the cleaned state,
//! remove stop words, apply user exclusions. [`PipelineOptions`] captures
//! those toggles (it deserializes straight from JSON form data) and builds
//! the corresponding [`Pipeline`].
//!
//! # Examples
//!
//! ```
//! use textlens::pipeline::PipelineOptions;
//!
//! let options = PipelineOptions {
//!     remove_punctuation: true,
//!     lowercase: true,
//!     remove_stop_words: true,
//!     ..Default::default()
//! };
//!
//! let pipeline = options.build().unwrap();
//! let output = pipeline.run("The cat sat.").unwrap();
//!
//! let words: Vec<_> = output.tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(words, ["cat", "sat"]);
//! assert_eq!(output.snapshots["cleaned"].len(), 3);
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::alpha::AlphaFilter;
use crate::analysis::token_filter::alphanumeric::AlphanumericFilter;
use crate::analysis::token_filter::exclusion::ExclusionFilter;
use crate::analysis::token_filter::identity::IdentityFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::Result;
use crate::pipeline::runner::Pipeline;

/// Snapshot label recorded after tokenization.
pub const LABEL_TOKENIZED: &str = "tokenized";

/// Snapshot label recorded after stripping and case normalization.
pub const LABEL_CLEANED: &str = "cleaned";

/// Snapshot label recorded after stop-word removal.
pub const LABEL_STOP_WORDS_REMOVED: &str = "stop_words_removed";

/// Snapshot label recorded after the exclusion step.
pub const LABEL_EXCLUSIONS_APPLIED: &str = "exclusions_applied";

/// Toggles selecting which cleaning steps a pipeline should include.
///
/// Field defaults are all off / empty, so deserializing `{}` yields a
/// pipeline that only tokenizes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    /// Strip characters that are not letters or apostrophes
    pub remove_punctuation: bool,

    /// When stripping, also keep digits
    pub keep_digits: bool,

    /// Lowercase every token
    pub lowercase: bool,

    /// Remove the default stop words
    pub remove_stop_words: bool,

    /// Words to exclude, matched case-insensitively
    pub exclude: Vec<String>,
}

impl PipelineOptions {
    /// Build a [`Pipeline`] with the selected steps in the fixed relative
    /// order. The tokenizer and the post-normalization marker are always
    /// present and labeled; the stop-word and exclusion steps are labeled
    /// when included.
    pub fn build(&self) -> Result<Pipeline> {
        let mut pipeline = Pipeline::new(Arc::new(WhitespaceTokenizer::new()))
            .with_tokenizer_label(LABEL_TOKENIZED);

        if self.remove_punctuation {
            if self.keep_digits {
                pipeline = pipeline.add_step(Arc::new(AlphanumericFilter::new()?));
            } else {
                pipeline = pipeline.add_step(Arc::new(AlphaFilter::new()?));
            }
        }

        if self.lowercase {
            pipeline = pipeline.add_step(Arc::new(LowercaseFilter::new()));
        }

        pipeline = pipeline.add_labeled_step(LABEL_CLEANED, Arc::new(IdentityFilter::new()));

        if self.remove_stop_words {
            pipeline =
                pipeline.add_labeled_step(LABEL_STOP_WORDS_REMOVED, Arc::new(StopFilter::new()));
        }

        if !self.exclude.is_empty() {
            pipeline = pipeline.add_labeled_step(
                LABEL_EXCLUSIONS_APPLIED,
                Arc::new(ExclusionFilter::from_words(self.exclude.clone())),
            );
        }

        Ok(pipeline)
    }
}
