//! Pipeline runner that sequences tokenization and filter steps.
//!
//! The runner owns a tokenizer and an ordered list of steps, each an
//! optionally labeled [`Filter`]. Running the pipeline tokenizes the input,
//! applies each filter in order, and records a snapshot of the token list
//! after every labeled step. The runner performs no filtering logic itself;
//! all semantics live in the steps.
//!
//! Tokenization is always performed by the runner, and the tokenizer may
//! itself carry a label so that it participates in the snapshot map as the
//! first step of the pipeline.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use textlens::analysis::token_filter::lowercase::LowercaseFilter;
//! use textlens::analysis::token_filter::stop::StopFilter;
//! use textlens::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//! use textlens::pipeline::Pipeline;
//!
//! let pipeline = Pipeline::new(Arc::new(WhitespaceTokenizer::new()))
//!     .add_labeled_step("x", Arc::new(LowercaseFilter::new()))
//!     .add_labeled_step("y", Arc::new(StopFilter::new()));
//!
//! let output = pipeline.run("a a b").unwrap();
//!
//! let final_words: Vec<_> = output.tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(final_words, ["b"]);
//! assert_eq!(output.snapshots["x"].len(), 3);
//! assert_eq!(output.snapshots["y"].len(), 1);
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::analysis::token::{IntoTokenStream, Token};
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A single pipeline step: an optional snapshot label paired with a filter.
#[derive(Clone)]
struct PipelineStep {
    label: Option<String>,
    filter: Arc<dyn Filter>,
}

/// The result of running a pipeline: the final token list and the snapshots
/// recorded after each labeled step.
#[derive(Clone, Debug, Default)]
pub struct PipelineOutput {
    /// The token list after the last step
    pub tokens: Vec<Token>,

    /// Token lists recorded immediately after each labeled step, keyed by label
    pub snapshots: HashMap<String, Vec<Token>>,
}

/// A configurable pipeline that combines a tokenizer with a chain of
/// optionally labeled filters.
#[derive(Clone)]
pub struct Pipeline {
    tokenizer: Arc<dyn Tokenizer>,
    tokenizer_label: Option<String>,
    steps: Vec<PipelineStep>,
}

impl Pipeline {
    /// Create a new pipeline with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Pipeline {
            tokenizer,
            tokenizer_label: None,
            steps: Vec::new(),
        }
    }

    /// Label the tokenization step so it records a snapshot like any other
    /// labeled step. An empty label leaves the step unlabeled.
    pub fn with_tokenizer_label<S: Into<String>>(mut self, label: S) -> Self {
        self.tokenizer_label = Self::non_empty(label.into());
        self
    }

    /// Add an unlabeled step to the pipeline. Unlabeled steps never appear
    /// in the snapshot map.
    pub fn add_step(mut self, filter: Arc<dyn Filter>) -> Self {
        self.steps.push(PipelineStep {
            label: None,
            filter,
        });
        self
    }

    /// Add a labeled step to the pipeline. After the step runs, the token
    /// list is recorded in the snapshot map under this label. Labels are
    /// assumed unique; a duplicate label overwrites the earlier entry. An
    /// empty label is treated as no label.
    pub fn add_labeled_step<S: Into<String>>(mut self, label: S, filter: Arc<dyn Filter>) -> Self {
        self.steps.push(PipelineStep {
            label: Self::non_empty(label.into()),
            filter,
        });
        self
    }

    fn non_empty(label: String) -> Option<String> {
        if label.is_empty() { None } else { Some(label) }
    }

    /// Get the tokenizer used by this pipeline.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the number of filter steps (tokenization excluded).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check whether the pipeline has no filter steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Get the labels of all labeled steps, in pipeline order, including the
    /// tokenizer label if set.
    pub fn labels(&self) -> Vec<&str> {
        self.tokenizer_label
            .iter()
            .chain(self.steps.iter().filter_map(|s| s.label.as_ref()))
            .map(|s| s.as_str())
            .collect()
    }

    /// Tokenize the input text and run every step in order.
    pub fn run(&self, text: &str) -> Result<PipelineOutput> {
        let tokens: Vec<Token> = self.tokenizer.tokenize(text)?.collect();

        let mut snapshots = HashMap::new();
        if let Some(label) = &self.tokenizer_label {
            snapshots.insert(label.clone(), tokens.clone());
        }

        let tokens = self.apply_steps(tokens, &mut snapshots)?;
        Ok(PipelineOutput { tokens, snapshots })
    }

    /// Run every step in order over already-tokenized input, skipping
    /// tokenization entirely. The tokenizer label records no snapshot in
    /// this mode.
    pub fn run_tokens(&self, tokens: Vec<Token>) -> Result<PipelineOutput> {
        let mut snapshots = HashMap::new();
        let tokens = self.apply_steps(tokens, &mut snapshots)?;
        Ok(PipelineOutput { tokens, snapshots })
    }

    fn apply_steps(
        &self,
        mut tokens: Vec<Token>,
        snapshots: &mut HashMap<String, Vec<Token>>,
    ) -> Result<Vec<Token>> {
        for step in &self.steps {
            tokens = step.filter.filter(tokens.into_token_stream())?.collect();
            if let Some(label) = &step.label {
                snapshots.insert(label.clone(), tokens.clone());
            }
        }
        Ok(tokens)
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("tokenizer", &self.tokenizer.name())
            .field("tokenizer_label", &self.tokenizer_label)
            .field(
                "steps",
                &self
                    .steps
                    .iter()
                    .map(|s| (s.label.as_deref(), s.filter.name()))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
