//! Descriptive statistics over token lists and raw text.
//!
//! The functions here consume the output of the analysis pipeline and
//! produce plain values or chart-ready tables: word and character counts,
//! top-N frequency tables, and Zipf rank-frequency data.
//!
//! Ordering is deterministic: counting preserves first-appearance order, and
//! the descending-by-count sort is stable, so tied words keep the order in
//! which they first appeared in the input.
//!
//! # Examples
//!
//! ```
//! use textlens::analysis::token::Token;
//! use textlens::metrics;
//!
//! let tokens = vec![
//!     Token::new("b", 0),
//!     Token::new("a", 1),
//!     Token::new("b", 2),
//! ];
//!
//! assert_eq!(metrics::word_count(&tokens), 3);
//! assert_eq!(metrics::unique_word_count(&tokens), 2);
//!
//! let table = metrics::most_frequent_words(&tokens, 10);
//! assert_eq!(table.labels, ["b", "a"]);
//! assert_eq!(table.values, [2, 1]);
//! ```

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;

/// A table of the most frequent words, in a shape suitable for charts:
/// parallel label and value vectors, descending by count.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    /// Distinct words, most frequent first
    pub labels: Vec<String>,

    /// Occurrence counts, parallel to `labels`
    pub values: Vec<usize>,
}

impl FrequencyTable {
    /// Get the number of entries in the table.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate over (word, count) pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.labels
            .iter()
            .map(|s| s.as_str())
            .zip(self.values.iter().copied())
    }
}

/// Rank-frequency pairs for Zipf-law plotting: rank 1 is the most frequent
/// distinct word.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipfData {
    /// 1-based ranks by descending frequency
    pub ranks: Vec<usize>,

    /// Occurrence counts, parallel to `ranks`
    pub frequencies: Vec<usize>,
}

impl ZipfData {
    /// Get the number of distinct words ranked.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Check if the data is empty.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

/// Returns the total number of words.
pub fn word_count(tokens: &[Token]) -> usize {
    tokens.len()
}

/// Returns the number of distinct words (exact, case-sensitive match).
pub fn unique_word_count(tokens: &[Token]) -> usize {
    tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<AHashSet<_>>()
        .len()
}

/// Returns the total number of characters in the raw text, whitespace
/// included.
pub fn character_count(text: &str) -> usize {
    text.chars().count()
}

/// Returns the number of characters in the raw text, whitespace excluded.
pub fn character_count_no_spaces(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Count distinct words in first-appearance order, then sort descending by
/// count. The sort is stable, so ties keep first-appearance order.
fn ranked_counts(tokens: &[Token]) -> Vec<(String, usize)> {
    let mut index: AHashMap<&str, usize> = AHashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for token in tokens {
        match index.get(token.text.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token.text.as_str(), counts.len());
                counts.push((token.text.clone(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Returns the `n` most frequent words as a [`FrequencyTable`].
///
/// For `n` greater than or equal to the number of distinct words, all of
/// them are returned; `n == 0` returns an empty table.
pub fn most_frequent_words(tokens: &[Token], n: usize) -> FrequencyTable {
    let mut table = FrequencyTable::default();
    for (word, count) in ranked_counts(tokens).into_iter().take(n) {
        table.labels.push(word);
        table.values.push(count);
    }
    table
}

/// Returns rank-frequency pairs over all distinct words, rank 1 being the
/// most frequent, as [`ZipfData`].
pub fn zipf_data(tokens: &[Token]) -> ZipfData {
    let mut data = ZipfData::default();
    for (rank, (_, count)) in ranked_counts(tokens).into_iter().enumerate() {
        data.ranks.push(rank + 1);
        data.frequencies.push(count);
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens_from(words: &[&str]) -> Vec<Token> {
        words
            .iter()
            .enumerate()
            .map(|(i, w)| Token::new(*w, i))
            .collect()
    }

    #[test]
    fn test_word_count() {
        let tokens = tokens_from(&["a", "b", "a"]);
        assert_eq!(word_count(&tokens), 3);
        assert_eq!(word_count(&[]), 0);
    }

    #[test]
    fn test_unique_word_count() {
        let tokens = tokens_from(&["a", "b", "a", "c"]);
        assert_eq!(unique_word_count(&tokens), 3);

        // Case-sensitive: "A" and "a" are distinct
        let tokens = tokens_from(&["A", "a"]);
        assert_eq!(unique_word_count(&tokens), 2);
    }

    #[test]
    fn test_unique_never_exceeds_total() {
        let tokens = tokens_from(&["x", "y", "x", "z", "z"]);
        assert!(unique_word_count(&tokens) <= word_count(&tokens));

        let distinct = tokens_from(&["p", "q", "r"]);
        assert_eq!(unique_word_count(&distinct), word_count(&distinct));
    }

    #[test]
    fn test_character_counts() {
        assert_eq!(character_count("ab cd"), 5);
        assert_eq!(character_count_no_spaces("ab cd"), 4);
        assert_eq!(character_count(""), 0);
        assert_eq!(character_count_no_spaces(" \t\n"), 0);
    }

    #[test]
    fn test_most_frequent_words_ordering() {
        let tokens = tokens_from(&["b", "a", "b", "c", "a", "b"]);
        let table = most_frequent_words(&tokens, 10);

        assert_eq!(table.labels, ["b", "a", "c"]);
        assert_eq!(table.values, [3, 2, 1]);
    }

    #[test]
    fn test_most_frequent_words_tie_order() {
        // All counts equal: first-appearance order wins
        let tokens = tokens_from(&["z", "m", "a"]);
        let table = most_frequent_words(&tokens, 3);

        assert_eq!(table.labels, ["z", "m", "a"]);
        assert_eq!(table.values, [1, 1, 1]);
    }

    #[test]
    fn test_most_frequent_words_truncation() {
        let tokens = tokens_from(&["a", "a", "b", "c"]);

        let table = most_frequent_words(&tokens, 2);
        assert_eq!(table.len(), 2);
        assert_eq!(table.labels, ["a", "b"]);

        let table = most_frequent_words(&tokens, 0);
        assert!(table.is_empty());

        let table = most_frequent_words(&tokens, 100);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_values_non_increasing() {
        let tokens = tokens_from(&["a", "b", "b", "c", "c", "c"]);
        let table = most_frequent_words(&tokens, 10);

        assert!(table.values.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_frequency_table_iter() {
        let tokens = tokens_from(&["a", "a", "b"]);
        let table = most_frequent_words(&tokens, 10);

        let pairs: Vec<_> = table.iter().collect();
        assert_eq!(pairs, [("a", 2), ("b", 1)]);
    }

    #[test]
    fn test_zipf_data() {
        let tokens = tokens_from(&["a", "b", "b", "c", "c", "c"]);
        let data = zipf_data(&tokens);

        assert_eq!(data.ranks, [1, 2, 3]);
        assert_eq!(data.frequencies, [3, 2, 1]);
    }

    #[test]
    fn test_zipf_data_empty() {
        let data = zipf_data(&[]);
        assert!(data.is_empty());
    }

    #[test]
    fn test_serializes_for_charts() {
        let tokens = tokens_from(&["a", "a", "b"]);
        let table = most_frequent_words(&tokens, 10);

        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"labels":["a","b"],"values":[2,1]}"#);
    }
}
