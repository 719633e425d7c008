// Dictionary of known-correct words
//
// The dictionary is built once from a word source and never mutated
// afterwards. Words are kept in a sorted vector so that both exact
// membership and prefix queries are binary searches.
//
// Architecture:
//   - `source`: the `WordSource` trait and its file / in-memory implementations
//   - `cache`: init-once holder shared between checkers

pub mod cache;
pub mod source;

use std::path::PathBuf;

use typocheck_core::character::lowercase_word;

pub use cache::DictionaryCache;
pub use source::{FileWordSource, StaticWordSource, WordSource};

/// Error type for word-source failures.
///
/// A failed load is always reported as an error; it is never turned into
/// an empty dictionary.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The word list could not be opened or read.
    #[error("failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The word list contains bytes that are not UTF-8.
    #[error("word list {} is not valid UTF-8 (line {line})", .path.display())]
    InvalidUtf8 { path: PathBuf, line: usize },

    /// A custom source could not produce its words.
    #[error("word source unavailable: {0}")]
    Unavailable(String),
}

/// An immutable set of lowercase words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    /// Sorted, deduplicated, lowercase.
    words: Vec<String>,
}

impl Dictionary {
    /// Build a dictionary from raw words.
    ///
    /// Each word is trimmed and lowercased; blank entries are dropped and
    /// duplicates collapse to one.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .filter_map(|w| {
                let trimmed = w.as_ref().trim();
                (!trimmed.is_empty()).then(|| lowercase_word(trimmed))
            })
            .collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    /// Exact membership test. The word must already be lowercase.
    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|w| w.as_str().cmp(word))
            .is_ok()
    }

    /// Whether any word in the dictionary starts with `prefix`.
    ///
    /// Words sharing a prefix are contiguous in sorted order and sort at or
    /// after the prefix itself, so the first word not less than `prefix`
    /// decides.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        let idx = self.words.partition_point(|w| w.as_str() < prefix);
        self.words.get(idx).is_some_and(|w| w.starts_with(prefix))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
