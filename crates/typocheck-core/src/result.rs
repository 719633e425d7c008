// Public result type of a spell check

use std::collections::BTreeSet;

/// Outcome of checking one word.
///
/// When `correct` is true, `suggestions` is empty. When it is false,
/// `suggestions` holds zero or more dictionary words; an empty set means
/// nothing reachable was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellCheckResult {
    /// Whether the word was accepted as spelled.
    pub correct: bool,
    /// Dictionary words reachable from the input, in sorted order.
    pub suggestions: BTreeSet<String>,
}

impl SpellCheckResult {
    /// A correctly spelled word.
    pub fn correct() -> Self {
        Self {
            correct: true,
            suggestions: BTreeSet::new(),
        }
    }

    /// A misspelled word with the given suggestions.
    pub fn misspelled<I>(suggestions: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            correct: false,
            suggestions: suggestions.into_iter().collect(),
        }
    }

    /// Suggestions as a sorted vector.
    pub fn into_suggestions(self) -> Vec<String> {
        self.suggestions.into_iter().collect()
    }
}
