// Suggestion strategies: how a misspelled word is turned into suggestions

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use typocheck_core::repeat::collapse;

use super::generators::PermutationGenerator;
use super::status::{GenerationStatus, SearchSpaceExceeded};
use crate::dictionary::Dictionary;

/// Which suggestion engine the checker runs after a failed lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckStrategy {
    /// Dictionary containment only; misspelled words get no suggestions.
    Containment,
    /// Permutation generation walked against the dictionary, pruning
    /// prefixes no word starts with.
    #[default]
    Permutation,
    /// Permutation generation of the full candidate set, then filtered by
    /// dictionary membership. Same suggestions as `Permutation`, far more
    /// work; useful for checking the pruned walk.
    Exhaustive,
}

impl CheckStrategy {
    /// Produce suggestions for an already lowercased word.
    pub fn suggest(
        self,
        word: &str,
        dictionary: &Dictionary,
        generator: &PermutationGenerator,
        status: &mut GenerationStatus,
    ) -> Result<BTreeSet<String>, SearchSpaceExceeded> {
        match self {
            CheckStrategy::Containment => Ok(BTreeSet::new()),
            CheckStrategy::Permutation => {
                generator.generate_matching(&collapse(word), dictionary, status)
            }
            CheckStrategy::Exhaustive => {
                let candidates = generator.generate(&collapse(word), status)?;
                Ok(candidates
                    .into_iter()
                    .filter(|c| dictionary.contains(c))
                    .collect())
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CheckStrategy::Containment => "containment",
            CheckStrategy::Permutation => "permutation",
            CheckStrategy::Exhaustive => "exhaustive",
        }
    }
}

impl fmt::Display for CheckStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy {0:?} (expected containment, permutation or exhaustive)")]
pub struct UnknownStrategy(pub String);

impl FromStr for CheckStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "containment" => Ok(CheckStrategy::Containment),
            "permutation" => Ok(CheckStrategy::Permutation),
            "exhaustive" => Ok(CheckStrategy::Exhaustive),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}
