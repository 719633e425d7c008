// SpellChecker: top-level integration point for word checking.
//
// Sequences the pipeline for one word:
//   1. Fetch the dictionary from the shared init-once cache.
//   2. Mixed-case words skip the lookup and go straight to suggestion.
//   3. Otherwise a lowercase dictionary hit is correct.
//   4. Otherwise the configured strategy produces suggestions.
//
// Design notes:
// - The dictionary cache is passed in by handle (`Arc`), never global state;
//   checkers with different options may share one cache.
// - Each call owns its token sequence, candidate set and budget; `&self`
//   methods are safe to call from many threads at once.

use std::sync::Arc;

use tracing::debug;
use typocheck_core::case::is_mixed_case;
use typocheck_core::character::{ENGLISH_VOWELS, lowercase_word};
use typocheck_core::result::SpellCheckResult;

use crate::dictionary::{Dictionary, DictionaryCache, DictionaryError, WordSource};
use crate::suggestion::{
    CheckStrategy, DEFAULT_MAX_CANDIDATES, GenerationStatus, PermutationGenerator,
    SearchSpaceExceeded,
};

/// Error type for spell-check failures.
///
/// "No suggestions found" is not an error; it is a successful result with
/// an empty suggestion set.
#[derive(Debug, thiserror::Error)]
pub enum SpellCheckError {
    /// The dictionary could not be loaded from its source.
    #[error("failed to load dictionary: {0}")]
    Dictionary(#[from] DictionaryError),

    /// Generation hit the candidate ceiling.
    #[error(transparent)]
    SearchSpaceExceeded(#[from] SearchSpaceExceeded),
}

/// Options controlling suggestion generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerOptions {
    /// Suggestion engine used after a failed lookup.
    pub strategy: CheckStrategy,
    /// Ceiling on candidates produced per word.
    pub max_candidates: usize,
    /// Vowels the generator may insert.
    pub vowels: Vec<char>,
}

impl Default for CheckerOptions {
    fn default() -> Self {
        Self {
            strategy: CheckStrategy::default(),
            max_candidates: DEFAULT_MAX_CANDIDATES,
            vowels: ENGLISH_VOWELS.to_vec(),
        }
    }
}

/// Checks single words against a dictionary and suggests corrections for
/// repetition and vowel typos.
#[derive(Debug)]
pub struct SpellChecker {
    dictionary: Arc<DictionaryCache>,
    options: CheckerOptions,
    generator: PermutationGenerator,
}

impl SpellChecker {
    /// Create a checker over a shared dictionary cache with default options.
    pub fn new(dictionary: Arc<DictionaryCache>) -> Self {
        Self::with_options(dictionary, CheckerOptions::default())
    }

    pub fn with_options(dictionary: Arc<DictionaryCache>, options: CheckerOptions) -> Self {
        let generator = PermutationGenerator::new(options.vowels.iter().copied());
        Self {
            dictionary,
            options,
            generator,
        }
    }

    /// Create a checker whose dictionary is loaded from `source` on first use.
    pub fn from_source(source: impl WordSource + 'static) -> Self {
        Self::new(Arc::new(DictionaryCache::new(source)))
    }

    /// Create a checker over an already built word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(Arc::new(DictionaryCache::preloaded(Dictionary::from_words(
            words,
        ))))
    }

    // =========================================================================
    // Core methods
    // =========================================================================

    /// Check one word.
    ///
    /// Any string is accepted, including the empty string. The only
    /// failures are an unavailable dictionary and an exhausted candidate
    /// budget.
    pub fn check_spelling(&self, word: &str) -> Result<SpellCheckResult, SpellCheckError> {
        let dictionary = self.dictionary.get()?;
        let lowered = lowercase_word(word);

        if is_mixed_case(word) {
            let suggestions = self.suggestions_for(&lowered, dictionary)?;
            debug!(word, suggestions = suggestions.len(), "mixed-case word checked");
            return Ok(SpellCheckResult::misspelled(suggestions));
        }

        if dictionary.contains(&lowered) {
            debug!(word, "word found in dictionary");
            return Ok(SpellCheckResult::correct());
        }

        let suggestions = self.suggestions_for(&lowered, dictionary)?;
        debug!(word, suggestions = suggestions.len(), "checked word");
        Ok(SpellCheckResult::misspelled(suggestions))
    }

    /// Whether the word is accepted as spelled.
    pub fn spell(&self, word: &str) -> Result<bool, SpellCheckError> {
        let dictionary = self.dictionary.get()?;
        Ok(!is_mixed_case(word) && dictionary.contains(&lowercase_word(word)))
    }

    /// Suggestions for a word, sorted. Empty for a correctly spelled word.
    pub fn suggest(&self, word: &str) -> Result<Vec<String>, SpellCheckError> {
        Ok(self.check_spelling(word)?.into_suggestions())
    }

    /// The loaded dictionary, loading it if necessary.
    pub fn dictionary(&self) -> Result<&Dictionary, DictionaryError> {
        self.dictionary.get()
    }

    pub fn options(&self) -> &CheckerOptions {
        &self.options
    }

    fn suggestions_for(
        &self,
        lowered: &str,
        dictionary: &Dictionary,
    ) -> Result<std::collections::BTreeSet<String>, SpellCheckError> {
        let mut status = GenerationStatus::new(self.options.max_candidates);
        let found = self
            .options
            .strategy
            .suggest(lowered, dictionary, &self.generator, &mut status)?;
        debug!(
            strategy = %self.options.strategy,
            candidates = status.produced(),
            "suggestion search finished"
        );
        Ok(found)
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set the suggestion strategy.
    pub fn set_strategy(&mut self, strategy: CheckStrategy) {
        self.options.strategy = strategy;
    }

    /// Set the ceiling on candidates produced per word.
    pub fn set_max_candidates(&mut self, max_candidates: usize) {
        self.options.max_candidates = max_candidates;
    }

    /// Set the vowels the generator may insert.
    pub fn set_vowels(&mut self, vowels: impl IntoIterator<Item = char>) {
        self.options.vowels = vowels.into_iter().collect();
        self.generator = PermutationGenerator::new(self.options.vowels.iter().copied());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::StaticWordSource;

    struct BrokenSource;

    impl WordSource for BrokenSource {
        fn load_words(&self) -> Result<Vec<String>, DictionaryError> {
            Err(DictionaryError::Unavailable("disk on fire".into()))
        }
    }

    /// Empty on the first load, then one word.
    struct LateSource(std::sync::atomic::AtomicBool);

    impl WordSource for LateSource {
        fn load_words(&self) -> Result<Vec<String>, DictionaryError> {
            if self.0.swap(true, std::sync::atomic::Ordering::SeqCst) {
                Ok(vec!["cat".into()])
            } else {
                Ok(Vec::new())
            }
        }
    }

    fn checker() -> SpellChecker {
        SpellChecker::from_words(["balloon", "hello", "cat"])
    }

    fn suggestions(result: &SpellCheckResult) -> Vec<&str> {
        result.suggestions.iter().map(String::as_str).collect()
    }

    #[test]
    fn dictionary_word_is_correct() {
        let r = checker().check_spelling("balloon").unwrap();
        assert_eq!(r, SpellCheckResult::correct());
    }

    #[test]
    fn uniform_uppercase_is_correct() {
        assert!(checker().check_spelling("HELLO").unwrap().correct);
        assert!(checker().check_spelling("Hello").unwrap().correct);
    }

    #[test]
    fn mixed_case_is_never_correct() {
        let r = checker().check_spelling("HeLLo").unwrap();
        assert!(!r.correct);
        assert_eq!(suggestions(&r), vec!["hello"]);
    }

    #[test]
    fn repeat_typo_is_corrected() {
        let r = checker().check_spelling("ballloooon").unwrap();
        assert!(!r.correct);
        assert_eq!(suggestions(&r), vec!["balloon"]);
    }

    #[test]
    fn missing_vowel_is_corrected() {
        let r = checker().check_spelling("blloon").unwrap();
        assert_eq!(suggestions(&r), vec!["balloon"]);
        let r = checker().check_spelling("ct").unwrap();
        assert_eq!(suggestions(&r), vec!["cat"]);
    }

    #[test]
    fn vowels_differ_between_gaps() {
        let c = SpellChecker::from_words(["tomato", "bottle"]);
        let r = c.check_spelling("tmt").unwrap();
        assert!(!r.correct);
        assert_eq!(suggestions(&r), vec!["tomato"]);
    }

    #[test]
    fn unreachable_words_have_no_suggestions() {
        for word in ["xyz", "bln", ""] {
            let r = checker().check_spelling(word).unwrap();
            assert!(!r.correct, "{word:?}");
            assert!(r.suggestions.is_empty(), "{word:?}");
        }
    }

    #[test]
    fn single_characters_are_valid_input() {
        let r = checker().check_spelling("c").unwrap();
        assert!(!r.correct);
        let r = checker().check_spelling("C").unwrap();
        assert!(!r.correct);
    }

    #[test]
    fn load_failure_is_an_error_not_an_empty_result() {
        let checker = SpellChecker::from_source(BrokenSource);
        let err = checker.check_spelling("balloon").unwrap_err();
        assert!(matches!(err, SpellCheckError::Dictionary(_)));
        assert!(err.to_string().contains("disk on fire"));
        assert!(checker.spell("balloon").is_err());
    }

    #[test]
    fn lazy_source_is_loaded_on_first_check() {
        let checker = SpellChecker::from_source(StaticWordSource::new(["Cat"]));
        assert!(checker.check_spelling("cat").unwrap().correct);
        assert_eq!(checker.dictionary().unwrap().len(), 1);
    }

    #[test]
    fn empty_load_is_retried_on_next_check() {
        let checker = SpellChecker::from_source(LateSource(Default::default()));
        assert!(!checker.check_spelling("cat").unwrap().correct);
        assert!(checker.check_spelling("cat").unwrap().correct);
    }

    #[test]
    fn tiny_budget_reports_search_space_exceeded() {
        let mut checker = checker();
        checker.set_max_candidates(5);
        let err = checker.check_spelling("ballloooon").unwrap_err();
        assert!(matches!(
            err,
            SpellCheckError::SearchSpaceExceeded(SearchSpaceExceeded { limit: 5 })
        ));
        // A direct hit never generates, so the budget is irrelevant.
        assert!(checker.check_spelling("balloon").unwrap().correct);
    }

    #[test]
    fn containment_strategy_only_looks_up() {
        let mut checker = checker();
        checker.set_strategy(CheckStrategy::Containment);
        assert!(checker.check_spelling("cat").unwrap().correct);
        let r = checker.check_spelling("ballloooon").unwrap();
        assert!(!r.correct);
        assert!(r.suggestions.is_empty());
    }

    #[test]
    fn exhaustive_strategy_matches_default() {
        let mut exhaustive = checker();
        exhaustive.set_strategy(CheckStrategy::Exhaustive);
        for word in ["hllo", "CaT", "ct", "tmt", "xyz"] {
            assert_eq!(
                exhaustive.check_spelling(word).unwrap(),
                checker().check_spelling(word).unwrap()
            );
        }
    }

    #[test]
    fn vowel_set_can_be_restricted() {
        let mut checker = checker();
        checker.set_vowels(['e']);
        assert!(checker.check_spelling("ct").unwrap().suggestions.is_empty());
        assert_eq!(checker.suggest("hllo").unwrap(), vec!["hello"]);
    }

    #[test]
    fn spell_and_suggest_shortcuts() {
        let c = checker();
        assert!(c.spell("Cat").unwrap());
        // Only the first character may differ in case from the rest.
        assert!(c.spell("cAT").unwrap());
        assert!(!c.spell("HeLLo").unwrap());
        assert_eq!(c.suggest("balloon").unwrap(), Vec::<String>::new());
        assert_eq!(c.suggest("ballon").unwrap(), vec!["balloon"]);
    }

    #[test]
    fn checking_is_idempotent() {
        let c = checker();
        for word in ["ballloooon", "HeLLo", "xyz", "cat"] {
            assert_eq!(c.check_spelling(word).unwrap(), c.check_spelling(word).unwrap());
        }
    }

    #[test]
    fn checker_is_shareable_across_threads() {
        let c = checker();
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    let r = c.check_spelling("ballloooon").unwrap();
                    assert_eq!(suggestions(&r), vec!["balloon"]);
                });
            }
        });
    }

    #[test]
    fn default_options() {
        let options = CheckerOptions::default();
        assert_eq!(options.strategy, CheckStrategy::Permutation);
        assert_eq!(options.max_candidates, DEFAULT_MAX_CANDIDATES);
        assert_eq!(options.vowels, vec!['a', 'e', 'i', 'o', 'u']);
    }
}
