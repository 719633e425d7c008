//! English spell checking for repetition and vowel typos.
//!
//! Words are checked against a dictionary of known-correct spellings.
//! Misspelled words get suggestions generated by two error models: wrong
//! repetition counts ("ballloooon") and missing or extra vowels ("blloon").
//!
//! # Architecture
//!
//! - [`dictionary`] -- word sources, the sorted dictionary and its init-once cache
//! - [`suggestion`] -- the permutation generator, candidate budget and strategies
//! - [`checker`] -- [`SpellChecker`], which ties the pieces together
//!
//! # Example
//!
//! ```
//! use typocheck_en::SpellChecker;
//!
//! let checker = SpellChecker::from_words(["balloon", "hello", "cat"]);
//! let result = checker.check_spelling("ballloooon").unwrap();
//! assert!(!result.correct);
//! assert!(result.suggestions.contains("balloon"));
//! ```

pub mod checker;
pub mod dictionary;
pub mod suggestion;

pub use checker::{CheckerOptions, SpellCheckError, SpellChecker};
pub use dictionary::{
    Dictionary, DictionaryCache, DictionaryError, FileWordSource, StaticWordSource, WordSource,
};
pub use suggestion::{CheckStrategy, GenerationStatus, PermutationGenerator, SearchSpaceExceeded};
pub use typocheck_core::SpellCheckResult;
