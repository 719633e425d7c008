// Init-once dictionary holder
//
// The dictionary is loaded lazily on first use and then shared read-only.
// Concurrent first access runs the load exactly once. Neither a failed load
// nor one that yields no words is stored, so a later call retries.

use once_cell::sync::OnceCell;
use tracing::{info, warn};

use super::source::{StaticWordSource, WordSource};
use super::{Dictionary, DictionaryError};

/// Returned for a load that yielded no words.
static EMPTY: Dictionary = Dictionary { words: Vec::new() };

/// Why a load left the cell unset.
enum Unloaded {
    Failed(DictionaryError),
    Empty,
}

/// Lazily loaded, process-lifetime dictionary.
///
/// Share one cache between checkers by wrapping it in an `Arc`.
pub struct DictionaryCache {
    source: Box<dyn WordSource>,
    dictionary: OnceCell<Dictionary>,
}

impl DictionaryCache {
    /// Create an empty cache that loads from `source` on first use.
    pub fn new(source: impl WordSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            dictionary: OnceCell::new(),
        }
    }

    /// Create a cache that already holds `dictionary`.
    pub fn preloaded(dictionary: Dictionary) -> Self {
        Self {
            source: Box::new(StaticWordSource::default()),
            dictionary: OnceCell::with_value(dictionary),
        }
    }

    /// Return the dictionary, loading it if none is cached yet.
    ///
    /// An empty load is returned as an empty dictionary but not cached, so
    /// the next call asks the source again.
    pub fn get(&self) -> Result<&Dictionary, DictionaryError> {
        match self.dictionary.get_or_try_init(|| self.load()) {
            Ok(dictionary) => Ok(dictionary),
            Err(Unloaded::Empty) => Ok(&EMPTY),
            Err(Unloaded::Failed(err)) => Err(err),
        }
    }

    /// Whether the dictionary has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.dictionary.get().is_some()
    }

    fn load(&self) -> Result<Dictionary, Unloaded> {
        let description = self.source.describe();
        let words = self.source.load_words().map_err(Unloaded::Failed)?;
        let dictionary = Dictionary::from_words(words);
        if dictionary.is_empty() {
            warn!(source = %description, "word source returned no words; will reload on next check");
            return Err(Unloaded::Empty);
        }
        info!(source = %description, words = dictionary.len(), "dictionary loaded");
        Ok(dictionary)
    }
}

impl std::fmt::Debug for DictionaryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictionaryCache")
            .field("source", &self.source.describe())
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
