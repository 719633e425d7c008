// Word sources: where the dictionary's words come from

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use super::DictionaryError;

/// Supplier of the complete set of known-correct words.
///
/// Implementations are queried once per [`DictionaryCache`](super::DictionaryCache)
/// lifetime. Returned words may be in any case; the dictionary normalizes
/// them.
pub trait WordSource: Send + Sync {
    /// Return every word the source knows about.
    fn load_words(&self) -> Result<Vec<String>, DictionaryError>;

    /// Human-readable description used in log messages.
    fn describe(&self) -> String {
        "word source".to_string()
    }
}

// ---------------------------------------------------------------------------
// FileWordSource
// ---------------------------------------------------------------------------

/// Reads a UTF-8 text file with one word per line.
#[derive(Debug, Clone)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> DictionaryError {
        DictionaryError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl WordSource for FileWordSource {
    fn load_words(&self) -> Result<Vec<String>, DictionaryError> {
        let file = File::open(&self.path).map_err(|e| self.io_error(e))?;
        let reader = BufReader::new(file);

        let mut words = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                if e.kind() == ErrorKind::InvalidData {
                    DictionaryError::InvalidUtf8 {
                        path: self.path.clone(),
                        line: idx + 1,
                    }
                } else {
                    self.io_error(e)
                }
            })?;
            let word = line.trim();
            if !word.is_empty() {
                words.push(word.to_string());
            }
        }
        Ok(words)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

// ---------------------------------------------------------------------------
// StaticWordSource
// ---------------------------------------------------------------------------

/// An in-memory word list.
#[derive(Debug, Clone, Default)]
pub struct StaticWordSource {
    words: Vec<String>,
}

impl StaticWordSource {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Split newline-separated text into words.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines().map(str::trim).filter(|l| !l.is_empty()))
    }
}

impl WordSource for StaticWordSource {
    fn load_words(&self) -> Result<Vec<String>, DictionaryError> {
        Ok(self.words.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory list of {} words", self.words.len())
    }
}
