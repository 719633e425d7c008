// WASM bindings for typocheck.
//
// Provides a `WasmSpellChecker` class exported via wasm-bindgen that wraps
// the `SpellChecker` from typocheck-en. Check results are serialized to
// JavaScript values using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const checker = new WasmSpellChecker("balloon\nhello\ncat");
//   checker.spell("hello");          // => true
//   checker.check("ballloooon");     // => { correct: false, suggestions: ["balloon"] }
//   checker.suggest("blloon");       // => ["balloon"]
//   checker.setStrategy("containment");
//   checker.setMaxCandidates(100000);
//   checker.terminate();             // optional cleanup

use wasm_bindgen::prelude::*;

use typocheck_en::{CheckStrategy, SpellCheckError, SpellChecker};

fn check_error_to_js(e: SpellCheckError) -> JsError {
    JsError::new(&e.to_string())
}

// ============================================================================
// WasmSpellChecker
// ============================================================================

/// Repetition and vowel spell checker for WebAssembly.
#[wasm_bindgen]
pub struct WasmSpellChecker {
    checker: SpellChecker,
}

#[wasm_bindgen]
impl WasmSpellChecker {
    /// Create a checker from a newline-separated word list.
    ///
    /// Blank lines are ignored; words are lowercased.
    #[wasm_bindgen(constructor)]
    pub fn new(word_list: &str) -> WasmSpellChecker {
        WasmSpellChecker {
            checker: SpellChecker::from_words(word_list.lines()),
        }
    }

    /// Create a checker from a JavaScript array of strings.
    ///
    /// Non-string entries are rejected.
    #[wasm_bindgen(js_name = "fromArray")]
    pub fn from_array(words: &js_sys::Array) -> Result<WasmSpellChecker, JsError> {
        let mut list = Vec::with_capacity(words.length() as usize);
        for (i, value) in words.iter().enumerate() {
            let word = value
                .as_string()
                .ok_or_else(|| JsError::new(&format!("word list entry {i} is not a string")))?;
            list.push(word);
        }
        Ok(WasmSpellChecker {
            checker: SpellChecker::from_words(list),
        })
    }

    /// Check a word.
    ///
    /// Returns `{ correct, suggestions }` with suggestions sorted.
    pub fn check(&self, word: &str) -> Result<JsValue, JsError> {
        let result = self.checker.check_spelling(word).map_err(check_error_to_js)?;
        serde_wasm_bindgen::to_value(&result).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Check whether a word is correctly spelled.
    pub fn spell(&self, word: &str) -> Result<bool, JsError> {
        self.checker.spell(word).map_err(check_error_to_js)
    }

    /// Generate spelling suggestions for a word.
    ///
    /// Returns an empty array for a correctly spelled word.
    pub fn suggest(&self, word: &str) -> Result<Vec<String>, JsError> {
        self.checker.suggest(word).map_err(check_error_to_js)
    }

    /// Number of words in the dictionary.
    #[wasm_bindgen(js_name = "wordCount")]
    pub fn word_count(&self) -> Result<usize, JsError> {
        self.checker
            .dictionary()
            .map(|d| d.len())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Release resources held by this instance.
    ///
    /// After calling this method, the instance should not be used.
    pub fn terminate(self) {}

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set the suggestion strategy: "containment", "permutation" or "exhaustive".
    #[wasm_bindgen(js_name = "setStrategy")]
    pub fn set_strategy(&mut self, name: &str) -> Result<(), JsError> {
        let strategy: CheckStrategy = name.parse()?;
        self.checker.set_strategy(strategy);
        Ok(())
    }

    /// Set the ceiling on candidates generated per word.
    #[wasm_bindgen(js_name = "setMaxCandidates")]
    pub fn set_max_candidates(&mut self, value: usize) {
        self.checker.set_max_candidates(value);
    }
}
