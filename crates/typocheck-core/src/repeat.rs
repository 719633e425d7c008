// Run-length tokens: one token per maximal run of identical characters

use std::fmt;

// ---------------------------------------------------------------------------
// RepeatToken
// ---------------------------------------------------------------------------

/// One run of identical consecutive characters, collapsed to a single
/// occurrence.
///
/// `may_repeat` is set when the run was at least two characters long in
/// the source word. A flagged character is only ever re-emitted single or
/// doubled; runs of three or more are assumed to be typos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RepeatToken {
    /// The collapsed character.
    pub character: char,
    /// Whether the run length was >= 2.
    pub may_repeat: bool,
}

impl RepeatToken {
    /// Create a token that was seen only once.
    pub fn single(character: char) -> Self {
        Self {
            character,
            may_repeat: false,
        }
    }

    /// Create a token for a run of two or more.
    pub fn repeated(character: char) -> Self {
        Self {
            character,
            may_repeat: true,
        }
    }
}

// ---------------------------------------------------------------------------
// TokenSequence
// ---------------------------------------------------------------------------

/// The run-length form of a word.
///
/// Concatenating the token characters in order reproduces the collapsed
/// word. The sequence is never reordered; consumers slice it from the
/// front via [`TokenSequence::as_slice`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TokenSequence {
    tokens: Vec<RepeatToken>,
}

impl TokenSequence {
    /// Number of tokens (runs) in the sequence.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of tokens flagged as repeatable.
    pub fn repeat_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.may_repeat).count()
    }

    pub fn as_slice(&self) -> &[RepeatToken] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RepeatToken> {
        self.tokens.iter()
    }

    /// The collapsed word: every run rendered as a single character.
    pub fn collapsed(&self) -> String {
        render_single(&self.tokens)
    }
}

impl From<Vec<RepeatToken>> for TokenSequence {
    fn from(tokens: Vec<RepeatToken>) -> Self {
        Self { tokens }
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a RepeatToken;
    type IntoIter = std::slice::Iter<'a, RepeatToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Display for TokenSequence {
    /// Renders flagged tokens with a trailing `+`: "bal+o+n".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{}", token.character)?;
            if token.may_repeat {
                f.write_str("+")?;
            }
        }
        Ok(())
    }
}

/// Render a token slice with every character emitted once.
pub fn render_single(tokens: &[RepeatToken]) -> String {
    tokens.iter().map(|t| t.character).collect()
}

// ---------------------------------------------------------------------------
// Collapse
// ---------------------------------------------------------------------------

/// Reduce a word to its run-length form.
///
/// The word is expected to be lowercased already; comparison between
/// neighbours is exact.
pub fn collapse(word: &str) -> TokenSequence {
    let mut tokens: Vec<RepeatToken> = Vec::with_capacity(word.len());
    for c in word.chars() {
        match tokens.last_mut() {
            Some(last) if last.character == c => last.may_repeat = true,
            _ => tokens.push(RepeatToken::single(c)),
        }
    }
    TokenSequence { tokens }
}
