// Character classification and case conversion helpers

// ---------------------------------------------------------------------------
// English vowels
// ---------------------------------------------------------------------------

/// The vowels the generator may insert: a e i o u.
///
/// `y` is treated as a consonant and never inserted.
pub const ENGLISH_VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Check whether a character has an uppercase-letter form.
pub fn is_upper(c: char) -> bool {
    c.is_uppercase()
}

/// Check whether a character has a lowercase-letter form.
pub fn is_lower(c: char) -> bool {
    c.is_lowercase()
}

/// Lowercase a whole word with the full Unicode mapping.
///
/// This is the normalization applied before dictionary lookup and
/// candidate generation.
pub fn lowercase_word(word: &str) -> String {
    word.to_lowercase()
}
