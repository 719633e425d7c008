// Mixed-case pre-filter

use crate::character::{is_lower, is_upper};

/// Determine whether a word's casing alone marks it as misspelled.
///
/// The first character is skipped, so "Hello" and "HELLO" are fine. From
/// the second character onward, the presence of both an uppercase and a
/// lowercase letter makes the word mixed case ("HeLLo", "hELlo").
///
/// "hELLO" is not mixed case: its tail is uniformly uppercase.
pub fn is_mixed_case(word: &str) -> bool {
    let mut has_upper = false;
    let mut has_lower = false;
    // Words of length <= 1 never reach the loop body.
    for c in word.chars().skip(1) {
        has_upper |= is_upper(c);
        has_lower |= is_lower(c);
        if has_upper && has_lower {
            return true;
        }
    }
    false
}
