// Permutation generator: expands run-length tokens into candidate spellings
// by optional vowel insertion and optional doubling of repeatable characters.
//
// Before every token (and once more after the last one) the generator
// independently inserts nothing, one vowel, or the same vowel twice, for
// every vowel in its set. Each token is then emitted once, or twice if it
// is flagged `may_repeat`. Every recursive call returns its own set and
// callers merge, so the result does not depend on vowel order.
//
// Cost grows as (1 + 2v)^(n+1) * 2^r for v vowels and n tokens, r of them
// repeatable. This is an accepted scaling limit; `GenerationStatus` bounds
// the work.

use std::collections::BTreeSet;

use hashbrown::HashSet;
use typocheck_core::character::ENGLISH_VOWELS;
use typocheck_core::repeat::{RepeatToken, TokenSequence, render_single};

use super::status::{GenerationStatus, SearchSpaceExceeded};
use crate::dictionary::Dictionary;

/// Deduplicated candidate spellings.
pub type CandidateSet = HashSet<String>;

/// Most copies of one vowel inserted into a single gap.
const MAX_INSERTED_VOWELS: usize = 2;

/// Most times a repeatable character is re-emitted.
const MAX_REPEAT: usize = 2;

/// Generates candidate spellings for the two modelled error classes:
/// wrong repetition counts and missing or extra vowels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationGenerator {
    /// Vowels that may be inserted.
    vowels: Vec<char>,
    /// What one gap may receive: "" first, then each vowel once and twice.
    fillers: Vec<String>,
}

impl PermutationGenerator {
    /// Create a generator inserting the given vowels.
    ///
    /// With an empty vowel set only repetition changes are generated.
    pub fn new(vowels: impl IntoIterator<Item = char>) -> Self {
        let mut vowels: Vec<char> = vowels.into_iter().collect();
        vowels.dedup();
        let mut fillers = vec![String::new()];
        for &vowel in &vowels {
            for count in 1..=MAX_INSERTED_VOWELS {
                fillers.push(std::iter::repeat_n(vowel, count).collect());
            }
        }
        Self { vowels, fillers }
    }

    pub fn vowels(&self) -> &[char] {
        &self.vowels
    }

    /// Enumerate every candidate reachable from `tokens`.
    ///
    /// Returns [`SearchSpaceExceeded`] if the budget in `status` runs out;
    /// no partial set is returned in that case.
    pub fn generate(
        &self,
        tokens: &TokenSequence,
        status: &mut GenerationStatus,
    ) -> Result<CandidateSet, SearchSpaceExceeded> {
        let mut candidates = self.expand(String::new(), tokens.as_slice(), status)?;

        // A missing final vowel after a tail insertion is added here.
        let mut with_tail = CandidateSet::with_capacity(candidates.len() * self.vowels.len());
        for candidate in &candidates {
            for &vowel in &self.vowels {
                status.charge()?;
                with_tail.insert(append(candidate, vowel));
            }
        }
        candidates.extend(with_tail);
        Ok(candidates)
    }

    /// Enumerate the candidates reachable from `tokens` that are also in
    /// `dictionary`.
    ///
    /// Walks the same recursion as [`generate`](Self::generate) but drops
    /// every branch whose prefix starts no dictionary word. The result is
    /// exactly `generate(tokens) ∩ dictionary`.
    pub fn generate_matching(
        &self,
        tokens: &TokenSequence,
        dictionary: &Dictionary,
        status: &mut GenerationStatus,
    ) -> Result<BTreeSet<String>, SearchSpaceExceeded> {
        self.expand_matching(String::new(), tokens.as_slice(), dictionary, status)
    }

    fn expand(
        &self,
        prefix: String,
        rest: &[RepeatToken],
        status: &mut GenerationStatus,
    ) -> Result<CandidateSet, SearchSpaceExceeded> {
        let mut out = CandidateSet::new();

        // Leaving the remainder untouched is itself a candidate.
        status.charge()?;
        out.insert(format!("{prefix}{}", render_single(rest)));

        let Some((token, remainder)) = rest.split_first() else {
            for filler in self.tail_fillers() {
                status.charge()?;
                out.insert(format!("{prefix}{filler}"));
            }
            return Ok(out);
        };

        for filler in &self.fillers {
            for repeats in repeat_counts(token) {
                let next = extend_prefix(&prefix, filler, token.character, repeats);
                out.extend(self.expand(next, remainder, status)?);
            }
        }
        Ok(out)
    }

    fn expand_matching(
        &self,
        prefix: String,
        rest: &[RepeatToken],
        dictionary: &Dictionary,
        status: &mut GenerationStatus,
    ) -> Result<BTreeSet<String>, SearchSpaceExceeded> {
        let mut found = BTreeSet::new();
        if !dictionary.has_prefix(&prefix) {
            return Ok(found);
        }

        self.accept(
            format!("{prefix}{}", render_single(rest)),
            dictionary,
            status,
            &mut found,
        )?;

        let Some((token, remainder)) = rest.split_first() else {
            for filler in self.tail_fillers() {
                self.accept(format!("{prefix}{filler}"), dictionary, status, &mut found)?;
            }
            return Ok(found);
        };

        for filler in &self.fillers {
            for repeats in repeat_counts(token) {
                let next = extend_prefix(&prefix, filler, token.character, repeats);
                found.extend(self.expand_matching(next, remainder, dictionary, status)?);
            }
        }
        Ok(found)
    }

    /// Non-empty fillers, inserted at the very end of a candidate.
    fn tail_fillers(&self) -> &[String] {
        &self.fillers[1..]
    }

    /// Test one candidate, plus the candidate with each vowel appended,
    /// against the dictionary.
    fn accept(
        &self,
        candidate: String,
        dictionary: &Dictionary,
        status: &mut GenerationStatus,
        found: &mut BTreeSet<String>,
    ) -> Result<(), SearchSpaceExceeded> {
        for &vowel in &self.vowels {
            status.charge()?;
            let extended = append(&candidate, vowel);
            if dictionary.contains(&extended) {
                found.insert(extended);
            }
        }
        status.charge()?;
        if dictionary.contains(&candidate) {
            found.insert(candidate);
        }
        Ok(())
    }
}

impl Default for PermutationGenerator {
    fn default() -> Self {
        Self::new(ENGLISH_VOWELS.iter().copied())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn repeat_counts(token: &RepeatToken) -> std::ops::RangeInclusive<usize> {
    if token.may_repeat { 1..=MAX_REPEAT } else { 1..=1 }
}

fn extend_prefix(prefix: &str, filler: &str, character: char, repeats: usize) -> String {
    let mut next = String::with_capacity(prefix.len() + filler.len() + 4 * repeats);
    next.push_str(prefix);
    next.push_str(filler);
    next.extend(std::iter::repeat_n(character, repeats));
    next
}

fn append(base: &str, c: char) -> String {
    let mut s = String::with_capacity(base.len() + c.len_utf8());
    s.push_str(base);
    s.push(c);
    s
}

// =========================================================================
// Tests
// =========================================================================
