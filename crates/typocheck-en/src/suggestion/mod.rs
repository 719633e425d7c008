// Suggestion generation module
//
// Produces spelling candidates for misspelled words by modelling two typing
// error classes (wrong repetition counts, missing or extra vowels) and
// keeping the candidates the dictionary knows.
//
// Architecture:
//   - `generators`: the permutation generator (full and dictionary-pruned)
//   - `status`: candidate budget and the search-space error
//   - `strategy`: selects containment, pruned or exhaustive suggestion

pub mod generators;
pub mod status;
pub mod strategy;

// Re-export key types for convenient access.
pub use generators::{CandidateSet, PermutationGenerator};
pub use status::{DEFAULT_MAX_CANDIDATES, GenerationStatus, SearchSpaceExceeded};
pub use strategy::{CheckStrategy, UnknownStrategy};
