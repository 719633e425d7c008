//! Shared word-level types for typocheck.
//!
//! # Architecture
//!
//! - [`character`] -- case conversion helpers and the English vowel set
//! - [`case`] -- the mixed-case pre-filter
//! - [`repeat`] -- run-length tokens and the repetition collapser
//! - [`result`] -- the public [`SpellCheckResult`]

pub mod case;
pub mod character;
pub mod repeat;
pub mod result;

pub use case::is_mixed_case;
pub use repeat::{RepeatToken, TokenSequence, collapse};
pub use result::SpellCheckResult;
