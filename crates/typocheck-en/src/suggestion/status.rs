// Generation budget: counts candidates and enforces the ceiling

/// Default ceiling on candidates produced for a single word.
pub const DEFAULT_MAX_CANDIDATES: usize = 2_000_000;

/// The candidate ceiling was reached before generation finished.
///
/// No partial result accompanies this error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("search space exceeded: more than {limit} candidates")]
pub struct SearchSpaceExceeded {
    pub limit: usize,
}

/// Tracks how much work one generation run has done.
///
/// Every candidate string the generator produces (duplicates included)
/// costs one unit via [`charge`](GenerationStatus::charge).
#[derive(Debug, Clone)]
pub struct GenerationStatus {
    /// Maximum number of candidates before aborting.
    max_candidates: usize,
    /// Candidates produced so far.
    produced: usize,
}

impl GenerationStatus {
    pub fn new(max_candidates: usize) -> Self {
        Self {
            max_candidates,
            produced: 0,
        }
    }

    /// Account for one produced candidate.
    pub fn charge(&mut self) -> Result<(), SearchSpaceExceeded> {
        if self.produced >= self.max_candidates {
            return Err(SearchSpaceExceeded {
                limit: self.max_candidates,
            });
        }
        self.produced += 1;
        Ok(())
    }

    /// Candidates produced so far.
    pub fn produced(&self) -> usize {
        self.produced
    }

    pub fn max_candidates(&self) -> usize {
        self.max_candidates
    }
}

impl Default for GenerationStatus {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CANDIDATES)
    }
}
