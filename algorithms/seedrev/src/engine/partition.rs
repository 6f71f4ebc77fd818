//! Guess-Space Partitioning
//!
//! The 2^32 low-bit guesses are split into contiguous, disjoint ranges that
//! workers scan independently.

use crate::constants::GUESS_SPACE;
use crate::types::RecoveryError;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// =============================================================================
// SEARCH RANGE
// =============================================================================

/// Half-open range of low-bit guesses `start..end`, with `end <= 2^32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchRange {
    start: u64,
    end: u64,
}

impl SearchRange {
    /// Every possible guess.
    pub const FULL: Self = Self {
        start: 0,
        end: GUESS_SPACE,
    };

    /// Create a range of guesses `start..end`.
    ///
    /// # Errors
    /// Returns `RecoveryError::InvalidRange` if the range is empty or
    /// `end > 2^32`.
    pub const fn new(start: u64, end: u64) -> Result<Self, RecoveryError> {
        if start >= end || end > GUESS_SPACE {
            return Err(RecoveryError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// First guess (inclusive).
    #[must_use]
    pub const fn start(&self) -> u64 {
        self.start
    }

    /// Last guess (exclusive).
    #[must_use]
    pub const fn end(&self) -> u64 {
        self.end
    }

    /// Number of guesses. Never zero.
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.end - self.start
    }

    /// Always `false`; ranges are validated non-empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Whether `guess` lies in the range.
    #[must_use]
    pub const fn contains(&self, guess: u32) -> bool {
        let g = guess as u64;
        self.start <= g && g < self.end
    }

    /// Split into at most `parts` contiguous sub-ranges covering `self`
    /// exactly once, in ascending order.
    ///
    /// Sizes differ by at most one; `parts` is clamped to `1..=len`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn split(&self, parts: usize) -> Vec<Self> {
        let parts = (parts.max(1) as u64).min(self.len());
        let base = self.len() / parts;
        let extra = self.len() % parts;

        let mut out = Vec::with_capacity(parts as usize);
        let mut start = self.start;
        for i in 0..parts {
            let size = base + u64::from(i < extra);
            out.push(Self {
                start,
                end: start + size,
            });
            start += size;
        }
        debug_assert_eq!(start, self.end);
        out
    }
}

impl Default for SearchRange {
    fn default() -> Self {
        Self::FULL
    }
}
