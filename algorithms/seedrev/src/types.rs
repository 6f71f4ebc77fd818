//! Shared types used across the seedrev library.

use crate::arith::step;
use crate::constants::GAMMA;
use crate::finalizer::finalize;
use crate::stream::Stream;

use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};
#[cfg(feature = "std")]
use std::error;

#[cfg(not(feature = "std"))]
use alloc::sync::Arc;
#[cfg(feature = "std")]
use std::sync::Arc;

// =============================================================================
// RECOVERED SEED
// =============================================================================

/// A verified recovery result.
///
/// `seed` is the state *before* the increment that produced the first
/// observed output, so the observed outputs are
/// `finalize(seed + (k + 1) * GAMMA)` for `k = 0, 1, 2, ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Recovered {
    seed: u64,
    low_bits: u32,
}

impl Recovered {
    pub(crate) const fn new(seed: u64, low_bits: u32) -> Self {
        Self { seed, low_bits }
    }

    /// State before the first observed output.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Low 32 bits of the first output's `mix64` that the search matched.
    #[must_use]
    pub const fn low_bits(&self) -> u32 {
        self.low_bits
    }

    /// State that produced observed output `index` (0-based, may be negative).
    #[must_use]
    pub const fn state_at(&self, index: i64) -> u64 {
        step(self.seed, GAMMA, index.wrapping_add(1))
    }

    /// Output at position `index` relative to the first observation.
    #[must_use]
    pub const fn output_at(&self, index: i64) -> u32 {
        finalize(self.state_at(index))
    }

    /// The same stream, re-anchored one output later.
    ///
    /// Low bits are recomputed for the new first output.
    #[must_use]
    pub const fn next(&self) -> Self {
        self.shifted(1)
    }

    /// The same stream, re-anchored one output earlier.
    #[must_use]
    pub const fn prev(&self) -> Self {
        self.shifted(-1)
    }

    /// Re-anchor `by` outputs away (wrapping).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn shifted(&self, by: i64) -> Self {
        let seed = step(self.seed, GAMMA, by);
        let low_bits = crate::finalizer::mix64(seed.wrapping_add(GAMMA)) as u32;
        Self { seed, low_bits }
    }

    /// A generator positioned at the seed; its first output is the first
    /// observed output.
    #[must_use]
    pub const fn stream(&self) -> Stream {
        Stream::new(self.seed)
    }
}

impl fmt::Display for Recovered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016x}", self.seed)
    }
}

// =============================================================================
// CANCELLATION
// =============================================================================

/// Cooperative cancellation flag shared between a caller and a running search.
///
/// Workers poll it once per guess; cancelling does not interrupt an oracle
/// call already in progress.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token in the non-cancelled state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that every search observing this token stop.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether [`cancel`](Self::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Terminal failure of a recovery call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryError {
    /// Too few outputs for the requested mode.
    InsufficientData {
        /// Outputs supplied by the caller.
        provided: usize,
        /// Outputs the mode needs.
        required: usize,
    },
    /// The search range was exhausted without a verified candidate.
    ///
    /// Also the outcome for outputs that are not consecutive, or that come
    /// from a generator with different constants.
    NoCandidateFound,
    /// The caller cancelled the search through a [`CancelToken`].
    Cancelled,
    /// The requested guess range is empty or exceeds 2^32.
    InvalidRange {
        /// First guess (inclusive).
        start: u64,
        /// Last guess (exclusive).
        end: u64,
    },
}

impl fmt::Display for RecoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientData { provided, required } => write!(
                f,
                "insufficient data: {provided} output(s) supplied, at least {required} required"
            ),
            Self::NoCandidateFound => write!(
                f,
                "no candidate found: outputs are not consecutive or not from this generator"
            ),
            Self::Cancelled => write!(f, "search cancelled"),
            Self::InvalidRange { start, end } => write!(
                f,
                "invalid guess range {start:#x}..{end:#x}: must be non-empty and within 0..2^32"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for RecoveryError {}
