//! Public API Layer
//!
//! Seed recovery from consecutive outputs. Every entry point enumerates the
//! 2^32 possible low halves of the first output's `mix64`, rebuilds each into
//! a candidate state, and keeps the candidates that reproduce the remaining
//! outputs (or that the caller's oracle confirms).

use crate::constants::{GAMMA, MIN_SELF_CONTAINED};
use crate::engine::search::{self, Hit, Outcome};
use crate::engine::SearchRange;
use crate::finalizer::finalize;
use crate::types::{CancelToken, Recovered, RecoveryError};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// =============================================================================
// ONE-SHOT API
// =============================================================================

/// Recover the seed of a stream from three or more consecutive outputs.
///
/// The result's [`seed`](Recovered::seed) is the state before the increment
/// that produced `outputs[0]`.
///
/// Two outputs are rejected: about one wrong state survives a single 32-bit
/// check, so the answer would not be unique. Use [`recover_candidates`] to see
/// every match in that case.
///
/// # Errors
/// - `InsufficientData` for fewer than three outputs.
/// - `NoCandidateFound` if no state reproduces the outputs (not consecutive,
///   corrupted, or from a different generator).
///
/// # Example
/// ```rust,no_run
/// # fn main() -> Result<(), seedrev::RecoveryError> {
/// let mut stream = seedrev::Stream::new(0x1234_5678_1234_5678);
/// let outputs = [stream.next_u32(), stream.next_u32(), stream.next_u32()];
///
/// let recovered = seedrev::recover(&outputs)?;
/// assert_eq!(recovered.seed(), 0x1234_5678_1234_5678);
/// # Ok(())
/// # }
/// ```
pub fn recover(outputs: &[u32]) -> Result<Recovered, RecoveryError> {
    Recoverer::new().recover(outputs)
}

/// Recover a seed from a single output with the help of an external oracle.
///
/// Every candidate seed is passed to `oracle`; the first one it confirms is
/// returned. The oracle may be called concurrently from several workers.
///
/// # Errors
/// `NoCandidateFound` if the oracle rejects all 2^32 candidates.
pub fn recover_with_oracle<O>(output: u32, oracle: O) -> Result<Recovered, RecoveryError>
where
    O: Fn(u64) -> bool + Sync,
{
    Recoverer::new().recover_with_oracle(output, oracle)
}

/// Every seed consistent with two or more consecutive outputs.
///
/// Exhaustive: always scans the whole range. With two outputs expect the true
/// seed plus about one coincidental match; with three or more the list
/// normally has exactly one entry.
///
/// # Errors
/// - `InsufficientData` for fewer than two outputs.
/// - `NoCandidateFound` if the list would be empty.
pub fn recover_candidates(outputs: &[u32]) -> Result<Vec<Recovered>, RecoveryError> {
    Recoverer::new().recover_candidates(outputs)
}

// =============================================================================
// CONFIGURABLE RECOVERER
// =============================================================================

/// Recovery with explicit search configuration.
///
/// # Example
/// ```rust
/// use seedrev::{CancelToken, Recoverer, SearchRange};
///
/// let token = CancelToken::new();
/// let recoverer = Recoverer::new()
///     .with_range(SearchRange::new(0x2BAE_0000, 0x2BAF_0000)?)
///     .with_partitions(4)
///     .with_cancel(token.clone());
///
/// let outputs: [u32; 3] = [0x6F7C_00DB, 0xBC2D_A4F1, 0x66BD_453C];
/// assert_eq!(recoverer.recover(&outputs)?.seed(), 0x1234_5678_1234_5678);
/// # Ok::<(), seedrev::RecoveryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Recoverer {
    range: SearchRange,
    partitions: usize,
    cancel: Option<CancelToken>,
}

impl Default for Recoverer {
    fn default() -> Self {
        Self::new()
    }
}

impl Recoverer {
    // =========================================================================
    // CONFIGURATION
    // =========================================================================

    /// Full guess space, default partitioning, no cancellation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            range: SearchRange::FULL,
            partitions: search::default_partitions(),
            cancel: None,
        }
    }

    /// Restrict the low-bit guesses to `range`.
    ///
    /// A result outside the range is reported as `NoCandidateFound`.
    #[must_use]
    pub const fn with_range(mut self, range: SearchRange) -> Self {
        self.range = range;
        self
    }

    /// Number of contiguous partitions the range is split into.
    #[must_use]
    pub fn with_partitions(mut self, partitions: usize) -> Self {
        self.partitions = partitions.max(1);
        self
    }

    /// Observe `token` for cooperative cancellation.
    #[must_use]
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Configured guess range.
    #[must_use]
    pub const fn range(&self) -> SearchRange {
        self.range
    }

    // =========================================================================
    // RECOVERY
    // =========================================================================

    /// See [`recover`].
    ///
    /// # Errors
    /// `InsufficientData`, `NoCandidateFound`, or `Cancelled`.
    pub fn recover(&self, outputs: &[u32]) -> Result<Recovered, RecoveryError> {
        let (&first, rest) = split_outputs(outputs, MIN_SELF_CONTAINED)?;
        self.first_match(first, |state| continues(state, rest))
    }

    /// See [`recover_with_oracle`].
    ///
    /// # Errors
    /// `NoCandidateFound` or `Cancelled`.
    pub fn recover_with_oracle<O>(&self, output: u32, oracle: O) -> Result<Recovered, RecoveryError>
    where
        O: Fn(u64) -> bool + Sync,
    {
        self.first_match(output, |state| oracle(state.wrapping_sub(GAMMA)))
    }

    /// See [`recover_candidates`].
    ///
    /// # Errors
    /// `InsufficientData`, `NoCandidateFound`, or `Cancelled`.
    pub fn recover_candidates(&self, outputs: &[u32]) -> Result<Vec<Recovered>, RecoveryError> {
        let (&first, rest) = split_outputs(outputs, 2)?;
        let hits = search::find_all(
            first,
            self.range,
            self.partitions,
            self.cancel.as_ref(),
            |state| continues(state, rest),
        )
        .ok_or(RecoveryError::Cancelled)?;

        if hits.is_empty() {
            return Err(RecoveryError::NoCandidateFound);
        }
        if hits.len() > 1 {
            search_debug!(
                "{} candidates for {} output(s): result is ambiguous",
                hits.len(),
                outputs.len()
            );
        }

        let mut candidates: Vec<Recovered> = hits.into_iter().map(into_recovered).collect();
        candidates.sort_unstable();
        Ok(candidates)
    }

    fn first_match<F>(&self, first: u32, accept: F) -> Result<Recovered, RecoveryError>
    where
        F: Fn(u64) -> bool + Sync,
    {
        match search::find_first(
            first,
            self.range,
            self.partitions,
            self.cancel.as_ref(),
            accept,
        ) {
            Outcome::Found(hit) => Ok(into_recovered(hit)),
            Outcome::Exhausted => Err(RecoveryError::NoCandidateFound),
            Outcome::Cancelled => Err(RecoveryError::Cancelled),
        }
    }
}

// =============================================================================
// INTERNAL HELPERS
// =============================================================================

fn split_outputs(outputs: &[u32], required: usize) -> Result<(&u32, &[u32]), RecoveryError> {
    if outputs.len() < required {
        return Err(RecoveryError::InsufficientData {
            provided: outputs.len(),
            required,
        });
    }
    outputs.split_first().ok_or(RecoveryError::InsufficientData {
        provided: 0,
        required,
    })
}

/// Whether the stream through `state` produces `rest` on the following steps.
#[inline]
fn continues(state: u64, rest: &[u32]) -> bool {
    let mut s = state;
    rest.iter().all(|&expected| {
        s = s.wrapping_add(GAMMA);
        finalize(s) == expected
    })
}

#[inline]
const fn into_recovered(hit: Hit) -> Recovered {
    Recovered::new(hit.state.wrapping_sub(GAMMA), hit.guess)
}
