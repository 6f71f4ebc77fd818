//! Parallel Search Engine
//!
//! Scans low-bit guesses for one observed output. Each guess is rebuilt into a
//! full state through the inverse finalizer and handed to an acceptance
//! predicate. Partitions are independent:
//! 1. Partitions run on the rayon pool if the `multithread` feature is enabled,
//!    otherwise serially in ascending order.
//! 2. The only shared mutable state is a stop flag, polled once per guess.
//! 3. Memory use is O(1) per worker; nothing is tabulated.

use crate::engine::partition::SearchRange;
use crate::finalizer::unmix_known_high;
use crate::types::CancelToken;

use core::sync::atomic::{AtomicBool, Ordering};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// =============================================================================
// TYPES
// =============================================================================

/// A guess whose rebuilt state passed the predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    /// State that produced the observed output.
    pub state: u64,
    /// Low 32 bits of `mix64(state)`.
    pub guess: u32,
}

/// How a first-match search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A guess was accepted; peers were told to stop.
    Found(Hit),
    /// Every guess in the range was rejected.
    Exhausted,
    /// The caller's token fired before a match.
    Cancelled,
}

/// Stop conditions shared by every worker of one search.
struct StopSignal<'a> {
    found: AtomicBool,
    /// Set by a worker that left its partition before the last guess.
    interrupted: AtomicBool,
    cancel: Option<&'a CancelToken>,
}

impl StopSignal<'_> {
    #[inline]
    fn should_stop(&self) -> bool {
        self.found.load(Ordering::Relaxed) || self.cancel.is_some_and(CancelToken::is_cancelled)
    }
}

// =============================================================================
// SEARCH
// =============================================================================

/// Return the first accepted guess (in no particular order).
pub fn find_first<F>(
    high: u32,
    range: SearchRange,
    partitions: usize,
    cancel: Option<&CancelToken>,
    accept: F,
) -> Outcome
where
    F: Fn(u64) -> bool + Sync,
{
    let parts = range.split(partitions);
    search_debug!(
        "search 0x{:08x}: {} guesses over {} partitions",
        high,
        range.len(),
        parts.len()
    );

    let signal = StopSignal {
        found: AtomicBool::new(false),
        interrupted: AtomicBool::new(false),
        cancel,
    };

    let hit = parts.find_map_partition(|part| scan_first(high, part, &signal, &accept));

    match hit {
        Some(hit) => {
            search_debug!("search 0x{:08x}: accepted guess 0x{:08x}", high, hit.guess);
            Outcome::Found(hit)
        }
        None if cancel.is_some_and(CancelToken::is_cancelled) => Outcome::Cancelled,
        None => Outcome::Exhausted,
    }
}

/// Return every accepted guess in the range, in ascending guess order.
///
/// Returns `None` if a cancel cut any partition short. A cancel that lands
/// after every guess was tried does not discard the result.
pub fn find_all<F>(
    high: u32,
    range: SearchRange,
    partitions: usize,
    cancel: Option<&CancelToken>,
    accept: F,
) -> Option<Vec<Hit>>
where
    F: Fn(u64) -> bool + Sync,
{
    let parts = range.split(partitions);
    search_debug!(
        "exhaustive search 0x{:08x}: {} guesses over {} partitions",
        high,
        range.len(),
        parts.len()
    );

    let signal = StopSignal {
        found: AtomicBool::new(false),
        interrupted: AtomicBool::new(false),
        cancel,
    };

    let mut hits = parts.flat_map_partition(|part| scan_all(high, part, &signal, &accept));

    if signal.interrupted.load(Ordering::Relaxed) {
        search_debug!("exhaustive search 0x{:08x}: cancelled", high);
        return None;
    }
    hits.sort_unstable_by_key(|h| h.guess);
    search_debug!("exhaustive search 0x{:08x}: {} hit(s)", high, hits.len());
    Some(hits)
}

// =============================================================================
// WORKERS
// =============================================================================

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn scan_first<F>(high: u32, part: SearchRange, signal: &StopSignal<'_>, accept: &F) -> Option<Hit>
where
    F: Fn(u64) -> bool,
{
    for guess in part.start()..part.end() {
        if signal.should_stop() {
            return None;
        }
        let guess = guess as u32;
        let state = unmix_known_high(high, guess);
        if accept(state) {
            signal.found.store(true, Ordering::Relaxed);
            return Some(Hit { state, guess });
        }
    }
    search_trace!(
        "partition 0x{:09x}..0x{:09x} exhausted",
        part.start(),
        part.end()
    );
    None
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn scan_all<F>(high: u32, part: SearchRange, signal: &StopSignal<'_>, accept: &F) -> Vec<Hit>
where
    F: Fn(u64) -> bool,
{
    let mut hits = Vec::new();
    for guess in part.start()..part.end() {
        if signal.should_stop() {
            signal.interrupted.store(true, Ordering::Relaxed);
            break;
        }
        let guess = guess as u32;
        let state = unmix_known_high(high, guess);
        if accept(state) {
            hits.push(Hit { state, guess });
        }
    }
    hits
}

/// Helper for feature-agnostic partition processing
trait PartitionProcessor {
    fn find_map_partition<F, R>(self, f: F) -> Option<R>
    where
        F: Fn(SearchRange) -> Option<R> + Sync + Send,
        R: Send;

    fn flat_map_partition<F, R>(self, f: F) -> Vec<R>
    where
        F: Fn(SearchRange) -> Vec<R> + Sync + Send,
        R: Send;
}

cfg_if::cfg_if! {
    if #[cfg(feature = "multithread")] {
        use rayon::prelude::*;

        /// Default number of partitions: a few per worker so stragglers even out.
        #[must_use]
        pub fn default_partitions() -> usize {
            rayon::current_num_threads().saturating_mul(4)
        }

        impl PartitionProcessor for Vec<SearchRange> {
            fn find_map_partition<F, R>(self, f: F) -> Option<R>
            where
                F: Fn(SearchRange) -> Option<R> + Sync + Send,
                R: Send,
            {
                self.into_par_iter().find_map_any(f)
            }

            fn flat_map_partition<F, R>(self, f: F) -> Vec<R>
            where
                F: Fn(SearchRange) -> Vec<R> + Sync + Send,
                R: Send,
            {
                self.into_par_iter().flat_map_iter(f).collect()
            }
        }
    } else {
        /// Default number of partitions: one, scanned in order.
        #[must_use]
        pub const fn default_partitions() -> usize {
            1
        }

        impl PartitionProcessor for Vec<SearchRange> {
            fn find_map_partition<F, R>(self, f: F) -> Option<R>
            where
                F: Fn(SearchRange) -> Option<R> + Sync + Send,
                R: Send,
            {
                self.into_iter().find_map(f)
            }

            fn flat_map_partition<F, R>(self, f: F) -> Vec<R>
            where
                F: Fn(SearchRange) -> Vec<R> + Sync + Send,
                R: Send,
            {
                self.into_iter().flat_map(f).collect()
            }
        }
    }
}
