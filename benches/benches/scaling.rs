//! Thread Scaling Benchmark
//!
//! Runs a full 2^32 unsatisfiable search on rayon pools of increasing size and
//! reports guesses per second. No criterion harness: one pass per pool size is
//! already several seconds.

#![allow(clippy::cast_precision_loss)]
#![allow(clippy::unwrap_used)]

#[cfg(feature = "multithread")]
use seedrev::{RecoveryError, SearchRange};
#[cfg(feature = "multithread")]
use std::hint::black_box;
#[cfg(feature = "multithread")]
use std::time::Instant;

// =============================================================================
// MEASUREMENT
// =============================================================================

/// Exhaust `range` on a dedicated pool of `threads` workers.
#[cfg(feature = "multithread")]
fn measure(threads: usize, range: SearchRange) -> f64 {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .unwrap();

    pool.install(|| {
        let outputs: [u32; 3] = [0x0000_0001, 0x0000_0002, 0x0000_0003];
        let recoverer = seedrev::Recoverer::new().with_range(range);
        let start = Instant::now();
        let result = recoverer.recover(black_box(&outputs));
        let elapsed = start.elapsed().as_secs_f64();
        assert_eq!(result, Err(RecoveryError::NoCandidateFound));
        range.len() as f64 / elapsed
    })
}

// =============================================================================
// ENTRY POINT
// =============================================================================

#[cfg(not(feature = "multithread"))]
fn main() {
    println!("Thread scaling needs the `multithread` feature; skipping.");
}

#[cfg(feature = "multithread")]
fn main() {
    let cores = num_cpus::get();
    let full = std::env::args().any(|a| a == "--full");
    let range = if full {
        SearchRange::FULL
    } else {
        SearchRange::new(0, 1 << 28).unwrap()
    };

    println!("\n=== seedrev Thread Scaling ({} guesses) ===", range.len());
    println!("{:>8} | {:>14} | {:>8}", "threads", "Mguesses/s", "speedup");

    let mut threads = 1;
    let mut baseline = None;
    while threads <= cores {
        let rate = measure(threads, range);
        let base = *baseline.get_or_insert(rate);
        println!(
            "{threads:>8} | {:>14.1} | {:>7.2}x",
            rate / 1e6,
            rate / base
        );
        threads *= 2;
    }
    if !cores.is_power_of_two() {
        let rate = measure(cores, range);
        let base = baseline.unwrap_or(rate);
        println!("{cores:>8} | {:>14.1} | {:>7.2}x", rate / 1e6, rate / base);
    }
    println!("==========================================\n");
}
