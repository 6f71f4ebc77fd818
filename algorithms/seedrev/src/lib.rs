#![cfg_attr(not(feature = "std"), no_std)]

//! # seedrev
//!
//! Seed recovery for the golden-gamma generator: a 64-bit Weyl state stepped
//! by `GAMMA` and finalized to 32-bit outputs. Three consecutive outputs pin
//! down the state uniquely; the search enumerates the 2^32 bits the finalizer
//! throws away and verifies each candidate forward.

//! # Usage
//! ```rust
//! use seedrev::{Recoverer, SearchRange, Stream};
//!
//! // 1. Observe a few consecutive outputs
//! let mut stream = Stream::new(0xDEAD_BEEF_CAFE_BABE);
//! let outputs: Vec<u32> = (&mut stream).take(3).collect();
//!
//! // 2. Recover (restricted range keeps the doctest fast)
//! let recovered = Recoverer::new()
//!     .with_range(SearchRange::new(0x1EA5_0000, 0x1EA6_0000)?)
//!     .recover(&outputs)?;
//! assert_eq!(recovered.seed(), 0xDEAD_BEEF_CAFE_BABE);
//!
//! // 3. Predict what comes next
//! assert_eq!(recovered.output_at(3), stream.next_u32());
//! # Ok::<(), seedrev::RecoveryError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

#[macro_use]
mod macros;

pub mod arith;
pub mod constants;
mod engine;
pub mod finalizer;
mod recover;
mod stream;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use constants::GAMMA;
pub use engine::SearchRange;
pub use finalizer::{finalize, unmix_known_high};
pub use recover::{recover, recover_candidates, recover_with_oracle, Recoverer};
pub use stream::Stream;
pub use types::{CancelToken, Recovered, RecoveryError};
