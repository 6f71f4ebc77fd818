//! Generator Constants
//!
//! The target generator is fixed: a Weyl sequence stepped by the 64-bit golden
//! ratio, finalized by two xorshift-multiply rounds using the `fmix64`
//! multipliers and a shift of 33.
//!
//! ```text
//! state_{k+1} = state_k + GAMMA                  (mod 2^64)
//! output_k    = finalize(state_k)                (high 32 bits of mix64)
//! ```
//!
//! The multiplier inverses are derived at compile time and never recomputed
//! inside the search loop.

use crate::arith::mod_inverse;
use static_assertions::const_assert;

// =============================================================================
// STREAM INCREMENT
// =============================================================================

/// Golden Ratio (φ) in 64-bit fixed-point: floor(2^64 / φ), forced odd.
pub const GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

// =============================================================================
// FINALIZER CONSTANTS
// =============================================================================

/// Right-shift used by both xorshift steps of the finalizer.
pub const SHIFT: u32 = 33;

/// First multiplier (after the first xorshift).
pub const C1: u64 = 0xFF51_AFD7_ED55_8CCD;

/// Second multiplier (after the second xorshift).
pub const C2: u64 = 0xC4CE_B9FE_1A85_EC53;

/// Multiplicative inverse of [`C1`] modulo 2^64.
pub const C1_INV: u64 = mod_inverse(C1);

/// Multiplicative inverse of [`C2`] modulo 2^64.
pub const C2_INV: u64 = mod_inverse(C2);

// =============================================================================
// SEARCH SPACE
// =============================================================================

/// Number of unknown low bits per observed output.
pub const GUESS_BITS: u32 = 32;

/// Size of the guess space: every possible value of the discarded low half.
pub const GUESS_SPACE: u64 = 1 << GUESS_BITS;

/// Minimum number of outputs for self-contained (oracle-free) recovery.
pub const MIN_SELF_CONTAINED: usize = 3;

// =============================================================================
// COMPILE-TIME CHECKS
// =============================================================================

const_assert!(GAMMA & 1 == 1);
const_assert!(C1 & 1 == 1);
const_assert!(C2 & 1 == 1);
const_assert!(C1.wrapping_mul(C1_INV) == 1);
const_assert!(C2.wrapping_mul(C2_INV) == 1);
// unxorshift is a single reapplication only while the shift covers half the word
const_assert!(SHIFT >= 32 && SHIFT < 64);
