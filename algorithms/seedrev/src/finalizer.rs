//! Finalizer
//!
//! Forward mixing `u64 -> u32` and its algebraic inverse, exposed as the
//! individual sub-steps so the search loop can inline exactly what it needs.
//!
//! ```text
//! forward:  state -> xorshift -> * C1 -> xorshift -> * C2 -> [hi32 | lo32]
//! inverse:  [hi32 | guess] -> * C2_INV -> unxorshift -> * C1_INV -> unxorshift
//! ```
//!
//! The forward step discards the low 32 bits of the final product; that half
//! is the only unknown the recoverer has to enumerate.

use crate::constants::{C1, C1_INV, C2, C2_INV, SHIFT};

// =============================================================================
// FORWARD
// =============================================================================

/// Map a 64-bit state to the observable 32-bit output.
///
/// # Example
/// ```rust
/// let out = seedrev::finalize(0x1234_5678_1234_5678_u64.wrapping_add(seedrev::GAMMA));
/// assert_eq!(out, 0x6F7C_00DB);
/// ```
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn finalize(state: u64) -> u32 {
    (mix64(state) >> 32) as u32
}

/// Full 64-bit mix before truncation (`t4`).
#[inline]
#[must_use]
pub const fn mix64(state: u64) -> u64 {
    let t2 = xorshift(state).wrapping_mul(C1);
    xorshift(t2).wrapping_mul(C2)
}

/// `x ^ (x >> 33)`.
#[inline]
#[must_use]
pub const fn xorshift(x: u64) -> u64 {
    x ^ (x >> SHIFT)
}

// =============================================================================
// INVERSE
// =============================================================================

/// Exact inverse of [`xorshift`].
///
/// The top 31 bits pass through unchanged, so a single reapplication cancels
/// the contribution to the low bits.
#[inline]
#[must_use]
pub const fn unxorshift(y: u64) -> u64 {
    y ^ (y >> SHIFT)
}

/// Undo `y = x * c` given `c_inv`, the inverse of `c` modulo 2^64.
#[inline]
#[must_use]
pub const fn unmultiply(y: u64, c_inv: u64) -> u64 {
    y.wrapping_mul(c_inv)
}

/// Exact inverse of [`mix64`].
#[inline]
#[must_use]
pub const fn unmix(t4: u64) -> u64 {
    let t3 = unmultiply(t4, C2_INV);
    let t2 = unxorshift(t3);
    let t1 = unmultiply(t2, C1_INV);
    unxorshift(t1)
}

/// Rebuild the state from an observed output and a guess for the discarded
/// low half.
///
/// Exact when `guessed_low32` equals the true low bits of `mix64(state)`.
#[inline]
#[must_use]
pub const fn unmix_known_high(high32: u32, guessed_low32: u32) -> u64 {
    unmix(join(high32, guessed_low32))
}

/// Concatenate two halves into `high32:low32`.
#[inline]
#[must_use]
pub const fn join(high32: u32, low32: u32) -> u64 {
    ((high32 as u64) << 32) | low32 as u64
}
