//! Arithmetic over the ring of integers modulo 2^64.
//!
//! Every odd residue is a unit, so the finalizer's multiply steps can be
//! undone exactly once the inverse of the multiplier is known.

// =============================================================================
// MODULAR INVERSE
// =============================================================================

/// Multiplicative inverse of an odd `c` modulo 2^64.
///
/// Newton iteration `x <- x * (2 - c * x)` doubles the number of correct low
/// bits per step. Any odd `c` satisfies `c * c ≡ 1 (mod 8)`, so starting from
/// `x = c` five steps take 3 correct bits past 64.
///
/// # Panics
/// Panics (at compile time when used in a `const`) if `c` is even.
#[must_use]
pub const fn mod_inverse(c: u64) -> u64 {
    assert!(c & 1 == 1, "only odd values are invertible modulo 2^64");

    let mut x = c;
    let mut i = 0;
    while i < 5 {
        x = x.wrapping_mul(2u64.wrapping_sub(c.wrapping_mul(x)));
        i += 1;
    }
    x
}

/// Returns `Some(inverse)` for odd `c`, `None` for even `c` (non-units).
#[must_use]
pub const fn checked_mod_inverse(c: u64) -> Option<u64> {
    if c & 1 == 0 {
        None
    } else {
        Some(mod_inverse(c))
    }
}

/// Position `index` steps away from `state` along a stream stepped by `gamma`.
///
/// Wraps modulo 2^64; `index` may be negative to walk backwards.
#[inline]
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub const fn step(state: u64, gamma: u64, index: i64) -> u64 {
    state.wrapping_add(gamma.wrapping_mul(index as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_of_one() {
        assert_eq!(mod_inverse(1), 1);
        assert_eq!(mod_inverse(u64::MAX), u64::MAX);
    }

    #[test]
    fn test_inverse_small_odd() {
        for c in (1u64..2048).step_by(2) {
            let inv = mod_inverse(c);
            assert_eq!(c.wrapping_mul(inv), 1, "bad inverse for {c}");
        }
    }

    #[test]
    fn test_checked_rejects_even() {
        assert_eq!(checked_mod_inverse(0), None);
        assert_eq!(checked_mod_inverse(0x1_0000_0000), None);
        assert_eq!(checked_mod_inverse(3).map(|x| x.wrapping_mul(3)), Some(1));
    }

    #[test]
    fn test_step_wraps_both_ways() {
        let g = 0x9E37_79B9_7F4A_7C15;
        assert_eq!(step(0, g, 1), g);
        assert_eq!(step(g, g, -1), 0);
        assert_eq!(step(0, g, -1), 0u64.wrapping_sub(g));
        assert_eq!(step(u64::MAX, 1, 1), 0);
    }
}
