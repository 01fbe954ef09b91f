//! Triangular numbers and the pairing function used for edge identities.

/// Calculates the nth triangular number.
///
/// The triangular number T(n) = 1 + 2 + ... + n = n(n+1)/2.
pub fn triangular(n: usize) -> usize {
    (n * (n + 1)) / 2
}

/// Inverse of the triangular number function.
///
/// Returns the largest n such that `triangular(n) <= k`.  Defined for every
/// `k`, including values near `usize::MAX`.
pub fn triangular_inv_floor(k: usize) -> usize {
    // n(n + 1) / 2 = k
    // n^2 + n - 2k = 0
    // By the quadratic formula, computed wide so that 8k cannot overflow.
    ((1 + 8 * k as u128).isqrt() as usize - 1) / 2
}

/// Maps an ordered pair of naturals to a single natural, injectively.
///
/// This is the Cantor pairing `T(a + b) + b`.
///
/// # Panics
///
/// Panics if the result does not fit in a `usize`, which requires
/// `a + b` of roughly `2^32` or more on 64-bit targets.
pub fn pair(a: usize, b: usize) -> usize {
    let w = a as u128 + b as u128;
    w.checked_mul(w + 1)
        .and_then(|doubled| usize::try_from(doubled / 2 + b as u128).ok())
        .unwrap_or_else(|| panic!("Pair ({a}, {b}) overflows usize"))
}

/// Inverse of [`pair`].  Every `usize` decodes to some pair.
pub fn unpair(z: usize) -> (usize, usize) {
    let w = triangular_inv_floor(z);
    // T(w) <= z, but w(w + 1) alone may not fit.
    let t = (w as u128 * (w as u128 + 1) / 2) as usize;
    let b = z - t;
    (w - b, b)
}
