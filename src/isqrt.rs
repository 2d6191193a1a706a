//! Integer square roots of 32-bit radicands.
//!
//! The root is found without touching floating point: a first guess is read
//! off the bit length of the radicand, then refined with the integer variant
//! of Newton's method until the iterates stop decreasing.

/// Ceiling on the number of refinement steps.  Four suffice for every 32-bit
/// radicand; this was established by exhaustive enumeration (the `isqrt32`
/// verifier binary), not by a closed-form bound, so it must be re-verified
/// before being assumed for wider integers.
const MAX_REFINE_STEPS: usize = 4;

/// Construct a first guess for `√s` from the bit length of `s`.
///
/// Requires `s ≥ 2`.  The guess lands in `(√s, 1.5 √s]`: strictly above the
/// true root, so the Newton iterates decrease monotonically toward it, and
/// close enough that they settle within `MAX_REFINE_STEPS` steps.
#[inline]
fn initial_estimate(s: u32) -> u32 {
    let bits = 30 - s.leading_zeros();
    (2 + (bits & 1)) << (bits >> 1)
}

/// Calculate the integer square root `⌊√s⌋`.
///
/// The result `y` satisfies `y² ≤ s < (y + 1)²` for every input.
///
/// ```
/// assert_eq!(isqrt32::isqrt::isqrt_u32(99), 9);
/// assert_eq!(isqrt32::isqrt::isqrt_u32(100), 10);
/// ```
#[inline]
pub fn isqrt_u32(s: u32) -> u32 {
    // the general path divides by the iterate, so answer 0 and 1 by
    // inspection; this also keeps the estimate below at least 2
    if s <= 1 {
        return s;
    }
    let mut x = initial_estimate(s);
    // refine with x ← (x + s/x)/2 in floor arithmetic; while x exceeds ⌊√s⌋
    // the sequence decreases strictly, so the first step that fails to
    // decrease means the previous iterate is the answer
    for _ in 0..MAX_REFINE_STEPS {
        let next = (x + s / x) / 2;
        if next >= x {
            return x;
        }
        x = next;
    }
    // reachable, but exhaustively verified to hold the answer by then
    x
}

#[test]
fn test() {
    use self::isqrt_u32 as isqrt;
    for n in 0..65535 {
        assert!(isqrt(n).pow(2) <= n, "⌊√{n}⌋^2 ≤ {n}", n = n);
        assert!(
            (isqrt(n) as u64 + 1).pow(2) > n as u64,
            "(⌊√{n}⌋ + 1)^2 > {n}",
            n = n
        );
    }
    // test every square root against its perfect square and its neighbors
    for r in 0..=65535u32 {
        if r > 0 {
            let n = r * r - 1;
            assert_eq!(isqrt(n), r - 1, "⌊√{}⌋ == {}", n, r - 1);
        }
        let n = r * r;
        assert_eq!(isqrt(n), r, "⌊√{}⌋ == {}", n, r);
        if r > 0 {
            let n = r * r + 1;
            assert_eq!(isqrt(n), r, "⌊√{}⌋ == {}", n, r);
        }
    }
    // test the extreme end of the domain
    for n in 0xffffff00u32..=0xffffffff {
        assert_eq!(isqrt(n), 65535);
    }
}

#[test]
fn test_initial_estimate() {
    // the guess must sit strictly above the true root but no more than 50%
    // beyond it, at both ends of every octave
    for bits in 1..32 {
        let lo = 1u64 << bits;
        let hi = (1u64 << (bits + 1)) - 1;
        for &s in &[lo, hi] {
            let x0 = initial_estimate(s as u32) as u64;
            assert!(x0 * x0 > s, "estimate for {} is above √s", s);
            assert!(4 * x0 * x0 <= 9 * s, "estimate for {} is ≤ 1.5 √s", s);
        }
    }
}
