//! Brute-force verification of the square-root routine.
//!
//! The 32-bit domain is small enough to enumerate, so confidence in the
//! refinement-step ceiling comes from checking every input rather than from a
//! closed-form convergence proof.  Each result is held against two
//! independent references: the defining bound `y² ≤ s < (y + 1)²` evaluated
//! in 64-bit, and a truncated double-precision square root, which is exact
//! here because a double's 53-bit mantissa represents every 32-bit integer.

use super::isqrt::isqrt_u32;

/// One past the largest valid radicand.
pub const DOMAIN_END: u64 = 1 << 32;

quick_error! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum Error {
        /// The result fails the defining bound `y² ≤ s < (y + 1)²`.
        BoundViolation { s: u32, y: u32 } {
            display("⌊√{}⌋ computed as {}, which violates the floor bound", s, y)
        }
        /// The result disagrees with the floating-point reference.
        OracleMismatch { s: u32, y: u32, want: u32 } {
            display("⌊√{}⌋ computed as {}, but the reference says {}", s, y, want)
        }
    }
}

/// Reference root: exact for every 32-bit radicand.
#[inline]
pub fn oracle(s: u32) -> u32 {
    (s as f64).sqrt() as u32
}

/// Check a single radicand against both references and return its root.
pub fn check(s: u32) -> Result<u32, Error> {
    let y = isqrt_u32(s);
    let (s64, y64) = (s as u64, y as u64);
    if !(y64 * y64 <= s64 && (y64 + 1) * (y64 + 1) > s64) {
        return Err(Error::BoundViolation { s, y });
    }
    let want = oracle(s);
    if y != want {
        return Err(Error::OracleMismatch { s, y, want });
    }
    Ok(y)
}

/// Check every radicand in `begin .. end` and return how many were checked.
///
/// The bounds are `u64` so the whole domain can be written `0 .. DOMAIN_END`.
pub fn check_range(begin: u64, end: u64) -> Result<u64, Error> {
    assert!(begin <= end && end <= DOMAIN_END);
    for s in begin..end {
        check(s as u32)?;
    }
    Ok(end - begin)
}
