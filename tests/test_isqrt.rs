extern crate isqrt32;
extern crate rand;
extern crate rand_xorshift;

use isqrt32::isqrt::isqrt_u32;
use isqrt32::verify;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

const RNG_SEED: [u8; 16] = [
    0x8f, 0x21, 0xd5, 0x4c, 0x72, 0x0b, 0xe6, 0x93, 0x3a, 0xc8, 0x5e, 0x17, 0xa4, 0x60, 0xf9, 0x2d,
];

#[test]
fn test_boundary_values() {
    assert_eq!(isqrt_u32(0), 0);
    assert_eq!(isqrt_u32(1), 1);
    assert_eq!(isqrt_u32(2), 1);
    assert_eq!(isqrt_u32(3), 1);
    assert_eq!(isqrt_u32(4), 2);
    assert_eq!(isqrt_u32(0xffffffff), 65535);
}

#[test]
fn test_perfect_squares() {
    for k in 0..=65535u32 {
        assert_eq!(isqrt_u32(k * k), k);
        // one below the next perfect square
        assert_eq!(isqrt_u32(k * k + 2 * k), k);
    }
}

#[test]
fn test_low_range() {
    verify::check_range(0, 1 << 20).unwrap();
}

#[test]
fn test_high_range() {
    verify::check_range(verify::DOMAIN_END - (1 << 20), verify::DOMAIN_END).unwrap();
}

#[test]
fn test_random_oracle_agreement() {
    let mut rng = XorShiftRng::from_seed(RNG_SEED);
    for _ in 0..1 << 20 {
        verify::check(rng.gen()).unwrap();
    }
}

#[test]
fn test_monotone() {
    // dense near zero, then random neighbor pairs across the whole domain
    for s in 0..1u32 << 16 {
        assert!(isqrt_u32(s) <= isqrt_u32(s + 1));
    }
    let mut rng = XorShiftRng::from_seed(RNG_SEED);
    for _ in 0..1 << 20 {
        let s = rng.gen_range(0..0xffffffffu32);
        assert!(isqrt_u32(s) <= isqrt_u32(s + 1), "⌊√s⌋ nondecreasing at {}", s);
    }
}

#[test]
fn test_pure() {
    let mut rng = XorShiftRng::from_seed(RNG_SEED);
    for _ in 0..1024 {
        let s = rng.gen();
        assert_eq!(isqrt_u32(s), isqrt_u32(s));
        assert_eq!(verify::check(s), verify::check(s));
    }
}

// The full sweep takes minutes; run it with `cargo test --release -- --ignored`
// or use the verifier binary.
#[test]
#[ignore]
fn test_exhaustive() {
    verify::check_range(0, verify::DOMAIN_END).unwrap();
}
