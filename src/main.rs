extern crate clap;
extern crate isqrt32;
extern crate rand;
extern crate rand_xorshift;

use isqrt32::verify;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use std::process;

/// Sweep granularity for progress reporting.
const CHUNK: u64 = 1 << 28;

fn run_sweep(begin: u64, end: u64) -> Result<u64, verify::Error> {
    let mut num_checked = 0;
    let mut chunk_begin = begin;
    while chunk_begin < end {
        let chunk_end = end.min(chunk_begin + CHUNK);
        num_checked += verify::check_range(chunk_begin, chunk_end)?;
        println!("# checked {} of {}", num_checked, end - begin);
        chunk_begin = chunk_end;
    }
    Ok(num_checked)
}

fn run_sample(begin: u64, end: u64, samples: u64, seed: u64) -> Result<u64, verify::Error> {
    let mut rng = XorShiftRng::seed_from_u64(seed);
    for _ in 0..samples {
        verify::check(rng.gen_range(begin..end) as u32)?;
    }
    Ok(samples)
}

fn main() {
    let matches = clap::App::new(env!("CARGO_PKG_NAME"))
        .args_from_usage("[--begin=<begin>] 'First radicand to check (default: 0)'")
        .args_from_usage("[--end=<end>] 'One past the last radicand to check (default: 2^32)'")
        .args_from_usage("[--samples=<samples>] 'Check a random sample of this size instead of every radicand'")
        .args_from_usage("[--seed=<seed>] 'Seed for the random sample (default: 0)'")
        .get_matches();

    let begin: u64 = matches.value_of("begin").map_or(0, |s| s.parse().unwrap());
    let end: u64 = matches
        .value_of("end")
        .map_or(verify::DOMAIN_END, |s| s.parse().unwrap());
    assert!(
        begin < end && end <= verify::DOMAIN_END,
        "required: 0 <= begin < end <= 2^32"
    );
    println!("begin: {}", begin);
    println!("end: {}", end);

    let result = match matches.value_of("samples") {
        Some(samples) => {
            let samples = samples.parse().unwrap();
            let seed = matches.value_of("seed").map_or(0, |s| s.parse().unwrap());
            println!("samples: {}", samples);
            println!("seed: {}", seed);
            run_sample(begin, end, samples, seed)
        }
        None => run_sweep(begin, end),
    };
    match result {
        Ok(num_checked) => println!("verified: {}", num_checked),
        Err(err) => {
            println!("FAILED: {}", err);
            process::exit(1);
        }
    }
}
