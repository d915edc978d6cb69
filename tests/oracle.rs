//! Compares the engine against the RustCrypto `sha1` crate.

use std::thread;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha1::{Digest, Sha1};
use sha1_digest::{rand_seq, sha1 as digest, sha1_hex, DIGEST_LEN};

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.";

fn reference(data: &[u8]) -> [u8; DIGEST_LEN] {
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&Sha1::digest(data));
    out
}

fn assert_matches_reference(data: &[u8]) {
    assert_eq!(
        hex::encode(digest(data)),
        hex::encode(reference(data)),
        "input of {} bytes",
        data.len()
    );
}

#[test]
fn known_answers() {
    assert_eq!(sha1_hex(b""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");

    for input in ["", "Hello World!", "Distributed Lab", LOREM] {
        assert_matches_reference(input.as_bytes());
    }
}

#[test]
fn padding_boundaries() {
    let mut rng = StdRng::seed_from_u64(55);
    for len in (0..=200_usize).chain([55, 56, 57, 63, 64, 65, 119, 120, 128, 1023, 1024, 1025]) {
        let data: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        assert_matches_reference(&data);
    }
}

#[test]
fn random_strings() {
    let mut rng = StdRng::seed_from_u64(20_000);
    for _ in 0..10_000 {
        let len = rng.gen_range(0..20_000);
        let input = rand_seq(&mut rng, len);
        assert_matches_reference(input.as_bytes());
    }
}

#[test]
fn deterministic_and_fixed_size() {
    let mut rng = StdRng::seed_from_u64(3);
    for len in [0, 1, 64, 4096] {
        let input = rand_seq(&mut rng, len);
        let first = digest(input.as_bytes());
        assert_eq!(first, digest(input.as_bytes()));
        assert_eq!(first.len(), DIGEST_LEN);
        assert_eq!(sha1_hex(input.as_bytes()).len(), 2 * DIGEST_LEN);
    }
}

#[test]
fn single_bit_flip_avalanches() {
    let base = LOREM.as_bytes().to_vec();
    let base_digest = digest(&base);

    let trials = 64;
    let mut changed = 0;
    for i in 0..trials {
        let mut flipped = base.clone();
        flipped[i * 7 % base.len()] ^= 1 << (i % 8);
        changed += digest(&flipped)
            .iter()
            .zip(base_digest)
            .map(|(a, b)| (a ^ b).count_ones())
            .sum::<u32>();
    }

    // Around half of the 160 output bits should change on average.
    let mean = changed as f64 / trials as f64;
    assert!((60.0..=100.0).contains(&mean), "mean changed bits {mean}");
}

#[test]
fn concurrent_calls_are_independent() {
    let handles: Vec<_> = (0..8)
        .map(|seed| {
            thread::spawn(move || {
                let mut rng = StdRng::seed_from_u64(seed);
                for _ in 0..50 {
                    let len = rng.gen_range(0..4096);
                    let input = rand_seq(&mut rng, len);
                    assert_matches_reference(input.as_bytes());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
