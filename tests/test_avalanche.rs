/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use keymix::hash::{bits, mix};
use keymix::prelude::Complex;
use rand::{rngs::SmallRng, Rng, SeedableRng};

#[cfg(feature = "slow_tests")]
const SAMPLES: usize = 100_000;
#[cfg(not(feature = "slow_tests"))]
const SAMPLES: usize = 2_000;

/// Returns the average number of output bits flipped by flipping a single
/// input bit, over random inputs and all input bits.
fn avg_flips(input_bits: u32, mut f: impl FnMut(u128) -> usize) -> f64 {
    let mut rng = SmallRng::seed_from_u64(0);
    let mask = if input_bits == 128 {
        u128::MAX
    } else {
        (1 << input_bits) - 1
    };
    let mut flips = 0_u64;
    let mut count = 0_u64;
    for _ in 0..SAMPLES {
        let x = rng.random::<u128>() & mask;
        let h = f(x);
        for b in 0..input_bits {
            flips += (h ^ f(x ^ 1 << b)).count_ones() as u64;
            count += 1;
        }
    }
    flips as f64 / count as f64
}

fn check(name: &str, avg: f64) {
    let half = usize::BITS as f64 / 2.0;
    assert!(
        (avg - half).abs() < half / 8.0,
        "{}: {} flipped bits on average, expected about {}",
        name,
        avg,
        half
    );
}

#[test]
fn test_mixers() {
    check("byte", avg_flips(8, |x| mix::byte(x as u8)));
    check("word", avg_flips(16, |x| mix::word(x as u16)));
    check("dword", avg_flips(32, |x| mix::dword(x as u32)));
    check("qword", avg_flips(64, |x| mix::qword(x as u64)));
    check("oword", avg_flips(128, mix::oword));
}

#[test]
fn test_adapters() {
    check(
        "float32",
        avg_flips(32, |x| bits::float32(f32::from_bits(x as u32))),
    );
    check(
        "float64",
        avg_flips(64, |x| bits::float64(f64::from_bits(x as u64))),
    );
    check(
        "complex64",
        avg_flips(64, |x| {
            bits::complex64(Complex::new(
                f32::from_bits(x as u32),
                f32::from_bits((x >> 32) as u32),
            ))
        }),
    );
    check(
        "complex128",
        avg_flips(128, |x| {
            bits::complex128(Complex::new(
                f64::from_bits(x as u64),
                f64::from_bits((x >> 64) as u64),
            ))
        }),
    );
}

#[test]
fn test_no_collisions_on_small_domains() {
    let mut hashes = (0..=u8::MAX).map(mix::byte).collect::<Vec<_>>();
    hashes.sort_unstable();
    hashes.dedup();
    assert_eq!(hashes.len(), 256);

    #[cfg(feature = "slow_tests")]
    {
        let mut hashes = (0..=u16::MAX).map(mix::word).collect::<Vec<_>>();
        hashes.sort_unstable();
        hashes.dedup();
        assert_eq!(hashes.len(), 1 << 16);
    }
}
