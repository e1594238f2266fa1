/*
 *
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Hash functions for keys of statically known shape.
//!
//! All fixed-width functions are derived from the xxHash64 finalizer: a state
//! seeded with [`PRIME5`] plus the input width absorbs the input through
//! rotations and multiplications by the five xxHash64 primes, and is then
//! finished by [`avalanche`]. Since the width is known in advance there are no
//! loops and no branches.
//!
//! - [`mix`] contains the mixers for 1, 2, 4, 8 and 16 bytes;
//! - [`bits`] reinterprets floating-point and complex values as integers;
//! - [`string`] hashes byte sequences of arbitrary length using XXH3.
//!
//! None of these functions is cryptographically secure, and hashes are
//! truncated to the platform word, so they must not be persisted.

pub mod bits;
pub mod mix;
pub mod string;

/// The first xxHash64 prime.
pub const PRIME1: u64 = 11400714785074694791;
/// The second xxHash64 prime.
pub const PRIME2: u64 = 14029467366897019727;
/// The third xxHash64 prime.
pub const PRIME3: u64 = 1609587929392839161;
/// The fourth xxHash64 prime.
pub const PRIME4: u64 = 9650029242287828579;
/// The fifth xxHash64 prime.
pub const PRIME5: u64 = 2870177450012600261;

/// The xxHash64 avalanche: every input bit affects every output bit.
#[inline(always)]
#[must_use]
pub const fn avalanche(mut h: u64) -> u64 {
    h ^= h >> 33;
    h = h.wrapping_mul(PRIME2);
    h ^= h >> 29;
    h = h.wrapping_mul(PRIME3);
    h ^= h >> 32;
    h
}
