/*
 *
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Fixed-width mixers.
//!
//! There is one mixer per input width: [`byte`] (1 byte), [`word`] (2 bytes),
//! [`dword`] (4 bytes), [`qword`] (8 bytes) and [`oword`] (16 bytes);
//! [`native`] forwards a `usize` to the mixer of the platform word. Each
//! mixer seeds the state with [`PRIME5`] plus the width, folds the input in,
//! and applies [`avalanche`]. The result is truncated to a `usize`.

use super::{avalanche, PRIME1, PRIME2, PRIME3, PRIME4, PRIME5};

/// The xxHash64 round applied to an 8-byte lane.
#[inline(always)]
#[must_use]
pub const fn round(lane: u64) -> u64 {
    lane.wrapping_mul(PRIME2)
        .rotate_left(31)
        .wrapping_mul(PRIME1)
}

/// Folds an 8-byte lane into the state `h`.
///
/// This is the only absorption step of [`qword`], and it is applied twice,
/// once per half, by [`oword`].
#[inline(always)]
#[must_use]
pub const fn qword_fold(h: u64, lane: u64) -> u64 {
    (h ^ round(lane))
        .rotate_left(27)
        .wrapping_mul(PRIME1)
        .wrapping_add(PRIME4)
}

/// Folds a single byte into the state `h`.
#[inline(always)]
const fn byte_fold(h: u64, b: u8) -> u64 {
    (h ^ (b as u64).wrapping_mul(PRIME5))
        .rotate_left(11)
        .wrapping_mul(PRIME1)
}

/// Hashes a 1-byte key.
#[inline(always)]
#[must_use]
pub const fn byte(key: u8) -> usize {
    avalanche(byte_fold(PRIME5 + 1, key)) as usize
}

/// Hashes a 2-byte key, folding the low byte first.
#[inline(always)]
#[must_use]
pub const fn word(key: u16) -> usize {
    let h = byte_fold(PRIME5 + 2, key as u8);
    avalanche(byte_fold(h, (key >> 8) as u8)) as usize
}

/// Hashes a 4-byte key as a single unsigned integer.
#[inline(always)]
#[must_use]
pub const fn dword(key: u32) -> usize {
    let h = (PRIME5 + 4) ^ (key as u64).wrapping_mul(PRIME1);
    avalanche(h.rotate_left(23).wrapping_mul(PRIME2).wrapping_add(PRIME3)) as usize
}

/// Hashes an 8-byte key.
#[inline(always)]
#[must_use]
pub const fn qword(key: u64) -> usize {
    avalanche(qword_fold(PRIME5 + 8, key)) as usize
}

/// Hashes a 16-byte key.
///
/// The low 64 bits are folded first, then the high 64 bits, into the same
/// state; there is a single final [`avalanche`].
#[inline(always)]
#[must_use]
pub const fn oword(key: u128) -> usize {
    let h = qword_fold(PRIME5 + 16, key as u64);
    avalanche(qword_fold(h, (key >> 64) as u64)) as usize
}

/// Hashes a platform word with the mixer of the same width.
#[cfg(target_pointer_width = "64")]
#[inline(always)]
#[must_use]
pub const fn native(key: usize) -> usize {
    qword(key as u64)
}

/// Hashes a platform word with the mixer of the same width.
#[cfg(target_pointer_width = "32")]
#[inline(always)]
#[must_use]
pub const fn native(key: usize) -> usize {
    dword(key as u32)
}

/// Hashes a platform word with the mixer of the same width.
#[cfg(target_pointer_width = "16")]
#[inline(always)]
#[must_use]
pub const fn native(key: usize) -> usize {
    word(key as u16)
}
