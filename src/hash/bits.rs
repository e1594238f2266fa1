/*
 *
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Adapters hashing the bit pattern of floating-point and complex values.
//!
//! A value is never converted numerically: `1.5` and `1.0` would otherwise
//! both become `1`. Instead, bits are extracted with `to_bits` and handed to
//! the mixer of matching width. As a consequence, `0.0` and `-0.0` hash
//! differently, and NaNs with different payloads hash differently.

use super::mix;
use crate::complex::Complex;

/// Packs the bits of a `Complex<f32>` into a `u64`, real part in the low
/// half.
///
/// On little-endian targets this is the in-memory representation.
#[inline(always)]
#[must_use]
pub const fn complex64_bits(key: Complex<f32>) -> u64 {
    (key.re.to_bits() as u64) | (key.im.to_bits() as u64) << 32
}

/// Packs the bits of a `Complex<f64>` into a `u128`, real part in the low
/// half.
#[inline(always)]
#[must_use]
pub const fn complex128_bits(key: Complex<f64>) -> u128 {
    (key.re.to_bits() as u128) | (key.im.to_bits() as u128) << 64
}

/// Hashes an `f32` using [`mix::dword`].
#[inline(always)]
#[must_use]
pub const fn float32(key: f32) -> usize {
    mix::dword(key.to_bits())
}

/// Hashes an `f64` using [`mix::qword`].
#[inline(always)]
#[must_use]
pub const fn float64(key: f64) -> usize {
    mix::qword(key.to_bits())
}

/// Hashes a `Complex<f32>` using [`mix::qword`].
///
/// The two parts are not mixed separately: the whole 8-byte pattern is a
/// single lane, unlike [`complex128`], which folds two lanes.
#[inline(always)]
#[must_use]
pub const fn complex64(key: Complex<f32>) -> usize {
    mix::qword(complex64_bits(key))
}

/// Hashes a `Complex<f64>` using [`mix::oword`], real part first.
#[inline(always)]
#[must_use]
pub const fn complex128(key: Complex<f64>) -> usize {
    mix::oword(complex128_bits(key))
}
