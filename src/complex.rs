/*
 *
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::fmt;
use mem_dbg::{MemDbg, MemSize};

/// A complex number stored as a real and an imaginary part.
///
/// The layout is `#[repr(C)]`, so a `Complex<f32>` occupies 8 bytes and a
/// `Complex<f64>` occupies 16 bytes, with the real part first.
#[derive(Debug, Clone, Copy, Default, PartialEq, MemDbg, MemSize)]
#[repr(C)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

impl<T> Complex<T> {
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

impl<T> From<(T, T)> for Complex<T> {
    fn from((re, im): (T, T)) -> Self {
        Self { re, im }
    }
}

impl<T: fmt::Display> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}i", self.re, self.im)
    }
}
