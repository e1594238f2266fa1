/*
 *
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![deny(unconditional_recursion)]

//! Per-key-type hash functions for hash containers.
//!
//! A container whose key type is known at construction time binds, once, a
//! [`KeyHasher`](binding::KeyHasher) selected from the [shape](shape::KeyShape)
//! of the key type. Fixed-width keys are hashed by branch-free
//! [mixers](hash::mix) derived from the xxHash64 finalizer; byte sequences by
//! XXH3.

pub mod binding;
pub mod complex;
pub mod hash;
pub mod key;
pub mod shape;

pub mod prelude {
    pub use crate::binding::*;
    pub use crate::complex::*;
    pub use crate::key::*;
    pub use crate::shape::*;
}
