/*
 *
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Hashing of variable-length byte sequences.
//!
//! Strings and byte slices are hashed by XXH3 over their full content; the
//! 64-bit result is truncated to the platform word.

use xxhash_rust::xxh3;

/// Hashes a byte sequence.
#[inline(always)]
#[must_use]
pub fn bytes(key: &[u8]) -> usize {
    xxh3::xxh3_64(key) as usize
}

/// Hashes the UTF-8 bytes of a string.
#[inline(always)]
#[must_use]
pub fn str(key: &str) -> usize {
    bytes(key.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str() {
        assert_eq!(str("hello"), bytes(b"hello"));
        assert_eq!(str(""), xxh3::xxh3_64(&[]) as usize);
        assert_ne!(str("hello"), str("hellp"));
        assert_ne!(str("ab"), str("ba"));
    }
}
