/*
 *
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Binding of a key type to its hash function.
//!
//! A container calls [`KeyHasher::bind`] once, at construction time, and
//! keeps the resulting [`KeyHasher`] for its whole lifetime. The function
//! inside a [`KeyHasher`] is chosen once and cannot be replaced: the only
//! way to obtain a [`KeyHasher`] is binding, and there are no setters.
//!
//! ```
//! use keymix::prelude::*;
//!
//! let hasher = KeyHasher::<u8>::bind()?;
//! assert_eq!(hasher.strategy(), Strategy::Byte);
//! assert_ne!(hasher.hash(&0), hasher.hash(&255));
//! # Ok::<(), BindError>(())
//! ```

use core::fmt;

use crate::key::{HashKey, KeyHashFn};
use crate::shape::{classify, KeyShape, Strategy};

/// Fatal binding errors.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindError {
    #[error("Unsupported key shape: {shape}")]
    /// The key shape has no hash function.
    UnsupportedKeyShape { shape: KeyShape },
}

/// A hash function bound to keys of type `K`.
///
/// A [`KeyHasher`] is a shape, a strategy, and a function pointer. Hashing
/// is a direct call through the pointer, with no further dispatch, and since
/// the function is pure a [`KeyHasher`] can be shared freely among threads.
pub struct KeyHasher<K: ?Sized> {
    shape: KeyShape,
    strategy: Strategy,
    hash: KeyHashFn<K>,
}

impl<K: HashKey + ?Sized> KeyHasher<K> {
    /// Binds the hash function for `K`.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::UnsupportedKeyShape`] if the shape of `K` is not
    /// supported, or if `K` does not provide a function for the strategy
    /// selected for its shape.
    pub fn bind() -> Result<Self, BindError> {
        let shape = K::SHAPE;
        let hasher = classify(shape).and_then(|strategy| {
            K::specialize(strategy)
                .map(|hash| Self {
                    shape,
                    strategy,
                    hash,
                })
                .ok_or(BindError::UnsupportedKeyShape { shape })
        });

        #[cfg(not(feature = "no_logging"))]
        match &hasher {
            Ok(hasher) => log::debug!(
                "Bound {} ({}) to {}",
                core::any::type_name::<K>(),
                shape,
                hasher.strategy
            ),
            Err(err) => log::warn!("Cannot bind {}: {}", core::any::type_name::<K>(), err),
        }

        hasher
    }
}

impl<K: ?Sized> KeyHasher<K> {
    /// Returns the hash of `key`.
    #[inline(always)]
    pub fn hash(&self, key: &K) -> usize {
        (self.hash)(key)
    }

    /// Returns the shape of the keys.
    pub fn shape(&self) -> KeyShape {
        self.shape
    }

    /// Returns the bound strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns the bound function.
    pub fn as_fn(&self) -> KeyHashFn<K> {
        self.hash
    }
}

impl<K: ?Sized> Clone for KeyHasher<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: ?Sized> Copy for KeyHasher<K> {}

impl<K: ?Sized> fmt::Debug for KeyHasher<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyHasher")
            .field("key", &core::any::type_name::<K>())
            .field("shape", &self.shape)
            .field("strategy", &self.strategy)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::Complex;
    use crate::hash::{bits, mix, string};

    #[allow(dead_code)]
    struct Rgb([u8; 3]);

    impl HashKey for Rgb {
        const SHAPE: KeyShape = KeyShape::Opaque { width: 3 };
    }

    /// Claims a supported shape but provides no function.
    #[allow(dead_code)]
    struct Lying(u32);

    impl HashKey for Lying {
        const SHAPE: KeyShape = KeyShape::Integer { width: 4 };
    }

    #[test]
    fn test_bind() -> Result<(), BindError> {
        assert_eq!(KeyHasher::<u8>::bind()?.strategy(), Strategy::Byte);
        assert_eq!(KeyHasher::<i16>::bind()?.strategy(), Strategy::Word);
        assert_eq!(KeyHasher::<u32>::bind()?.strategy(), Strategy::Dword);
        assert_eq!(KeyHasher::<f32>::bind()?.strategy(), Strategy::Dword);
        assert_eq!(KeyHasher::<i64>::bind()?.strategy(), Strategy::Qword);
        assert_eq!(KeyHasher::<f64>::bind()?.strategy(), Strategy::Qword);
        assert_eq!(
            KeyHasher::<Complex<f32>>::bind()?.strategy(),
            Strategy::Qword
        );
        assert_eq!(KeyHasher::<u128>::bind()?.strategy(), Strategy::Oword);
        assert_eq!(
            KeyHasher::<Complex<f64>>::bind()?.strategy(),
            Strategy::Oword
        );
        assert_eq!(KeyHasher::<str>::bind()?.strategy(), Strategy::Bytes);
        assert_eq!(KeyHasher::<String>::bind()?.strategy(), Strategy::Bytes);
        Ok(())
    }

    #[test]
    fn test_hash_goes_through_mixer() -> Result<(), BindError> {
        let h = KeyHasher::<u8>::bind()?;
        for key in 0..=u8::MAX {
            assert_eq!(h.hash(&key), mix::byte(key));
        }
        let h = KeyHasher::<Complex<f32>>::bind()?;
        let key = Complex::new(1.0, 2.0);
        assert_eq!(h.hash(&key), mix::qword(bits::complex64_bits(key)));
        let h = KeyHasher::<str>::bind()?;
        assert_eq!(h.hash("abc"), string::bytes(b"abc"));
        Ok(())
    }

    #[test]
    fn test_unsupported() {
        let shape = KeyShape::Opaque { width: 3 };
        assert_eq!(
            KeyHasher::<Rgb>::bind().unwrap_err(),
            BindError::UnsupportedKeyShape { shape }
        );
        assert_eq!(
            KeyHasher::<Lying>::bind().unwrap_err(),
            BindError::UnsupportedKeyShape {
                shape: KeyShape::Integer { width: 4 }
            }
        );
        assert_eq!(
            KeyHasher::<Rgb>::bind().unwrap_err().to_string(),
            "Unsupported key shape: 3-byte opaque value"
        );
    }

    #[test]
    fn test_copy_keeps_function() -> Result<(), BindError> {
        let h = KeyHasher::<u64>::bind()?;
        let g = h;
        assert_eq!(h.as_fn() as usize, g.as_fn() as usize);
        assert_eq!(h.hash(&7), g.hash(&7));
        Ok(())
    }
}
