/*
 *
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Types that can be hashed by a [`KeyHasher`](crate::binding::KeyHasher).
//!
//! The trait [`HashKey`] associates a [`KeyShape`] with a type and provides,
//! for the strategy of matching width, a typed hash function. We provide
//! implementations for all primitive integer and floating-point types,
//! [`Complex<f32>`], [`Complex<f64>`], raw pointers, `str`, `String`, `[u8]`,
//! `Vec<u8>`, `Box<str>`, `Box<[u8]>`, `&str` and `&[u8]`. Shared references to
//! fixed-width keys have the shape of the referent and the same hash.
//!
//! Note that for efficiency reasons hashes are not endianness-independent.

use crate::complex::Complex;
use crate::hash::{bits, mix, string};
use crate::shape::{KeyShape, Strategy, WORD_WIDTH};

/// A hash function for keys of type `K`.
pub type KeyHashFn<K> = fn(&K) -> usize;

/// Trait for types that can be used as keys.
///
/// Implementations must be consistent: [`specialize`](HashKey::specialize)
/// returns a function only for the strategy that
/// [`classify`](crate::shape::classify) selects for
/// [`SHAPE`](HashKey::SHAPE), and `None` otherwise.
///
/// Types with a shape outside the supported table, such as
/// [`KeyShape::Opaque`], may implement this trait using the default
/// [`specialize`](HashKey::specialize); binding them will fail with
/// [`BindError::UnsupportedKeyShape`](crate::binding::BindError).
pub trait HashKey {
    /// The shape of this type.
    const SHAPE: KeyShape;

    /// Returns the hash function for `strategy`, if it applies to this type.
    fn specialize(strategy: Strategy) -> Option<KeyHashFn<Self>> {
        let _ = strategy;
        None
    }
}

macro_rules! hash_key_fixed {
    ($shape:ident, $strategy:ident, $($ty:ty => $f:expr),* $(,)?) => {$(
        impl HashKey for $ty {
            const SHAPE: KeyShape = KeyShape::$shape {
                width: core::mem::size_of::<$ty>(),
            };

            #[inline(always)]
            fn specialize(strategy: Strategy) -> Option<KeyHashFn<Self>> {
                match strategy {
                    Strategy::$strategy => Some($f as KeyHashFn<Self>),
                    _ => None,
                }
            }
        }

        hash_key_ref!($ty => $f);
    )*};
}

/// References have the shape of their referent and are hashed by value.
macro_rules! hash_key_ref {
    ($ty:ty => $f:expr) => {
        impl HashKey for &$ty {
            const SHAPE: KeyShape = <$ty as HashKey>::SHAPE;

            #[inline(always)]
            fn specialize(strategy: Strategy) -> Option<KeyHashFn<Self>> {
                fn hash_ref(key: &&$ty) -> usize {
                    ($f)(*key)
                }
                <$ty as HashKey>::specialize(strategy).map(|_| hash_ref as KeyHashFn<Self>)
            }
        }
    };
}

hash_key_fixed!(Integer, Byte,
    u8 => |k: &u8| mix::byte(*k),
    i8 => |k: &i8| mix::byte(*k as u8),
);
hash_key_fixed!(Integer, Word,
    u16 => |k: &u16| mix::word(*k),
    i16 => |k: &i16| mix::word(*k as u16),
);
hash_key_fixed!(Integer, Dword,
    u32 => |k: &u32| mix::dword(*k),
    i32 => |k: &i32| mix::dword(*k as u32),
);
hash_key_fixed!(Integer, Qword,
    u64 => |k: &u64| mix::qword(*k),
    i64 => |k: &i64| mix::qword(*k as u64),
);
hash_key_fixed!(Integer, Oword,
    u128 => |k: &u128| mix::oword(*k),
    i128 => |k: &i128| mix::oword(*k as u128),
);
hash_key_fixed!(Float, Dword, f32 => |k: &f32| bits::float32(*k));
hash_key_fixed!(Float, Qword, f64 => |k: &f64| bits::float64(*k));
hash_key_fixed!(Complex, Qword,
    Complex<f32> => |k: &Complex<f32>| bits::complex64(*k),
);
hash_key_fixed!(Complex, Oword,
    Complex<f64> => |k: &Complex<f64>| bits::complex128(*k),
);

macro_rules! hash_key_word {
    ($($ty:ty),*) => {$(
        impl HashKey for $ty {
            const SHAPE: KeyShape = KeyShape::WORD;

            #[inline(always)]
            fn specialize(strategy: Strategy) -> Option<KeyHashFn<Self>> {
                (strategy.width() == Some(WORD_WIDTH))
                    .then_some((|k: &$ty| mix::native(*k as usize)) as KeyHashFn<Self>)
            }
        }

        hash_key_ref!($ty => |k: &$ty| mix::native(*k as usize));
    )*};
}

hash_key_word!(usize, isize);

/// Raw pointers are hashed by address.
impl<T> HashKey for *const T {
    const SHAPE: KeyShape = KeyShape::WORD;

    #[inline(always)]
    fn specialize(strategy: Strategy) -> Option<KeyHashFn<Self>> {
        (strategy.width() == Some(WORD_WIDTH))
            .then_some((|k: &*const T| mix::native(*k as usize)) as KeyHashFn<Self>)
    }
}

/// Raw pointers are hashed by address.
impl<T> HashKey for *mut T {
    const SHAPE: KeyShape = KeyShape::WORD;

    #[inline(always)]
    fn specialize(strategy: Strategy) -> Option<KeyHashFn<Self>> {
        (strategy.width() == Some(WORD_WIDTH))
            .then_some((|k: &*mut T| mix::native(*k as usize)) as KeyHashFn<Self>)
    }
}

fn str_ref(key: &&str) -> usize {
    string::str(key)
}

fn bytes_ref(key: &&[u8]) -> usize {
    string::bytes(key)
}

macro_rules! hash_key_bytes {
    ($($ty:ty => $f:expr),* $(,)?) => {$(
        impl HashKey for $ty {
            const SHAPE: KeyShape = KeyShape::Bytes;

            #[inline(always)]
            fn specialize(strategy: Strategy) -> Option<KeyHashFn<Self>> {
                match strategy {
                    Strategy::Bytes => Some($f as KeyHashFn<Self>),
                    _ => None,
                }
            }
        }
    )*};
}

hash_key_bytes!(
    str => |k: &str| string::str(k),
    String => |k: &String| string::str(k),
    Box<str> => |k: &Box<str>| string::str(k),
    &str => str_ref,
    [u8] => |k: &[u8]| string::bytes(k),
    Vec<u8> => |k: &Vec<u8>| string::bytes(k),
    Box<[u8]> => |k: &Box<[u8]>| string::bytes(k),
    &[u8] => bytes_ref,
);
