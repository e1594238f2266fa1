/*
 *
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Key shapes and their classification.
//!
//! A [`KeyShape`] describes the kind and byte width of a key type. The
//! function [`classify`] maps every shape to exactly one [`Strategy`], or to
//! [`BindError::UnsupportedKeyShape`].
//!
//! | Shape                                   | Strategy           |
//! |-----------------------------------------|--------------------|
//! | [`Bytes`](KeyShape::Bytes)              | [`Strategy::Bytes`] |
//! | 1-byte integer                          | [`Strategy::Byte`] |
//! | 2-byte integer                          | [`Strategy::Word`] |
//! | 4-byte integer, 4-byte float            | [`Strategy::Dword`] |
//! | 8-byte integer, 8-byte float, 8-byte complex | [`Strategy::Qword`] |
//! | 16-byte integer, 16-byte complex        | [`Strategy::Oword`] |
//!
//! `usize`, `isize` and raw pointers are integers whose width is that of the
//! platform word, so on 16- and 32-bit targets they select narrower mixers.

use core::fmt;

use crate::binding::BindError;

/// The width in bytes of the platform word.
pub const WORD_WIDTH: usize = core::mem::size_of::<usize>();

/// The shape of a key type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyShape {
    /// Signed or unsigned integers, and raw pointers.
    Integer { width: usize },
    /// IEEE 754 floating-point numbers.
    Float { width: usize },
    /// Pairs of floating-point numbers; `width` is the width of the pair.
    Complex { width: usize },
    /// Byte sequences of variable length, including strings.
    Bytes,
    /// Fixed-width values with no numeric interpretation (e.g., structures).
    Opaque { width: usize },
}

impl KeyShape {
    /// The shape of `usize`, `isize` and raw pointers.
    pub const WORD: Self = Self::Integer { width: WORD_WIDTH };

    /// Returns the width in bytes, or `None` for variable-length shapes.
    pub const fn width(&self) -> Option<usize> {
        match *self {
            Self::Integer { width }
            | Self::Float { width }
            | Self::Complex { width }
            | Self::Opaque { width } => Some(width),
            Self::Bytes => None,
        }
    }
}

impl fmt::Display for KeyShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer { width } => write!(f, "{}-byte integer", width),
            Self::Float { width } => write!(f, "{}-byte float", width),
            Self::Complex { width } => write!(f, "{}-byte complex", width),
            Self::Bytes => write!(f, "byte sequence"),
            Self::Opaque { width } => write!(f, "{}-byte opaque value", width),
        }
    }
}

/// The hash function bound to a key type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// [`mix::byte`](crate::hash::mix::byte).
    Byte,
    /// [`mix::word`](crate::hash::mix::word).
    Word,
    /// [`mix::dword`](crate::hash::mix::dword).
    Dword,
    /// [`mix::qword`](crate::hash::mix::qword).
    Qword,
    /// [`mix::oword`](crate::hash::mix::oword).
    Oword,
    /// [`string::bytes`](crate::hash::string::bytes).
    Bytes,
}

impl Strategy {
    /// Returns the input width in bytes, or `None` for [`Strategy::Bytes`].
    pub const fn width(self) -> Option<usize> {
        match self {
            Self::Byte => Some(1),
            Self::Word => Some(2),
            Self::Dword => Some(4),
            Self::Qword => Some(8),
            Self::Oword => Some(16),
            Self::Bytes => None,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Byte => "byte mixer",
            Self::Word => "word mixer",
            Self::Dword => "dword mixer",
            Self::Qword => "qword mixer",
            Self::Oword => "oword mixer",
            Self::Bytes => "XXH3",
        })
    }
}

/// Selects the strategy for a key shape.
///
/// The returned strategy, if any, always has the same width as the shape.
pub const fn classify(shape: KeyShape) -> Result<Strategy, BindError> {
    match shape {
        KeyShape::Bytes => Ok(Strategy::Bytes),
        KeyShape::Integer { width: 1 } => Ok(Strategy::Byte),
        KeyShape::Integer { width: 2 } => Ok(Strategy::Word),
        KeyShape::Integer { width: 4 } | KeyShape::Float { width: 4 } => Ok(Strategy::Dword),
        KeyShape::Integer { width: 8 }
        | KeyShape::Float { width: 8 }
        | KeyShape::Complex { width: 8 } => Ok(Strategy::Qword),
        KeyShape::Integer { width: 16 } | KeyShape::Complex { width: 16 } => Ok(Strategy::Oword),
        _ => Err(BindError::UnsupportedKeyShape { shape }),
    }
}
