// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Typed generation for byte-uniform types.

use zeroize::Zeroize;

use crate::entropy::EntropySource;
use crate::error::PrgError;
use crate::prg::ChaChaPrg;

/// A type every value of which is equally likely under a uniform fill of
/// its byte representation.
///
/// Implemented for the fixed-width integers, `u8` arrays, and small
/// tuples of implementors. There is deliberately no blanket or derived
/// instance: a refined type (say, a digit held in a `u8`) would be
/// biased by a raw byte fill, so it gets no instance unless it writes
/// one with the correct distribution.
pub trait Random: Sized {
    /// Draws one value from the generator.
    fn random<E: EntropySource>(prg: &mut ChaChaPrg<E>) -> Result<Self, PrgError>;
}

macro_rules! impl_random_int {
    ($($int:ty),* $(,)?) => {
        $(
            impl Random for $int {
                fn random<E: EntropySource>(prg: &mut ChaChaPrg<E>) -> Result<Self, PrgError> {
                    let mut bytes = [0u8; core::mem::size_of::<$int>()];
                    prg.fill(&mut bytes)?;
                    let value = <$int>::from_le_bytes(bytes);
                    bytes.zeroize();
                    Ok(value)
                }
            }
        )*
    };
}

impl_random_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl<const N: usize> Random for [u8; N] {
    fn random<E: EntropySource>(prg: &mut ChaChaPrg<E>) -> Result<Self, PrgError> {
        let mut bytes = [0u8; N];
        prg.fill(&mut bytes)?;
        Ok(bytes)
    }
}

macro_rules! impl_random_tuple {
    ($($name:ident),+) => {
        impl<$($name: Random),+> Random for ($($name,)+) {
            fn random<E: EntropySource>(prg: &mut ChaChaPrg<E>) -> Result<Self, PrgError> {
                Ok(($($name::random(prg)?,)+))
            }
        }
    };
}

impl_random_tuple!(A, B);
impl_random_tuple!(A, B, C);
impl_random_tuple!(A, B, C, D);
