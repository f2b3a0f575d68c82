// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The block-hash contract and typed digest values.

use core::fmt;
use core::str::FromStr;

use raaz_primitive::BlockPrimitive;
use raaz_zero::ct_eq;

use crate::error::DigestParseError;

/// Backing storage of a digest: a fixed-size byte array.
pub trait DigestOutput: AsRef<[u8]> + AsMut<[u8]> + Copy + Send + Sync {
    /// An all-zero output, used as the target of a hex parse.
    fn zeroed() -> Self;
}

impl<const N: usize> DigestOutput for [u8; N] {
    fn zeroed() -> Self {
        [0u8; N]
    }
}

/// A block primitive that is a hash: it has an initial chaining value and
/// produces a fixed-size digest.
pub trait BlockHash: BlockPrimitive + Sized {
    /// Digest length in bytes.
    const DIGEST_LEN: usize;

    /// Lowercase primitive name, as shown by the CLI.
    const NAME: &'static str;

    /// The digest's backing array, `[u8; DIGEST_LEN]`.
    type Output: DigestOutput;

    /// The initial chaining state.
    fn init() -> Self::State;

    /// Extracts the digest from a finalised state.
    fn finish(state: Self::State) -> Self::Output;
}

/// Implements the shared surface of a typed hash output: hex display,
/// hex parse, constant-time equality, byte access.
macro_rules! hash_output_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        pub struct $name<H: BlockHash> {
            bytes: H::Output,
        }

        impl<H: BlockHash> $name<H> {
            /// Wraps raw output bytes.
            pub fn from_output(bytes: H::Output) -> Self {
                Self { bytes }
            }

            /// The output bytes, in the hash's native word order.
            pub fn as_bytes(&self) -> &[u8] {
                self.bytes.as_ref()
            }
        }

        impl<H: BlockHash> Clone for $name<H> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<H: BlockHash> Copy for $name<H> {}

        impl<H: BlockHash> PartialEq for $name<H> {
            /// Constant-time: comparison cost depends only on the digest
            /// length.
            fn eq(&self, other: &Self) -> bool {
                ct_eq(self.as_bytes(), other.as_bytes())
            }
        }

        impl<H: BlockHash> Eq for $name<H> {}

        impl<H: BlockHash> fmt::Display for $name<H> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt_hex(self.as_bytes(), f)
            }
        }

        impl<H: BlockHash> fmt::Debug for $name<H> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}<{}>(", stringify!($name), H::NAME)?;
                fmt_hex(self.as_bytes(), f)?;
                write!(f, ")")
            }
        }

        impl<H: BlockHash> AsRef<[u8]> for $name<H> {
            fn as_ref(&self) -> &[u8] {
                self.as_bytes()
            }
        }

        impl<H: BlockHash> FromStr for $name<H> {
            type Err = DigestParseError;

            fn from_str(s: &str) -> Result<Self, DigestParseError> {
                let mut bytes = <H::Output as DigestOutput>::zeroed();
                parse_hex(s, bytes.as_mut())?;
                Ok(Self { bytes })
            }
        }
    };
}

pub(crate) use hash_output_type;

hash_output_type! {
    /// The digest of hash `H`.
    ///
    /// Digests of different hashes are distinct types; comparing them is
    /// a type error. Equality is constant-time.
    Digest
}

pub(crate) fn fmt_hex(bytes: &[u8], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for byte in bytes {
        write!(f, "{byte:02x}")?;
    }
    Ok(())
}

pub(crate) fn parse_hex(s: &str, out: &mut [u8]) -> Result<(), DigestParseError> {
    let expected = out.len() * 2;
    if s.len() != expected {
        return Err(DigestParseError::InvalidLength {
            expected,
            got: s.len(),
        });
    }

    for (i, chunk) in s.as_bytes().chunks_exact(2).enumerate() {
        let hi = hex_value(chunk[0]).ok_or(DigestParseError::InvalidHexDigit { offset: 2 * i })?;
        let lo =
            hex_value(chunk[1]).ok_or(DigestParseError::InvalidHexDigit { offset: 2 * i + 1 })?;
        out[i] = hi << 4 | lo;
    }

    Ok(())
}

fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}
