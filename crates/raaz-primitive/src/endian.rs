// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Endian-typed fixed-width words.
//!
//! The byte order of a word is part of its type, never a call-site flag.
//! SHA cores view their blocks through [`Be32`]/[`Be64`]; BLAKE2 and
//! ChaCha20 view theirs through [`Le32`]/[`Le64`].

macro_rules! endian_word {
    ($name:ident, $int:ty, $size:expr, $from:ident, $to:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[repr(transparent)]
        pub struct $name($int);

        impl $name {
            /// Byte width of one word.
            pub const SIZE: usize = $size;

            /// Wraps a native-endian value.
            #[inline(always)]
            pub const fn new(value: $int) -> Self {
                Self(value)
            }

            /// Native-endian value.
            #[inline(always)]
            pub const fn get(self) -> $int {
                self.0
            }

            /// Reads one word from its wire encoding.
            #[inline(always)]
            pub fn from_bytes(bytes: &[u8; $size]) -> Self {
                Self(<$int>::$from(*bytes))
            }

            /// Writes one word in its wire encoding.
            #[inline(always)]
            pub fn to_bytes(self) -> [u8; $size] {
                self.0.$to()
            }

            /// Loads `dst.len()` words from `src`.
            ///
            /// `src.len()` must equal `dst.len() * SIZE`.
            #[inline]
            pub fn load_slice(src: &[u8], dst: &mut [$int]) {
                debug_assert_eq!(src.len(), dst.len() * Self::SIZE);
                for (chunk, word) in src.chunks_exact(Self::SIZE).zip(dst.iter_mut()) {
                    let mut bytes = [0u8; $size];
                    bytes.copy_from_slice(chunk);
                    *word = Self::from_bytes(&bytes).get();
                }
            }

            /// Stores `src.len()` words into `dst`.
            ///
            /// `dst.len()` must equal `src.len() * SIZE`.
            #[inline]
            pub fn store_slice(src: &[$int], dst: &mut [u8]) {
                debug_assert_eq!(dst.len(), src.len() * Self::SIZE);
                for (word, chunk) in src.iter().zip(dst.chunks_exact_mut(Self::SIZE)) {
                    chunk.copy_from_slice(&Self::new(*word).to_bytes());
                }
            }
        }
    };
}

endian_word!(Be32, u32, 4, from_be_bytes, to_be_bytes, "A 32-bit big-endian word.");
endian_word!(Be64, u64, 8, from_be_bytes, to_be_bytes, "A 64-bit big-endian word.");
endian_word!(Le32, u32, 4, from_le_bytes, to_le_bytes, "A 32-bit little-endian word.");
endian_word!(Le64, u64, 8, from_le_bytes, to_le_bytes, "A 64-bit little-endian word.");
