// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # raaz-chacha
//!
//! ChaCha20 stream cipher per RFC 7539 (IETF variant): 256-bit key,
//! 96-bit nonce, 32-bit block counter, 20 rounds, 64-byte blocks.
//!
//! Encryption and decryption are the same keystream XOR. The cipher
//! participates in the raaz block framework: whole blocks go through
//! `process_blocks`, the ragged tail through `process_last`, which XORs
//! the prefix of one more keystream block.
//!
//! The block counter is guarded: a request that would run past 2^32
//! blocks under one (key, nonce) fails with
//! [`ChaChaError::CounterExhausted`] before transforming any byte.
//!
//! ## Example
//!
//! ```rust
//! use raaz_chacha::ChaCha20;
//!
//! let key = [7u8; 32];
//! let nonce = [1u8; 12];
//!
//! let mut data = *b"attack at dawn";
//! ChaCha20::new(&key, &nonce).xor_stream(&mut data).unwrap();
//! ChaCha20::new(&key, &nonce).xor_stream(&mut data).unwrap();
//! assert_eq!(&data, b"attack at dawn");
//! ```

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod cipher;
mod error;

pub use cipher::{ChaCha20, BLOCK_LEN, KEY_LEN, NONCE_LEN};
pub use error::ChaChaError;
