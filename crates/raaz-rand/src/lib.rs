// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # raaz-rand
//!
//! Cryptographically secure random number generation for the raaz
//! framework.
//!
//! [`ChaChaPrg`] is a fast-key-erasure generator: each refill produces a
//! 1024-byte sampling buffer with ChaCha20, immediately consumes the
//! buffer head as the next (key, iv), and erases it. Every byte handed
//! to a caller is erased from the buffer in the same breath, so a later
//! compromise of the generator state reveals nothing about earlier
//! output. The whole state lives on an mlock'd page.
//!
//! ## Core Types
//!
//! - [`SystemEntropySource`]: seed entropy straight from the OS
//! - [`ChaChaPrg`]: fast-key-erasure PRG, seeded from an [`EntropySource`]
//!
//! ## Traits
//!
//! - [`EntropySource`]: interface to the OS entropy collaborator
//! - [`Random`]: typed generation for byte-uniform types
//!
//! ## Example
//!
//! ```rust
//! use raaz_rand::ChaChaPrg;
//!
//! let mut prg = ChaChaPrg::new().expect("entropy unavailable");
//!
//! let mut key = [0u8; 32];
//! prg.fill(&mut key).expect("draw failed");
//!
//! let dice: u64 = prg.random().expect("draw failed");
//! let _ = dice;
//! ```
//!
//! ## Platform Support
//!
//! Seeding goes through `getrandom`, so every platform that crate
//! reaches (Linux, macOS, Windows, WASI, ...) is covered without any
//! per-OS code here.

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod entropy;
mod error;
mod prg;
mod support;
mod typed;

pub use entropy::{EntropySource, SystemEntropySource};
pub use error::{EntropyError, PrgError};
pub use prg::{ChaChaPrg, PRG_NAME, RESEED_AFTER_BYTES, SAMPLING_BUFFER_LEN};
pub use typed::Random;

#[cfg(any(test, feature = "test_utils"))]
pub use support::test_utils;
