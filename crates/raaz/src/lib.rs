// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # raaz
//!
//! A cryptographic library: hashes (SHA-1, SHA-256, SHA-512, BLAKE2b,
//! BLAKE2s), HMAC over any of them, the ChaCha20 stream cipher, and a
//! fast-key-erasure CSPRG seeded from OS entropy — with constant-time
//! equality and locked, zeroized memory throughout.
//!
//! This crate re-exports the workspace under one roof:
//!
//! - [`hash`]: digests, HMAC and streamed hashing
//! - [`cipher`]: ChaCha20
//! - [`rand`]: entropy sources and the PRG
//! - [`buffer`]: locked memory cells
//! - [`zero`]: constant-time comparison and volatile wiping
//! - [`primitive`]: the block framework under all of the above
//!
//! # Quick Start
//!
//! ```rust
//! use raaz::hash::{digest_of, Sha256};
//! use raaz::rand::ChaChaPrg;
//!
//! let digest = digest_of::<Sha256>(b"hello");
//! println!("{digest}");
//!
//! let mut prg = ChaChaPrg::new().expect("entropy unavailable");
//! let token: [u8; 16] = prg.random().expect("draw failed");
//! let _ = token;
//! ```

#![warn(missing_docs)]

/// Locked memory cells.
pub mod buffer {
    pub use raaz_buffer::*;
}

/// The ChaCha20 stream cipher.
pub mod cipher {
    pub use raaz_chacha::*;
}

/// Hashes, typed digests and HMAC.
pub mod hash {
    pub use raaz_hash::*;
}

/// The block-primitive framework and endian words.
pub mod primitive {
    pub use raaz_primitive::*;
}

/// Entropy sources and the fast-key-erasure PRG.
pub mod rand {
    pub use raaz_rand::*;
}

/// Constant-time comparison and volatile wiping.
pub mod zero {
    pub use raaz_zero::*;
}

pub use raaz_hash::{digest_of, digest_of_file, hmac_of, Digest, Hmac};
pub use raaz_rand::ChaChaPrg;
