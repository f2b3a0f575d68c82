// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # raaz-hash
//!
//! Block hashes for the raaz framework: SHA-1, SHA-256 and SHA-512 per
//! FIPS 180-4, BLAKE2b and BLAKE2s per RFC 7693, all riding the
//! primitive framework from `raaz-primitive`, plus HMAC per RFC 2104
//! over any of them.
//!
//! Digests are typed: a [`Digest<Sha256>`] and a [`Digest<Sha512>`] are
//! different types and comparing them is a compile error. Equality on
//! digests and MACs is constant-time. Display is lowercase hex and
//! parsing is its inverse.
//!
//! SHA-1 is legacy: it is implemented and tested for HMAC-SHA1
//! compatibility, but new designs should pick SHA-256 or better.
//!
//! ## Example
//!
//! ```rust
//! use raaz_hash::{digest_of, Sha256};
//!
//! let digest = digest_of::<Sha256>(b"abc");
//! assert_eq!(
//!     digest.to_string(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
//! );
//! ```

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod api;
mod blake2b;
mod blake2s;
mod digest;
mod error;
mod hmac;
mod sha1;
mod sha256;
mod sha512;
mod source;

pub use api::{digest_of, digest_of_file, digest_of_source};
pub use blake2b::Blake2b;
pub use blake2s::Blake2s;
pub use digest::{BlockHash, Digest, DigestOutput};
pub use error::DigestParseError;
pub use hmac::{hmac_of, Hmac};
pub use sha1::Sha1;
pub use sha256::Sha256;
pub use sha512::Sha512;
pub use source::ByteSource;
