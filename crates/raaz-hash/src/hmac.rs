// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC per RFC 2104, generic over any block hash.

use core::fmt;
use core::str::FromStr;

use zeroize::Zeroizing;

use raaz_primitive::{AlignedBlock, BlockDriver};
use raaz_zero::ct_eq;

use crate::digest::{fmt_hex, hash_output_type, parse_hex, BlockHash, DigestOutput};
use crate::error::DigestParseError;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

hash_output_type! {
    /// The HMAC of hash `H`.
    ///
    /// Distinct from [`Digest<H>`](crate::Digest) so a MAC is never
    /// confused with a plain digest. Equality is constant-time.
    Hmac
}

/// Computes `HMAC(key, msg)` over hash `H`.
///
/// Per RFC 2104: a key longer than the block is replaced by its digest,
/// a shorter one is zero-padded; the message is hashed under
/// `key XOR ipad` and the result under `key XOR opad`. The derived key
/// block and both pad blocks are erased before returning.
pub fn hmac_of<H: BlockHash>(key: &[u8], msg: &[u8]) -> Hmac<H> {
    let mut key_block = Zeroizing::new(AlignedBlock::zeroed());
    if key.len() > H::BLOCK_LEN {
        let digest = crate::digest_of::<H>(key);
        key_block.bytes_mut()[..H::DIGEST_LEN].copy_from_slice(digest.as_bytes());
    } else {
        key_block.bytes_mut()[..key.len()].copy_from_slice(key);
    }

    let mut pad = Zeroizing::new(AlignedBlock::zeroed());

    for i in 0..H::BLOCK_LEN {
        pad.bytes_mut()[i] = key_block.bytes()[i] ^ IPAD;
    }
    let mut inner = BlockDriver::<H>::new(H::init());
    inner.absorb(&pad.bytes()[..H::BLOCK_LEN]);
    inner.absorb(msg);
    let mut inner_digest = H::finish(inner.finish());

    for i in 0..H::BLOCK_LEN {
        pad.bytes_mut()[i] = key_block.bytes()[i] ^ OPAD;
    }
    let mut outer = BlockDriver::<H>::new(H::init());
    outer.absorb(&pad.bytes()[..H::BLOCK_LEN]);
    outer.absorb(inner_digest.as_ref());
    raaz_zero::wipe(inner_digest.as_mut());

    Hmac::from_output(H::finish(outer.finish()))
}
