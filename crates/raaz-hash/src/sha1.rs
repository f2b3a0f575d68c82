// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-1 per FIPS 180-4 (RFC 3174).
//!
//! Legacy: kept for HMAC-SHA1 compatibility, not offered as a checksum
//! target.

use zeroize::{Zeroize, ZeroizeOnDrop};

use raaz_primitive::{Be32, Be64, BlockPrimitive};
use raaz_zero::{wipe, wipe_u32};

use crate::digest::BlockHash;

const BLOCK_LEN: usize = 64;
const DIGEST_LEN: usize = 20;

/// Round constants per RFC 3174 Section 5, one per 20-round span.
const K: [u32; 4] = [0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xca62c1d6];

/// Initial hash values per RFC 3174 Section 6.1.
const H0: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// The per-span logical function f_t.
#[inline(always)]
const fn f(t: usize, b: u32, c: u32, d: u32) -> u32 {
    match t / 20 {
        0 => (b & c) | (!b & d),
        1 | 3 => b ^ c ^ d,
        _ => (b & c) | (b & d) | (c & d),
    }
}

/// SHA-1 chaining state.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Sha1State {
    h: [u32; 5],
    bytes: u64,
}

/// Compresses one 64-byte block into the chaining value.
fn compress(h: &mut [u32; 5], block: &[u8]) {
    let mut w = [0u32; 80];
    Be32::load_slice(block, &mut w[..16]);
    for t in 16..80 {
        w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
    }

    let [mut a, mut b, mut c, mut d, mut e] = *h;

    for t in 0..80 {
        let temp = a
            .rotate_left(5)
            .wrapping_add(f(t, b, c, d))
            .wrapping_add(e)
            .wrapping_add(K[t / 20])
            .wrapping_add(w[t]);

        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    h[0] = h[0].wrapping_add(a);
    h[1] = h[1].wrapping_add(b);
    h[2] = h[2].wrapping_add(c);
    h[3] = h[3].wrapping_add(d);
    h[4] = h[4].wrapping_add(e);

    wipe_u32(&mut w);
}

/// The SHA-1 hash (legacy).
pub struct Sha1;

impl BlockPrimitive for Sha1 {
    const BLOCK_LEN: usize = BLOCK_LEN;

    type State = Sha1State;

    fn process_blocks(state: &mut Sha1State, data: &mut [u8]) {
        for block in data.chunks_exact(BLOCK_LEN) {
            compress(&mut state.h, block);
        }
        state.bytes += data.len() as u64;
    }

    fn process_last(state: &mut Sha1State, tail: &mut [u8]) {
        state.bytes += tail.len() as u64;
        let bit_len = state.bytes * 8;

        // Padding: 0x80, zeros, 64-bit big-endian length.
        let mut block = [0u8; BLOCK_LEN];
        block[..tail.len()].copy_from_slice(tail);
        block[tail.len()] = 0x80;

        if tail.len() + 1 > BLOCK_LEN - 8 {
            compress(&mut state.h, &block);
            wipe(&mut block);
        }

        block[BLOCK_LEN - 8..].copy_from_slice(&Be64::new(bit_len).to_bytes());
        compress(&mut state.h, &block);
        wipe(&mut block);
    }
}

impl BlockHash for Sha1 {
    const DIGEST_LEN: usize = DIGEST_LEN;
    const NAME: &'static str = "sha1";

    type Output = [u8; DIGEST_LEN];

    fn init() -> Sha1State {
        Sha1State { h: H0, bytes: 0 }
    }

    fn finish(state: Sha1State) -> [u8; DIGEST_LEN] {
        let mut out = [0u8; DIGEST_LEN];
        Be32::store_slice(&state.h, &mut out);
        out
    }
}
