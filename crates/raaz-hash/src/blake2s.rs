// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! BLAKE2s per RFC 7693: 32-bit words, 64-byte blocks, 10 rounds.
//!
//! Sequential mode only, fixed parameter block, same one-block lookahead
//! as BLAKE2b (see `blake2b.rs`).

use zeroize::{Zeroize, ZeroizeOnDrop};

use raaz_primitive::{BlockPrimitive, Le32};
use raaz_zero::{wipe, wipe_u32};

use crate::blake2b::SIGMA;
use crate::digest::BlockHash;

const BLOCK_LEN: usize = 64;
const DIGEST_LEN: usize = 32;

/// Initialisation vector per RFC 7693 Section 2.6 (the SHA-256 IV).
const IV: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// Parameter-block word 0: digest length 32, no key, fanout 1, depth 1.
const PARAM_WORD: u32 = 0x0101_0020;

/// Mixing function G per RFC 7693 Section 3.1, 32-bit rotations.
#[inline(always)]
fn g(v: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize, x: u32, y: u32) {
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
    v[d] = (v[d] ^ v[a]).rotate_right(16);

    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(12);

    v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
    v[d] = (v[d] ^ v[a]).rotate_right(8);

    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(7);
}

/// BLAKE2s chaining state.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Blake2sState {
    h: [u32; 8],
    /// Bytes compressed so far, including the block being compressed.
    t: u64,
    /// The most recent full block, not yet compressed.
    held: [u8; BLOCK_LEN],
    held_len: usize,
}

/// Compression function F per RFC 7693 Section 3.2.
fn compress(h: &mut [u32; 8], block: &[u8], t: u64, last: bool) {
    debug_assert_eq!(block.len(), BLOCK_LEN);

    let mut m = [0u32; 16];
    Le32::load_slice(block, &mut m);

    let mut v = [0u32; 16];
    v[..8].copy_from_slice(h);
    v[8..].copy_from_slice(&IV);
    v[12] ^= t as u32;
    v[13] ^= (t >> 32) as u32;
    if last {
        v[14] = !v[14];
    }

    for round in 0..10 {
        let s = &SIGMA[round];

        g(&mut v, 0, 4, 8, 12, m[s[0]], m[s[1]]);
        g(&mut v, 1, 5, 9, 13, m[s[2]], m[s[3]]);
        g(&mut v, 2, 6, 10, 14, m[s[4]], m[s[5]]);
        g(&mut v, 3, 7, 11, 15, m[s[6]], m[s[7]]);

        g(&mut v, 0, 5, 10, 15, m[s[8]], m[s[9]]);
        g(&mut v, 1, 6, 11, 12, m[s[10]], m[s[11]]);
        g(&mut v, 2, 7, 8, 13, m[s[12]], m[s[13]]);
        g(&mut v, 3, 4, 9, 14, m[s[14]], m[s[15]]);
    }

    for i in 0..8 {
        h[i] ^= v[i] ^ v[i + 8];
    }

    wipe_u32(&mut m);
    wipe_u32(&mut v);
}

/// The BLAKE2s hash.
pub struct Blake2s;

impl BlockPrimitive for Blake2s {
    const BLOCK_LEN: usize = BLOCK_LEN;

    type State = Blake2sState;

    fn process_blocks(state: &mut Blake2sState, data: &mut [u8]) {
        for block in data.chunks_exact(BLOCK_LEN) {
            if state.held_len == BLOCK_LEN {
                state.t += BLOCK_LEN as u64;
                compress(&mut state.h, &state.held, state.t, false);
            }
            state.held.copy_from_slice(block);
            state.held_len = BLOCK_LEN;
        }
    }

    fn process_last(state: &mut Blake2sState, tail: &mut [u8]) {
        if tail.is_empty() && state.held_len == BLOCK_LEN {
            state.t += BLOCK_LEN as u64;
            compress(&mut state.h, &state.held, state.t, true);
        } else {
            if state.held_len == BLOCK_LEN {
                state.t += BLOCK_LEN as u64;
                compress(&mut state.h, &state.held, state.t, false);
            }

            let mut block = [0u8; BLOCK_LEN];
            block[..tail.len()].copy_from_slice(tail);
            state.t += tail.len() as u64;
            compress(&mut state.h, &block, state.t, true);
            wipe(&mut block);
        }

        wipe(&mut state.held);
        state.held_len = 0;
    }
}

impl BlockHash for Blake2s {
    const DIGEST_LEN: usize = DIGEST_LEN;
    const NAME: &'static str = "blake2s";

    type Output = [u8; DIGEST_LEN];

    fn init() -> Blake2sState {
        let mut h = IV;
        h[0] ^= PARAM_WORD;
        Blake2sState {
            h,
            t: 0,
            held: [0u8; BLOCK_LEN],
            held_len: 0,
        }
    }

    fn finish(state: Blake2sState) -> [u8; DIGEST_LEN] {
        let mut out = [0u8; DIGEST_LEN];
        Le32::store_slice(&state.h, &mut out);
        out
    }
}
