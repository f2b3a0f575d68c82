// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! BLAKE2b per RFC 7693: 64-bit words, 128-byte blocks, 12 rounds.
//!
//! Sequential mode only; the parameter block is fixed to the default
//! 64-byte digest with no key, salt or personalisation.
//!
//! The compression of a full block must know whether it is the last one,
//! so the state holds one block back: `process_blocks` compresses the
//! previously held block and retains the newest, and `process_last`
//! compresses the held block with the finalisation flag when no tail
//! follows it.

use zeroize::{Zeroize, ZeroizeOnDrop};

use raaz_primitive::{BlockPrimitive, Le64};
use raaz_zero::{wipe, wipe_u64};

use crate::digest::BlockHash;

const BLOCK_LEN: usize = 128;
const DIGEST_LEN: usize = 64;

/// Initialisation vector per RFC 7693 Section 2.6 (the SHA-512 IV).
const IV: [u64; 8] = [
    0x6a09e667f3bcc908, 0xbb67ae8584caa73b, 0x3c6ef372fe94f82b, 0xa54ff53a5f1d36f1,
    0x510e527fade682d1, 0x9b05688c2b3e6c1f, 0x1f83d9abfb41bd6b, 0x5be0cd19137e2179,
];

/// Parameter-block word 0: digest length 64, no key, fanout 1, depth 1.
const PARAM_WORD: u64 = 0x0101_0040;

/// Message schedule permutations per RFC 7693 Section 2.7.
pub(crate) const SIGMA: [[usize; 16]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

/// Mixing function G per RFC 7693 Section 3.1, 64-bit rotations.
#[inline(always)]
fn g(v: &mut [u64; 16], a: usize, b: usize, c: usize, d: usize, x: u64, y: u64) {
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
    v[d] = (v[d] ^ v[a]).rotate_right(32);

    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(24);

    v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
    v[d] = (v[d] ^ v[a]).rotate_right(16);

    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(63);
}

/// BLAKE2b chaining state.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Blake2bState {
    h: [u64; 8],
    /// Bytes compressed so far, including the block being compressed.
    t: u128,
    /// The most recent full block, not yet compressed.
    held: [u8; BLOCK_LEN],
    held_len: usize,
}

/// Compression function F per RFC 7693 Section 3.2.
fn compress(h: &mut [u64; 8], block: &[u8], t: u128, last: bool) {
    debug_assert_eq!(block.len(), BLOCK_LEN);

    let mut m = [0u64; 16];
    Le64::load_slice(block, &mut m);

    let mut v = [0u64; 16];
    v[..8].copy_from_slice(h);
    v[8..].copy_from_slice(&IV);
    v[12] ^= t as u64;
    v[13] ^= (t >> 64) as u64;
    if last {
        v[14] = !v[14];
    }

    for round in 0..12 {
        let s = &SIGMA[round % 10];

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

    wipe_u64(&mut m);
    wipe_u64(&mut v);
}

/// The BLAKE2b hash.
pub struct Blake2b;

impl BlockPrimitive for Blake2b {
    const BLOCK_LEN: usize = BLOCK_LEN;

    type State = Blake2bState;

    fn process_blocks(state: &mut Blake2bState, data: &mut [u8]) {
        for block in data.chunks_exact(BLOCK_LEN) {
            if state.held_len == BLOCK_LEN {
                state.t += BLOCK_LEN as u128;
                compress(&mut state.h, &state.held, state.t, false);
            }
            state.held.copy_from_slice(block);
            state.held_len = BLOCK_LEN;
        }
    }

    fn process_last(state: &mut Blake2bState, tail: &mut [u8]) {
        if tail.is_empty() && state.held_len == BLOCK_LEN {
            state.t += BLOCK_LEN as u128;
            compress(&mut state.h, &state.held, state.t, true);
        } else {
            if state.held_len == BLOCK_LEN {
                state.t += BLOCK_LEN as u128;
                compress(&mut state.h, &state.held, state.t, false);
            }

            let mut block = [0u8; BLOCK_LEN];
            block[..tail.len()].copy_from_slice(tail);
            state.t += tail.len() as u128;
            compress(&mut state.h, &block, state.t, true);
            wipe(&mut block);
        }

        wipe(&mut state.held);
        state.held_len = 0;
    }
}

impl BlockHash for Blake2b {
    const DIGEST_LEN: usize = DIGEST_LEN;
    const NAME: &'static str = "blake2b";

    type Output = [u8; DIGEST_LEN];

    fn init() -> Blake2bState {
        let mut h = IV;
        h[0] ^= PARAM_WORD;
        Blake2bState {
            h,
            t: 0,
            held: [0u8; BLOCK_LEN],
            held_len: 0,
        }
    }

    fn finish(state: Blake2bState) -> [u8; DIGEST_LEN] {
        let mut out = [0u8; DIGEST_LEN];
        Le64::store_slice(&state.h, &mut out);
        out
    }
}
