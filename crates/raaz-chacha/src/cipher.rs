// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ChaCha20 core per RFC 7539 Section 2.

use zeroize::{Zeroize, ZeroizeOnDrop};

use raaz_primitive::{BlockPrimitive, Le32};
use raaz_zero::{wipe, wipe_u32};

use crate::error::ChaChaError;

/// Key length in bytes.
pub const KEY_LEN: usize = 32;

/// Nonce length in bytes (IETF variant).
pub const NONCE_LEN: usize = 12;

/// Keystream block length in bytes.
pub const BLOCK_LEN: usize = 64;

/// Counter space under one (key, nonce): 2^32 blocks.
const COUNTER_SPACE: u64 = 1 << 32;

/// "expand 32-byte k", as four little-endian words.
const SIGMA: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// ChaCha20 quarter round per RFC 7539 Section 2.1.
#[inline(always)]
fn quarter_round(v: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    v[a] = v[a].wrapping_add(v[b]);
    v[d] = (v[d] ^ v[a]).rotate_left(16);

    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_left(12);

    v[a] = v[a].wrapping_add(v[b]);
    v[d] = (v[d] ^ v[a]).rotate_left(8);

    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_left(7);
}

/// ChaCha20 stream cipher state: key, nonce, block counter.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ChaCha20 {
    key: [u32; 8],
    nonce: [u32; 3],
    /// Next block index; wider than the wire counter so exhaustion is a
    /// detectable state instead of a silent wrap.
    counter: u64,
}

impl ChaCha20 {
    /// Creates a cipher with the block counter at zero.
    pub fn new(key: &[u8; KEY_LEN], nonce: &[u8; NONCE_LEN]) -> Self {
        Self::with_counter(key, nonce, 0)
    }

    /// Creates a cipher starting at an explicit block counter.
    pub fn with_counter(key: &[u8; KEY_LEN], nonce: &[u8; NONCE_LEN], counter: u32) -> Self {
        let mut key_words = [0u32; 8];
        Le32::load_slice(key, &mut key_words);

        let mut nonce_words = [0u32; 3];
        Le32::load_slice(nonce, &mut nonce_words);

        Self {
            key: key_words,
            nonce: nonce_words,
            counter: u64::from(counter),
        }
    }

    /// The next block index to be produced.
    pub fn block_counter(&self) -> u64 {
        self.counter
    }

    /// Writes keystream over `out`, replacing its contents.
    ///
    /// # Errors
    ///
    /// [`ChaChaError::CounterExhausted`] if the request needs more blocks
    /// than the counter has left; `out` is untouched in that case.
    pub fn keystream(&mut self, out: &mut [u8]) -> Result<(), ChaChaError> {
        self.check_capacity(out.len())?;

        let mut block = [0u8; BLOCK_LEN];
        for chunk in out.chunks_mut(BLOCK_LEN) {
            self.next_block(&mut block);
            chunk.copy_from_slice(&block[..chunk.len()]);
        }
        wipe(&mut block);

        Ok(())
    }

    /// XORs keystream into `data`: encryption and decryption alike.
    ///
    /// # Errors
    ///
    /// [`ChaChaError::CounterExhausted`] if the request needs more blocks
    /// than the counter has left; `data` is untouched in that case.
    pub fn xor_stream(&mut self, data: &mut [u8]) -> Result<(), ChaChaError> {
        self.check_capacity(data.len())?;

        let whole = data.len() - data.len() % BLOCK_LEN;
        let (head, tail) = data.split_at_mut(whole);

        if !head.is_empty() {
            Self::process_blocks(self, head);
        }
        if !tail.is_empty() {
            Self::process_last(self, tail);
        }

        Ok(())
    }

    /// Rejects a request that would run the counter past 2^32 blocks.
    fn check_capacity(&self, len: usize) -> Result<(), ChaChaError> {
        let blocks = (len as u64).div_ceil(BLOCK_LEN as u64);
        if self.counter + blocks > COUNTER_SPACE {
            return Err(ChaChaError::CounterExhausted);
        }
        Ok(())
    }

    /// Produces one keystream block and advances the counter.
    ///
    /// Capacity must have been checked by the caller.
    fn next_block(&mut self, out: &mut [u8; BLOCK_LEN]) {
        debug_assert!(self.counter < COUNTER_SPACE);

        let mut x = [0u32; 16];
        x[..4].copy_from_slice(&SIGMA);
        x[4..12].copy_from_slice(&self.key);
        x[12] = self.counter as u32;
        x[13..16].copy_from_slice(&self.nonce);

        let mut v = x;
        for _ in 0..10 {
            quarter_round(&mut v, 0, 4, 8, 12);
            quarter_round(&mut v, 1, 5, 9, 13);
            quarter_round(&mut v, 2, 6, 10, 14);
            quarter_round(&mut v, 3, 7, 11, 15);

            quarter_round(&mut v, 0, 5, 10, 15);
            quarter_round(&mut v, 1, 6, 11, 12);
            quarter_round(&mut v, 2, 7, 8, 13);
            quarter_round(&mut v, 3, 4, 9, 14);
        }

        for (word, init) in v.iter_mut().zip(x.iter()) {
            *word = word.wrapping_add(*init);
        }

        Le32::store_slice(&v, out);

        wipe_u32(&mut v);
        wipe_u32(&mut x);

        self.counter += 1;
    }
}

impl BlockPrimitive for ChaCha20 {
    const BLOCK_LEN: usize = BLOCK_LEN;
    // Keystream XOR is byte-wise; no alignment demanded of callers.
    const BUFFER_ALIGNMENT: usize = 1;

    type State = ChaCha20;

    fn process_blocks(state: &mut ChaCha20, data: &mut [u8]) {
        let mut block = [0u8; BLOCK_LEN];
        for chunk in data.chunks_exact_mut(BLOCK_LEN) {
            state.next_block(&mut block);
            for (byte, ks) in chunk.iter_mut().zip(block.iter()) {
                *byte ^= ks;
            }
        }
        wipe(&mut block);
    }

    fn process_last(state: &mut ChaCha20, tail: &mut [u8]) {
        let mut block = [0u8; BLOCK_LEN];
        state.next_block(&mut block);
        for (byte, ks) in tail.iter_mut().zip(block.iter()) {
            *byte ^= ks;
        }
        wipe(&mut block);
    }
}
