// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fast-key-erasure PRG over ChaCha20.
//!
//! The discipline, per refill:
//!
//! 1. Sixteen ChaCha20 blocks are generated into the 1024-byte sampling
//!    buffer from the current (key, iv, counter).
//! 2. The first `key + iv` bytes of the buffer become the next
//!    (key, iv) and are erased from the buffer.
//! 3. Draws copy-and-erase from the rest of the buffer.
//!
//! The key that produced a buffer is gone before the first byte of that
//! buffer is handed out, and every handed-out byte is erased on the
//! spot. Compromise of the current state therefore reveals nothing
//! about earlier output. The whole state lives on an mlock'd page.

use zeroize::Zeroize;

use raaz_buffer::{LockPolicy, LockedCell};
use raaz_chacha::{ChaCha20, ChaChaError, BLOCK_LEN, KEY_LEN, NONCE_LEN};
use raaz_zero::wipe;

use crate::entropy::{EntropySource, SystemEntropySource};
use crate::error::{EntropyError, PrgError};

/// Name of the generator construction, as reported by `raaz info`.
pub const PRG_NAME: &str = "chacha20-fast-key-erasure";

/// Sampling buffer: sixteen ChaCha20 blocks.
pub const SAMPLING_BUFFER_LEN: usize = 16 * BLOCK_LEN;

/// Bytes of each refill consumed to rekey the generator.
const REKEY_LEN: usize = KEY_LEN + NONCE_LEN;

/// Output threshold after which the generator reseeds from the OS:
/// 2^30 blocks, 64 GiB.
pub const RESEED_AFTER_BYTES: u64 = (1 << 30) * BLOCK_LEN as u64;

/// The generator state, kept on a locked page.
#[derive(Zeroize)]
pub(crate) struct PrgState {
    pub(crate) key: [u8; KEY_LEN],
    pub(crate) iv: [u8; NONCE_LEN],
    pub(crate) counter: u32,
    pub(crate) buf: [u8; SAMPLING_BUFFER_LEN],
    /// Next unconsumed buffer byte; everything before it is zero.
    pub(crate) pos: usize,
    pub(crate) bytes_since_seed: u64,
}

impl PrgState {
    fn fresh() -> Self {
        Self {
            key: [0u8; KEY_LEN],
            iv: [0u8; NONCE_LEN],
            counter: 0,
            buf: [0u8; SAMPLING_BUFFER_LEN],
            pos: SAMPLING_BUFFER_LEN,
            bytes_since_seed: 0,
        }
    }
}

/// Fast-key-erasure PRG over ChaCha20, seeded from OS entropy.
///
/// Owned by exactly one holder; threads wanting randomness each build
/// their own, separately seeded generator.
pub struct ChaChaPrg<E: EntropySource = SystemEntropySource> {
    state: LockedCell<PrgState>,
    entropy: E,
    seeded: bool,
    reseeds: u64,
}

impl ChaChaPrg<SystemEntropySource> {
    /// Builds a generator over the system entropy source and performs
    /// the initial seeding.
    ///
    /// # Errors
    ///
    /// [`PrgError::SecureAlloc`] if the locked page cannot be allocated,
    /// [`PrgError::Entropy`] if the OS refuses entropy.
    pub fn new() -> Result<Self, PrgError> {
        Self::with_entropy(SystemEntropySource {})
    }
}

impl<E: EntropySource> ChaChaPrg<E> {
    /// Builds a generator over a caller-supplied entropy source.
    pub fn with_entropy(entropy: E) -> Result<Self, PrgError> {
        Self::with_entropy_and_policy(entropy, LockPolicy::BestEffort)
    }

    /// Builds a generator with an explicit page-locking policy.
    pub fn with_entropy_and_policy(entropy: E, policy: LockPolicy) -> Result<Self, PrgError> {
        let state = LockedCell::new(PrgState::fresh(), policy)?;
        let mut prg = Self {
            state,
            entropy,
            seeded: false,
            reseeds: 0,
        };
        prg.reseed()?;
        Ok(prg)
    }

    /// Whether the state page is actually locked against swapping.
    pub fn is_state_locked(&self) -> bool {
        self.state.is_locked()
    }

    /// Discards the current state and reseeds (key, iv) from the OS.
    ///
    /// # Errors
    ///
    /// [`PrgError::Entropy`] if the OS refuses entropy; the generator
    /// then holds a wiped state and refuses to emit until a reseed
    /// succeeds.
    pub fn reseed(&mut self) -> Result<(), PrgError> {
        self.seeded = false;

        {
            let state = &mut *self.state;
            state.zeroize();

            // Entropy lands directly in the locked cell; there is no
            // intermediate copy to erase.
            self.entropy.fill_bytes(&mut state.key)?;
            self.entropy.fill_bytes(&mut state.iv)?;
        }

        self.seeded = true;
        self.reseeds += 1;
        self.refill()
    }

    /// Regenerates the sampling buffer and rekeys from its head.
    fn refill(&mut self) -> Result<(), PrgError> {
        let state = &mut *self.state;

        let mut cipher = ChaCha20::with_counter(&state.key, &state.iv, state.counter);
        cipher.keystream(&mut state.buf)?;
        state.counter = u32::try_from(cipher.block_counter())
            .map_err(|_| ChaChaError::CounterExhausted)?;

        // Fast key erasure: the buffer head becomes the next (key, iv)
        // and is erased before any draw can see it.
        state.key.copy_from_slice(&state.buf[..KEY_LEN]);
        state.iv.copy_from_slice(&state.buf[KEY_LEN..REKEY_LEN]);
        wipe(&mut state.buf[..REKEY_LEN]);
        state.pos = REKEY_LEN;

        Ok(())
    }

    /// Fills `out` with generator output, erasing every emitted byte
    /// from the sampling buffer.
    ///
    /// # Errors
    ///
    /// [`PrgError::Entropy`] if the generator is unseeded (a previous
    /// reseed failed) or if crossing the reseed threshold fails to
    /// acquire fresh OS entropy.
    pub fn fill(&mut self, out: &mut [u8]) -> Result<(), PrgError> {
        if !self.seeded {
            return Err(EntropyError::EntropyNotAvailable.into());
        }

        let mut written = 0;
        while written < out.len() {
            if self.state.pos == SAMPLING_BUFFER_LEN {
                self.refill()?;
            }

            let state = &mut *self.state;
            let take = (out.len() - written).min(SAMPLING_BUFFER_LEN - state.pos);

            out[written..written + take]
                .copy_from_slice(&state.buf[state.pos..state.pos + take]);
            wipe(&mut state.buf[state.pos..state.pos + take]);

            state.pos += take;
            state.bytes_since_seed += take as u64;
            written += take;
        }

        if self.state.bytes_since_seed >= RESEED_AFTER_BYTES {
            self.reseed()?;
        }

        Ok(())
    }

    /// Draws `n` bytes into a heap buffer that zeroizes itself on drop.
    pub fn random_bytes(&mut self, n: usize) -> Result<zeroize::Zeroizing<Vec<u8>>, PrgError> {
        let mut bytes = zeroize::Zeroizing::new(vec![0u8; n]);
        self.fill(&mut bytes)?;
        Ok(bytes)
    }

    /// Generates a value of a byte-uniform type.
    pub fn random<T: crate::Random>(&mut self) -> Result<T, PrgError> {
        T::random(self)
    }

    /// Writes generator output directly into an existing locked cell,
    /// so the bytes never exist outside locked memory.
    pub fn randomise_in_place<const N: usize>(
        &mut self,
        cell: &mut LockedCell<[u8; N]>,
    ) -> Result<(), PrgError> {
        let target: &mut [u8; N] = cell;
        self.fill(target)
    }

    #[cfg(test)]
    pub(crate) fn state_for_test(&self) -> &PrgState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn reseed_count(&self) -> u64 {
        self.reseeds
    }

    #[cfg(test)]
    pub(crate) fn force_bytes_since_seed(&mut self, bytes: u64) {
        self.state.bytes_since_seed = bytes;
    }
}
