// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The block-primitive contract and the streaming driver.

use zeroize::{Zeroize, Zeroizing};

use raaz_zero::wipe;

/// Largest block size of any compiled-in primitive (SHA-512, BLAKE2b).
pub const MAX_BLOCK_LEN: usize = 128;

/// Size of the driver's aligned staging area: eight maximal blocks.
pub const SCRATCH_LEN: usize = 8 * MAX_BLOCK_LEN;

/// A primitive that consumes data in fixed-size blocks.
///
/// `process_blocks` is a pure transformation over a whole number of
/// blocks; `process_last` consumes the final ragged tail and applies the
/// primitive's padding or finalisation rule. Buffers handed to either
/// operation satisfy [`BUFFER_ALIGNMENT`](Self::BUFFER_ALIGNMENT).
///
/// Data slices are mutable because cipher primitives transform in place;
/// hash primitives simply read.
pub trait BlockPrimitive {
    /// Block size in bytes.
    const BLOCK_LEN: usize;

    /// Extra scratch blocks the implementation claims at the end of any
    /// staged buffer, beyond the message blocks themselves.
    const ADDITIONAL_BLOCKS: usize = 0;

    /// Required start alignment of buffers passed to the primitive.
    const BUFFER_ALIGNMENT: usize = 32;

    /// The primitive's working state.
    type State;

    /// Consumes `data`, a non-empty whole number of blocks.
    fn process_blocks(state: &mut Self::State, data: &mut [u8]);

    /// Consumes the final partial block; `tail.len() < BLOCK_LEN`.
    fn process_last(state: &mut Self::State, tail: &mut [u8]);
}

/// One maximal block with the framework's alignment guarantee.
#[derive(Clone)]
#[repr(C, align(32))]
pub struct AlignedBlock([u8; MAX_BLOCK_LEN]);

impl AlignedBlock {
    /// A zeroed block.
    pub const fn zeroed() -> Self {
        Self([0u8; MAX_BLOCK_LEN])
    }

    /// The block's bytes.
    pub fn bytes(&self) -> &[u8; MAX_BLOCK_LEN] {
        &self.0
    }

    /// The block's bytes, mutably.
    pub fn bytes_mut(&mut self) -> &mut [u8; MAX_BLOCK_LEN] {
        &mut self.0
    }
}

impl Zeroize for AlignedBlock {
    fn zeroize(&mut self) {
        wipe(&mut self.0);
    }
}

/// The driver's staging area: [`SCRATCH_LEN`] aligned bytes.
#[repr(C, align(32))]
pub struct AlignedBlocks([u8; SCRATCH_LEN]);

impl AlignedBlocks {
    /// A zeroed staging area.
    pub const fn zeroed() -> Self {
        Self([0u8; SCRATCH_LEN])
    }

    /// The staging bytes.
    pub fn bytes(&self) -> &[u8; SCRATCH_LEN] {
        &self.0
    }

    /// The staging bytes, mutably.
    pub fn bytes_mut(&mut self) -> &mut [u8; SCRATCH_LEN] {
        &mut self.0
    }
}

impl Zeroize for AlignedBlocks {
    fn zeroize(&mut self) {
        wipe(&mut self.0);
    }
}

/// Streaming driver over any [`BlockPrimitive`].
///
/// Owns the partial-block buffer, which always holds fewer than
/// `BLOCK_LEN` bytes between calls. Input that cannot be handed to the
/// primitive directly (immutable, or missing the alignment contract) is
/// staged through an aligned scratch that is erased after use. The
/// partial buffer is erased when the driver is dropped or finished.
pub struct BlockDriver<P: BlockPrimitive> {
    state: P::State,
    partial: Zeroizing<AlignedBlock>,
    partial_len: usize,
}

impl<P: BlockPrimitive> BlockDriver<P> {
    /// Starts a session from an initialised primitive state.
    pub fn new(state: P::State) -> Self {
        Self {
            state,
            partial: Zeroizing::new(AlignedBlock::zeroed()),
            partial_len: 0,
        }
    }

    /// Absorbs `data`, staging every whole block through the aligned scratch.
    pub fn absorb(&mut self, data: &[u8]) {
        let consumed = self.feed_partial(data);
        let data = &data[consumed..];

        let whole = data.len() - data.len() % P::BLOCK_LEN;
        if whole > 0 {
            self.stage(&data[..whole]);
        }

        self.stash(&data[whole..]);
    }

    /// Absorbs `data`, handing aligned whole blocks to the primitive in
    /// place and staging only misaligned input.
    pub fn absorb_mut(&mut self, data: &mut [u8]) {
        let consumed = self.feed_partial(data);
        let data = &mut data[consumed..];

        let whole = data.len() - data.len() % P::BLOCK_LEN;
        let (head, tail) = data.split_at_mut(whole);

        if !head.is_empty() {
            if head.as_ptr() as usize % P::BUFFER_ALIGNMENT == 0 {
                P::process_blocks(&mut self.state, head);
            } else {
                self.stage(head);
            }
        }

        self.stash(tail);
    }

    /// Bytes currently stashed in the partial-block buffer.
    pub fn partial_len(&self) -> usize {
        self.partial_len
    }

    /// Finalises the session: the stashed tail goes through
    /// `process_last` and the state is handed back.
    pub fn finish(mut self) -> P::State {
        let len = self.partial_len;
        P::process_last(&mut self.state, &mut self.partial.bytes_mut()[..len]);
        self.state
    }

    /// Tops up the partial buffer, emitting it once full. Returns the
    /// number of input bytes consumed.
    fn feed_partial(&mut self, data: &[u8]) -> usize {
        if self.partial_len == 0 {
            return 0;
        }

        let space = P::BLOCK_LEN - self.partial_len;
        let take = space.min(data.len());

        self.partial.bytes_mut()[self.partial_len..self.partial_len + take]
            .copy_from_slice(&data[..take]);
        self.partial_len += take;

        if self.partial_len == P::BLOCK_LEN {
            P::process_blocks(&mut self.state, &mut self.partial.bytes_mut()[..P::BLOCK_LEN]);
            wipe(&mut self.partial.bytes_mut()[..P::BLOCK_LEN]);
            self.partial_len = 0;
        }

        take
    }

    /// Runs whole blocks through the primitive via the aligned scratch.
    fn stage(&mut self, data: &[u8]) {
        debug_assert_eq!(data.len() % P::BLOCK_LEN, 0);

        let mut scratch = Zeroizing::new(AlignedBlocks::zeroed());
        let usable = (SCRATCH_LEN / P::BLOCK_LEN - P::ADDITIONAL_BLOCKS) * P::BLOCK_LEN;

        for chunk in data.chunks(usable) {
            scratch.bytes_mut()[..chunk.len()].copy_from_slice(chunk);
            P::process_blocks(&mut self.state, &mut scratch.bytes_mut()[..chunk.len()]);
        }
    }

    /// Stashes a sub-block remainder into the (empty) partial buffer.
    fn stash(&mut self, rest: &[u8]) {
        if rest.is_empty() {
            return;
        }
        debug_assert_eq!(self.partial_len, 0);
        debug_assert!(rest.len() < P::BLOCK_LEN);

        self.partial.bytes_mut()[..rest.len()].copy_from_slice(rest);
        self.partial_len = rest.len();
    }
}
