// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # raaz-primitive
//!
//! Typed endian words and the block-oriented primitive framework.
//!
//! A block primitive consumes data in fixed-size blocks and finishes with
//! one domain-specific "last block" step: Merkle-Damgård padding for the
//! SHA family, the finalisation flag for BLAKE2, a partial keystream XOR
//! for ChaCha20. [`BlockPrimitive`] captures exactly that contract and
//! [`BlockDriver`] turns it into a streaming API, owning the partial-block
//! buffer and the alignment staging so the primitives never see a ragged
//! or misaligned slice.
//!
//! ## Core Types
//!
//! - [`Be32`], [`Be64`], [`Le32`], [`Le64`]: endian-typed words
//! - [`BlockPrimitive`]: the `(block_len, state, process_blocks, process_last)` contract
//! - [`BlockDriver`]: primitive-agnostic absorption driver

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod block;
mod endian;

pub use block::{AlignedBlock, AlignedBlocks, BlockDriver, BlockPrimitive, MAX_BLOCK_LEN, SCRATCH_LEN};
pub use endian::{Be32, Be64, Le32, Le64};
