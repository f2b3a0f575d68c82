// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # raaz-zero
//!
//! Constant-time comparison and volatile zeroization primitives for the
//! raaz framework.
//!
//! Every secret comparison in raaz goes through [`ct_eq`], which never
//! short-circuits on the first differing byte. Every scratch buffer that
//! held key material or intermediate cipher state is erased through the
//! `wipe_*` helpers, which use volatile writes followed by a compiler
//! fence so the stores survive optimization.
//!
//! ## Core Functions
//!
//! - [`ct_eq`]: constant-time equality for byte slices
//! - [`ct_eq_fixed`]: constant-time equality for fixed-size arrays
//! - [`ct_is_zero`]: constant-time all-zero probe
//! - [`wipe`], [`wipe_u32`], [`wipe_u64`]: volatile zeroization
//!
//! ## Integration with raaz
//!
//! - **raaz-hash**: digest and MAC equality, core scratch erasure
//! - **raaz-chacha**: keystream block erasure
//! - **raaz-rand**: sampling-buffer erasure after every draw

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod ct;
mod wipe;

pub use ct::{ct_eq, ct_eq_fixed, ct_is_zero};
pub use wipe::{wipe, wipe_u32, wipe_u64};
