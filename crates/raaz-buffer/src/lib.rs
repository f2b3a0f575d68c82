// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # raaz-buffer
//!
//! Locked, zeroized memory cells for key material and PRG state.
//!
//! [`LockedCell<T>`] places a value on its own anonymous page, locks the
//! page against swapping with `mlock`, and guarantees that on release the
//! value is dropped, the whole page is volatile-zeroized, and only then
//! unlocked and unmapped. Release runs on every exit path.
//!
//! Locking is best-effort by default: platforms or resource limits that
//! refuse `mlock` downgrade the cell to an unlocked allocation, which the
//! caller can detect via [`LockedCell::is_locked`]. Callers that must not
//! proceed unlocked request [`LockPolicy::Required`].
//!
//! ## Example
//!
//! ```rust
//! use raaz_buffer::{LockPolicy, LockedCell};
//!
//! let mut key = LockedCell::new([0u8; 32], LockPolicy::BestEffort)
//!     .expect("page allocation failed");
//! key[0] = 0xab;
//! assert_eq!(key[0], 0xab);
//! // Dropping `key` zeroizes the page before it is unmapped.
//! ```

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod cell;
mod error;

pub use cell::{LockPolicy, LockedCell};
pub use error::SecureAllocError;
