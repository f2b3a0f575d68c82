// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The OS-entropy collaborator.
//!
//! (Re)seeding is the only point where the PRG touches the outside
//! world; everything it needs from that world is this one-method trait.

use crate::error::EntropyError;

/// A source of seed entropy.
///
/// The contract is all-or-nothing: `fill_bytes` either fills `dest`
/// completely or fails with [`EntropyError::EntropyNotAvailable`]. A
/// short fill is never reported as success, so callers need no length
/// bookkeeping.
pub trait EntropySource {
    /// Fills `dest` with entropy.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

/// Entropy straight from the operating system, via `getrandom`.
pub struct SystemEntropySource {}

impl SystemEntropySource {
    /// Runs one fill against an arbitrary backend in place of the OS
    /// call. Tests inject failing backends here; production code only
    /// ever passes `getrandom::fill`.
    pub(crate) fn fill_via<F>(backend: F, dest: &mut [u8]) -> Result<(), EntropyError>
    where
        F: FnOnce(&mut [u8]) -> Result<(), getrandom::Error>,
    {
        backend(dest).map_err(|_| EntropyError::EntropyNotAvailable)
    }
}

impl EntropySource for SystemEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        Self::fill_via(getrandom::fill, dest)
    }
}
