// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

use raaz_buffer::SecureAllocError;
use raaz_chacha::ChaChaError;

/// Errors that can occur when gathering OS entropy.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntropyError {
    /// System entropy source is unavailable or failed to generate random data.
    #[error("EntropyNotAvailable")]
    EntropyNotAvailable,
}

/// Errors that can occur while operating the PRG.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrgError {
    /// OS entropy failed during (re)seeding; the PRG refuses to emit
    /// until a reseed succeeds.
    #[error(transparent)]
    Entropy(#[from] EntropyError),
    /// The underlying keystream counter ran out; unreachable under the
    /// reseed schedule but never silently ignored.
    #[error(transparent)]
    Cipher(#[from] ChaChaError),
    /// The locked page for the PRG state could not be allocated.
    #[error(transparent)]
    SecureAlloc(#[from] SecureAllocError),
}
