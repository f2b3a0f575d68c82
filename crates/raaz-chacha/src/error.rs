// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors that can occur while generating keystream.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChaChaError {
    /// The 32-bit block counter would overflow under the current
    /// (key, nonce); the caller must rekey.
    #[error("CounterExhausted")]
    CounterExhausted,
}
