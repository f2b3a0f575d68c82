// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors that can occur when allocating locked memory.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SecureAllocError {
    /// The anonymous page mapping could not be created.
    #[error("MapFailed")]
    MapFailed,
    /// `mlock` refused the page and the caller requested `LockPolicy::Required`.
    #[error("LockFailed")]
    LockFailed,
}
