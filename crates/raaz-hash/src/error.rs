// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors that can occur when parsing a digest from its hex encoding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DigestParseError {
    /// The string does not have exactly two hex digits per digest byte.
    #[error("invalid digest encoding: expected {expected} hex digits, got {got}")]
    InvalidLength {
        /// Required number of hex digits for this digest type.
        expected: usize,
        /// Number of bytes actually supplied.
        got: usize,
    },
    /// A character outside `[0-9a-fA-F]` was encountered.
    #[error("invalid digest encoding: non-hex digit at offset {offset}")]
    InvalidHexDigit {
        /// Byte offset of the offending character.
        offset: usize,
    },
}
