// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Pull-based byte sources feeding the hashing driver.

use std::io;

/// A pull-based byte source.
///
/// `read_into` fills a prefix of `buf` and returns the number of bytes
/// written; `0` means end of input. Partial reads are normal and never
/// interpreted as errors.
pub trait ByteSource {
    /// Reads up to `buf.len()` bytes into `buf`.
    fn read_into(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

impl<R: io::Read> ByteSource for R {
    fn read_into(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            match self.read(buf) {
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                result => return result,
            }
        }
    }
}
