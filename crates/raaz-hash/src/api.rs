// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! One-shot hashing entry points.

use std::fs::File;
use std::io;
use std::path::Path;

use zeroize::{Zeroize, Zeroizing};

use raaz_primitive::BlockDriver;

use crate::digest::{BlockHash, Digest};
use crate::source::ByteSource;

/// Read-chunk size for streamed sources: 16 KiB, block-aligned for every
/// compiled-in primitive.
const CHUNK_LEN: usize = 16 * 1024;

#[repr(C, align(32))]
struct ReadChunk([u8; CHUNK_LEN]);

impl ReadChunk {
    fn bytes_mut(&mut self) -> &mut [u8; CHUNK_LEN] {
        &mut self.0
    }
}

impl Zeroize for ReadChunk {
    fn zeroize(&mut self) {
        raaz_zero::wipe(&mut self.0);
    }
}

/// Hashes an in-memory byte string. Total: cannot fail.
pub fn digest_of<H: BlockHash>(data: &[u8]) -> Digest<H> {
    let mut driver = BlockDriver::<H>::new(H::init());
    driver.absorb(data);
    Digest::from_output(H::finish(driver.finish()))
}

/// Hashes everything a pull-based source yields until it reports end of
/// input.
///
/// # Errors
///
/// Any I/O error of the underlying source, passed through.
pub fn digest_of_source<H: BlockHash, S: ByteSource>(mut source: S) -> io::Result<Digest<H>> {
    let mut driver = BlockDriver::<H>::new(H::init());
    let mut chunk = Zeroizing::new(ReadChunk([0u8; CHUNK_LEN]));

    loop {
        let n = source.read_into(chunk.bytes_mut())?;
        if n == 0 {
            break;
        }
        driver.absorb_mut(&mut chunk.bytes_mut()[..n]);
    }

    Ok(Digest::from_output(H::finish(driver.finish())))
}

/// Hashes a file, streamed in binary mode.
///
/// # Errors
///
/// Any I/O error from opening or reading the file, passed through.
pub fn digest_of_file<H: BlockHash>(path: impl AsRef<Path>) -> io::Result<Digest<H>> {
    digest_of_source::<H, _>(File::open(path)?)
}
