// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io::{self, Write};

use crate::{digest_of, digest_of_file, digest_of_source, Blake2s, Sha256, Sha512};

/// A reader that yields its data in deliberately awkward chunk sizes.
struct RaggedReader<'a> {
    data: &'a [u8],
    chunk_lens: Vec<usize>,
    next: usize,
}

impl io::Read for RaggedReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.data.is_empty() {
            return Ok(0);
        }
        let want = self.chunk_lens[self.next % self.chunk_lens.len()];
        self.next += 1;

        let n = want.min(self.data.len()).min(buf.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

/// Splitting the message into any chunk sequence must not change the
/// digest.
#[test]
fn test_streaming_equivalence() {
    let data: Vec<u8> = (0..100_000u32).map(|i| (i * 31 % 251) as u8).collect();
    let expected = digest_of::<Sha256>(&data);

    for chunk_lens in [
        vec![1],
        vec![64],
        vec![1, 2, 3, 5, 8, 13, 21],
        vec![63, 64, 65],
        vec![4096],
        vec![100_000],
    ] {
        let reader = RaggedReader {
            data: &data,
            chunk_lens,
            next: 0,
        };
        let streamed = digest_of_source::<Sha256, _>(reader).expect("in-memory read failed");
        assert_eq!(streamed, expected);
    }
}

#[test]
fn test_streaming_equivalence_wide_block() {
    let data = vec![0xa5u8; 100_000];
    let expected = digest_of::<Sha512>(&data);

    let reader = RaggedReader {
        data: &data,
        chunk_lens: vec![127, 1, 128, 129],
        next: 0,
    };
    let streamed = digest_of_source::<Sha512, _>(reader).expect("in-memory read failed");
    assert_eq!(streamed, expected);
}

#[test]
fn test_digest_of_source_from_slice() {
    let digest = digest_of_source::<Blake2s, _>(&b"abc"[..]).expect("slice read failed");
    assert_eq!(digest, digest_of::<Blake2s>(b"abc"));
}

#[test]
fn test_digest_of_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    let data = vec![0x3cu8; 70_000];
    file.write_all(&data).expect("write");
    file.flush().expect("flush");

    let from_file = digest_of_file::<Sha256>(file.path()).expect("file hash failed");
    assert_eq!(from_file, digest_of::<Sha256>(&data));
}

#[test]
fn test_digest_of_missing_file() {
    let err = digest_of_file::<Sha256>("/nonexistent/raaz-test-path").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}
