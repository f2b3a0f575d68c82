// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{digest_of, Digest, DigestParseError, Sha1, Sha256};

#[test]
fn test_display_parse_round_trip() {
    let digest = digest_of::<Sha256>(b"round trip");
    let parsed: Digest<Sha256> = digest.to_string().parse().expect("parse failed");
    assert_eq!(digest, parsed);
}

#[test]
fn test_parse_accepts_uppercase_displays_lowercase() {
    let digest = digest_of::<Sha1>(b"case");
    let upper = digest.to_string().to_uppercase();

    let parsed: Digest<Sha1> = upper.parse().expect("uppercase parse failed");
    assert_eq!(parsed.to_string(), digest.to_string());
}

#[test]
fn test_parse_rejects_wrong_length() {
    let err = "ab".parse::<Digest<Sha256>>().unwrap_err();
    assert_eq!(
        err,
        DigestParseError::InvalidLength {
            expected: 64,
            got: 2,
        },
    );
}

#[test]
fn test_parse_rejects_non_hex() {
    let mut s = digest_of::<Sha256>(b"x").to_string();
    s.replace_range(10..11, "g");

    let err = s.parse::<Digest<Sha256>>().unwrap_err();
    assert_eq!(err, DigestParseError::InvalidHexDigit { offset: 10 });
}

#[test]
fn test_display_length() {
    assert_eq!(digest_of::<Sha1>(b"").to_string().len(), 40);
    assert_eq!(digest_of::<Sha256>(b"").to_string().len(), 64);
}

#[test]
fn test_equality_detects_any_difference() {
    let base = digest_of::<Sha256>(b"equality");
    assert_eq!(base, base);

    // Flip one byte at each position; equality must catch all of them.
    for i in 0..32 {
        let mut bytes: [u8; 32] = [0u8; 32];
        bytes.copy_from_slice(base.as_bytes());
        bytes[i] ^= 0x01;
        assert_ne!(base, Digest::<Sha256>::from_output(bytes));
    }
}
