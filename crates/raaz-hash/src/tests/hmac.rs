// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use raaz_primitive::BlockPrimitive;

use crate::{digest_of, hmac_of, Blake2b, Sha1, Sha256, Sha512};

/// Test vectors from RFC 2202 Section 3.
#[test]
fn test_hmac_sha1_vectors() {
    assert_eq!(
        hmac_of::<Sha1>(&[0x0b; 20], b"Hi There").to_string(),
        "b617318655057264e28bc0b6fb378c8ef146be00",
    );

    assert_eq!(
        hmac_of::<Sha1>(b"Jefe", b"what do ya want for nothing?").to_string(),
        "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79",
    );

    assert_eq!(
        hmac_of::<Sha1>(&[0xaa; 20], &[0xdd; 50]).to_string(),
        "125d7342b9ac11cd91a39af48aa17b4f63f175d3",
    );

    // Key longer than the block size: hashed down first.
    assert_eq!(
        hmac_of::<Sha1>(
            &[0xaa; 80],
            b"Test Using Larger Than Block-Size Key and Larger Than One Block-Size Data",
        )
        .to_string(),
        "e8e99d0f45237d786d6bbaa7965c7808bbff1a91",
    );
}

/// Test vectors from RFC 4231 Section 4.
#[test]
fn test_hmac_sha256_vectors() {
    assert_eq!(
        hmac_of::<Sha256>(&[0x0b; 20], b"Hi There").to_string(),
        "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7",
    );

    assert_eq!(
        hmac_of::<Sha256>(b"Jefe", b"what do ya want for nothing?").to_string(),
        "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843",
    );
}

/// Test vectors from RFC 4231 Section 4.
#[test]
fn test_hmac_sha512_vectors() {
    assert_eq!(
        hmac_of::<Sha512>(&[0x0b; 20], b"Hi There").to_string(),
        "87aa7cdea5ef619d4ff0b4241a1d6cb02379f4e2ce4ec2787ad0b30545e17cde\
         daa833b7d6b8a702038b274eaea3f4e4be9d914eeb61f1702e696c203a126854",
    );

    assert_eq!(
        hmac_of::<Sha512>(b"Jefe", b"what do ya want for nothing?").to_string(),
        "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
         9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737",
    );
}

/// The generic construction must equal the RFC 2104 definition spelled
/// out by hand, for a hash with no published HMAC vectors.
#[test]
fn test_hmac_matches_definition() {
    let key = b"a moderately long key for blake2b hmac";
    let msg = b"the message under authentication";

    // K', zero-padded to the block size.
    let mut k = [0u8; Blake2b::BLOCK_LEN];
    k[..key.len()].copy_from_slice(key);

    let mut inner_input = Vec::new();
    inner_input.extend(k.iter().map(|b| b ^ 0x36));
    inner_input.extend_from_slice(msg);
    let inner = digest_of::<Blake2b>(&inner_input);

    let mut outer_input = Vec::new();
    outer_input.extend(k.iter().map(|b| b ^ 0x5c));
    outer_input.extend_from_slice(inner.as_bytes());
    let expected = digest_of::<Blake2b>(&outer_input);

    let mac = hmac_of::<Blake2b>(key, msg);
    assert_eq!(mac.as_bytes(), expected.as_bytes());
}

/// A key of exactly the block size is used as-is.
#[test]
fn test_hmac_block_size_key() {
    let key = [0x42u8; Sha256::BLOCK_LEN];
    let a = hmac_of::<Sha256>(&key, b"msg");

    let mut padded = key.to_vec();
    padded.push(0);
    let b = hmac_of::<Sha256>(&padded, b"msg");

    // One byte past the block size flips into the hash-the-key branch.
    assert_ne!(a.as_bytes(), b.as_bytes());
}
