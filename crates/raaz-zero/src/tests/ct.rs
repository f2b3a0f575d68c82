// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{ct_eq, ct_eq_fixed, ct_is_zero};

#[test]
fn test_ct_eq_equal() {
    let a = [1u8, 2, 3, 4, 5];
    let b = [1u8, 2, 3, 4, 5];
    assert!(ct_eq(&a, &b));
}

#[test]
fn test_ct_eq_differs_in_last_byte() {
    let a = [1u8, 2, 3, 4, 5];
    let b = [1u8, 2, 3, 4, 6];
    assert!(!ct_eq(&a, &b));
}

#[test]
fn test_ct_eq_differs_in_first_byte() {
    let a = [0u8, 2, 3, 4, 5];
    let b = [1u8, 2, 3, 4, 5];
    assert!(!ct_eq(&a, &b));
}

#[test]
fn test_ct_eq_length_mismatch() {
    let a = [1u8, 2, 3, 4];
    let b = [1u8, 2, 3, 4, 5];
    assert!(!ct_eq(&a, &b));
}

#[test]
fn test_ct_eq_empty() {
    assert!(ct_eq(&[], &[]));
}

#[test]
fn test_ct_eq_fixed() {
    let a = [0xabu8; 32];
    let mut b = [0xabu8; 32];
    assert!(ct_eq_fixed(&a, &b));

    b[31] ^= 1;
    assert!(!ct_eq_fixed(&a, &b));
}

#[test]
fn test_ct_is_zero() {
    assert!(ct_is_zero(&[0u8; 64]));

    let mut bytes = [0u8; 64];
    bytes[17] = 1;
    assert!(!ct_is_zero(&bytes));
}
