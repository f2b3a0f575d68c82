// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use subtle::ConstantTimeEq;

/// Constant-time equality for byte slices.
///
/// Comparison time depends only on the operand length, never on where the
/// first difference occurs. Slices of different lengths compare unequal;
/// the length check itself is not hidden, so this is suitable when the
/// length is public (digest sizes, MAC sizes) and only the content is
/// secret.
#[inline]
pub fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

/// Constant-time equality for fixed-size byte arrays.
#[inline]
pub fn ct_eq_fixed<const N: usize>(a: &[u8; N], b: &[u8; N]) -> bool {
    a[..].ct_eq(&b[..]).into()
}

/// Constant-time probe that a byte region is all zeros.
///
/// Used by tests to verify erasure without introducing a data-dependent
/// branch over the region under inspection.
#[inline]
pub fn ct_is_zero(data: &[u8]) -> bool {
    let mut acc: u8 = 0;
    for &byte in data {
        acc |= byte;
    }
    acc == 0
}
