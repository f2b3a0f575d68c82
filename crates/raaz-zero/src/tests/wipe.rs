// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{ct_is_zero, wipe, wipe_u32, wipe_u64};

#[test]
fn test_wipe_bytes() {
    let mut bytes = [0x5au8; 128];
    wipe(&mut bytes);
    assert!(ct_is_zero(&bytes));
}

#[test]
fn test_wipe_u32_words() {
    let mut words = [0xdead_beefu32; 16];
    wipe_u32(&mut words);
    assert!(words.iter().all(|&w| w == 0));
}

#[test]
fn test_wipe_u64_words() {
    let mut words = [0xdead_beef_cafe_f00du64; 8];
    wipe_u64(&mut words);
    assert!(words.iter().all(|&w| w == 0));
}
