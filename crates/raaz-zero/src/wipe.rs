// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::sync::atomic::{compiler_fence, Ordering};

/// Volatile zeroization of a byte slice.
///
/// Each byte is written through `write_volatile` and the whole operation
/// is sealed with a `SeqCst` compiler fence so the stores cannot be
/// elided as dead writes.
#[inline]
pub fn wipe(bytes: &mut [u8]) {
    for byte in bytes.iter_mut() {
        unsafe {
            core::ptr::write_volatile(byte, 0);
        }
    }
    compiler_fence(Ordering::SeqCst);
}

/// Volatile zeroization of a `u32` word slice.
#[inline]
pub fn wipe_u32(words: &mut [u32]) {
    for word in words.iter_mut() {
        unsafe {
            core::ptr::write_volatile(word, 0);
        }
    }
    compiler_fence(Ordering::SeqCst);
}

/// Volatile zeroization of a `u64` word slice.
#[inline]
pub fn wipe_u64(words: &mut [u64]) {
    for word in words.iter_mut() {
        unsafe {
            core::ptr::write_volatile(word, 0);
        }
    }
    compiler_fence(Ordering::SeqCst);
}
