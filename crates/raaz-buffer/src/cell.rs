// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! LockedCell - a value pinned on its own mlock'd page.
//!
//! Uses mmap for allocation and mlock to prevent swapping. Release order
//! is fixed: drop and zeroize the value, volatile-wipe the whole page,
//! munlock, munmap.

use core::ops::{Deref, DerefMut};
use core::ptr::{self, NonNull};

use zeroize::Zeroize;

use raaz_zero::wipe;

use crate::error::SecureAllocError;

/// What to do when `mlock` refuses the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockPolicy {
    /// Proceed unlocked; the downgrade is queryable via [`LockedCell::is_locked`].
    BestEffort,
    /// Fail allocation with [`SecureAllocError::LockFailed`].
    Required,
}

/// A value stored on its own page-aligned, mlock'd allocation.
///
/// The value is reachable only through `Deref`/`DerefMut`. On drop the
/// value is zeroized and dropped in place, the full page is wiped, and
/// the mapping is unlocked and released.
pub struct LockedCell<T: Zeroize> {
    ptr: NonNull<T>,
    mapping_len: usize,
    locked: bool,
}

// Safety: the cell exclusively owns its mapping; access to T goes through
// the usual borrow rules on the cell itself.
unsafe impl<T: Zeroize + Send> Send for LockedCell<T> {}
unsafe impl<T: Zeroize + Sync> Sync for LockedCell<T> {}

impl<T: Zeroize> LockedCell<T> {
    /// Allocates a page-backed cell holding `value`.
    ///
    /// `T`'s alignment must not exceed the system page size.
    ///
    /// # Errors
    ///
    /// [`SecureAllocError::MapFailed`] if the mapping cannot be created,
    /// [`SecureAllocError::LockFailed`] if `mlock` fails under
    /// [`LockPolicy::Required`].
    pub fn new(value: T, policy: LockPolicy) -> Result<Self, SecureAllocError> {
        let page = unsafe { libc::sysconf(libc::_SC_PAGESIZE) } as usize;
        debug_assert!(core::mem::align_of::<T>() <= page);

        let mapping_len = core::mem::size_of::<T>().max(1).div_ceil(page) * page;

        let raw = unsafe {
            libc::mmap(
                ptr::null_mut(),
                mapping_len,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
                -1,
                0,
            )
        };

        if raw == libc::MAP_FAILED {
            return Err(SecureAllocError::MapFailed);
        }

        let locked = unsafe { libc::mlock(raw as *const _, mapping_len) } == 0;

        if !locked && policy == LockPolicy::Required {
            unsafe { libc::munmap(raw, mapping_len) };
            return Err(SecureAllocError::LockFailed);
        }

        let ptr = raw as *mut T;
        unsafe { ptr.write(value) };

        Ok(Self {
            // Safety: mmap returned a non-null, page-aligned pointer.
            ptr: unsafe { NonNull::new_unchecked(ptr) },
            mapping_len,
            locked,
        })
    }

    /// Whether the backing page is actually locked against swapping.
    ///
    /// `false` means `mlock` was refused and [`LockPolicy::BestEffort`]
    /// downgraded the allocation.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[cfg(test)]
    pub(crate) fn with_raw_page(&self, f: &mut dyn FnMut(*mut u8, usize)) {
        f(self.ptr.as_ptr() as *mut u8, self.mapping_len);
    }
}

impl<T: Zeroize> Deref for LockedCell<T> {
    type Target = T;

    fn deref(&self) -> &T {
        unsafe { self.ptr.as_ref() }
    }
}

impl<T: Zeroize> DerefMut for LockedCell<T> {
    fn deref_mut(&mut self) -> &mut T {
        unsafe { self.ptr.as_mut() }
    }
}

impl<T: Zeroize> Drop for LockedCell<T> {
    fn drop(&mut self) {
        unsafe {
            self.ptr.as_mut().zeroize();
            ptr::drop_in_place(self.ptr.as_ptr());

            let page = core::slice::from_raw_parts_mut(self.ptr.as_ptr() as *mut u8, self.mapping_len);
            wipe(page);

            if self.locked {
                libc::munlock(self.ptr.as_ptr() as *const _, self.mapping_len);
            }
            libc::munmap(self.ptr.as_ptr() as *mut libc::c_void, self.mapping_len);
        }
    }
}
