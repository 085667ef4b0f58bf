// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Read-only checks that a region really holds zeros.
//!
//! Reads go through `read_volatile`, so the check observes memory instead of
//! what the optimizer believes memory contains.

use core::mem;

use crate::traits::BulkClearable;

/// Returns `true` if every byte of `bytes` is zero.
///
/// # Example
///
/// ```
/// use secure_clear_core::is_slice_cleared;
///
/// assert!(is_slice_cleared(&[0u8; 10]));
/// assert!(!is_slice_cleared(&[0u8, 1, 0, 0]));
/// ```
#[inline(never)]
pub fn is_slice_cleared(bytes: &[u8]) -> bool {
    // SAFETY: a slice is valid for reads of its length.
    unsafe { is_region_cleared(bytes.as_ptr(), bytes.len()) }
}

/// Returns `true` if the `len` bytes at `ptr` are all zero.
///
/// # Safety
///
/// If `len > 0`, `ptr` must be valid for reads of `len` initialized bytes.
#[inline(never)]
pub unsafe fn is_region_cleared(ptr: *const u8, len: usize) -> bool {
    for i in 0..len {
        if unsafe { core::ptr::read_volatile(ptr.add(i)) } != 0 {
            return false;
        }
    }

    true
}

/// Returns `true` if the full storage of `value`, padding included, is zero.
///
/// # Safety
///
/// Every byte of `value`'s storage must be initialized. This holds right
/// after [`clear`](crate::clear) on the same place, or for types without
/// padding. Padding of a freshly constructed value is uninitialized.
///
/// # Example
///
/// ```
/// use secure_clear_core::{clear, is_cleared};
///
/// let mut nonce = [7u64; 3];
/// clear(&mut nonce);
/// assert!(unsafe { is_cleared(&nonce) });
/// ```
#[inline]
pub unsafe fn is_cleared<T: BulkClearable>(value: &T) -> bool {
    unsafe { is_region_cleared((value as *const T).cast::<u8>(), mem::size_of::<T>()) }
}
