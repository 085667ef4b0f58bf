// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Typed entry points. Each one derives the byte length from the argument's
//! type and forwards to [`clear_raw`].

use alloc::vec::Vec;
use core::mem;

use crate::raw::clear_raw;
use crate::traits::BulkClearable;

/// Clears the whole storage of a single value, padding included.
///
/// Works for fixed-length arrays too: `[E; N]` is a single value of
/// `N * size_of::<E>()` bytes, so the entire array is cleared.
///
/// # Example
///
/// ```
/// use secure_clear_core::clear;
///
/// let mut pin: u32 = 4821;
/// clear(&mut pin);
/// assert_eq!(pin, 0);
///
/// let mut password = [b'x'; 100];
/// clear(&mut password); // all 100 bytes
/// assert_eq!(password, [0u8; 100]);
/// ```
///
/// A pointer that lost its array length is rejected; clearing it would only
/// clear the pointer variable:
///
/// ```compile_fail,E0277
/// use secure_clear_core::clear;
///
/// let mut buf = [0u8; 100];
/// let mut decayed: *mut u8 = buf.as_mut_ptr();
/// clear(&mut decayed); // error: `*mut u8: BulkClearable` is not satisfied
/// ```
///
/// So is anything owning a resource:
///
/// ```compile_fail,E0277
/// use secure_clear_core::clear;
///
/// let mut password = String::from("hunter2");
/// clear(&mut password); // error: `String: BulkClearable` is not satisfied
/// ```
#[inline]
pub fn clear<T: BulkClearable>(value: &mut T) {
    const { assert!(!mem::needs_drop::<T>(), "clear: type has drop glue") };

    // SAFETY: `value` is a unique reference to `size_of::<T>()` writable
    // bytes and `BulkClearable` guarantees all-zero is a valid `T`.
    unsafe { clear_raw((value as *mut T).cast::<u8>(), mem::size_of::<T>()) }
}

/// Clears every element of a slice.
///
/// The length comes from the slice itself, so a sub-slice clears exactly the
/// elements it covers.
///
/// # Example
///
/// ```
/// use secure_clear_core::clear_slice;
///
/// let mut words = [0xDEAD_BEEFu32; 8];
/// clear_slice(&mut words[2..6]);
/// assert_eq!(words, [0xDEAD_BEEF, 0xDEAD_BEEF, 0, 0, 0, 0, 0xDEAD_BEEF, 0xDEAD_BEEF]);
/// ```
#[inline]
pub fn clear_slice<T: BulkClearable>(slice: &mut [T]) {
    const { assert!(!mem::needs_drop::<T>(), "clear_slice: type has drop glue") };

    // SAFETY: a unique slice is valid for writes of `size_of_val` bytes and
    // all-zero is a valid `T`.
    unsafe { clear_raw(slice.as_mut_ptr().cast::<u8>(), mem::size_of_val(slice)) }
}

/// Clears the entire allocation of a `Vec`, spare capacity included.
///
/// The length is left unchanged: the live elements are all-zero values
/// afterwards. Bytes left behind by `truncate` or `clear` between `len` and
/// `capacity` are cleared as well.
///
/// # Example
///
/// ```
/// use secure_clear_core::{clear_vec, is_region_cleared};
///
/// let mut secret = vec![0xFFu8; 64];
/// secret.truncate(8);
///
/// clear_vec(&mut secret);
///
/// assert_eq!(secret, vec![0u8; 8]);
/// assert!(unsafe { is_region_cleared(secret.as_ptr(), secret.capacity()) });
/// ```
#[inline]
pub fn clear_vec<T: BulkClearable>(vec: &mut Vec<T>) {
    const { assert!(!mem::needs_drop::<T>(), "clear_vec: type has drop glue") };

    // Zero-sized `T` reports `usize::MAX` capacity over zero bytes.
    let byte_len = vec.capacity() * mem::size_of::<T>();

    // SAFETY: `Vec` owns `capacity * size_of::<T>()` writable bytes at its
    // pointer, and all-zero is a valid `T` for the live elements.
    unsafe { clear_raw(vec.as_mut_ptr().cast::<u8>(), byte_len) }
}
