// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte-range form of the guaranteed clear.

use crate::sys;

/// Overwrites `len` bytes starting at `ptr` with zero, through the platform's
/// opaque-write facility.
///
/// The write cannot be removed by dead-store elimination, even when the
/// memory is never read again. It has completed when this function returns.
///
/// A zero `len` is a no-op and `ptr` is not touched (it may be null or
/// dangling).
///
/// Use this form when the length is not carried by the type, e.g. a raw
/// pointer into a buffer. When a typed reference is available prefer
/// [`clear`](crate::clear) or [`clear_slice`](crate::clear_slice), which
/// compute the length themselves.
///
/// # Safety
///
/// - If `len > 0`, `ptr` must be non-null and valid for writes of `len` bytes.
/// - No other thread may access the region for the duration of the call.
/// - If the region holds typed values, all-zero must be a valid
///   representation of each of them.
///
/// # Example
///
/// ```
/// use secure_clear_core::clear_raw;
///
/// let mut buf = [0xAAu8; 100];
/// let ptr: *mut u8 = buf.as_mut_ptr();
///
/// // The pointer alone does not know it came from a 100-byte array.
/// unsafe { clear_raw(ptr, 100) };
///
/// assert!(buf.iter().all(|&b| b == 0));
/// ```
#[inline]
pub unsafe fn clear_raw(ptr: *mut u8, len: usize) {
    if len == 0 {
        return;
    }

    debug_assert!(!ptr.is_null(), "clear_raw: null pointer with len {len}");

    unsafe { sys::opaque_write(ptr, len) }
}

/// Overwrites every byte of `bytes` with zero.
///
/// Safe wrapper over [`clear_raw`] for the common case where the region is
/// already a byte slice.
///
/// # Example
///
/// ```
/// use secure_clear_core::clear_bytes;
///
/// let mut token = *b"hunter2";
/// clear_bytes(&mut token);
/// assert_eq!(token, [0u8; 7]);
/// ```
#[inline]
pub fn clear_bytes(bytes: &mut [u8]) {
    // SAFETY: a unique slice is valid for writes of its whole length.
    unsafe { clear_raw(bytes.as_mut_ptr(), bytes.len()) }
}
