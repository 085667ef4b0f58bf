// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `memset_s` backend (Apple platforms).

use super::Backend;

pub(crate) const BACKEND: Backend = Backend::MemsetS;

/// Zeroes `len` bytes at `ptr` via `memset_s`.
///
/// # Safety
///
/// `ptr` must be non-null and valid for writes of `len` bytes.
#[inline(always)]
pub(crate) unsafe fn opaque_write(ptr: *mut u8, len: usize) {
    // smax == n and ptr != null, so the only constraint violations memset_s
    // reports cannot occur.
    let _rc = unsafe { libc::memset_s(ptr.cast::<libc::c_void>(), len, 0, len) };
    debug_assert_eq!(_rc, 0, "memset_s rejected a valid region");
}
