// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `explicit_bzero(3)` backend (glibc >= 2.25, musl, FreeBSD, OpenBSD).

use super::Backend;

pub(crate) const BACKEND: Backend = Backend::ExplicitBzero;

/// Zeroes `len` bytes at `ptr` via `explicit_bzero`.
///
/// # Safety
///
/// `ptr` must be valid for writes of `len` bytes.
#[inline(always)]
pub(crate) unsafe fn opaque_write(ptr: *mut u8, len: usize) {
    unsafe { libc::explicit_bzero(ptr.cast::<libc::c_void>(), len) }
}
