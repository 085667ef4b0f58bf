// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Volatile-store backend.
//!
//! `write_volatile` is the language-level non-elidable store: the compiler
//! must emit every one of them, in order. This is the same technique
//! `SecureZeroMemory` uses on Windows.

use core::sync::atomic::{Ordering, compiler_fence};

use super::Backend;

pub(crate) const BACKEND: Backend = Backend::Volatile;

/// Zeroes `len` bytes at `ptr` with one volatile store per byte.
///
/// Inlined, so the stores show up in the caller's generated code.
///
/// # Safety
///
/// `ptr` must be valid for writes of `len` bytes.
#[inline(always)]
pub(crate) unsafe fn opaque_write(ptr: *mut u8, len: usize) {
    for i in 0..len {
        unsafe { core::ptr::write_volatile(ptr.add(i), 0) };
    }
    // Keep later accesses from being hoisted above the stores.
    compiler_fence(Ordering::SeqCst);
}
