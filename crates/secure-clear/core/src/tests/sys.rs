// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::sys::{BACKEND, Backend, volatile};

#[test]
#[cfg(all(
    not(feature = "force-volatile"),
    any(target_os = "linux", target_os = "freebsd", target_os = "openbsd")
))]
fn test_backend_is_explicit_bzero() {
    assert_eq!(BACKEND, Backend::ExplicitBzero);
    assert_eq!(BACKEND.symbol(), Some("explicit_bzero"));
}

#[test]
#[cfg(all(not(feature = "force-volatile"), target_vendor = "apple"))]
fn test_backend_is_memset_s() {
    assert_eq!(BACKEND, Backend::MemsetS);
    assert_eq!(BACKEND.symbol(), Some("memset_s"));
}

#[test]
#[cfg(any(
    feature = "force-volatile",
    target_os = "windows",
    target_family = "wasm"
))]
fn test_backend_is_volatile() {
    assert_eq!(BACKEND, Backend::Volatile);
    assert_eq!(BACKEND.symbol(), None);
}

#[test]
fn test_backend_names() {
    assert_eq!(Backend::ExplicitBzero.name(), "explicit_bzero");
    assert_eq!(Backend::MemsetS.name(), "memset_s");
    assert_eq!(Backend::Volatile.name(), "volatile");
    assert_eq!(Backend::Volatile.to_string(), "volatile");
    assert_eq!(BACKEND.to_string(), BACKEND.name());
}

// === === === === === === === === === ===
// Selected backend
// === === === === === === === === === ===

#[test]
fn test_opaque_write_zeroes_region() {
    let mut buf = [0xA5u8; 257];

    // Assert (not) zeroization!
    assert!(buf.iter().all(|&b| b == 0xA5));

    unsafe { crate::sys::opaque_write(buf.as_mut_ptr(), buf.len()) };

    // Assert zeroization!
    assert!(buf.iter().all(|&b| b == 0));
}

#[test]
fn test_opaque_write_respects_bounds() {
    let mut buf = [0xFFu8; 64];

    unsafe { crate::sys::opaque_write(buf.as_mut_ptr().add(16), 32) };

    assert!(buf[..16].iter().all(|&b| b == 0xFF));
    assert!(buf[16..48].iter().all(|&b| b == 0));
    assert!(buf[48..].iter().all(|&b| b == 0xFF));
}

// === === === === === === === === === ===
// Volatile backend (compiled on every target)
// === === === === === === === === === ===

#[test]
fn test_volatile_backend_constant() {
    assert_eq!(volatile::BACKEND, Backend::Volatile);
}

#[test]
fn test_volatile_opaque_write_zeroes_region() {
    let mut buf = vec![0x3Cu8; 4096];

    unsafe { volatile::opaque_write(buf.as_mut_ptr(), buf.len()) };

    assert!(buf.iter().all(|&b| b == 0));
}

#[test]
fn test_volatile_opaque_write_zero_len() {
    let mut buf = [0x11u8; 8];

    unsafe { volatile::opaque_write(buf.as_mut_ptr(), 0) };

    assert_eq!(buf, [0x11u8; 8]);
}

#[test]
fn test_volatile_opaque_write_respects_bounds() {
    let mut buf = [0xEEu8; 10];

    unsafe { volatile::opaque_write(buf.as_mut_ptr().add(3), 4) };

    assert_eq!(buf, [0xEE, 0xEE, 0xEE, 0, 0, 0, 0, 0xEE, 0xEE, 0xEE]);
}
