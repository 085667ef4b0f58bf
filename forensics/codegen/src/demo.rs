// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Paired routines for comparing a guaranteed clear with an ordinary one.
//!
//! [`secure_clear_demo_secure`] and [`secure_clear_demo_naive`] run the same
//! sequence on a 100-byte stack buffer: acquire a password, use it, clear it.
//! Only the last step differs. Compiled with optimizations, the naive
//! routine's clear is a dead store and is expected to disappear; the secure
//! routine must keep a call to the backend routine, or the stores themselves,
//! after the call to [`use_password`].
//!
//! All routines are `#[no_mangle]` so they can be located in an assembly
//! listing under their plain names.

use std::hint::black_box;

use secure_clear::{BulkClearable, clear, clear_raw};

/// Size of the demo password buffer.
pub const PASSWORD_LEN: usize = 100;

/// Symbol of the routine clearing with `secure_clear::clear`.
pub const SECURE_SYMBOL: &str = "secure_clear_demo_secure";
/// Symbol of the routine clearing with an ordinary `fill(0)`.
pub const NAIVE_SYMBOL: &str = "secure_clear_demo_naive";
/// Symbol of the routine exercising the typed entry points.
pub const TYPED_SYMBOL: &str = "secure_clear_demo_typed";
/// Symbol of the "use" collaborator; its last call marks the end of the
/// password's useful life.
pub const USE_SYMBOL: &str = "use_password";

/// Three plain numeric fields, with padding between `b` and `c`.
#[derive(Clone, Copy, Debug, PartialEq, BulkClearable)]
#[repr(C)]
pub struct DemoRecord {
    /// First field.
    pub a: i32,
    /// Second field, followed by padding.
    pub b: u8,
    /// Third field.
    pub c: i64,
}

/// Fills `buf` with printable, non-zero "password" bytes.
#[unsafe(no_mangle)]
#[inline(never)]
pub fn get_password_from_user(buf: &mut [u8]) {
    for (i, byte) in buf.iter_mut().enumerate() {
        *byte = b'!' + (i % 94) as u8;
    }
    black_box(buf);
}

/// Consumes the password.
#[unsafe(no_mangle)]
#[inline(never)]
pub fn use_password(buf: &[u8]) -> u64 {
    black_box(buf.iter().fold(0u64, |acc, &b| acc.rotate_left(5) ^ b as u64))
}

/// Ordinary, fully analyzable overwrite.
#[inline(always)]
pub fn naive_clear(buf: &mut [u8]) {
    buf.fill(0);
}

/// Acquire, use, clear. `SECURE` picks the clearing step.
#[inline(always)]
pub fn password_session<const SECURE: bool>(password: &mut [u8; PASSWORD_LEN]) {
    get_password_from_user(password);
    use_password(password);

    if SECURE {
        clear(password);
    } else {
        naive_clear(password);
    }
}

/// Codegen subject: the buffer dies right after a guaranteed clear.
#[unsafe(no_mangle)]
#[inline(never)]
pub extern "C" fn secure_clear_demo_secure() {
    let mut password = [0u8; PASSWORD_LEN];
    password_session::<true>(&mut password);
}

/// Codegen subject: the buffer dies right after an ordinary clear.
#[unsafe(no_mangle)]
#[inline(never)]
pub extern "C" fn secure_clear_demo_naive() {
    let mut password = [0u8; PASSWORD_LEN];
    password_session::<false>(&mut password);
}

/// Codegen subject for the typed entry points: a struct, a whole array, and a
/// pointer that only knows its length through the explicit byte-range form.
#[unsafe(no_mangle)]
#[inline(never)]
pub extern "C" fn secure_clear_demo_typed() {
    let mut record = DemoRecord {
        a: 1,
        b: 2,
        c: 3,
    };
    black_box(&mut record);
    clear(&mut record);

    let mut password = [0u8; PASSWORD_LEN];
    get_password_from_user(&mut password);
    use_password(&password);
    clear(&mut password);

    let decayed: *mut u8 = password.as_mut_ptr();
    // SAFETY: `decayed` points to the PASSWORD_LEN bytes of `password`.
    unsafe { clear_raw(decayed, PASSWORD_LEN) };
}
