// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # secure-clear-core
//!
//! Guaranteed memory clearing: overwrite a region with zero in a way the
//! compiler is not allowed to optimize away, even when the region is never
//! read again.
//!
//! A plain `buf.fill(0)` or `ptr::write_bytes` right before a buffer goes out
//! of scope is a dead store, and optimizers remove dead stores. A password
//! cleared that way may stay in memory, swap or a crash dump. Every entry
//! point of this crate routes through the platform's opaque-write facility
//! instead (see [`Backend`]).
//!
//! ## Entry points
//!
//! | Function | Clears | Length |
//! |---|---|---|
//! | [`clear`] | a value or a whole `[T; N]` | `size_of::<T>()` |
//! | [`clear_slice`] | a slice | `size_of_val(slice)` |
//! | [`clear_vec`] | a `Vec`'s allocation | `capacity * size_of::<T>()` |
//! | [`clear_bytes`] | a byte slice | `bytes.len()` |
//! | [`clear_raw`] | a raw region (`unsafe`) | explicit |
//!
//! The typed forms only accept [`BulkClearable`] types, which rules out
//! anything with a `Drop` implementation and anything for which all-zero is
//! not a valid value, at compile time.
//!
//! ## Example
//!
//! ```
//! use secure_clear_core::{clear, clear_raw, is_slice_cleared};
//!
//! fn get_password_from_user(buf: &mut [u8]) {
//!     buf.fill(b'*');
//! }
//!
//! fn use_password(buf: &[u8]) -> usize {
//!     buf.len()
//! }
//!
//! let mut password = [0u8; 100];
//! get_password_from_user(&mut password);
//! use_password(&password);
//!
//! clear(&mut password);
//! assert!(is_slice_cleared(&password));
//!
//! // Only a pointer left: the length must be spelled out.
//! let mut other = [1u8; 32];
//! let ptr = other.as_mut_ptr();
//! unsafe { clear_raw(ptr, 32) };
//! assert!(is_slice_cleared(&other));
//! ```
//!
//! ## Platforms
//!
//! Linux, FreeBSD and OpenBSD use `explicit_bzero`, Apple platforms use
//! `memset_s`, Windows and WebAssembly use volatile stores. Any other target
//! fails to build unless the `force-volatile` feature is enabled.
//!
//! ## Concurrency
//!
//! Every call is synchronous and complete on return. There is no internal
//! locking: the region must not be accessed by another thread during the
//! call, which the `&mut` receivers of the safe entry points enforce.
//!
//! ## License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod probe;
mod raw;
mod sys;
mod traits;
mod typed;

pub use probe::{is_cleared, is_region_cleared, is_slice_cleared};
pub use raw::{clear_bytes, clear_raw};
pub use sys::{BACKEND, Backend};
pub use traits::BulkClearable;
pub use typed::{clear, clear_slice, clear_vec};
