// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # secure-clear
//!
//! Clear secrets from memory with a write the compiler cannot remove.
//!
//! This is a re-export crate that combines [`secure-clear-core`] and
//! [`secure-clear-derive`] for convenience.
//!
//! ## Quick Start
//!
//! ```rust
//! use secure_clear::{BulkClearable, clear, clear_raw, is_slice_cleared};
//!
//! #[derive(Clone, Copy, BulkClearable)]
//! struct Credentials {
//!     a: i32,
//!     b: u8,
//!     c: i64,
//! }
//!
//! let mut creds = Credentials { a: 1, b: 2, c: 3 };
//! clear(&mut creds);
//!
//! let mut password = [b'*'; 100];
//! clear(&mut password); // the whole array
//! assert!(is_slice_cleared(&password));
//!
//! let mut buf = [1u8; 100];
//! let decayed: *mut u8 = buf.as_mut_ptr();
//! unsafe { clear_raw(decayed, 100) }; // explicit length
//! assert!(is_slice_cleared(&buf));
//! ```
//!
//! ## What's Included
//!
//! - **Entry points**: [`clear`], [`clear_slice`], [`clear_vec`], [`clear_bytes`], [`clear_raw`]
//! - **Capability**: [`BulkClearable`] and `#[derive(BulkClearable)]`
//! - **Backend introspection**: [`Backend`], [`BACKEND`]
//! - **Probes**: [`is_cleared`], [`is_region_cleared`], [`is_slice_cleared`]
//!
//! ## Rejected at compile time
//!
//! Deriving on a struct that implements `Drop`. Everything else about it is
//! eligible, so the destructor is the only reason for rejection:
//!
//! ```compile_fail,E0184
//! use secure_clear::BulkClearable;
//!
//! #[derive(Clone, Copy, BulkClearable)]
//! struct Handle {
//!     fd: i32,
//! }
//!
//! // error[E0184]: the type has a destructor, so it cannot be `Copy`
//! impl Drop for Handle {
//!     fn drop(&mut self) {}
//! }
//! ```
//!
//! Deriving on a struct with a field that only points at memory:
//!
//! ```compile_fail,E0277
//! use secure_clear::BulkClearable;
//!
//! #[derive(Clone, Copy, BulkClearable)]
//! struct Login {
//!     user_id: u32,
//!     // error[E0277]: `&'static str: BulkClearable` is not satisfied
//!     password: &'static str,
//! }
//! ```
//!
//! Deriving on an enum:
//!
//! ```compile_fail
//! use secure_clear::BulkClearable;
//!
//! #[derive(Clone, Copy, BulkClearable)]
//! enum Mode {
//!     Encrypt = 1,
//!     Decrypt = 2,
//! }
//! ```
//!
//! Clearing through a reference to a reference:
//!
//! ```compile_fail,E0277
//! use secure_clear::clear;
//!
//! let mut key = [0u8; 32];
//! let mut alias: &mut [u8; 32] = &mut key;
//! clear(&mut alias); // `&mut [u8; 32]: BulkClearable` is not satisfied
//! ```
//!
//! [`secure-clear-core`]: https://docs.rs/secure-clear-core
//! [`secure-clear-derive`]: https://docs.rs/secure-clear-derive

#![cfg_attr(not(test), no_std)]

pub use secure_clear_core::*;
pub use secure_clear_derive::*;
