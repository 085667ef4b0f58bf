// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Platform opaque-write facilities.
//!
//! Exactly one backend is compiled in per target and exposed as
//! [`opaque_write`]. Each backend overwrites a byte range with zero through a
//! routine its vendor guarantees is never removed by dead-store elimination:
//!
//! | Target | Facility |
//! |---|---|
//! | Linux, FreeBSD, OpenBSD | `explicit_bzero(3)` |
//! | macOS, iOS | `memset_s` |
//! | Windows, WebAssembly | volatile stores + `SeqCst` compiler fence |
//!
//! Any other target is a build error. The `force-volatile` feature selects
//! the volatile backend everywhere.

// Compiled on every target so the volatile path is testable next to the
// platform routine.
#[cfg_attr(
    not(any(
        feature = "force-volatile",
        target_os = "windows",
        target_family = "wasm"
    )),
    allow(dead_code)
)]
pub(crate) mod volatile;

#[cfg(all(
    not(feature = "force-volatile"),
    any(target_os = "linux", target_os = "freebsd", target_os = "openbsd")
))]
#[path = "explicit_bzero.rs"]
mod backend;

#[cfg(all(not(feature = "force-volatile"), target_vendor = "apple"))]
#[path = "memset_s.rs"]
mod backend;

#[cfg(any(
    feature = "force-volatile",
    target_os = "windows",
    target_family = "wasm"
))]
mod backend {
    pub(crate) use super::volatile::{BACKEND, opaque_write};
}

#[cfg(not(any(
    feature = "force-volatile",
    target_os = "linux",
    target_os = "freebsd",
    target_os = "openbsd",
    target_vendor = "apple",
    target_os = "windows",
    target_family = "wasm"
)))]
compile_error!(
    "secure-clear: no opaque-write facility is known for this target. \
     Refusing to fall back to an elidable overwrite; enable the \
     `force-volatile` feature to opt into volatile stores explicitly."
);

pub(crate) use backend::opaque_write;

/// The opaque-write facility a build routes every clear through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// `explicit_bzero(3)` from the C library.
    ExplicitBzero,
    /// `memset_s` (C11 Annex K), which the C library may not elide.
    MemsetS,
    /// Per-byte `write_volatile` followed by a `SeqCst` compiler fence.
    Volatile,
}

impl Backend {
    /// Human readable name, as printed by diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Backend::ExplicitBzero => "explicit_bzero",
            Backend::MemsetS => "memset_s",
            Backend::Volatile => "volatile",
        }
    }

    /// Symbol that generated code calls to clear, if the backend is an
    /// out-of-line routine.
    ///
    /// The volatile backend is emitted inline as store instructions and
    /// returns `None`.
    pub const fn symbol(self) -> Option<&'static str> {
        match self {
            Backend::ExplicitBzero => Some("explicit_bzero"),
            Backend::MemsetS => Some("memset_s"),
            Backend::Volatile => None,
        }
    }
}

impl core::fmt::Display for Backend {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Backend selected for the current target.
pub const BACKEND: Backend = backend::BACKEND;
