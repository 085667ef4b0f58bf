// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # secure-clear-forensics
//!
//! Acceptance tooling for the secure-clear guarantee: shows that a
//! guaranteed clear survives optimization where an ordinary overwrite does
//! not.
//!
//! ## Procedure
//!
//! 1. Emit an optimized assembly listing of this crate:
//!
//!    ```text
//!    cargo rustc --release -p secure-clear-forensics --lib -- --emit asm
//!    ```
//!
//! 2. Feed it to the report:
//!
//!    ```text
//!    cargo run --release -p secure-clear-forensics --bin codegen_report -- \
//!        target/release/deps/secure_clear_forensics-*.s
//!    ```
//!
//! The report exits non-zero when the secure routine, or the typed routine if
//! the listing contains it, lost its clearing step.
//! The naive routine is expected, but not required, to lose it.
//!
//! Run without arguments, `codegen_report` executes the demo routines and
//! checks the observable post-clear state instead.
//!
//! ## License
//!
//! GPL-3.0-only

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

pub mod asm;
pub mod demo;
pub mod error;
pub mod report;

pub use asm::{ClearProfile, CodegenVerdict, Instruction, Routine, compare, extract_routine};
pub use error::ReportError;
pub use report::{analyze_file, render};
