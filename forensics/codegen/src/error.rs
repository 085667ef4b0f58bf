// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for secure-clear-forensics.
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while producing a codegen report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The assembly listing could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Listing that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A demo routine is absent from the listing (wrong file, or the
    /// listing was not built from this crate).
    #[error("symbol `{0}` not found in assembly listing")]
    MissingSymbol(&'static str),

    /// The guaranteed clear did not survive optimization.
    #[error("clear after last use was optimized out of `{0}`")]
    ClearEliminated(&'static str),

    /// Bad command line.
    #[error("usage: codegen_report [path/to/listing.s]")]
    Usage,
}
