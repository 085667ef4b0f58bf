// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Human readable codegen report.

use std::fmt::Write as _;
use std::path::Path;

use secure_clear::Backend;

use crate::asm::{ClearProfile, CodegenVerdict, compare};
use crate::error::ReportError;

/// Reads an assembly listing from `path` and compares the demo routines.
pub fn analyze_file(path: &Path, backend: Backend) -> Result<CodegenVerdict, ReportError> {
    let listing = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    compare(&listing, backend)
}

fn render_profile(out: &mut String, profile: &ClearProfile, retained: bool) {
    let verdict = if retained {
        "clear retained"
    } else {
        "clear eliminated"
    };

    let _ = writeln!(out, "[*] {}: {}", profile.symbol, verdict);
    if !profile.use_site_found {
        let _ = writeln!(out, "    (no call to the use routine found, whole body inspected)");
    }
    let _ = writeln!(
        out,
        "    calls after last use: [{}]",
        profile.calls_after_last_use.join(", ")
    );
    let _ = writeln!(
        out,
        "    stores after last use: {} ({} into the buffer via [{}])",
        profile.stores_after_last_use,
        profile.buffer_stores_after_last_use,
        profile.buffer_registers.join(", ")
    );
}

/// Renders `verdict` in the `[*]`/`[+]`/`[!]` style of the forensic tools.
pub fn render(verdict: &CodegenVerdict) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "[*] secure-clear codegen report");
    let _ = writeln!(out, "[*] backend: {}", verdict.backend);
    let _ = writeln!(out);

    render_profile(&mut out, &verdict.secure, verdict.secure_retained());
    render_profile(&mut out, &verdict.naive, verdict.naive_retained());
    if let (Some(typed), Some(retained)) = (&verdict.typed, verdict.typed_retained()) {
        render_profile(&mut out, typed, retained);
    }
    let _ = writeln!(out);

    if verdict.secure_retained() {
        let _ = writeln!(out, "[+] guaranteed clear survived optimization");
    } else {
        let _ = writeln!(out, "[!] guaranteed clear was optimized out");
    }

    match verdict.typed_retained() {
        Some(true) => {
            let _ = writeln!(out, "[+] typed clear survived optimization");
        }
        Some(false) => {
            let _ = writeln!(out, "[!] typed clear was optimized out");
        }
        None => {}
    }

    if verdict.differs() {
        let _ = writeln!(out, "[+] ordinary clear was eliminated: the two paths differ");
    } else {
        let _ = writeln!(
            out,
            "[*] ordinary clear was kept too (legal, but the listing does not show the difference)"
        );
    }

    out
}
