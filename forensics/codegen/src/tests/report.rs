// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use secure_clear::Backend;

use crate::asm::{ClearProfile, CodegenVerdict};
use crate::demo::{NAIVE_SYMBOL, SECURE_SYMBOL, TYPED_SYMBOL};
use crate::report::render;

fn profile(symbol: &str, calls: &[&str], stores: usize) -> ClearProfile {
    ClearProfile {
        symbol: symbol.to_string(),
        use_site_found: true,
        buffer_registers: vec!["%rsp".to_string(), "%rbx".to_string()],
        calls_after_last_use: calls.iter().map(|c| c.to_string()).collect(),
        stores_after_last_use: stores,
        buffer_stores_after_last_use: stores,
    }
}

#[test]
fn test_render_retained_and_differs() {
    let verdict = CodegenVerdict {
        backend: Backend::ExplicitBzero,
        secure: profile(SECURE_SYMBOL, &["explicit_bzero"], 0),
        naive: profile(NAIVE_SYMBOL, &[], 0),
        typed: None,
    };

    let out = render(&verdict);

    assert!(out.starts_with("[*] secure-clear codegen report\n"));
    assert!(out.contains("[*] backend: explicit_bzero"));
    assert!(out.contains("[*] secure_clear_demo_secure: clear retained"));
    assert!(out.contains("    calls after last use: [explicit_bzero]"));
    assert!(out.contains("[*] secure_clear_demo_naive: clear eliminated"));
    assert!(out.contains("[+] guaranteed clear survived optimization"));
    assert!(out.contains("[+] ordinary clear was eliminated: the two paths differ"));
    assert!(!out.contains("[!]"));
}

#[test]
fn test_render_secure_eliminated() {
    let verdict = CodegenVerdict {
        backend: Backend::Volatile,
        secure: profile(SECURE_SYMBOL, &[], 0),
        naive: profile(NAIVE_SYMBOL, &[], 0),
        typed: None,
    };

    let out = render(&verdict);

    assert!(out.contains("[!] guaranteed clear was optimized out"));
    assert!(out.contains("[*] ordinary clear was kept too"));
}

#[test]
fn test_render_notes_missing_use_site() {
    let mut secure = profile(SECURE_SYMBOL, &[], 100);
    secure.use_site_found = false;

    let verdict = CodegenVerdict {
        backend: Backend::Volatile,
        secure,
        naive: profile(NAIVE_SYMBOL, &[], 0),
        typed: None,
    };

    let out = render(&verdict);

    assert!(out.contains("whole body inspected"));
    assert!(out.contains("    stores after last use: 100 (100 into the buffer via [%rsp, %rbx])"));
}

#[test]
fn test_render_unrelated_stores_do_not_count() {
    let mut secure = profile(SECURE_SYMBOL, &[], 0);
    secure.stores_after_last_use = 1;

    let verdict = CodegenVerdict {
        backend: Backend::Volatile,
        secure,
        naive: profile(NAIVE_SYMBOL, &[], 0),
        typed: None,
    };

    let out = render(&verdict);

    assert!(out.contains("[*] secure_clear_demo_secure: clear eliminated"));
    assert!(out.contains("    stores after last use: 1 (0 into the buffer via [%rsp, %rbx])"));
    assert!(out.contains("[!] guaranteed clear was optimized out"));
}

#[test]
fn test_render_typed_routine() {
    let verdict = CodegenVerdict {
        backend: Backend::ExplicitBzero,
        secure: profile(SECURE_SYMBOL, &["explicit_bzero"], 0),
        naive: profile(NAIVE_SYMBOL, &[], 0),
        typed: Some(profile(TYPED_SYMBOL, &["memset"], 0)),
    };

    let out = render(&verdict);

    assert!(out.contains("[*] secure_clear_demo_typed: clear eliminated"));
    assert!(out.contains("[!] typed clear was optimized out"));
    assert!(out.contains("[+] guaranteed clear survived optimization"));
}
