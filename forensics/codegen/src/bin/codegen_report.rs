// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::path::Path;
use std::process::ExitCode;

use secure_clear::{BACKEND, is_slice_cleared};
use secure_clear_forensics::demo::{
    self, DemoRecord, NAIVE_SYMBOL, PASSWORD_LEN, SECURE_SYMBOL, TYPED_SYMBOL,
    password_session,
};
use secure_clear_forensics::{ReportError, analyze_file, render};

fn run_demo() -> Result<ExitCode, ReportError> {
    println!("[*] secure-clear runtime demo");
    println!("[*] backend: {}", BACKEND);
    println!();

    demo::secure_clear_demo_secure();
    demo::secure_clear_demo_naive();
    demo::secure_clear_demo_typed();

    let mut password = [0u8; PASSWORD_LEN];
    password_session::<true>(&mut password);
    let secure_ok = is_slice_cleared(&password);
    println!(
        "[{}] guaranteed clear: {} bytes zero after use",
        if secure_ok { '+' } else { '!' },
        password.iter().filter(|&&b| b == 0).count()
    );

    let mut record = DemoRecord { a: 1, b: 2, c: 3 };
    secure_clear::clear(&mut record);
    let record_ok = record == DemoRecord { a: 0, b: 0, c: 0 };
    println!(
        "[{}] typed clear of a {}-byte record",
        if record_ok { '+' } else { '!' },
        core::mem::size_of::<DemoRecord>()
    );

    println!();
    println!("[*] Runtime state cannot show dead-store elimination; compare");
    println!("[*] `{SECURE_SYMBOL}` and `{NAIVE_SYMBOL}` in an optimized listing:");
    println!("[*]   codegen_report path/to/listing.s");

    Ok(if secure_ok && record_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run_report(path: &Path) -> Result<ExitCode, ReportError> {
    let verdict = analyze_file(path, BACKEND)?;
    print!("{}", render(&verdict));

    if !verdict.secure_retained() {
        return Err(ReportError::ClearEliminated(SECURE_SYMBOL));
    }
    if verdict.typed_retained() == Some(false) {
        return Err(ReportError::ClearEliminated(TYPED_SYMBOL));
    }

    Ok(ExitCode::SUCCESS)
}

fn run() -> Result<ExitCode, ReportError> {
    let mut args = std::env::args_os().skip(1);

    match (args.next(), args.next()) {
        (None, _) => run_demo(),
        (Some(path), None) => run_report(Path::new(&path)),
        _ => Err(ReportError::Usage),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[!] {e}");
            ExitCode::FAILURE
        }
    }
}
