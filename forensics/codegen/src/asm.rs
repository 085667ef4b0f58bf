// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Minimal reader for compiler-emitted assembly listings.
//!
//! Understands enough of GNU-style x86-64 (AT&T) and AArch64 output to pull
//! out one routine's instructions, find its calls and find its stores to
//! memory. It does not assemble or validate anything.

use secure_clear::Backend;

use crate::demo::{NAIVE_SYMBOL, SECURE_SYMBOL, TYPED_SYMBOL, USE_SYMBOL};
use crate::error::ReportError;

/// Stack pointer names (x86-64 AT&T, AArch64).
const STACK_POINTERS: [&str; 2] = ["%rsp", "sp"];

/// Registers carrying the first pointer argument (x86-64 SysV, AArch64).
const FIRST_ARGUMENT_REGISTERS: [&str; 2] = ["%rdi", "x0"];

/// Library routines an ordinary overwrite may be lowered to.
const CLEARING_ROUTINES: [&str; 4] = ["memset", "bzero", "explicit_bzero", "memset_s"];

/// One instruction line, comment stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Lowercased mnemonic (`callq`, `movb`, `stp`, ...).
    pub mnemonic: String,
    /// Operand text as written.
    pub operands: String,
}

impl Instruction {
    /// Parses an instruction line. Directives, labels and blank lines yield
    /// `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = strip_comment(line).trim();
        if line.is_empty() || line.starts_with('.') || line.ends_with(':') {
            return None;
        }

        let (mnemonic, operands) = match line.split_once(char::is_whitespace) {
            Some((m, rest)) => (m, rest.trim()),
            None => (line, ""),
        };

        Some(Self {
            mnemonic: mnemonic.to_ascii_lowercase(),
            operands: operands.to_string(),
        })
    }

    /// Normalized target of a call or tail call, if this is one.
    ///
    /// Register-indirect calls and jumps to local labels return whatever
    /// name they carry; callers compare against known symbols.
    pub fn call_target(&self) -> Option<String> {
        match self.mnemonic.as_str() {
            "call" | "callq" | "jmp" | "jmpq" | "bl" | "b" => {
                Some(normalize_symbol(&self.operands))
            }
            _ => None,
        }
    }

    /// Whether this instruction writes to memory.
    pub fn is_store(&self) -> bool {
        let m = self.mnemonic.as_str();

        // x86-64: `rep stosq`, `stosb`, ...
        if m.starts_with("stos") || (m == "rep" && self.operands.starts_with("stos")) {
            return true;
        }

        // AArch64: str, strb, stp, stur, st1, ...
        if m.starts_with("st") && self.operands.contains('[') {
            return true;
        }

        // x86-64 AT&T: the destination is the last operand.
        m.contains("mov") && last_operand(&self.operands).contains('(')
    }

    /// Base register of a store's destination address, lowercased.
    ///
    /// `stos` writes through `%rdi`. Index-only addresses yield `None`.
    pub fn store_base(&self) -> Option<String> {
        let m = self.mnemonic.as_str();
        if m.starts_with("stos") || m == "rep" {
            return Some("%rdi".to_string());
        }

        if let Some(open) = self.operands.find('[') {
            return base_register(&self.operands[open + 1..]);
        }

        let destination = last_operand(&self.operands);
        let open = destination.find('(')?;
        base_register(&destination[open + 1..])
    }

    /// Register whose value lands in the first argument register, if this
    /// instruction sets it up.
    ///
    /// Handles `movq %rbx, %rdi`, `leaq 16(%rsp), %rdi`, `mov x0, x19` and
    /// `add x0, sp, #16`.
    pub fn first_argument_source(&self) -> Option<String> {
        let operands = split_operands(&self.operands);
        let m = self.mnemonic.as_str();

        match operands.as_slice() {
            // AT&T: source first, destination last.
            [source, destination] if destination.starts_with('%') => {
                if !FIRST_ARGUMENT_REGISTERS.contains(destination) {
                    return None;
                }
                if m.starts_with("lea") {
                    let open = source.find('(')?;
                    base_register(&source[open + 1..])
                } else if m.starts_with("mov") && source.starts_with('%') {
                    Some(source.to_ascii_lowercase())
                } else {
                    None
                }
            }
            // AArch64: destination first.
            [destination, source, ..] if FIRST_ARGUMENT_REGISTERS.contains(destination) => {
                (m == "mov" || m == "add").then(|| source.to_ascii_lowercase())
            }
            _ => None,
        }
    }
}

/// A routine's instructions, in listing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routine {
    /// Routine symbol, without platform prefix.
    pub symbol: String,
    /// Its body.
    pub instructions: Vec<Instruction>,
}

/// Extracts `symbol`'s body from an assembly listing.
///
/// The body runs from the symbol's label to `.cfi_endproc`, `.size`,
/// `.Lfunc_end*` or the next non-local label, whichever comes first.
pub fn extract_routine(listing: &str, symbol: &str) -> Option<Routine> {
    let mut lines = listing.lines();

    lines
        .by_ref()
        .find(|line| top_level_label(line).is_some_and(|label| normalize_symbol(label) == symbol))?;

    let mut instructions = Vec::new();
    for line in lines {
        let trimmed = strip_comment(line).trim();
        if trimmed.starts_with(".cfi_endproc") || trimmed.starts_with(".size") {
            break;
        }
        if let Some(label) = top_level_label(line) {
            if !is_local_label(label) {
                break;
            }
            continue;
        }
        if let Some(instruction) = Instruction::parse(line) {
            instructions.push(instruction);
        }
    }

    Some(Routine {
        symbol: symbol.to_string(),
        instructions,
    })
}

/// What a routine does after the last use of the secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearProfile {
    /// Routine symbol.
    pub symbol: String,
    /// Whether a call to the use collaborator was found.
    pub use_site_found: bool,
    /// Registers that address the secret: the stack pointer, plus the
    /// register that carried the buffer into the use call.
    pub buffer_registers: Vec<String>,
    /// Calls (and tail calls) after the last use.
    pub calls_after_last_use: Vec<String>,
    /// Memory stores after the last use, wherever they write.
    pub stores_after_last_use: usize,
    /// Stores after the last use addressed off one of `buffer_registers`.
    pub buffer_stores_after_last_use: usize,
}

impl ClearProfile {
    /// Profiles `routine`, splitting at the last call to `use_symbol`.
    ///
    /// If the use collaborator is not called (e.g. it was inlined) the whole
    /// body counts as "after last use" and only the stack pointer is known to
    /// address the secret.
    pub fn from_routine(routine: &Routine, use_symbol: &str) -> Self {
        let last_use = routine
            .instructions
            .iter()
            .rposition(|i| i.call_target().as_deref() == Some(use_symbol));

        let (head, tail) = match last_use {
            Some(index) => (&routine.instructions[..index], &routine.instructions[index + 1..]),
            None => (&routine.instructions[..0], &routine.instructions[..]),
        };

        let mut buffer_registers: Vec<String> =
            STACK_POINTERS.iter().map(|r| r.to_string()).collect();
        if let Some(carrier) = head.iter().rev().find_map(Instruction::first_argument_source) {
            if !buffer_registers.contains(&carrier) {
                buffer_registers.push(carrier);
            }
        }

        let buffer_stores_after_last_use = tail
            .iter()
            .filter(|i| i.is_store())
            .filter_map(Instruction::store_base)
            .filter(|base| buffer_registers.contains(base))
            .count();

        Self {
            symbol: routine.symbol.clone(),
            use_site_found: last_use.is_some(),
            buffer_registers,
            calls_after_last_use: tail.iter().filter_map(Instruction::call_target).collect(),
            stores_after_last_use: tail.iter().filter(|i| i.is_store()).count(),
            buffer_stores_after_last_use,
        }
    }

    /// Whether the guaranteed clear is still present after the last use.
    ///
    /// Out-of-line backends need a call to their own routine. The volatile
    /// backend needs a store into the secret's storage.
    pub fn retains_clear(&self, backend: Backend) -> bool {
        match backend.symbol() {
            Some(symbol) => self.calls_after_last_use.iter().any(|target| target == symbol),
            None => self.buffer_stores_after_last_use > 0,
        }
    }

    /// Whether any overwrite of the secret is still present after the last
    /// use: a call to a `memset`-like routine or a store into its storage.
    pub fn retains_any_clear(&self) -> bool {
        let clearing_call = self
            .calls_after_last_use
            .iter()
            .any(|target| CLEARING_ROUTINES.contains(&target.as_str()));

        clearing_call || self.buffer_stores_after_last_use > 0
    }
}

/// Side-by-side outcome for the demo routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenVerdict {
    /// Backend the listing is judged against.
    pub backend: Backend,
    /// Profile of the routine using the guaranteed clear.
    pub secure: ClearProfile,
    /// Profile of the routine using an ordinary overwrite.
    pub naive: ClearProfile,
    /// Profile of the routine using the typed entry points, when the listing
    /// contains it.
    pub typed: Option<ClearProfile>,
}

impl CodegenVerdict {
    /// The guaranteed clear survived optimization.
    pub fn secure_retained(&self) -> bool {
        self.secure.retains_clear(self.backend)
    }

    /// The ordinary overwrite survived optimization. Legal either way.
    pub fn naive_retained(&self) -> bool {
        self.naive.retains_any_clear()
    }

    /// The typed entry points' clear survived optimization, if the typed
    /// routine was profiled.
    pub fn typed_retained(&self) -> Option<bool> {
        self.typed.as_ref().map(|typed| typed.retains_clear(self.backend))
    }

    /// The two routines observably differ in whether they clear.
    pub fn differs(&self) -> bool {
        self.secure_retained() != self.naive_retained()
    }
}

/// Compares the secure and naive demo routines found in `listing`, and
/// profiles the typed routine when present.
pub fn compare(listing: &str, backend: Backend) -> Result<CodegenVerdict, ReportError> {
    let secure = extract_routine(listing, SECURE_SYMBOL)
        .ok_or(ReportError::MissingSymbol(SECURE_SYMBOL))?;
    let naive =
        extract_routine(listing, NAIVE_SYMBOL).ok_or(ReportError::MissingSymbol(NAIVE_SYMBOL))?;
    let typed = extract_routine(listing, TYPED_SYMBOL);

    Ok(CodegenVerdict {
        backend,
        secure: ClearProfile::from_routine(&secure, USE_SYMBOL),
        naive: ClearProfile::from_routine(&naive, USE_SYMBOL),
        typed: typed.map(|routine| ClearProfile::from_routine(&routine, USE_SYMBOL)),
    })
}

// === === === === === === === === === ===
// Line helpers
// === === === === === === === === === ===

/// Removes `# `, `//` and `;` comments. A `#` directly followed by a
/// non-space is an AArch64 immediate and is kept.
pub(crate) fn strip_comment(line: &str) -> &str {
    let mut end = line.len();

    for marker in ["# ", "//", ";"] {
        if let Some(pos) = line.find(marker) {
            end = end.min(pos);
        }
    }
    if line.trim_end().ends_with('#') {
        end = end.min(line.trim_end().len() - 1);
    }

    &line[..end]
}

/// Label defined at column zero, without the trailing colon.
pub(crate) fn top_level_label(line: &str) -> Option<&str> {
    if line.starts_with(char::is_whitespace) {
        return None;
    }

    let code = strip_comment(line).trim_end();
    let label = code.strip_suffix(':')?;
    Some(label.trim_matches('"'))
}

/// Compiler-generated local labels (`.LBB0_1`, `LBB0_1` on Mach-O, ...).
pub(crate) fn is_local_label(label: &str) -> bool {
    label.starts_with('.')
        || ["LBB", "Ltmp", "Lfunc", "LCPI", "Lloh"]
            .iter()
            .any(|prefix| label.starts_with(prefix))
}

/// Strips decorations from a symbol reference: `*`, one leading `_`
/// (Mach-O prefix), `@PLT`/`@GOTPCREL(...)` suffixes.
pub(crate) fn normalize_symbol(raw: &str) -> String {
    let name = raw.trim().trim_start_matches('*').trim_matches('"');
    let name = name.split(['@', '(']).next().unwrap_or(name);
    let name = name.strip_prefix('_').unwrap_or(name);

    name.trim().to_string()
}

/// Comma-separated operands, ignoring commas inside parentheses or brackets.
pub(crate) fn split_operands(operands: &str) -> Vec<&str> {
    let mut depth = 0usize;
    let mut start = 0;
    let mut parts = Vec::new();

    for (i, c) in operands.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(operands[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }

    let rest = operands[start..].trim();
    if !rest.is_empty() {
        parts.push(rest);
    }
    parts
}

/// Last comma-separated operand, ignoring commas inside parentheses.
pub(crate) fn last_operand(operands: &str) -> &str {
    split_operands(operands).last().copied().unwrap_or("")
}

/// First register inside an address expression, given the text after its
/// opening `(` or `[`.
pub(crate) fn base_register(address: &str) -> Option<String> {
    let end = address.find([',', ')', ']']).unwrap_or(address.len());
    let base = address[..end].trim();

    (!base.is_empty()).then(|| base.to_ascii_lowercase())
}
