// Rust guideline compliant 2026-10-18

//! CLI entry point for the hookkit code generation hook.
//!
//! Takes no arguments. Exits 1 if the generator is missing, otherwise with
//! the generator's own exit code.

use hookkit_hooks::{codegen_hook, CODEGEN_TOOL};
use std::process::ExitCode;

fn main() -> ExitCode {
    // An unusable log setting must not add output to this hook's stderr.
    let _guard = hookkit_core::logging::init_from_env().ok().flatten();

    let code = codegen_hook(&CODEGEN_TOOL, None, &mut std::io::stderr());
    ExitCode::from(code)
}
