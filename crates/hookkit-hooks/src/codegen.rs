// Rust guideline compliant 2026-10-18

//! Code generation hook.
//!
//! Checks that the generator is installed and hands the whole job to it.

use hookkit_core::{DelegatedTool, Error};
use std::ffi::OsStr;
use std::io::Write;
use tracing::warn;

/// The generator this hook delegates to.
pub const CODEGEN_TOOL: DelegatedTool =
    DelegatedTool::new("buf", "generate", "https://buf.build/docs/installation");

/// Runs the code generation hook.
///
/// # Arguments
///
/// * `tool` - Tool to delegate to, normally [`CODEGEN_TOOL`]
/// * `search_path` - Explicit `PATH` to resolve against, `None` for the process `PATH`
/// * `stderr` - Destination for the missing-tool diagnostic
///
/// # Returns
///
/// The exit code for the process: 1 when the tool is missing or cannot be
/// started, otherwise the tool's own exit code.
pub fn codegen_hook<W: Write>(
    tool: &DelegatedTool,
    search_path: Option<&OsStr>,
    stderr: &mut W,
) -> u8 {
    let result = match search_path {
        Some(path) => tool.run_in(path),
        None => tool.run(),
    };

    match result {
        Ok(code) => code,
        Err(Error::ToolNotFound { .. }) => {
            for line in tool.missing_diagnostic() {
                let _ = writeln!(stderr, "{}", line);
            }
            1
        }
        Err(err) => {
            warn!(tool = tool.name, error = %err, "delegated tool failed to start");
            let _ = writeln!(stderr, "{}", err);
            1
        }
    }
}
