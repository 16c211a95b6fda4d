// Rust guideline compliant 2026-10-18

//! Delegated tool lookup and invocation.
//!
//! A delegated tool is an external executable that owns all of a hook's real
//! behavior. The hook only checks that the executable can be resolved on the
//! search path, runs it with a fixed subcommand, and reports its exit status.

use crate::{Error, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use tracing::debug;

/// External executable invoked with a single fixed subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelegatedTool {
    /// Executable name resolved through the search path.
    pub name: &'static str,
    /// The only argument passed to the executable.
    pub subcommand: &'static str,
    /// Installation reference shown when the executable is missing.
    pub install_url: &'static str,
}

impl DelegatedTool {
    /// Creates a tool descriptor.
    pub const fn new(name: &'static str, subcommand: &'static str, install_url: &'static str) -> Self {
        Self {
            name,
            subcommand,
            install_url,
        }
    }

    /// Resolves the executable on the process `PATH`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ToolNotFound`] if no executable with this name is found.
    pub fn locate(&self) -> Result<PathBuf> {
        which::which(self.name).map_err(|_| self.not_found())
    }

    /// Resolves the executable against an explicit search path.
    ///
    /// # Arguments
    ///
    /// * `search_path` - Directories in `PATH` syntax
    ///
    /// # Errors
    ///
    /// Returns [`Error::ToolNotFound`] if no executable with this name is found,
    /// or an IO error if the current directory cannot be read.
    pub fn locate_in(&self, search_path: impl AsRef<OsStr>) -> Result<PathBuf> {
        let cwd = std::env::current_dir()?;
        which::which_in(self.name, Some(search_path), cwd).map_err(|_| self.not_found())
    }

    /// Runs the resolved executable with the fixed subcommand.
    ///
    /// Standard streams are inherited, so the tool's output reaches the user
    /// unmodified.
    ///
    /// # Arguments
    ///
    /// * `program` - Path returned by [`DelegatedTool::locate`]
    ///
    /// # Returns
    ///
    /// The exit code the calling process should report.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Spawn`] if the process cannot be started.
    pub fn invoke(&self, program: &Path) -> Result<u8> {
        debug!(tool = self.name, program = %program.display(), subcommand = self.subcommand, "invoking delegated tool");
        let status = self
            .command(program)
            .status()
            .map_err(|source| Error::Spawn {
                tool: self.name.to_string(),
                source,
            })?;
        let code = exit_code(status);
        debug!(tool = self.name, code, "delegated tool exited");
        Ok(code)
    }

    /// Builds the child command for a resolved program.
    ///
    /// The resolved path is executed, but the child sees the bare tool name as
    /// `argv[0]`, as it would when started from a shell.
    pub fn command(&self, program: &Path) -> Command {
        let mut command = Command::new(program);

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.arg0(self.name);
        }

        command.arg(self.subcommand);
        command
    }

    /// Locates the tool on `PATH` and runs it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ToolNotFound`] before anything is spawned if the tool
    /// is missing, or [`Error::Spawn`] if it cannot be started.
    pub fn run(&self) -> Result<u8> {
        let program = self.locate()?;
        self.invoke(&program)
    }

    /// Locates the tool on an explicit search path and runs it.
    ///
    /// # Errors
    ///
    /// Same as [`DelegatedTool::run`].
    pub fn run_in(&self, search_path: impl AsRef<OsStr>) -> Result<u8> {
        let program = self.locate_in(search_path)?;
        self.invoke(&program)
    }

    /// The two lines written to stderr when the tool is missing.
    pub fn missing_diagnostic(&self) -> [String; 2] {
        [
            format!("{}.", self.not_found()),
            format!("See {} for installation instructions.", self.install_url),
        ]
    }

    fn not_found(&self) -> Error {
        Error::ToolNotFound {
            tool: self.name.to_string(),
            install_url: self.install_url.to_string(),
        }
    }
}

/// Maps a child's exit status to the code this process should exit with.
///
/// Signal terminations map to `128 + signal` like a POSIX shell does.
/// Codes that do not fit a byte map to 1.
pub fn exit_code(status: ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return u8::try_from(code).unwrap_or(1);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return u8::try_from(128 + signal).unwrap_or(u8::MAX);
        }
    }

    1
}
