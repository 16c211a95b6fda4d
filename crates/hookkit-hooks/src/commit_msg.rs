// Rust guideline compliant 2026-10-18

//! Commit-message hook implementation.
//!
//! Checks that the message git is about to record follows conventional
//! commits formatting, optionally only when the commit touches given paths.

use anyhow::{Context, Result};
use hookkit_core::conventional::{is_conventional, paths_from_message};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

/// Options for a single commit-message check.
#[derive(Debug, Clone)]
pub struct CommitMsgOptions {
    /// Types the message may start with (feat and fix are always added).
    pub types: Vec<String>,
    /// Only check commits touching these paths. Empty means always check.
    pub limit_to: Vec<PathBuf>,
    /// Whether the `(scope)` may be omitted.
    pub optional_scope: bool,
    /// File holding the commit message.
    pub input: PathBuf,
    /// Repository used to list staged paths.
    pub repo_dir: PathBuf,
}

/// Outcome of a commit-message check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The message is conventional.
    Conventional,
    /// No changed path lies under the configured limits, nothing was checked.
    Skipped,
    /// The message is not conventional.
    Rejected {
        /// The message that was checked.
        message: String,
    },
    /// The message file is not valid UTF-8.
    BadEncoding,
}

impl Verdict {
    /// Exit code reported for this verdict.
    pub fn exit_code(&self) -> u8 {
        match self {
            Verdict::Conventional | Verdict::Skipped => 0,
            Verdict::Rejected { .. } | Verdict::BadEncoding => 1,
        }
    }
}

/// Runs the commit-message hook.
///
/// # Arguments
///
/// * `options` - What to check and against which types
///
/// # Returns
///
/// The verdict for the message.
///
/// # Errors
///
/// Returns an error if the message file cannot be read.
pub fn commit_msg_hook(options: &CommitMsgOptions) -> Result<Verdict> {
    let bytes = std::fs::read(&options.input)
        .with_context(|| format!("Failed to read commit message from {}", options.input.display()))?;
    let Ok(message) = String::from_utf8(bytes) else {
        warn!(input = %options.input.display(), "commit message is not valid UTF-8");
        return Ok(Verdict::BadEncoding);
    };

    if !options.limit_to.is_empty() {
        let changed = changed_paths(&message, &options.repo_dir);
        let relevant = changed
            .iter()
            .any(|path| options.limit_to.iter().any(|limit| is_within(path, limit)));
        if !relevant {
            info!(changed = changed.len(), "no changed path under limit, skipping check");
            return Ok(Verdict::Skipped);
        }
    }

    if is_conventional(&message, &options.types, options.optional_scope)? {
        debug!("commit message is conventional");
        Ok(Verdict::Conventional)
    } else {
        Ok(Verdict::Rejected { message })
    }
}

/// Paths listed in the message template, or the staged paths when the message
/// lists none (as with `git commit -m`).
fn changed_paths(message: &str, repo_dir: &Path) -> Vec<PathBuf> {
    let paths = paths_from_message(message);
    if !paths.is_empty() {
        return paths;
    }

    match crate::staged::staged_paths(repo_dir) {
        Ok(paths) => paths,
        Err(err) => {
            println!("Failed to get modified files. Error: {}", err);
            Vec::new()
        }
    }
}

/// Returns true if `path` equals `limit` or lies below it.
fn is_within(path: &Path, limit: &Path) -> bool {
    let normal = |p: &Path| -> PathBuf {
        p.components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect()
    };
    normal(path).starts_with(normal(limit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn options(dir: &Path, message: &[u8]) -> CommitMsgOptions {
        let input = dir.join("COMMIT_EDITMSG");
        std::fs::write(&input, message).unwrap();
        CommitMsgOptions {
            types: vec!["feat".to_string(), "fix".to_string()],
            limit_to: Vec::new(),
            optional_scope: true,
            input,
            repo_dir: dir.to_path_buf(),
        }
    }

    #[test]
    fn test_conventional_message() {
        let temp_dir = TempDir::new().unwrap();
        let opts = options(temp_dir.path(), b"fix: bug fix");
        assert_eq!(commit_msg_hook(&opts).unwrap(), Verdict::Conventional);
    }

    #[test]
    fn test_bad_commit_message() {
        let temp_dir = TempDir::new().unwrap();
        let opts = options(temp_dir.path(), b"bad commit message");
        let verdict = commit_msg_hook(&opts).unwrap();
        assert_eq!(
            verdict,
            Verdict::Rejected {
                message: "bad commit message".to_string()
            }
        );
        assert_eq!(verdict.exit_code(), 1);
    }

    #[test]
    fn test_bad_encoding() {
        let temp_dir = TempDir::new().unwrap();
        let opts = options(temp_dir.path(), &[0x66, 0x69, 0x78, 0x3a, 0x20, 0xff, 0xfe]);
        assert_eq!(commit_msg_hook(&opts).unwrap(), Verdict::BadEncoding);
    }

    #[test]
    fn test_missing_input_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let mut opts = options(temp_dir.path(), b"fix: x");
        opts.input = temp_dir.path().join("missing");
        assert!(commit_msg_hook(&opts).is_err());
    }

    #[test]
    fn test_limit_to_matching_path_is_checked() {
        let temp_dir = TempDir::new().unwrap();
        let mut opts = options(
            temp_dir.path(),
            b"bad message\n# Changes to be committed:\n#\tmodified:   services/api/main.rs\n",
        );
        opts.limit_to = vec![PathBuf::from("services/api")];
        assert!(matches!(
            commit_msg_hook(&opts).unwrap(),
            Verdict::Rejected { .. }
        ));
    }

    #[test]
    fn test_limit_to_other_path_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let mut opts = options(
            temp_dir.path(),
            b"bad message\n# Changes to be committed:\n#\tmodified:   docs/readme.md\n",
        );
        opts.limit_to = vec![PathBuf::from("services/api"), PathBuf::from("infra")];
        assert_eq!(commit_msg_hook(&opts).unwrap(), Verdict::Skipped);
    }

    #[test]
    fn test_is_within() {
        assert!(is_within(Path::new("/path/to/dir/file.txt"), Path::new("/path/to/dir")));
        assert!(is_within(Path::new("a/b"), Path::new("a/b")));
        assert!(is_within(Path::new("a/b"), Path::new("./a")));
        assert!(is_within(Path::new("a/b"), Path::new(".")));
        assert!(!is_within(Path::new("ab/c"), Path::new("a")));
        assert!(!is_within(Path::new("a"), Path::new("a/b")));
    }
}
