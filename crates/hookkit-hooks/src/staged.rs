// Rust guideline compliant 2026-10-18

//! Staged path lookup.

use git2::{Delta, DiffFindOptions, ErrorCode, Repository};
use hookkit_core::{Error, Result};
use std::path::{Path, PathBuf};

/// Returns the paths staged for commit in the repository containing `repo_dir`.
///
/// Compares the index against `HEAD` (or an empty tree before the first
/// commit). Added, copied, deleted, modified, renamed and type-changed entries
/// are reported; renames report their new path.
///
/// # Errors
///
/// Returns [`Error::Git`] if no repository is found or the diff fails.
pub fn staged_paths(repo_dir: &Path) -> Result<Vec<PathBuf>> {
    let repo = Repository::discover(repo_dir).map_err(git_error)?;
    let head_tree = match repo.head() {
        Ok(head) => Some(head.peel_to_tree().map_err(git_error)?),
        Err(err) if matches!(err.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => None,
        Err(err) => return Err(git_error(err)),
    };
    let index = repo.index().map_err(git_error)?;

    let mut diff = repo
        .diff_tree_to_index(head_tree.as_ref(), Some(&index), None)
        .map_err(git_error)?;
    diff.find_similar(Some(DiffFindOptions::new().renames(true)))
        .map_err(git_error)?;

    let paths = diff
        .deltas()
        .filter(|delta| {
            matches!(
                delta.status(),
                Delta::Added
                    | Delta::Copied
                    | Delta::Deleted
                    | Delta::Modified
                    | Delta::Renamed
                    | Delta::Typechange
            )
        })
        .filter_map(|delta| {
            delta
                .new_file()
                .path()
                .or_else(|| delta.old_file().path())
                .map(Path::to_path_buf)
        })
        .collect();

    Ok(paths)
}

fn git_error(err: git2::Error) -> Error {
    Error::Git(err.message().to_string())
}
