// Rust guideline compliant 2026-10-18

//! Conventional commit message rules.
//!
//! See <https://www.conventionalcommits.org> for the format. A message is
//! conventional when it starts with a known type, an optional `(scope)`, an
//! optional `!` breaking-change marker, a colon, a space, and a subject.

use crate::Result;
use regex::{Regex, RegexBuilder};
use std::path::PathBuf;

/// Types every conventional commit configuration accepts.
pub const CONVENTIONAL_TYPES: &[&str] = &["feat", "fix"];

/// Types accepted when none are configured.
pub const DEFAULT_TYPES: &[&str] = &[
    // CI configuration files and scripts
    "ci",
    // Documentation only changes
    "docs",
    "feat",
    "fix",
    // Code changes that neither fix a bug nor add a feature
    "ref",
    "refactor",
    // Formatting, white-space, missing semi-colons
    "style",
    // Adding or correcting tests
    "test",
    // Repository meta information (owner files, editor config)
    "meta",
    // Anything else
    "chore",
];

const MERGE_MARKERS: &[&str] = &["Merged in ", "Merge branch "];
const REVERT_MARKER: &str = "This reverts commit ";

/// Status prefixes git writes into the commit message template, in the order
/// paths are collected.
const STATUS_PREFIXES: &[&str] = &["modified:   ", "new file:   ", "deleted:    ", "renamed:    "];

/// Returns `DEFAULT_TYPES` as owned strings.
pub fn default_types() -> Vec<String> {
    DEFAULT_TYPES.iter().map(|t| t.to_string()).collect()
}

/// Merges the given types with [`CONVENTIONAL_TYPES`].
///
/// If `types` already contains `feat` or `fix` it is returned unchanged,
/// otherwise the conventional types are prepended.
pub fn conventional_types(types: &[String]) -> Vec<String> {
    let has_conventional = types
        .iter()
        .any(|t| CONVENTIONAL_TYPES.contains(&t.as_str()));
    if has_conventional {
        return types.to_vec();
    }
    CONVENTIONAL_TYPES
        .iter()
        .map(|t| t.to_string())
        .chain(types.iter().cloned())
        .collect()
}

/// Joins types into a regex alternation.
pub fn types_pattern(types: &[String]) -> String {
    types
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|")
}

/// Regex fragment for a parenthesized scope.
pub fn scope_pattern(optional: bool) -> String {
    let mut pattern = String::from(r"(\([\w /:-]+\))");
    if optional {
        pattern.push('?');
    }
    pattern
}

/// Regex fragment for the optional breaking-change marker and the colon.
pub fn delimiter_pattern() -> &'static str {
    "!?:"
}

/// Regex fragment for the subject line, body and footer.
pub fn subject_pattern() -> &'static str {
    " .+"
}

/// Builds the full message regex for the given types.
///
/// # Errors
///
/// Returns an error if the assembled pattern fails to compile.
pub fn message_regex(types: &[String], optional_scope: bool) -> Result<Regex> {
    let pattern = format!(
        "^({}){}{}{}$",
        types_pattern(&conventional_types(types)),
        scope_pattern(optional_scope),
        delimiter_pattern(),
        subject_pattern()
    );
    let regex = RegexBuilder::new(&pattern)
        .dot_matches_new_line(true)
        .build()?;
    Ok(regex)
}

/// Returns true for merge and revert commits.
pub fn is_special_commit(message: &str) -> bool {
    MERGE_MARKERS.iter().any(|m| message.contains(m)) || message.contains(REVERT_MARKER)
}

/// Returns true if the message follows conventional commit formatting.
///
/// Merge and revert commits are never conventional.
///
/// # Errors
///
/// Returns an error if a type produces an invalid pattern.
pub fn is_conventional(message: &str, types: &[String], optional_scope: bool) -> Result<bool> {
    if is_special_commit(message) {
        return Ok(false);
    }
    Ok(message_regex(types, optional_scope)?.is_match(message))
}

/// Extracts changed paths from the git status block of a commit message.
///
/// Paths are grouped by status: modified, added, removed, renamed.
pub fn paths_from_message(message: &str) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    for prefix in STATUS_PREFIXES {
        let mut rest = message;
        while let Some(idx) = rest.find(prefix) {
            rest = &rest[idx + prefix.len()..];
            let token: &str = rest.split(char::is_whitespace).next().unwrap_or_default();
            if !token.is_empty() {
                paths.push(PathBuf::from(token));
            }
        }
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_types_pattern() {
        assert_eq!(types_pattern(&types(&["feat", "fix"])), "feat|fix");
    }

    #[test]
    fn test_scope_pattern() {
        assert_eq!(scope_pattern(true), r"(\([\w /:-]+\))?");
        assert_eq!(scope_pattern(false), r"(\([\w /:-]+\))");
    }

    #[test]
    fn test_conventional_types_with_custom_types() {
        let merged = conventional_types(&types(&["custom1", "custom2"]));
        assert_eq!(merged, types(&["feat", "fix", "custom1", "custom2"]));
    }

    #[test]
    fn test_conventional_types_keeps_list_with_fix() {
        let merged = conventional_types(&types(&["fix", "chore"]));
        assert_eq!(merged, types(&["fix", "chore"]));
    }

    #[test]
    fn test_conventional_types_empty() {
        assert_eq!(conventional_types(&[]), types(&["feat", "fix"]));
    }

    #[test]
    fn test_is_conventional() {
        assert!(is_conventional("fix: bug fix", &types(&["feat", "fix"]), true).unwrap());
        assert!(!is_conventional("invalid subject", &types(&["feat"]), true).unwrap());
        assert!(is_conventional("fix(scope): subject", &types(&["fix"]), false).unwrap());
        assert!(is_conventional("feat!: important change", &types(&["feat"]), true).unwrap());
        assert!(is_conventional(
            "feat(module)!: important `abcd` change",
            &types(&["feat"]),
            true
        )
        .unwrap());
    }

    #[test]
    fn test_special_commits_are_not_conventional() {
        let fix = types(&["fix"]);
        assert!(!is_conventional("Merged in feature1", &fix, false).unwrap());
        assert!(!is_conventional("Merge branch 'develop'", &fix, false).unwrap());
        assert!(!is_conventional("This reverts commit abc123", &fix, false).unwrap());
    }

    #[test]
    fn test_forced_scope() {
        let feat = types(&["feat"]);
        assert!(!is_conventional("feat: no scope", &feat, false).unwrap());
        assert!(is_conventional("feat(api/v2): scoped", &feat, false).unwrap());
    }

    #[test]
    fn test_conventional_types_always_accepted() {
        assert!(is_conventional("feat: added via merge", &types(&["chore"]), true).unwrap());
    }

    #[test]
    fn test_breaking_changes_body() {
        let message =
            "feat: new feature\n\nBREAKING CHANGES: changes that break backward compatibility";
        assert!(is_conventional(message, &types(&["feat", "fix"]), true).unwrap());
    }

    #[test]
    fn test_types_match_literally() {
        assert_eq!(types_pattern(&types(&["c++", "fix"])), r"c\+\+|fix");
        assert!(is_conventional("c++: bump standard", &types(&["c++"]), true).unwrap());
        assert!(!is_conventional("ccc: bump standard", &types(&["c++"]), true).unwrap());
    }

    #[test]
    fn test_missing_space_or_subject() {
        let feat = types(&["feat"]);
        assert!(!is_conventional("feat:no space", &feat, true).unwrap());
        assert!(!is_conventional("feat: ", &feat, true).unwrap());
        assert!(!is_conventional("feature: wrong type", &feat, true).unwrap());
    }

    #[test]
    fn test_is_special_commit() {
        assert!(is_special_commit("Merged in feature1"));
        assert!(is_special_commit("Merge branch 'develop'"));
        assert!(is_special_commit("This reverts commit abc123"));
        assert!(!is_special_commit("feat: added new feature"));
    }

    #[test]
    fn test_paths_from_message() {
        let paths = paths_from_message("modified:   path1\nnew file:   path2\n");
        assert_eq!(paths, vec![PathBuf::from("path1"), PathBuf::from("path2")]);
    }

    #[test]
    fn test_paths_from_message_groups_by_status() {
        let message = "\
# Changes to be committed:
#\tnew file:   src/new.rs
#\tmodified:   src/lib.rs
#\tdeleted:    src/old.rs
#\trenamed:    docs/a.md -> docs/b.md
";
        let paths = paths_from_message(message);
        assert_eq!(
            paths,
            vec![
                PathBuf::from("src/lib.rs"),
                PathBuf::from("src/new.rs"),
                PathBuf::from("src/old.rs"),
                PathBuf::from("docs/a.md"),
            ]
        );
    }

    #[test]
    fn test_paths_from_message_empty() {
        assert!(paths_from_message("").is_empty());
        assert!(paths_from_message("feat: nothing listed").is_empty());
    }

    #[test]
    fn test_default_types() {
        let defaults = default_types();
        assert_eq!(defaults.len(), 10);
        assert!(defaults.contains(&"refactor".to_string()));
    }
}
